//! HTTP handlers for the cafe endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

use crate::application::handlers::cafe::{
    AddCafeCommand, AddCafeError, AddCafeHandler, ListCafesHandler, SearchCafesHandler,
    SearchCafesQuery,
};
use crate::domain::{DomainError, NewCafe};

use super::super::views;
use super::forms::{NewCafeForm, SearchForm};

/// Shared handler state for the cafe routes.
#[derive(Clone)]
pub struct CafeHandlers {
    list_handler: Arc<ListCafesHandler>,
    search_handler: Arc<SearchCafesHandler>,
    add_handler: Arc<AddCafeHandler>,
}

impl CafeHandlers {
    pub fn new(
        list_handler: Arc<ListCafesHandler>,
        search_handler: Arc<SearchCafesHandler>,
        add_handler: Arc<AddCafeHandler>,
    ) -> Self {
        Self {
            list_handler,
            search_handler,
            add_handler,
        }
    }
}

/// GET / - Render the full cafe listing.
pub async fn home(State(handlers): State<CafeHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(cafes) => Html(views::index_page(&cafes, None)).into_response(),
        Err(e) => store_error(e),
    }
}

/// GET /login - Render the static sign-in page.
pub async fn login() -> Html<String> {
    Html(views::sign_in_page())
}

/// GET /search - Render the empty-state search form.
pub async fn search_form() -> Html<String> {
    Html(views::search_page())
}

/// POST /search - Render the listing filtered to the submitted name.
pub async fn search_submit(
    State(handlers): State<CafeHandlers>,
    Form(form): Form<SearchForm>,
) -> Response {
    let query = SearchCafesQuery {
        name: form.search.clone(),
    };
    match handlers.search_handler.handle(query).await {
        Ok(cafes) => {
            let notice = if cafes.is_empty() {
                Some("No cafe matches that name.")
            } else {
                None
            };
            Html(views::index_page(&cafes, notice)).into_response()
        }
        Err(e) => store_error(e),
    }
}

/// GET /add - Render the empty creation form.
pub async fn add_form() -> Html<String> {
    Html(views::add_page(&NewCafeForm::default(), &[]))
}

/// POST /add - Validate and persist a submission.
///
/// Success redirects to the listing; any validation failure (including a
/// duplicate name) re-renders the form with field errors and the entered
/// values intact.
pub async fn add_submit(
    State(handlers): State<CafeHandlers>,
    Form(form): Form<NewCafeForm>,
) -> Response {
    let cafe = match NewCafe::from_draft(form.to_draft()) {
        Ok(cafe) => cafe,
        Err(errors) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(views::add_page(&form, &errors)),
            )
                .into_response();
        }
    };

    match handlers.add_handler.handle(AddCafeCommand { cafe }).await {
        Ok(created) => {
            tracing::info!(cafe = created.name(), id = created.id(), "cafe added");
            Redirect::to("/").into_response()
        }
        Err(AddCafeError::DuplicateName(err)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::add_page(&form, &[err])),
        )
            .into_response(),
        Err(AddCafeError::Infrastructure(e)) => store_error(e),
    }
}

fn store_error(e: DomainError) -> Response {
    tracing::error!(error = %e, "store operation failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(views::error_page("The cafe store is unavailable.")),
    )
        .into_response()
}
