//! Server-rendered HTML views.
//!
//! Pages are assembled from string fragments with explicit escaping; there
//! is no template engine. The listing table derives its columns from
//! `Cafe::COLUMNS` through `to_field_map`, so the rendered contract is the
//! declared field list.

use serde_json::Value;

use crate::domain::{Cafe, ValidationError};

use super::cafes::NewCafeForm;

/// Escapes text for safe interpolation into HTML.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - Cafe &amp; Wifi</title>
</head>
<body>
<nav>
<a href="/">All cafes</a> |
<a href="/search">Search</a> |
<a href="/add">Add a cafe</a> |
<a href="/login">Sign in</a>
</nav>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

fn cell(column: &str, value: &Value) -> String {
    match value {
        Value::Bool(true) => "<td>&#10003;</td>".to_string(),
        Value::Bool(false) => "<td>&ndash;</td>".to_string(),
        Value::String(s) if column.ends_with("_url") => format!(
            r#"<td><a href="{url}">{label}</a></td>"#,
            url = escape(s),
            label = if column == "img_url" { "image" } else { "map" },
        ),
        Value::String(s) => format!("<td>{}</td>", escape(s)),
        other => format!("<td>{}</td>", other),
    }
}

/// The cafe listing, shared by the home page and search results.
pub fn index_page(cafes: &[Cafe], notice: Option<&str>) -> String {
    let mut body = String::from("<h1>Cafes</h1>\n");

    if let Some(notice) = notice {
        body.push_str(&format!("<p class=\"notice\">{}</p>\n", escape(notice)));
    }

    if cafes.is_empty() {
        body.push_str("<p class=\"empty\">No cafes to show.</p>\n");
    } else {
        body.push_str("<table>\n<thead><tr>");
        for column in Cafe::COLUMNS {
            body.push_str(&format!("<th>{}</th>", escape(column)));
        }
        body.push_str("</tr></thead>\n<tbody>\n");
        for cafe in cafes {
            body.push_str("<tr>");
            for (column, value) in cafe.to_field_map() {
                body.push_str(&cell(column, &value));
            }
            body.push_str("</tr>\n");
        }
        body.push_str("</tbody>\n</table>\n");
    }

    layout("Cafes", &body)
}

/// The empty-state search form.
pub fn search_page() -> String {
    let body = r#"<h1>Search by name</h1>
<form method="post" action="/search">
<label for="search">Cafe name</label>
<input type="text" id="search" name="search" value="">
<button type="submit">Search</button>
</form>
"#;
    layout("Search", body)
}

/// The static sign-in page. No credential check happens anywhere.
pub fn sign_in_page() -> String {
    let body = r#"<h1>Sign in</h1>
<form method="get" action="/">
<label for="email">Email</label>
<input type="email" id="email" name="email">
<label for="password">Password</label>
<input type="password" id="password" name="password">
<button type="submit">Sign in</button>
</form>
"#;
    layout("Sign in", body)
}

fn error_for<'a>(errors: &'a [ValidationError], field: &str) -> Option<&'a ValidationError> {
    errors.iter().find(|e| e.field() == field)
}

fn text_input(
    label: &str,
    field: &str,
    value: &str,
    errors: &[ValidationError],
) -> String {
    let mut html = format!(
        r#"<p><label for="{field}">{label}</label>
<input type="text" id="{field}" name="{field}" value="{value}">"#,
        field = field,
        label = escape(label),
        value = escape(value),
    );
    if let Some(err) = error_for(errors, field) {
        html.push_str(&format!(
            r#"<span class="field-error">{}</span>"#,
            escape(&err.to_string())
        ));
    }
    html.push_str("</p>\n");
    html
}

fn checkbox_input(label: &str, field: &str, checked: bool) -> String {
    format!(
        r#"<p><label for="{field}">{label}</label>
<input type="checkbox" id="{field}" name="{field}"{checked}></p>
"#,
        field = field,
        label = escape(label),
        checked = if checked { " checked" } else { "" },
    )
}

/// The creation form, optionally annotated with field errors and the
/// previously submitted values.
pub fn add_page(form: &NewCafeForm, errors: &[ValidationError]) -> String {
    let mut body = String::from("<h1>Add a cafe</h1>\n");

    if !errors.is_empty() {
        body.push_str("<p class=\"form-error\">Please fix the highlighted fields.</p>\n");
    }

    body.push_str("<form method=\"post\" action=\"/add\">\n");
    body.push_str(&text_input("Cafe name", "name", &form.name, errors));
    body.push_str(&text_input("Map URL", "map_url", &form.map_url, errors));
    body.push_str(&text_input("Image URL", "img_url", &form.img_url, errors));
    body.push_str(&text_input("Location", "location", &form.location, errors));
    body.push_str(&checkbox_input(
        "Has sockets?",
        "has_sockets",
        form.has_sockets.is_some(),
    ));
    body.push_str(&checkbox_input(
        "Has toilet?",
        "has_toilet",
        form.has_toilet.is_some(),
    ));
    body.push_str(&checkbox_input("Has wifi?", "has_wifi", form.has_wifi.is_some()));
    body.push_str(&checkbox_input(
        "Can take calls?",
        "can_take_calls",
        form.can_take_calls.is_some(),
    ));
    body.push_str(&text_input("Number of seats", "seats", &form.seats, errors));
    body.push_str(&text_input(
        "Coffee price",
        "coffee_price",
        &form.coffee_price,
        errors,
    ));
    body.push_str("<button type=\"submit\">Save</button>\n</form>\n");

    layout("Add a cafe", &body)
}

/// Plain error page for store failures.
pub fn error_page(message: &str) -> String {
    layout("Error", &format!("<h1>Something went wrong</h1>\n<p>{}</p>\n", escape(message)))
}
