//! Form DTOs for the cafe endpoints.
//!
//! These decouple wire-level form encoding from the domain draft. HTML
//! checkboxes submit `on` when ticked and nothing at all when not, so the
//! amenity fields arrive as optional strings and decode to booleans here.

use serde::Deserialize;

use crate::domain::CafeDraft;

/// The search box submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search: String,
}

/// The creation form, exactly as submitted.
///
/// Kept around on validation failure so the re-rendered form can preserve
/// every entered value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCafeForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub map_url: String,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub has_sockets: Option<String>,
    #[serde(default)]
    pub has_toilet: Option<String>,
    #[serde(default)]
    pub has_wifi: Option<String>,
    #[serde(default)]
    pub can_take_calls: Option<String>,
    #[serde(default)]
    pub seats: String,
    #[serde(default)]
    pub coffee_price: String,
}

impl NewCafeForm {
    /// Converts the raw submission into a domain draft.
    pub fn to_draft(&self) -> CafeDraft {
        CafeDraft {
            name: self.name.clone(),
            map_url: self.map_url.clone(),
            img_url: self.img_url.clone(),
            location: self.location.clone(),
            has_sockets: checkbox_checked(&self.has_sockets),
            has_toilet: checkbox_checked(&self.has_toilet),
            has_wifi: checkbox_checked(&self.has_wifi),
            can_take_calls: checkbox_checked(&self.can_take_calls),
            seats: self.seats.clone(),
            coffee_price: self.coffee_price.clone(),
        }
    }
}

fn checkbox_checked(value: &Option<String>) -> bool {
    matches!(value.as_deref(), Some("on" | "true" | "1" | "yes"))
}
