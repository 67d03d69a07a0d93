//! Cafe entity and its validation rules.
//!
//! A cafe is a flat record: a unique name, two URLs, a location, four
//! amenity flags, and two free-text fields (seats, coffee price). Records
//! are created through the add-form path and never updated or deleted.
//!
//! # Invariants
//!
//! - `name` is unique across all records (store-enforced, pre-checked)
//! - every text field is non-empty and within its column bound
//! - `map_url` and `img_url` are well-formed http(s) URLs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ValidationError;

/// Maximum length for the cafe name.
pub const MAX_NAME_LENGTH: usize = 250;
/// Maximum length for the map and image URLs.
pub const MAX_URL_LENGTH: usize = 500;
/// Maximum length for the location and seats fields.
pub const MAX_LOCATION_LENGTH: usize = 200;
/// Maximum length for the coffee price field.
pub const MAX_PRICE_LENGTH: usize = 100;

/// A persisted cafe record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cafe {
    id: i64,
    name: String,
    map_url: String,
    img_url: String,
    location: String,
    has_sockets: bool,
    has_toilet: bool,
    has_wifi: bool,
    can_take_calls: bool,
    seats: String,
    coffee_price: String,
}

/// A validated cafe draft, not yet persisted (no id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub has_sockets: bool,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub can_take_calls: bool,
    pub seats: String,
    pub coffee_price: String,
}

/// Raw field values as submitted, before any validation.
///
/// Text fields arrive as strings; checkboxes arrive as already-decoded
/// booleans (absent means false).
#[derive(Debug, Clone, Default)]
pub struct CafeDraft {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub has_sockets: bool,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub can_take_calls: bool,
    pub seats: String,
    pub coffee_price: String,
}

impl NewCafe {
    /// Validates a raw draft into a persistable cafe.
    ///
    /// All fields are checked in one pass; every failing field produces
    /// its own error so a form can annotate them all at once.
    pub fn from_draft(draft: CafeDraft) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let name = draft.name.trim().to_string();
        let map_url = draft.map_url.trim().to_string();
        let img_url = draft.img_url.trim().to_string();
        let location = draft.location.trim().to_string();
        let seats = draft.seats.trim().to_string();
        let coffee_price = draft.coffee_price.trim().to_string();

        if let Err(e) = validate_text("name", &name, MAX_NAME_LENGTH) {
            errors.push(e);
        }
        if let Err(e) = validate_url("map_url", &map_url) {
            errors.push(e);
        }
        if let Err(e) = validate_url("img_url", &img_url) {
            errors.push(e);
        }
        if let Err(e) = validate_text("location", &location, MAX_LOCATION_LENGTH) {
            errors.push(e);
        }
        if let Err(e) = validate_text("seats", &seats, MAX_LOCATION_LENGTH) {
            errors.push(e);
        }
        if let Err(e) = validate_text("coffee_price", &coffee_price, MAX_PRICE_LENGTH) {
            errors.push(e);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            name,
            map_url,
            img_url,
            location,
            has_sockets: draft.has_sockets,
            has_toilet: draft.has_toilet,
            has_wifi: draft.has_wifi,
            can_take_calls: draft.can_take_calls,
            seats,
            coffee_price,
        })
    }
}

impl Cafe {
    /// Every column of the cafe table, in declaration order.
    ///
    /// This is the single place the column set is spelled out; row
    /// serialization and schema definitions refer back to it.
    pub const COLUMNS: [&'static str; 11] = [
        "id",
        "name",
        "map_url",
        "img_url",
        "location",
        "has_sockets",
        "has_toilet",
        "has_wifi",
        "can_take_calls",
        "seats",
        "coffee_price",
    ];

    /// Reconstitute a cafe from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: i64,
        name: String,
        map_url: String,
        img_url: String,
        location: String,
        has_sockets: bool,
        has_toilet: bool,
        has_wifi: bool,
        can_take_calls: bool,
        seats: String,
        coffee_price: String,
    ) -> Self {
        Self {
            id,
            name,
            map_url,
            img_url,
            location,
            has_sockets,
            has_toilet,
            has_wifi,
            can_take_calls,
            seats,
            coffee_price,
        }
    }

    /// Attach a store-assigned id to a validated draft.
    pub fn from_new(id: i64, new: NewCafe) -> Self {
        Self {
            id,
            name: new.name,
            map_url: new.map_url,
            img_url: new.img_url,
            location: new.location,
            has_sockets: new.has_sockets,
            has_toilet: new.has_toilet,
            has_wifi: new.has_wifi,
            can_take_calls: new.can_take_calls,
            seats: new.seats,
            coffee_price: new.coffee_price,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn map_url(&self) -> &str {
        &self.map_url
    }

    pub fn img_url(&self) -> &str {
        &self.img_url
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn has_sockets(&self) -> bool {
        self.has_sockets
    }

    pub fn has_toilet(&self) -> bool {
        self.has_toilet
    }

    pub fn has_wifi(&self) -> bool {
        self.has_wifi
    }

    pub fn can_take_calls(&self) -> bool {
        self.can_take_calls
    }

    pub fn seats(&self) -> &str {
        &self.seats
    }

    pub fn coffee_price(&self) -> &str {
        &self.coffee_price
    }

    /// Serializes the record as `(column, value)` pairs in [`Cafe::COLUMNS`]
    /// order, covering every column including `id`.
    pub fn to_field_map(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", Value::from(self.id)),
            ("name", Value::from(self.name.as_str())),
            ("map_url", Value::from(self.map_url.as_str())),
            ("img_url", Value::from(self.img_url.as_str())),
            ("location", Value::from(self.location.as_str())),
            ("has_sockets", Value::from(self.has_sockets)),
            ("has_toilet", Value::from(self.has_toilet)),
            ("has_wifi", Value::from(self.has_wifi)),
            ("can_take_calls", Value::from(self.can_take_calls)),
            ("seats", Value::from(self.seats.as_str())),
            ("coffee_price", Value::from(self.coffee_price.as_str())),
        ]
    }
}

fn validate_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::too_long(field, max, len));
    }
    Ok(())
}

/// URL-shape check: http(s) scheme, a non-empty host, no whitespace.
fn validate_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let len = value.chars().count();
    if len > MAX_URL_LENGTH {
        return Err(ValidationError::too_long(field, MAX_URL_LENGTH, len));
    }
    if value.chars().any(|c| c.is_whitespace()) {
        return Err(ValidationError::invalid_format(
            field,
            "URL cannot contain whitespace",
        ));
    }
    let rest = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"))
        .ok_or_else(|| {
            ValidationError::invalid_format(field, "URL must start with http:// or https://")
        })?;
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    if host.is_empty() {
        return Err(ValidationError::invalid_format(field, "URL has no host"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> CafeDraft {
        CafeDraft {
            name: "Lazy Bean".to_string(),
            map_url: "https://maps.example.com/lazy-bean".to_string(),
            img_url: "https://img.example.com/lazy-bean.jpg".to_string(),
            location: "Shoreditch".to_string(),
            has_sockets: true,
            has_toilet: true,
            has_wifi: true,
            can_take_calls: false,
            seats: "20+".to_string(),
            coffee_price: "£2.50".to_string(),
        }
    }

    #[test]
    fn valid_draft_passes_validation() {
        let cafe = NewCafe::from_draft(valid_draft()).unwrap();
        assert_eq!(cafe.name, "Lazy Bean");
        assert!(!cafe.can_take_calls);
    }

    #[test]
    fn text_fields_are_trimmed() {
        let mut draft = valid_draft();
        draft.name = "  Lazy Bean  ".to_string();
        draft.location = " Shoreditch ".to_string();
        let cafe = NewCafe::from_draft(draft).unwrap();
        assert_eq!(cafe.name, "Lazy Bean");
        assert_eq!(cafe.location, "Shoreditch");
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut draft = valid_draft();
        draft.name = "   ".to_string();
        let errors = NewCafe::from_draft(draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), "name");
    }

    #[test]
    fn overlong_name_is_rejected() {
        let mut draft = valid_draft();
        draft.name = "x".repeat(MAX_NAME_LENGTH + 1);
        let errors = NewCafe::from_draft(draft).unwrap_err();
        assert!(matches!(errors[0], ValidationError::TooLong { .. }));
    }

    #[test]
    fn malformed_map_url_is_rejected() {
        let mut draft = valid_draft();
        draft.map_url = "not-a-url".to_string();
        let errors = NewCafe::from_draft(draft).unwrap_err();
        assert_eq!(errors[0].field(), "map_url");
        assert!(matches!(errors[0], ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn url_without_host_is_rejected() {
        let mut draft = valid_draft();
        draft.img_url = "https:///path-only".to_string();
        let errors = NewCafe::from_draft(draft).unwrap_err();
        assert_eq!(errors[0].field(), "img_url");
    }

    #[test]
    fn url_with_whitespace_is_rejected() {
        let mut draft = valid_draft();
        draft.map_url = "https://maps.example.com/a b".to_string();
        let errors = NewCafe::from_draft(draft).unwrap_err();
        assert_eq!(errors[0].field(), "map_url");
    }

    #[test]
    fn all_failing_fields_are_reported_together() {
        let draft = CafeDraft::default();
        let errors = NewCafe::from_draft(draft).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(
            fields,
            vec!["name", "map_url", "img_url", "location", "seats", "coffee_price"]
        );
    }

    #[test]
    fn unchecked_amenities_default_to_false() {
        let mut draft = valid_draft();
        draft.has_sockets = false;
        draft.has_wifi = false;
        let cafe = NewCafe::from_draft(draft).unwrap();
        assert!(!cafe.has_sockets);
        assert!(!cafe.has_wifi);
        assert!(cafe.has_toilet);
    }

    #[test]
    fn field_map_covers_every_column_in_order() {
        let cafe = Cafe::from_new(7, NewCafe::from_draft(valid_draft()).unwrap());
        let map = cafe.to_field_map();
        let keys: Vec<_> = map.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, Cafe::COLUMNS.to_vec());
        assert_eq!(map[0].1, Value::from(7));
        assert_eq!(map[1].1, Value::from("Lazy Bean"));
        assert_eq!(map[7].1, Value::from(true));
    }

    #[test]
    fn reconstitute_round_trips_accessors() {
        let cafe = Cafe::reconstitute(
            3,
            "Grind".to_string(),
            "https://maps.example.com/grind".to_string(),
            "https://img.example.com/grind.jpg".to_string(),
            "Soho".to_string(),
            true,
            false,
            true,
            true,
            "40".to_string(),
            "£3.10".to_string(),
        );
        assert_eq!(cafe.id(), 3);
        assert_eq!(cafe.name(), "Grind");
        assert!(!cafe.has_toilet());
        assert_eq!(cafe.coffee_price(), "£3.10");
    }
}
