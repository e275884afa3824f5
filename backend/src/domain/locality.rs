//! Authoritative locality records returned by the address lookup service.
//!
//! Purpose: carry one locality exactly as the upstream API reported it. The
//! record is immutable once decoded and is never persisted.

use serde::{Deserialize, Serialize};

/// One locality (suburb, delivery area, post office box range, ...) known to
/// the upstream address service.
///
/// ## Invariants
/// - Values are taken verbatim from the upstream response; no case folding
///   or trimming is applied.
///
/// # Examples
/// ```
/// use address_validator::domain::Locality;
///
/// let sydney = Locality::new(123, "SYDNEY", 2000, "NSW").with_category("Delivery Area");
/// assert_eq!(sydney.postcode(), 2000);
/// assert_eq!(sydney.category(), "Delivery Area");
/// assert!(sydney.latitude().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locality {
    category: String,
    id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    latitude: Option<f64>,
    location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    longitude: Option<f64>,
    postcode: u32,
    state: String,
}

impl Locality {
    /// Build a locality with an empty category and no coordinates.
    pub fn new(
        id: i64,
        location: impl Into<String>,
        postcode: u32,
        state: impl Into<String>,
    ) -> Self {
        Self {
            category: String::new(),
            id,
            latitude: None,
            location: location.into(),
            longitude: None,
            postcode,
            state: state.into(),
        }
    }

    /// Attach the informational category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Attach coordinates in WGS84 degrees.
    #[must_use]
    pub fn with_coordinates(mut self, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Informational category, e.g. `Delivery Area`.
    pub fn category(&self) -> &str {
        self.category.as_str()
    }

    /// Upstream identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Locality name as spelled by the upstream service.
    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    /// Numeric postcode.
    pub fn postcode(&self) -> u32 {
        self.postcode
    }

    /// State or territory code, e.g. `NSW`.
    pub fn state(&self) -> &str {
        self.state.as_str()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialises_without_absent_coordinates() {
        let locality = Locality::new(7, "PARRAMATTA", 2150, "NSW").with_category("Delivery Area");
        let value = serde_json::to_value(&locality).expect("serialise locality");

        assert_eq!(
            value,
            json!({
                "category": "Delivery Area",
                "id": 7,
                "location": "PARRAMATTA",
                "postcode": 2150,
                "state": "NSW"
            })
        );
        assert!(value.get("latitude").is_none());
    }

    #[test]
    fn deserialises_coordinates_when_present() {
        let locality: Locality = serde_json::from_value(json!({
            "category": "Delivery Area",
            "id": 123,
            "latitude": -33.865143,
            "location": "SYDNEY",
            "longitude": 151.2099,
            "postcode": 2000,
            "state": "NSW"
        }))
        .expect("decode locality");

        assert_eq!(locality.latitude(), Some(-33.865143));
        assert_eq!(locality.longitude(), Some(151.2099));
        assert_eq!(locality.location(), "SYDNEY");
    }
}
