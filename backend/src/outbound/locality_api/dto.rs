//! DTOs for decoding locality search responses.
//!
//! The upstream wraps results as `{ "localities": { "locality": ... } }` and
//! varies the inner shape: `locality` is an array for several matches, a bare
//! object for exactly one, and `localities` itself becomes an empty string
//! (or disappears) when nothing matched. These DTOs absorb that variance and
//! map into domain records in one pass.

use serde::{Deserialize, Deserializer};

use crate::domain::Locality;

#[derive(Debug, Deserialize)]
pub(super) struct LocalitySearchResponseDto {
    #[serde(default)]
    localities: Option<LocalitiesDto>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LocalitiesDto {
    Populated {
        #[serde(default)]
        locality: Option<OneOrMany<LocalityDto>>,
    },
    Blank(#[serde(deserialize_with = "blank_string")] ()),
}

fn blank_string<'de, D>(deserializer: D) -> Result<(), D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    if text.trim().is_empty() {
        Ok(())
    } else {
        Err(serde::de::Error::custom(format!(
            "unexpected localities text: {text}"
        )))
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

#[derive(Debug, Deserialize)]
struct LocalityDto {
    #[serde(default)]
    category: String,
    id: i64,
    latitude: Option<f64>,
    location: String,
    longitude: Option<f64>,
    postcode: u32,
    state: String,
}

impl LocalitySearchResponseDto {
    pub(super) fn into_domain_localities(self) -> Vec<Locality> {
        let Some(LocalitiesDto::Populated {
            locality: Some(found),
        }) = self.localities
        else {
            return Vec::new();
        };
        let dtos = match found {
            OneOrMany::Many(many) => many,
            OneOrMany::One(one) => vec![one],
        };
        dtos.into_iter().map(LocalityDto::into_domain).collect()
    }
}

impl LocalityDto {
    fn into_domain(self) -> Locality {
        Locality::new(self.id, self.location, self.postcode, self.state)
            .with_category(self.category)
            .with_coordinates(self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn decode(body: &str) -> Vec<Locality> {
        serde_json::from_str::<LocalitySearchResponseDto>(body)
            .expect("payload should decode")
            .into_domain_localities()
    }

    #[test]
    fn decodes_locality_arrays_in_order() {
        let localities = decode(
            r#"{
                "localities": {
                    "locality": [
                        {
                            "category": "Delivery Area",
                            "id": 445,
                            "latitude": -33.8688,
                            "location": "SYDNEY",
                            "longitude": 151.2093,
                            "postcode": 2000,
                            "state": "NSW"
                        },
                        {
                            "category": "Delivery Area",
                            "id": 446,
                            "location": "HAYMARKET",
                            "postcode": 2000,
                            "state": "NSW"
                        }
                    ]
                }
            }"#,
        );

        assert_eq!(localities.len(), 2);
        assert_eq!(localities[0].location(), "SYDNEY");
        assert_eq!(localities[0].latitude(), Some(-33.8688));
        assert_eq!(localities[1].location(), "HAYMARKET");
        assert!(localities[1].longitude().is_none());
    }

    #[test]
    fn normalises_a_single_locality_object_into_a_list() {
        let localities = decode(
            r#"{
                "localities": {
                    "locality": {
                        "category": "Delivery Area",
                        "id": 123,
                        "location": "SYDNEY",
                        "postcode": 2000,
                        "state": "NSW"
                    }
                }
            }"#,
        );

        assert_eq!(localities, vec![Locality::new(123, "SYDNEY", 2000, "NSW").with_category("Delivery Area")]);
    }

    #[rstest]
    #[case::blank_string(r#"{ "localities": "" }"#)]
    #[case::null(r#"{ "localities": null }"#)]
    #[case::missing(r#"{}"#)]
    #[case::empty_object(r#"{ "localities": {} }"#)]
    #[case::empty_array(r#"{ "localities": { "locality": [] } }"#)]
    fn treats_empty_shapes_as_no_results(#[case] body: &str) {
        assert!(decode(body).is_empty());
    }

    #[test]
    fn rejects_non_blank_localities_text() {
        let decoded = serde_json::from_str::<LocalitySearchResponseDto>(
            r#"{ "localities": "service degraded" }"#,
        );
        assert!(decoded.is_err(), "only an empty string means no results");
    }

    #[test]
    fn rejects_localities_missing_required_fields() {
        let decoded = serde_json::from_str::<LocalitySearchResponseDto>(
            r#"{ "localities": { "locality": [{ "id": 1, "location": "NOWHERE" }] } }"#,
        );
        assert!(decoded.is_err(), "missing postcode and state should fail");
    }
}
