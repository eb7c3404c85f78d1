//! Strict validation of the upstream medal-table payload.
//!
//! Each entity implements [`FeedSchema`], reading its fields from a
//! [`serde_json::Value`] and reporting the first offending field as a
//! [`SchemaError`]. Validation is all-or-nothing: a single bad field rejects
//! the whole payload, and no field is coerced across types (`"3"` is not a
//! count).

use serde_json::{Map, Value};
use thiserror::Error;

use crate::{CountryStanding, MedalFeed, MedalFeedInfo};

/// Location of a field inside the feed, rendered as `info.gold` or
/// `countries[3].shortCode`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    /// The document root.
    #[must_use]
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Descend into a named object member.
    #[must_use]
    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_owned())
        } else {
            Self(format!("{}.{name}", self.0))
        }
    }

    /// Descend into an array element.
    #[must_use]
    pub fn index(&self, position: usize) -> Self {
        Self(format!("{}[{position}]", self.0))
    }

    /// Borrow the rendered path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        if self.0.is_empty() { "$" } else { &self.0 }
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaErrorKind {
    /// A required field was absent.
    #[error("is missing")]
    Missing,
    /// The field was present with a type outside its declared union.
    #[error("must be {expected}, found {found}")]
    WrongType {
        /// Description of the accepted type(s).
        expected: &'static str,
        /// JSON type actually found.
        found: &'static str,
    },
    /// The field had the right JSON type but an unusable value.
    #[error("must be {expected}")]
    OutOfRange {
        /// Description of the accepted range.
        expected: &'static str,
    },
}

/// The feed did not match the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("feed field `{path}` {kind}")]
pub struct SchemaError {
    /// Path of the first offending field.
    pub path: FieldPath,
    /// What was wrong with it.
    pub kind: SchemaErrorKind,
}

impl SchemaError {
    fn new(path: &FieldPath, kind: SchemaErrorKind) -> Self {
        Self {
            path: path.clone(),
            kind,
        }
    }

    fn wrong_type(path: &FieldPath, expected: &'static str, value: &Value) -> Self {
        Self::new(
            path,
            SchemaErrorKind::WrongType {
                expected,
                found: json_type(value),
            },
        )
    }
}

/// A feed entity that can be read from a JSON value.
pub trait FeedSchema: Sized {
    /// Validate `value` and build the typed entity.
    ///
    /// # Errors
    /// Returns [`SchemaError`] naming the first field that is missing or has
    /// the wrong type.
    fn from_value(value: &Value, path: &FieldPath) -> Result<Self, SchemaError>;
}

/// Validate a complete feed payload.
///
/// # Errors
/// Returns [`SchemaError`] when any part of the payload is malformed.
///
/// # Examples
/// ```
/// use podium_core::validate_feed;
///
/// let raw = serde_json::json!({ "info": {}, "countries": [] });
/// let err = validate_feed(&raw).expect_err("info fields are required");
/// assert_eq!(err.path.as_str(), "info.asOf");
/// ```
pub fn validate_feed(raw: &Value) -> Result<MedalFeed, SchemaError> {
    let feed = MedalFeed::from_value(raw, &FieldPath::root())?;
    log::debug!(
        "validated medal feed as of {} with {} countries",
        feed.info.as_of,
        feed.countries.len()
    );
    Ok(feed)
}

impl FeedSchema for MedalFeed {
    fn from_value(value: &Value, path: &FieldPath) -> Result<Self, SchemaError> {
        let object = ObjectReader::new(value, path)?;
        let info = MedalFeedInfo::from_value(object.required("info")?, &path.field("info"))?;
        let countries_path = path.field("countries");
        let countries = match object.required("countries")? {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(position, item)| {
                    CountryStanding::from_value(item, &countries_path.index(position))
                })
                .collect::<Result<Vec<_>, _>>()?,
            other => return Err(SchemaError::wrong_type(&countries_path, "an array", other)),
        };
        Ok(Self { info, countries })
    }
}

impl FeedSchema for MedalFeedInfo {
    fn from_value(value: &Value, path: &FieldPath) -> Result<Self, SchemaError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            as_of: object.string("asOf")?,
            total_events: object.count("totalEvents")?,
            finished_events: object.count("finishedEvents")?,
            scheduled_events: object.count("scheduledEvents")?,
            gold: object.count("gold")?,
            silver: object.count("silver")?,
            bronze: object.count("bronze")?,
            total: object.count("total")?,
            sport_id: object.string("sportId")?,
            sport_name: object.optional_string("sportName")?,
            sport_short_name: object.optional_string("sportShortName")?,
        })
    }
}

impl FeedSchema for CountryStanding {
    fn from_value(value: &Value, path: &FieldPath) -> Result<Self, SchemaError> {
        let object = ObjectReader::new(value, path)?;
        Ok(Self {
            country_id: object.identifier("countryId")?,
            geo_id: object.identifier("geoId")?,
            name: object.string("name")?,
            short_code: object.string("shortCode")?,
            gold: object.count("gold")?,
            silver: object.count("silver")?,
            bronze: object.count("bronze")?,
            total: object.count("total")?,
            gold_rank: object.count("goldRank")?,
            gold_sort_rank: object.count("goldSortRank")?,
            total_rank: object.count("totalRank")?,
            total_sort_rank: object.count("totalSortRank")?,
        })
    }
}

/// Field accessors over one JSON object, tracking the object's path.
struct ObjectReader<'a> {
    members: &'a Map<String, Value>,
    path: &'a FieldPath,
}

impl<'a> ObjectReader<'a> {
    fn new(value: &'a Value, path: &'a FieldPath) -> Result<Self, SchemaError> {
        match value {
            Value::Object(members) => Ok(Self { members, path }),
            other => Err(SchemaError::wrong_type(path, "an object", other)),
        }
    }

    fn required(&self, name: &str) -> Result<&'a Value, SchemaError> {
        self.members
            .get(name)
            .ok_or_else(|| SchemaError::new(&self.path.field(name), SchemaErrorKind::Missing))
    }

    fn string(&self, name: &str) -> Result<String, SchemaError> {
        match self.required(name)? {
            Value::String(text) => Ok(text.clone()),
            other => Err(SchemaError::wrong_type(
                &self.path.field(name),
                "a string",
                other,
            )),
        }
    }

    /// Strings that may be absent or explicitly `null`.
    fn optional_string(&self, name: &str) -> Result<Option<String>, SchemaError> {
        match self.members.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(other) => Err(SchemaError::wrong_type(
                &self.path.field(name),
                "a string or null",
                other,
            )),
        }
    }

    fn identifier(&self, name: &str) -> Result<u64, SchemaError> {
        let path = self.path.field(name);
        match self.required(name)? {
            Value::Number(number) => number.as_u64().ok_or_else(|| {
                SchemaError::new(
                    &path,
                    SchemaErrorKind::OutOfRange {
                        expected: "a non-negative integer",
                    },
                )
            }),
            other => Err(SchemaError::wrong_type(&path, "a number", other)),
        }
    }

    fn count(&self, name: &str) -> Result<u32, SchemaError> {
        let raw = self.identifier(name)?;
        u32::try_from(raw).map_err(|_| {
            SchemaError::new(
                &self.path.field(name),
                SchemaErrorKind::OutOfRange {
                    expected: "a count no larger than 4294967295",
                },
            )
        })
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn feed() -> Value {
        json!({
            "info": {
                "asOf": "2024-08-11T18:00:00Z",
                "totalEvents": 329,
                "finishedEvents": 327,
                "scheduledEvents": 2,
                "gold": 327,
                "silver": 328,
                "bronze": 380,
                "total": 1035,
                "sportId": "GLO",
                "sportName": "All sports",
                "sportShortName": null
            },
            "countries": [
                {
                    "countryId": 1,
                    "geoId": 840,
                    "name": "United States",
                    "shortCode": "USA",
                    "gold": 40,
                    "silver": 44,
                    "bronze": 42,
                    "total": 126,
                    "goldRank": 1,
                    "goldSortRank": 1,
                    "totalRank": 1,
                    "totalSortRank": 1
                }
            ]
        })
    }

    fn set(feed: &mut Value, pointer: &str, replacement: Value) {
        *feed.pointer_mut(pointer).expect("pointer exists") = replacement;
    }

    #[rstest]
    fn accepts_well_formed_feed(feed: Value) {
        let parsed = validate_feed(&feed).expect("valid feed");
        assert_eq!(parsed.info.total, 1035);
        assert_eq!(parsed.info.sport_name.as_deref(), Some("All sports"));
        assert_eq!(parsed.info.sport_short_name, None);
        assert_eq!(parsed.countries.len(), 1);
        assert_eq!(parsed.countries[0].short_code, "USA");
    }

    #[rstest]
    fn accepts_empty_country_list(mut feed: Value) {
        set(&mut feed, "/countries", json!([]));
        let parsed = validate_feed(&feed).expect("empty table is valid");
        assert!(parsed.countries.is_empty());
    }

    #[rstest]
    fn accepts_absent_optional_sport_name(mut feed: Value) {
        feed["info"]
            .as_object_mut()
            .expect("info object")
            .remove("sportName");
        let parsed = validate_feed(&feed).expect("optional field may be absent");
        assert_eq!(parsed.info.sport_name, None);
    }

    #[rstest]
    fn does_not_enforce_total_consistency(mut feed: Value) {
        set(&mut feed, "/countries/0/total", json!(7));
        let parsed = validate_feed(&feed).expect("upstream totals are trusted");
        assert_eq!(parsed.countries[0].total, 7);
    }

    #[rstest]
    #[case("/countries/0/gold", json!("3"), "countries[0].gold")]
    #[case("/info/sportName", json!(12), "info.sportName")]
    #[case("/countries", json!({}), "countries")]
    #[case("/info", json!([]), "info")]
    #[case("/countries/0/shortCode", Value::Null, "countries[0].shortCode")]
    #[case("/info/asOf", json!(20_240_811), "info.asOf")]
    fn rejects_wrong_types(
        mut feed: Value,
        #[case] pointer: &str,
        #[case] replacement: Value,
        #[case] expected_path: &str,
    ) {
        set(&mut feed, pointer, replacement);
        let err = validate_feed(&feed).expect_err("wrong type must fail");
        assert_eq!(err.path.as_str(), expected_path);
        assert!(matches!(err.kind, SchemaErrorKind::WrongType { .. }));
    }

    #[rstest]
    #[case(json!(-1))]
    #[case(json!(2.5))]
    #[case(json!(5_000_000_000_u64))]
    fn rejects_unusable_counts(mut feed: Value, #[case] replacement: Value) {
        set(&mut feed, "/countries/0/silver", replacement);
        let err = validate_feed(&feed).expect_err("count out of range");
        assert_eq!(err.path.as_str(), "countries[0].silver");
        assert!(matches!(err.kind, SchemaErrorKind::OutOfRange { .. }));
    }

    #[rstest]
    fn reports_missing_field_path(mut feed: Value) {
        feed["countries"][0]
            .as_object_mut()
            .expect("country object")
            .remove("geoId");
        let err = validate_feed(&feed).expect_err("missing field");
        assert_eq!(err.path.as_str(), "countries[0].geoId");
        assert_eq!(err.kind, SchemaErrorKind::Missing);
        assert_eq!(
            err.to_string(),
            "feed field `countries[0].geoId` is missing"
        );
    }

    #[rstest]
    fn one_bad_country_rejects_whole_feed(mut feed: Value) {
        let mut second = feed["countries"][0].clone();
        second["bronze"] = json!(true);
        feed["countries"]
            .as_array_mut()
            .expect("countries array")
            .push(second);
        let err = validate_feed(&feed).expect_err("no partial acceptance");
        assert_eq!(err.path.as_str(), "countries[1].bronze");
    }

    #[rstest]
    fn rejects_non_object_root() {
        let err = validate_feed(&json!("feed")).expect_err("root must be object");
        assert_eq!(err.path.as_str(), "$");
    }
}
