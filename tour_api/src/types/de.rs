//! Lenient field deserializers.
//!
//! The upstream is inconsistent about whether counters and identifiers are
//! JSON numbers or strings, so these accept either.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl NumberOrString {
    fn into_string(self) -> String {
        match self {
            NumberOrString::Unsigned(n) => n.to_string(),
            NumberOrString::Signed(n) => n.to_string(),
            NumberOrString::Float(n) => n.to_string(),
            NumberOrString::Text(s) => s,
        }
    }
}

pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(NumberOrString::deserialize(deserializer)?.into_string())
}

pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumberOrString>::deserialize(deserializer)?.map(NumberOrString::into_string))
}

/// Like [`opt_string`], but a missing or null value becomes `""`.
pub(crate) fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string(deserializer)?.unwrap_or_default())
}

pub(crate) fn opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Unsigned(n)) => Ok(Some(n)),
        Some(NumberOrString::Signed(n)) => u64::try_from(n).map(Some).map_err(D::Error::custom),
        Some(NumberOrString::Float(n)) => Err(D::Error::custom(format!(
            "expected an integer, found {}",
            n
        ))),
        Some(NumberOrString::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                trimmed.parse().map(Some).map_err(D::Error::custom)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Counters {
        #[serde(default, deserialize_with = "super::opt_u64")]
        total: Option<u64>,
        #[serde(default, deserialize_with = "super::opt_string")]
        id: Option<String>,
    }

    #[test]
    fn accepts_numbers_and_strings() {
        let c: Counters = serde_json::from_str(r#"{"total": 45, "id": 126508}"#).unwrap();
        assert_eq!(c.total, Some(45));
        assert_eq!(c.id.as_deref(), Some("126508"));

        let c: Counters = serde_json::from_str(r#"{"total": "45", "id": "126508"}"#).unwrap();
        assert_eq!(c.total, Some(45));
        assert_eq!(c.id.as_deref(), Some("126508"));
    }

    #[test]
    fn blank_and_missing_counters_are_none() {
        let c: Counters = serde_json::from_str(r#"{"total": ""}"#).unwrap();
        assert_eq!(c.total, None);
        assert_eq!(c.id, None);

        let c: Counters = serde_json::from_str(r#"{"total": null, "id": null}"#).unwrap();
        assert_eq!(c.total, None);
        assert_eq!(c.id, None);
    }

    #[test]
    fn rejects_non_numeric_counter() {
        assert!(serde_json::from_str::<Counters>(r#"{"total": "many"}"#).is_err());
        assert!(serde_json::from_str::<Counters>(r#"{"total": -1}"#).is_err());
    }
}
