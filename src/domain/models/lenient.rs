//! Field deserializers for the loosely typed backend columns.
//!
//! Nullable SQL columns arrive as `null` and flags arrive as booleans,
//! TINYINTs or strings. These helpers map them onto plain Rust values so a
//! single odd record does not fail a whole list.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// `null` or a missing value becomes the empty string.
pub(crate) fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `true`/`false`, `0`/`1`, their string forms, or `null` (false).
pub(crate) fn flexible_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    deserializer.deserialize_any(FlexibleBoolVisitor)
}

struct FlexibleBoolVisitor;

impl<'de> Visitor<'de> for FlexibleBoolVisitor {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean, 0/1, or \"true\"/\"false\"")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
        match v {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
        match v {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
        match v.trim().to_ascii_lowercase().as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" | "" => Ok(false),
            _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
        }
    }

    fn visit_none<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<bool, D::Error> {
        deserializer.deserialize_any(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "null_as_empty")]
        name: String,
        #[serde(default, deserialize_with = "flexible_bool")]
        flag: bool,
    }

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_null_string_is_empty() {
        assert_eq!(row(r#"{"name": null}"#).name, "");
        assert_eq!(row(r#"{}"#).name, "");
        assert_eq!(row(r#"{"name": "Guardia"}"#).name, "Guardia");
    }

    #[test]
    fn test_flag_shapes() {
        assert!(row(r#"{"flag": true}"#).flag);
        assert!(row(r#"{"flag": 1}"#).flag);
        assert!(row(r#"{"flag": "1"}"#).flag);
        assert!(row(r#"{"flag": "TRUE"}"#).flag);
        assert!(!row(r#"{"flag": 0}"#).flag);
        assert!(!row(r#"{"flag": "false"}"#).flag);
        assert!(!row(r#"{"flag": null}"#).flag);
        assert!(!row(r#"{}"#).flag);
    }

    #[test]
    fn test_flag_rejects_other_values() {
        assert!(serde_json::from_str::<Row>(r#"{"flag": 2}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"flag": "maybe"}"#).is_err());
    }
}
