//! List payload shapes returned by the backend.

use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;

/// Decode a list payload, preserving element order.
///
/// Endpoints answer either a bare JSON array or `{"data": [...]}`. Any other
/// shape, including an object without `data` such as an error body, is a
/// decode error. Element errors name the failing index.
pub fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, serde_json::Error> {
    let items = match serde_json::from_str::<Value>(body)? {
        Value::Array(items) => items,
        Value::Object(mut object) => match object.remove("data") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(serde_json::Error::custom(format!(
                    "expected `data` to be a list, found {}",
                    kind(&other)
                )))
            }
            None => {
                let keys: Vec<&str> = object.keys().map(String::as_str).collect();
                return Err(serde_json::Error::custom(format!(
                    "expected a list or an object with `data`, found object with keys [{}]",
                    keys.join(", ")
                )));
            }
        },
        other => {
            return Err(serde_json::Error::custom(format!(
                "expected a list or an object with `data`, found {}",
                kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|err| serde_json::Error::custom(format!("item {index}: {err}")))
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
