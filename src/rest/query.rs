//! Query-string encoding for resource parameter structs.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Serializes a params struct to a query parameter map.
///
/// Unset (`null`) fields are dropped and arrays of scalars become
/// comma-separated lists. Params structs hold scalars and lists only;
/// any other value is an encoding error rather than a silently dropped
/// parameter.
pub(crate) fn serialize_to_query<T: Serialize>(
    params: &T,
) -> Result<BTreeMap<String, String>, serde_json::Error> {
    let value = serde_json::to_value(params)?;
    let mut query = BTreeMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::Array(arr) => {
                    let values = arr
                        .iter()
                        .map(|v| scalar(&key, v))
                        .collect::<Result<Vec<_>, _>>()?;
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                other => {
                    let value = scalar(&key, &other)?;
                    query.insert(key, value);
                }
            }
        }
    }

    Ok(query)
}

fn scalar(key: &str, value: &Value) -> Result<String, serde_json::Error> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(serde::ser::Error::custom(format!(
            "query parameter `{key}` must be a scalar or a list of scalars"
        ))),
    }
}
