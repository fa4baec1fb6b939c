//! Query-string encoding of request parameters.
//!
//! Parameters are any `Serialize` struct. Each top-level field becomes one
//! `key=value` pair; sequences become repeated pairs in their original order
//! (`addresses=0xa&addresses=0xb`) and `null` fields are left out.

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{DashboardResult, Error};

/// Append the serialized `params` to the query string of `url`.
pub fn append_query<P>(url: &mut Url, params: &P) -> DashboardResult<()>
where
    P: Serialize + ?Sized,
{
    let value = serde_json::to_value(params).map_err(|e| Error::InvalidParams(e.to_string()))?;
    let fields = match value {
        Value::Object(fields) => fields,
        Value::Null => return Ok(()),
        other => {
            return Err(Error::InvalidParams(format!(
                "expected an object, got {}",
                kind(&other)
            )))
        }
    };

    let mut pairs = Vec::new();
    for (key, value) in fields {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    pairs.push((key.clone(), scalar(&key, item)?));
                }
            }
            other => pairs.push((key.clone(), scalar(&key, other)?)),
        }
    }

    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    Ok(())
}

fn scalar(key: &str, value: Value) -> DashboardResult<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(Error::InvalidParams(format!(
            "field '{}' holds {}, which cannot be sent as a query value",
            key,
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
