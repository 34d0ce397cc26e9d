//! JSON -> fact conversion utilities

use super::CliError;
use crate::{Fact, Facts, Value};

/// Convert a scalar serde_json::Value to a fact Value
///
/// Arrays and objects have no scalar reading and yield `None`.
pub fn json_to_value(v: serde_json::Value) -> Option<Value> {
    match v {
        serde_json::Value::Null => Some(Value::Null),
        serde_json::Value::Bool(b) => Some(Value::Boolean(b)),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Some(Value::Integer(i)),
            None => n.as_f64().map(Value::Float),
        },
        serde_json::Value::String(s) => Some(Value::String(s)),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
    }
}

fn json_to_fact(v: serde_json::Value) -> Result<Fact, CliError> {
    let obj = match v {
        serde_json::Value::Object(obj) => obj,
        other => {
            return Err(CliError::InvalidFacts(format!(
                "expected an object, found {}",
                json_type_name(&other)
            )));
        }
    };

    obj.into_iter()
        .map(|(k, v)| {
            let kind = json_type_name(&v);
            match json_to_value(v) {
                Some(value) => Ok((k, value)),
                None => Err(CliError::InvalidFacts(format!(
                    "field '{}' holds an {}; fact values must be scalars",
                    k, kind
                ))),
            }
        })
        .collect()
}

/// Convert a JSON object (one fact) or array of objects (a sequence) to Facts
pub fn json_to_facts(v: serde_json::Value) -> Result<Facts, CliError> {
    match v {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(json_to_fact)
            .collect::<Result<Vec<_>, _>>()
            .map(Facts::Many),
        other => json_to_fact(other).map(Facts::Single),
    }
}

fn json_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
