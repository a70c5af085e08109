//! Accepted payload shapes.
//!
//! Collections arrive either as a bare array or wrapped as `{ "data": [...] }`.
//! Single-record responses may be an object, an array to search, or either
//! of those wrapped in `{ "data": ... }`.

use crate::{Error, Result};
use serde_json::Value;

/// Unwrap a collection response into its raw elements.
pub fn unwrap_collection(payload: Value) -> Result<Vec<Value>> {
    match payload {
        Value::Array(items) => Ok(items),
        Value::Object(mut object) => match object.remove("data") {
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(Error::Shape(format!(
                "`data` is {}, expected an array",
                kind(&other)
            ))),
            None => Err(Error::Shape("object without a `data` array".to_string())),
        },
        other => Err(Error::Shape(format!(
            "collection is {}, expected an array",
            kind(&other)
        ))),
    }
}

/// Single-record endpoint response after unwrapping.
#[derive(Debug, Clone, PartialEq)]
pub enum SinglePayload {
    One(Value),
    Many(Vec<Value>),
}

pub fn unwrap_single(payload: Value) -> Result<SinglePayload> {
    match payload {
        Value::Array(items) => Ok(SinglePayload::Many(items)),
        Value::Object(mut object) => match object.remove("data") {
            Some(Value::Array(items)) => Ok(SinglePayload::Many(items)),
            Some(Value::Object(inner)) => Ok(SinglePayload::One(Value::Object(inner))),
            Some(other) => {
                // A scalar `data` field belongs to the record itself
                object.insert("data".to_string(), other);
                Ok(SinglePayload::One(Value::Object(object)))
            }
            None => Ok(SinglePayload::One(Value::Object(object))),
        },
        other => Err(Error::Shape(format!(
            "record is {}, expected an object or array",
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
