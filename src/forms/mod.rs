//! Request bodies accepted by the JSON endpoints and their validated payloads.

use serde_json::Value;

pub mod questions;
pub mod quizzes;

/// Read an integer from a JSON number or from a string holding an integer.
///
/// Fractional numbers, booleans and other shapes are rejected.
pub(crate) fn integer_from_json(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}
