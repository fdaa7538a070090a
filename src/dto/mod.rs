//! JSON response shapes returned by the HTTP layer.

use serde::Serialize;

pub mod categories;
pub mod questions;

/// Envelope returned for every failed request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error,
            message: message.into(),
        }
    }
}
