//! Shared response types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` body returned by delete/restore endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
