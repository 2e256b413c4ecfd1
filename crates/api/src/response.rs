//! Shared response shapes for API handlers.

use serde::Serialize;

/// `{ "msg": "..." }` confirmation body returned by mutations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: &'static str,
}

impl MessageResponse {
    pub fn new(msg: &'static str) -> Self {
        Self { msg }
    }
}
