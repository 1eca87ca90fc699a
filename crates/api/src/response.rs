//! Shared response envelope types for API handlers.
//!
//! Most responses use a `{ "data": ... }` envelope. The candidate board
//! additionally reports a success flag and a `meta` block.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "success": true, "data": T, "meta": M }` envelope.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize, M: Serialize> {
    pub success: bool,
    pub data: T,
    pub meta: M,
}

impl<T: Serialize, M: Serialize> ListResponse<T, M> {
    pub fn ok(data: T, meta: M) -> Self {
        Self {
            success: true,
            data,
            meta,
        }
    }
}
