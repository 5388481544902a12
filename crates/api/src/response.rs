//! Response envelope shared by every handler.
//!
//! Handlers reply with `{ "data": ... }` so clients can unwrap one shape
//! everywhere; errors carry the sibling `{ "error": ... }` shape built in
//! `error.rs`. Wrapping through [`DataResponse`] keeps the envelope typed
//! instead of assembled ad hoc with `serde_json::json!`.

use serde::Serialize;

/// Typed `{ "data": T }` envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: user }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
