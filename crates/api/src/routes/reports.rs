//! Route definition for abuse reports.
//!
//! Mounted at `/reports` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Report routes.
///
/// ```text
/// POST   /    -> file_report
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(reports::file_report))
}
