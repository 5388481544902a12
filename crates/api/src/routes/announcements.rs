//! Route definition for reading announcements.
//!
//! Mounted at `/announcements` by `api_routes()`. Creation and deletion
//! live under `/admin/announcements`.

use axum::routing::get;
use axum::Router;

use crate::handlers::announcements;
use crate::state::AppState;

/// Announcement routes.
///
/// ```text
/// GET    /    -> list_announcements (any authenticated user)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(announcements::list_announcements))
}
