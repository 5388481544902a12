//! Route definition for feedback submission.
//!
//! Mounted at `/feedback` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Feedback routes.
///
/// ```text
/// POST   /    -> post_feedback
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(feedback::post_feedback))
}
