//! Route definitions for profile access.
//!
//! Mounted at `/users` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Profile routes.
///
/// ```text
/// GET    /me              -> get_me (provisions on first access)
/// PUT    /me              -> update_me
/// GET    /{id}            -> get_user
/// GET    /{id}/feedback   -> user_feedback (received, newest first)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(users::get_me).put(users::update_me))
        .route("/{id}", get(users::get_user))
        .route("/{id}/feedback", get(users::user_feedback))
}
