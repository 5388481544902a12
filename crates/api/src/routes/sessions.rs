//! Route definitions for the session lifecycle.
//!
//! Mounted at `/sessions` by `api_routes()`.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::sessions;
use crate::state::AppState;

/// Session routes.
///
/// ```text
/// POST   /               -> create_session
/// GET    /               -> list_my_sessions
/// DELETE /               -> clear_history
/// DELETE /{id}           -> delete_session (participant)
/// POST   /{id}/confirm   -> confirm_session (helper)
/// POST   /{id}/decline   -> decline_session (helper)
/// POST   /{id}/cancel    -> cancel_session (learner)
/// POST   /{id}/complete  -> complete_session (learner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(sessions::create_session)
                .get(sessions::list_my_sessions)
                .delete(sessions::clear_history),
        )
        .route("/{id}", delete(sessions::delete_session))
        .route("/{id}/confirm", post(sessions::confirm_session))
        .route("/{id}/decline", post(sessions::decline_session))
        .route("/{id}/cancel", post(sessions::cancel_session))
        .route("/{id}/complete", post(sessions::complete_session))
}
