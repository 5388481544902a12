//! Route definitions for the moderation surface.
//!
//! Mounted at `/admin` by `api_routes()`. Every handler takes
//! `RequireAdmin`, so the gate is enforced per endpoint.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Moderation routes.
///
/// ```text
/// GET    /users                      -> list_users
/// PUT    /users/{id}/status          -> set_user_status
/// DELETE /users/{id}                 -> delete_user
/// GET    /skill-cards                -> list_skill_cards
/// PUT    /skill-cards/{id}/status    -> set_skill_card_status
/// DELETE /skill-cards/{id}           -> delete_skill_card
/// GET    /sessions                   -> list_sessions
/// DELETE /sessions/{id}              -> delete_session
/// GET    /reports                    -> list_reports
/// GET    /announcements              -> list_announcements
/// POST   /announcements              -> create_announcement
/// DELETE /announcements/{id}         -> delete_announcement
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users))
        .route("/users/{id}/status", put(admin::set_user_status))
        .route("/users/{id}", delete(admin::delete_user))
        .route("/skill-cards", get(admin::list_skill_cards))
        .route(
            "/skill-cards/{id}/status",
            put(admin::set_skill_card_status),
        )
        .route("/skill-cards/{id}", delete(admin::delete_skill_card))
        .route("/sessions", get(admin::list_sessions))
        .route("/sessions/{id}", delete(admin::delete_session))
        .route("/reports", get(admin::list_reports))
        .route(
            "/announcements",
            get(admin::list_announcements).post(admin::create_announcement),
        )
        .route("/announcements/{id}", delete(admin::delete_announcement))
}
