pub mod admin;
pub mod announcements;
pub mod feedback;
pub mod health;
pub mod reports;
pub mod sessions;
pub mod skill_cards;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users/me                          get, update own profile
/// /users/{id}                        view a profile (GET)
/// /users/{id}/feedback               feedback a user received (GET)
/// /leaderboard                       users by karma then trust (GET)
///
/// /announcements                     read announcements (GET, any user)
///
/// /skill-cards                       create, discovery listing
/// /skill-cards/mine                  caller's own cards (GET)
/// /skill-cards/{id}                  owner delete (DELETE)
///
/// /sessions                          request, list mine, clear history
/// /sessions/{id}                     participant delete (DELETE)
/// /sessions/{id}/confirm             helper accepts (POST)
/// /sessions/{id}/decline             helper declines (POST)
/// /sessions/{id}/cancel              learner withdraws (POST)
/// /sessions/{id}/complete            learner marks held (POST)
///
/// /feedback                          submit feedback (POST)
/// /reports                           file a report (POST)
///
/// /admin/users                       list (admin only)
/// /admin/users/{id}                  delete profile
/// /admin/users/{id}/status           overwrite account status (PUT)
/// /admin/skill-cards                 list
/// /admin/skill-cards/{id}            delete
/// /admin/skill-cards/{id}/status     approve/reject (PUT)
/// /admin/sessions                    list
/// /admin/sessions/{id}               delete
/// /admin/reports                     list
/// /admin/announcements               list, create
/// /admin/announcements/{id}          delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Profile and leaderboard.
        .nest("/users", users::router())
        .route("/leaderboard", get(handlers::users::leaderboard))
        // Announcement banner feed, readable by every authenticated user.
        .nest("/announcements", announcements::router())
        // Skill card marketplace.
        .nest("/skill-cards", skill_cards::router())
        // Session lifecycle.
        .nest("/sessions", sessions::router())
        // Feedback processor entry point.
        .nest("/feedback", feedback::router())
        // Abuse reports.
        .nest("/reports", reports::router())
        // Moderation surface (admin only).
        .nest("/admin", admin::router())
}
