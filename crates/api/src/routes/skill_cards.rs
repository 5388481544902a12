//! Route definitions for the skill card marketplace.
//!
//! Mounted at `/skill-cards` by `api_routes()`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::skill_cards;
use crate::state::AppState;

/// Skill card routes.
///
/// ```text
/// POST   /          -> create_card
/// GET    /          -> list_cards (approved only)
/// GET    /mine      -> my_cards
/// DELETE /{id}      -> delete_card (owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(skill_cards::create_card).get(skill_cards::list_cards),
        )
        .route("/mine", get(skill_cards::my_cards))
        .route("/{id}", delete(skill_cards::delete_card))
}
