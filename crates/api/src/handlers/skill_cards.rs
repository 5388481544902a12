//! Handlers for skill card creation, discovery, and owner management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use skillswap_core::error::CoreError;
use skillswap_core::skill_card::{self, normalize_status};
use skillswap_core::types::DbId;
use skillswap_db::models::skill_card::{CreateSkillCard, SkillCard};
use skillswap_db::repositories::SkillCardRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::users::resolve_profile;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Rewrite the stored status to its canonical value before serialization.
fn normalized(mut card: SkillCard) -> SkillCard {
    card.status = normalize_status(&card.status).to_string();
    card
}

// ---------------------------------------------------------------------------
// POST /skill-cards
// ---------------------------------------------------------------------------

/// Create a card owned by the caller. New cards enter moderation as
/// `pending` and stay out of discovery until approved.
pub async fn create_card(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreateSkillCard>,
) -> AppResult<impl IntoResponse> {
    let me = resolve_profile(&state, &auth).await?;

    // The pricing invariant nulls out whichever side is meaningless.
    let (price, skill_needed) =
        skill_card::validate_pricing(input.is_paid, input.price, input.skill_needed.take())?;
    input.price = price;
    input.skill_needed = skill_needed;

    let card = SkillCardRepo::create(&state.pool, me.id, &input).await?;

    tracing::info!(card_id = card.id, user_id = me.id, "Skill card created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: card })))
}

// ---------------------------------------------------------------------------
// GET /skill-cards
// ---------------------------------------------------------------------------

/// Discovery listing: published cards only.
pub async fn list_cards(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let cards: Vec<SkillCard> = SkillCardRepo::list_published(&state.pool)
        .await?
        .into_iter()
        .map(normalized)
        .collect();
    Ok(Json(DataResponse { data: cards }))
}

// ---------------------------------------------------------------------------
// GET /skill-cards/mine
// ---------------------------------------------------------------------------

/// The caller's own cards, every status included.
pub async fn my_cards(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let me = resolve_profile(&state, &auth).await?;
    let cards: Vec<SkillCard> = SkillCardRepo::list_for_owner(&state.pool, me.id)
        .await?
        .into_iter()
        .map(normalized)
        .collect();
    Ok(Json(DataResponse { data: cards }))
}

// ---------------------------------------------------------------------------
// DELETE /skill-cards/{id}
// ---------------------------------------------------------------------------

/// Delete one of the caller's own cards.
///
/// Scoping the delete to the owner means a foreign card and a missing card
/// are indistinguishable: both come back 404.
pub async fn delete_card(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let me = resolve_profile(&state, &auth).await?;
    let deleted = SkillCardRepo::hard_delete_owned(&state.pool, id, me.id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "SkillCard",
            id,
        }));
    }

    tracing::info!(card_id = id, user_id = me.id, "Skill card deleted by owner");

    Ok(StatusCode::NO_CONTENT)
}
