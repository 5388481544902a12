//! Handlers for the moderation surface. Every endpoint here is gated by
//! [`RequireAdmin`].
//!
//! Moderation writes are direct overwrites, not transitions: any account
//! status is reachable from any other, repeating an overwrite is a no-op,
//! and deletes bypass the session state machine entirely. Feedback and
//! reports referencing deleted rows stay behind; reputation already derived
//! from them is not recomputed.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use skillswap_core::error::CoreError;
use skillswap_core::moderation;
use skillswap_core::skill_card;
use skillswap_core::types::DbId;
use skillswap_db::models::announcement::CreateAnnouncement;
use skillswap_db::repositories::{
    AnnouncementRepo, ReportRepo, SessionRepo, SkillCardRepo, UserRepo,
};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

/// GET /admin/users
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}

/// GET /admin/sessions
pub async fn list_sessions(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let sessions = SessionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: sessions }))
}

/// GET /admin/reports
pub async fn list_reports(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let reports = ReportRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: reports }))
}

/// GET /admin/skill-cards
pub async fn list_skill_cards(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let cards = SkillCardRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: cards }))
}

// ---------------------------------------------------------------------------
// PUT /admin/users/{id}/status
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SetUserStatus {
    pub status: String,
}

/// Overwrite a user's account status.
pub async fn set_user_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetUserStatus>,
) -> AppResult<impl IntoResponse> {
    moderation::validate_user_status(&input.status)?;

    let updated = UserRepo::set_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id,
        }))?;

    tracing::info!(
        user_id = id,
        status = %input.status,
        admin_id = admin.id,
        "User status set by moderation",
    );

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/users/{id}
// ---------------------------------------------------------------------------

/// Hard-delete a user profile. Cards, sessions, feedback, and reports
/// referencing the user are left in place.
pub async fn delete_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = UserRepo::hard_delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id,
        }));
    }

    tracing::info!(user_id = id, admin_id = admin.id, "User profile deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// PUT /admin/skill-cards/{id}/status
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SetCardStatus {
    pub status: String,
}

/// Approve or reject a skill card.
pub async fn set_skill_card_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetCardStatus>,
) -> AppResult<impl IntoResponse> {
    skill_card::validate_moderation_status(&input.status)?;

    let updated = SkillCardRepo::set_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SkillCard",
            id,
        }))?;

    tracing::info!(
        card_id = id,
        status = %input.status,
        admin_id = admin.id,
        "Skill card status set by moderation",
    );

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/skill-cards/{id}
// ---------------------------------------------------------------------------

/// Hard-delete a skill card, whoever owns it.
pub async fn delete_skill_card(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SkillCardRepo::hard_delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "SkillCard",
            id,
        }));
    }

    tracing::info!(card_id = id, admin_id = admin.id, "Skill card deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// DELETE /admin/sessions/{id}
// ---------------------------------------------------------------------------

/// Hard-delete any session, regardless of status or participants.
pub async fn delete_session(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SessionRepo::hard_delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id,
        }));
    }

    tracing::info!(session_id = id, admin_id = admin.id, "Session deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Announcements
// ---------------------------------------------------------------------------

/// POST /admin/announcements
pub async fn create_announcement(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateAnnouncement>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() || input.message.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Announcement title and message must not be empty".into(),
        )));
    }

    let created = AnnouncementRepo::create(&state.pool, admin.id, &input).await?;

    tracing::info!(
        announcement_id = created.id,
        admin_id = admin.id,
        "Announcement published",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /admin/announcements
pub async fn list_announcements(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let announcements = AnnouncementRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: announcements }))
}

/// DELETE /admin/announcements/{id}
pub async fn delete_announcement(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = AnnouncementRepo::hard_delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Announcement",
            id,
        }));
    }

    tracing::info!(announcement_id = id, admin_id = admin.id, "Announcement deleted");

    Ok(StatusCode::NO_CONTENT)
}
