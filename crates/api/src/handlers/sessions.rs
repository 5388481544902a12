//! Handlers for session requests and lifecycle transitions.
//!
//! Transition guards live in `skillswap_core::session::apply_action`; these
//! handlers only resolve which side of the session the caller is on (from
//! the row, never from a client claim) and persist the resulting status.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use skillswap_core::error::CoreError;
use skillswap_core::meeting::generate_meeting_link;
use skillswap_core::session::{self, SessionAction, SessionActor};
use skillswap_core::types::DbId;
use skillswap_db::models::session::{CreateSession, Session};
use skillswap_db::repositories::{SessionRepo, SkillCardRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::users::resolve_profile;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /sessions
// ---------------------------------------------------------------------------

/// Request a session against a skill card.
///
/// The caller becomes the learner; the helper is the card owner at request
/// time. The meeting link is generated here, once, and never changes.
pub async fn create_session(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateSession>,
) -> AppResult<impl IntoResponse> {
    let me = resolve_profile(&state, &auth).await?;

    let card = SkillCardRepo::find_by_id(&state.pool, input.skill_card_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SkillCard",
            id: input.skill_card_id,
        }))?;

    if card.user_id == me.id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You cannot book a session on your own skill card".into(),
        )));
    }

    session::validate_session_time(input.session_time, Utc::now())?;

    let meeting_link = generate_meeting_link();
    let created =
        SessionRepo::create(&state.pool, me.id, card.user_id, &meeting_link, &input).await?;

    tracing::info!(
        session_id = created.id,
        learner_id = me.id,
        helper_id = card.user_id,
        "Session requested",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /sessions
// ---------------------------------------------------------------------------

/// The caller's sessions on either side, soonest first.
pub async fn list_my_sessions(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let me = resolve_profile(&state, &auth).await?;
    let sessions = SessionRepo::list_for_participant(&state.pool, me.id).await?;
    Ok(Json(DataResponse { data: sessions }))
}

// ---------------------------------------------------------------------------
// POST /sessions/{id}/confirm | decline | cancel | complete
// ---------------------------------------------------------------------------

pub async fn confirm_session(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    transition(auth, state, id, SessionAction::Confirm).await
}

pub async fn decline_session(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    transition(auth, state, id, SessionAction::Decline).await
}

pub async fn cancel_session(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    transition(auth, state, id, SessionAction::Cancel).await
}

pub async fn complete_session(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    transition(auth, state, id, SessionAction::Complete).await
}

/// Shared transition path: load the row, resolve the caller's side, run the
/// state machine, persist the new status.
async fn transition(
    auth: AuthUser,
    state: AppState,
    id: DbId,
    action: SessionAction,
) -> AppResult<Json<DataResponse<Session>>> {
    let me = resolve_profile(&state, &auth).await?;

    let current = SessionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id,
        }))?;

    let actor = if current.learner_id == me.id {
        SessionActor::Learner
    } else if current.helper_id == me.id {
        SessionActor::Helper
    } else {
        return Err(AppError::Core(CoreError::Forbidden(
            "You are not a participant in this session".into(),
        )));
    };

    let new_status = session::apply_action(
        &current.status,
        actor,
        action,
        Utc::now(),
        current.session_time,
    )?;

    let updated = SessionRepo::update_status(&state.pool, id, new_status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id,
        }))?;

    tracing::info!(
        session_id = id,
        user_id = me.id,
        from = %current.status,
        to = %new_status,
        "Session transitioned",
    );

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /sessions/{id}
// ---------------------------------------------------------------------------

/// Hard-delete one of the caller's sessions, in any status.
///
/// Feedback and reports referencing the session remain; reputation already
/// derived from it is not recomputed.
pub async fn delete_session(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let me = resolve_profile(&state, &auth).await?;
    let deleted = SessionRepo::hard_delete_for_participant(&state.pool, id, me.id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id,
        }));
    }

    tracing::info!(session_id = id, user_id = me.id, "Session deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// DELETE /sessions
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize)]
pub struct ClearHistoryResult {
    pub deleted: u64,
}

/// Wipe the caller's entire session history.
pub async fn clear_history(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let me = resolve_profile(&state, &auth).await?;
    let deleted = SessionRepo::delete_for_participant(&state.pool, me.id).await?;

    tracing::info!(user_id = me.id, deleted, "Session history cleared");

    Ok(Json(DataResponse {
        data: ClearHistoryResult { deleted },
    }))
}
