//! Handlers for profile access, profile updates, and the leaderboard.
//!
//! Profiles are provisioned lazily: the first authenticated request from a
//! provider identity with no matching row creates one, seeded from the
//! token's email. There is no signup endpoint.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use skillswap_core::error::CoreError;
use skillswap_core::roles::{self, ROLE_LEARNER};
use skillswap_core::types::DbId;
use skillswap_db::models::user::{CreateUser, UpdateProfile, User};
use skillswap_db::repositories::{FeedbackRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default and maximum leaderboard sizes.
const LEADERBOARD_DEFAULT_LIMIT: i64 = 10;
const LEADERBOARD_MAX_LIMIT: i64 = 100;

/// Resolve the caller's profile row, creating it on first access.
///
/// The fresh profile takes its display name from the email local part and
/// starts as a `learner`; the user adjusts both through `PUT /users/me`.
pub(crate) async fn resolve_profile(state: &AppState, auth: &AuthUser) -> AppResult<User> {
    if let Some(user) = UserRepo::find_by_auth_user_id(&state.pool, auth.auth_user_id).await? {
        return Ok(user);
    }

    let name = auth
        .email
        .split('@')
        .next()
        .unwrap_or(auth.email.as_str())
        .to_string();

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            auth_user_id: auth.auth_user_id,
            name,
            email: auth.email.clone(),
            role: ROLE_LEARNER.to_string(),
        },
    )
    .await?;

    tracing::info!(
        user_id = user.id,
        auth_user_id = %auth.auth_user_id,
        "Provisioned profile on first access",
    );

    Ok(user)
}

// ---------------------------------------------------------------------------
// GET /users/me
// ---------------------------------------------------------------------------

/// Return the caller's profile, provisioning it if this is the first visit.
pub async fn get_me(auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let user = resolve_profile(&state, &auth).await?;
    Ok(Json(DataResponse { data: user }))
}

// ---------------------------------------------------------------------------
// PUT /users/me
// ---------------------------------------------------------------------------

/// Update the caller's own profile fields.
///
/// Reputation, account status, and the `admin` role are not reachable
/// through this endpoint.
pub async fn update_me(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref role) = input.role {
        roles::validate_self_assignable_role(role)?;
    }

    let me = resolve_profile(&state, &auth).await?;
    let updated = UserRepo::update_profile(&state.pool, me.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: me.id,
        }))?;

    tracing::info!(user_id = updated.id, "Profile updated");

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// GET /users/{id}
// ---------------------------------------------------------------------------

/// View another user's profile.
pub async fn get_user(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id,
        }))?;
    Ok(Json(DataResponse { data: user }))
}

// ---------------------------------------------------------------------------
// GET /users/{id}/feedback
// ---------------------------------------------------------------------------

/// Feedback a user has received, newest first.
pub async fn user_feedback(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // 404 for a missing user, not an empty list.
    UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id,
        }))?;

    let feedback = FeedbackRepo::list_for_user(&state.pool, id).await?;
    Ok(Json(DataResponse { data: feedback }))
}

// ---------------------------------------------------------------------------
// GET /leaderboard
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LeaderboardParams {
    pub limit: Option<i64>,
}

/// Top users by karma, trust as the tie-breaker.
pub async fn leaderboard(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params
        .limit
        .unwrap_or(LEADERBOARD_DEFAULT_LIMIT)
        .clamp(1, LEADERBOARD_MAX_LIMIT);

    let users = UserRepo::leaderboard(&state.pool, limit).await?;
    Ok(Json(DataResponse { data: users }))
}
