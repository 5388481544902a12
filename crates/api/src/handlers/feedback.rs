//! Handler for feedback submission.
//!
//! The three-effect orchestration (insert, karma, trust) lives in
//! `skillswap_core::feedback::submit_feedback`; this handler adapts the
//! request to it and surfaces partial outcomes without masking them as
//! failures.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use skillswap_core::feedback::{submit_feedback, NewFeedback, ReputationUpdate};
use skillswap_db::models::feedback::CreateFeedback;
use skillswap_db::store::PgStore;

use crate::error::AppResult;
use crate::handlers::users::resolve_profile;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /feedback
// ---------------------------------------------------------------------------

/// Record feedback for a session and update the ratee's reputation.
///
/// The response carries the reputation outcome alongside the feedback id:
/// a missing ratee or a post-insert storage failure still returns 201, with
/// the degradation visible in `reputation.status`.
pub async fn post_feedback(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateFeedback>,
) -> AppResult<impl IntoResponse> {
    let me = resolve_profile(&state, &auth).await?;

    let store = PgStore::new(state.pool.clone());
    let outcome = submit_feedback(
        &store,
        NewFeedback {
            session_id: input.session_id,
            from_user_id: me.id,
            to_user_id: input.to_user_id,
            rating: input.rating,
            comment: input.comment,
        },
    )
    .await?;

    match &outcome.reputation {
        ReputationUpdate::Applied {
            karma_added,
            trust_score,
        } => {
            tracing::info!(
                feedback_id = outcome.feedback_id,
                to_user_id = input.to_user_id,
                karma_added,
                trust_score,
                "Feedback recorded",
            );
        }
        ReputationUpdate::SkippedMissingUser => {
            tracing::warn!(
                feedback_id = outcome.feedback_id,
                to_user_id = input.to_user_id,
                "Feedback recorded for a missing user; reputation skipped",
            );
        }
        ReputationUpdate::Failed { reason } => {
            tracing::error!(
                feedback_id = outcome.feedback_id,
                to_user_id = input.to_user_id,
                error = %reason,
                "Feedback recorded but reputation update failed",
            );
        }
    }

    Ok((StatusCode::CREATED, Json(DataResponse { data: outcome })))
}
