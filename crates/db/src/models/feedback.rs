//! Feedback entity model and DTOs.

use serde::{Deserialize, Serialize};
use skillswap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full feedback row from the `feedback` table. Append-only: never
/// updated or deleted through the API.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    pub session_id: DbId,
    pub from_user_id: DbId,
    pub to_user_id: DbId,
    /// 1-5 inclusive.
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for submitting feedback. The rater comes from the authenticated
/// caller.
#[derive(Debug, Deserialize)]
pub struct CreateFeedback {
    pub session_id: DbId,
    pub to_user_id: DbId,
    pub rating: i32,
    pub comment: Option<String>,
}
