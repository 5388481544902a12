//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use skillswap_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use uuid::Uuid;

/// Full user row from the `users` table.
///
/// `karma_points` and `trust_score` are owned by the feedback processor;
/// `status` is owned by moderation. Profile updates never touch them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    /// Identity issued by the external auth provider, 1:1 with this row.
    pub auth_user_id: Uuid,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    /// `learner`, `helper`, `both`, or the privileged `admin`.
    pub role: String,
    /// `active`, `suspended`, or `banned`.
    pub status: String,
    pub karma_points: i64,
    pub trust_score: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for auto-provisioning a profile on first authenticated access.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub auth_user_id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// DTO for self-service profile updates. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    /// One of the self-assignable roles; validated before the write.
    pub role: Option<String>,
}
