//! Platform announcement model and DTOs (moderation broadcast).

use serde::{Deserialize, Serialize};
use skillswap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full announcement row from the `announcements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Announcement {
    pub id: DbId,
    pub title: String,
    pub message: String,
    pub created_by: DbId,
    pub created_at: Timestamp,
}

/// DTO for creating an announcement. The author is the acting admin.
#[derive(Debug, Deserialize)]
pub struct CreateAnnouncement {
    pub title: String,
    pub message: String,
}
