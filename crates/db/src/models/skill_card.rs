//! Skill card entity model and DTOs.

use serde::{Deserialize, Serialize};
use skillswap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full skill card row from the `skill_cards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SkillCard {
    pub id: DbId,
    /// Owning user.
    pub user_id: DbId,
    pub skill_offered: String,
    /// Barter counterpart; always null on paid cards.
    pub skill_needed: Option<String>,
    pub is_paid: bool,
    /// Stored integer price; present iff `is_paid`. Never charged.
    pub price: Option<i64>,
    pub language: String,
    pub availability: String,
    pub location: String,
    /// `pending`, `approved`, or `rejected` (legacy `active` rows are
    /// normalized to `approved` on read).
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for creating a skill card. The owner comes from the authenticated
/// caller and new cards always enter the moderation queue as `pending`.
#[derive(Debug, Deserialize)]
pub struct CreateSkillCard {
    pub skill_offered: String,
    pub skill_needed: Option<String>,
    pub is_paid: bool,
    pub price: Option<i64>,
    pub language: String,
    pub availability: String,
    pub location: String,
}
