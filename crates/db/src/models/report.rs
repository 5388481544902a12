//! Abuse report entity model and DTOs.

use serde::{Deserialize, Serialize};
use skillswap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full report row from the `reports` table. Append-only; consumed as a
/// count by the trust computation and listed verbatim for moderation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: DbId,
    pub session_id: DbId,
    pub from_user_id: DbId,
    /// One of the fixed reason values in `skillswap_core::report`.
    pub reason: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for filing a report. The reporter comes from the authenticated
/// caller.
#[derive(Debug, Deserialize)]
pub struct CreateReport {
    pub session_id: DbId,
    pub reason: String,
    pub description: Option<String>,
}
