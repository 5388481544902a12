//! Session entity model and DTOs.

use serde::{Deserialize, Serialize};
use skillswap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full session row from the `sessions` table.
///
/// `helper_id` is the card owner captured at request time; a later
/// ownership change of the card does not retroactively move the session.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Session {
    pub id: DbId,
    pub skill_card_id: DbId,
    pub learner_id: DbId,
    pub helper_id: DbId,
    /// One of the five lifecycle statuses; transitions go through
    /// `skillswap_core::session::apply_action`.
    pub status: String,
    pub session_time: Timestamp,
    /// Generated once at creation, unique, immutable.
    pub meeting_link: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for a learner's session request. Learner identity, helper identity
/// (card owner), and the meeting link are supplied by the handler.
#[derive(Debug, Deserialize)]
pub struct CreateSession {
    pub skill_card_id: DbId,
    pub session_time: Timestamp,
    pub notes: Option<String>,
}
