//! Repository for the `sessions` table.

use sqlx::PgPool;

use skillswap_core::session::STATUS_PENDING;
use skillswap_core::types::DbId;

use crate::models::session::{CreateSession, Session};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, skill_card_id, learner_id, helper_id, status, \
                       session_time, meeting_link, notes, created_at";

/// Provides CRUD operations for sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session request. Sessions always start `pending`; the
    /// handler resolves `helper_id` from the card and generates the
    /// meeting link before calling this.
    pub async fn create(
        pool: &PgPool,
        learner_id: DbId,
        helper_id: DbId,
        meeting_link: &str,
        input: &CreateSession,
    ) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions
                (skill_card_id, learner_id, helper_id, status,
                 session_time, meeting_link, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.skill_card_id)
            .bind(learner_id)
            .bind(helper_id)
            .bind(STATUS_PENDING)
            .bind(input.session_time)
            .bind(meeting_link)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a session by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE id = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All sessions where the user appears on either side, soonest first.
    pub async fn list_for_participant(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Session>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sessions
             WHERE learner_id = $1 OR helper_id = $1
             ORDER BY session_time ASC"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// All sessions, newest first (moderation view).
    pub async fn list(pool: &PgPool) -> Result<Vec<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions ORDER BY created_at DESC");
        sqlx::query_as::<_, Session>(&query).fetch_all(pool).await
    }

    /// Write the status produced by a validated lifecycle transition.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "UPDATE sessions SET status = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a session (moderation). Feedback and reports that
    /// reference it stay behind as orphans, by policy.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a session only if `user_id` participates in it.
    /// Returns `true` if a row was deleted.
    pub async fn hard_delete_for_participant(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM sessions WHERE id = $1 AND (learner_id = $2 OR helper_id = $2)",
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Wipe every session the user participates in ("clear history").
    /// Returns the number of rows removed.
    pub async fn delete_for_participant(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE learner_id = $1 OR helper_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
