//! Repository for the `reports` table.

use sqlx::PgPool;

use skillswap_core::types::DbId;

use crate::models::report::Report;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, session_id, from_user_id, reason, description, created_at";

/// Provides operations for the append-only report log.
pub struct ReportRepo;

impl ReportRepo {
    /// Append a report row, returning it. The reason is expected to have
    /// passed `report::validate_reason` already.
    pub async fn create(
        pool: &PgPool,
        session_id: DbId,
        from_user_id: DbId,
        reason: &str,
        description: Option<&str>,
    ) -> Result<Report, sqlx::Error> {
        let query = format!(
            "INSERT INTO reports (session_id, from_user_id, reason, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(session_id)
            .bind(from_user_id)
            .bind(reason)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// Number of reports filed against one session. The trust computation
    /// counts these, never reports from the ratee's wider history.
    pub async fn count_for_session(pool: &PgPool, session_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM reports WHERE session_id = $1")
            .bind(session_id)
            .fetch_one(pool)
            .await
    }

    /// All reports, newest first (moderation view).
    pub async fn list(pool: &PgPool) -> Result<Vec<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports ORDER BY created_at DESC");
        sqlx::query_as::<_, Report>(&query).fetch_all(pool).await
    }
}
