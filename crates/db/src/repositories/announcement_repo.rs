//! Repository for the `announcements` table.

use sqlx::PgPool;

use skillswap_core::types::DbId;

use crate::models::announcement::{Announcement, CreateAnnouncement};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, message, created_by, created_at";

/// Provides operations for platform announcements.
pub struct AnnouncementRepo;

impl AnnouncementRepo {
    /// Insert an announcement authored by `created_by`.
    pub async fn create(
        pool: &PgPool,
        created_by: DbId,
        input: &CreateAnnouncement,
    ) -> Result<Announcement, sqlx::Error> {
        let query = format!(
            "INSERT INTO announcements (title, message, created_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(&input.title)
            .bind(&input.message)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// All announcements, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM announcements ORDER BY created_at DESC");
        sqlx::query_as::<_, Announcement>(&query)
            .fetch_all(pool)
            .await
    }

    /// Hard-delete an announcement. Returns `true` if a row was deleted.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
