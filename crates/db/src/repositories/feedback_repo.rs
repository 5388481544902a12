//! Repository for the `feedback` table.

use sqlx::PgPool;

use skillswap_core::types::DbId;

use crate::models::feedback::Feedback;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, session_id, from_user_id, to_user_id, rating, comment, created_at";

/// Provides operations for the append-only feedback log.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Append a feedback row, returning it.
    pub async fn create(
        pool: &PgPool,
        session_id: DbId,
        from_user_id: DbId,
        to_user_id: DbId,
        rating: i32,
        comment: Option<&str>,
    ) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (session_id, from_user_id, to_user_id, rating, comment)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(session_id)
            .bind(from_user_id)
            .bind(to_user_id)
            .bind(rating)
            .bind(comment)
            .fetch_one(pool)
            .await
    }

    /// All ratings ever received by a user, oldest first. Input to the
    /// trust computation.
    pub async fn ratings_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<i32>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT rating FROM feedback WHERE to_user_id = $1 ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// All feedback received by a user, newest first (profile view).
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feedback
             WHERE to_user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
