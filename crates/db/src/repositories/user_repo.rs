//! Repository for the `users` table.

use sqlx::PgPool;
use uuid::Uuid;

use skillswap_core::types::DbId;

use crate::models::user::{CreateUser, UpdateProfile, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, auth_user_id, name, email, bio, location, role, status, \
                       karma_points, trust_score, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user profile, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (auth_user_id, name, email, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(input.auth_user_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by their external auth identity.
    pub async fn find_by_auth_user_id(
        pool: &PgPool,
        auth_user_id: Uuid,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE auth_user_id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(auth_user_id)
            .fetch_optional(pool)
            .await
    }

    /// List all users, most recently created first (moderation view).
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY created_at DESC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Leaderboard ordering: karma first, trust as the tie-breaker.
    pub async fn leaderboard(pool: &PgPool, limit: i64) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users
             ORDER BY karma_points DESC, trust_score DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Apply a self-service profile patch. Only non-`None` fields are
    /// written; reputation and account status are never touched here.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                name = COALESCE($2, name),
                bio = COALESCE($3, bio),
                location = COALESCE($4, location),
                role = COALESCE($5, role),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.bio)
            .bind(&input.location)
            .bind(&input.role)
            .fetch_optional(pool)
            .await
    }

    /// Moderation overwrite of the account status. Any status is reachable
    /// from any status; repeating the same target is a no-op.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Atomically add to a user's karma counter.
    ///
    /// The increment happens in the database, so concurrent feedback for
    /// the same user cannot lose an update. Returns `true` if a row was
    /// updated.
    pub async fn add_karma(pool: &PgPool, id: DbId, delta: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET
                karma_points = GREATEST(0, karma_points + $2),
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(delta)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Overwrite a user's trust score (clamped non-negative).
    pub async fn set_trust(pool: &PgPool, id: DbId, value: i64) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET
                trust_score = GREATEST(0, $2),
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(value)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Fetch only the karma counter, to probe row existence cheaply.
    pub async fn fetch_karma(pool: &PgPool, id: DbId) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar("SELECT karma_points FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a user row ("reset profile"). Does not cascade: the
    /// user's cards, sessions, feedback, and reports stay behind as
    /// orphans, by policy.
    ///
    /// Returns `true` if the row was deleted.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
