//! Repository for the `skill_cards` table.

use sqlx::PgPool;

use skillswap_core::skill_card::{STATUS_APPROVED, STATUS_LEGACY_ACTIVE, STATUS_PENDING};
use skillswap_core::types::DbId;

use crate::models::skill_card::{CreateSkillCard, SkillCard};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, skill_offered, skill_needed, is_paid, price, \
                       language, availability, location, status, created_at";

/// Provides CRUD operations for skill cards.
pub struct SkillCardRepo;

impl SkillCardRepo {
    /// Insert a new card for `user_id`. New cards always enter the
    /// moderation queue as `pending`; the pricing fields are expected to
    /// have passed `skill_card::validate_pricing` already.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateSkillCard,
    ) -> Result<SkillCard, sqlx::Error> {
        let query = format!(
            "INSERT INTO skill_cards
                (user_id, skill_offered, skill_needed, is_paid, price,
                 language, availability, location, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SkillCard>(&query)
            .bind(user_id)
            .bind(&input.skill_offered)
            .bind(&input.skill_needed)
            .bind(input.is_paid)
            .bind(input.price)
            .bind(&input.language)
            .bind(&input.availability)
            .bind(&input.location)
            .bind(STATUS_PENDING)
            .fetch_one(pool)
            .await
    }

    /// Find a card by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SkillCard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skill_cards WHERE id = $1");
        sqlx::query_as::<_, SkillCard>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Discovery listing: published cards only, newest first. Rows written
    /// before the unified lifecycle carry the legacy `active` value and
    /// still count as published.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<SkillCard>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skill_cards
             WHERE status IN ($1, $2)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, SkillCard>(&query)
            .bind(STATUS_APPROVED)
            .bind(STATUS_LEGACY_ACTIVE)
            .fetch_all(pool)
            .await
    }

    /// All cards belonging to one owner, regardless of status.
    pub async fn list_for_owner(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<SkillCard>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skill_cards
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, SkillCard>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// All cards, newest first (moderation view).
    pub async fn list(pool: &PgPool) -> Result<Vec<SkillCard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skill_cards ORDER BY created_at DESC");
        sqlx::query_as::<_, SkillCard>(&query).fetch_all(pool).await
    }

    /// Moderation overwrite of the card status.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<SkillCard>, sqlx::Error> {
        let query = format!(
            "UPDATE skill_cards SET status = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SkillCard>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a card (moderation). Returns `true` if a row was
    /// deleted.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skill_cards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a card only if `user_id` owns it. Returns `true` if a
    /// row was deleted.
    pub async fn hard_delete_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skill_cards WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
