//! PostgreSQL adapter for the storage ports in `skillswap-core`.

use async_trait::async_trait;
use sqlx::PgPool;

use skillswap_core::error::CoreError;
use skillswap_core::feedback::NewFeedback;
use skillswap_core::reputation::{FeedbackStore, ReportRegistry, ReputationStore};
use skillswap_core::types::DbId;

use crate::repositories::{FeedbackRepo, ReportRepo, UserRepo};

/// Implements the reputation, feedback, and report ports over a shared
/// connection pool. Cheap to clone; handlers build one per request.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn storage_err(err: sqlx::Error) -> CoreError {
    CoreError::Storage(err.to_string())
}

#[async_trait]
impl ReputationStore for PgStore {
    async fn fetch_karma(&self, user_id: DbId) -> Result<Option<i64>, CoreError> {
        UserRepo::fetch_karma(&self.pool, user_id)
            .await
            .map_err(storage_err)
    }

    async fn add_karma(&self, user_id: DbId, delta: i64) -> Result<(), CoreError> {
        UserRepo::add_karma(&self.pool, user_id, delta)
            .await
            .map_err(storage_err)?;
        Ok(())
    }

    async fn set_trust(&self, user_id: DbId, value: i64) -> Result<(), CoreError> {
        UserRepo::set_trust(&self.pool, user_id, value)
            .await
            .map_err(storage_err)
    }
}

#[async_trait]
impl FeedbackStore for PgStore {
    async fn insert(&self, feedback: &NewFeedback) -> Result<DbId, CoreError> {
        let row = FeedbackRepo::create(
            &self.pool,
            feedback.session_id,
            feedback.from_user_id,
            feedback.to_user_id,
            feedback.rating,
            feedback.comment.as_deref(),
        )
        .await
        .map_err(storage_err)?;
        Ok(row.id)
    }

    async fn ratings_for_user(&self, user_id: DbId) -> Result<Vec<i32>, CoreError> {
        FeedbackRepo::ratings_for_user(&self.pool, user_id)
            .await
            .map_err(storage_err)
    }
}

#[async_trait]
impl ReportRegistry for PgStore {
    async fn count_for_session(&self, session_id: DbId) -> Result<i64, CoreError> {
        ReportRepo::count_for_session(&self.pool, session_id)
            .await
            .map_err(storage_err)
    }
}
