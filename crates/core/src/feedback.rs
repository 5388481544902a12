//! The feedback processor.
//!
//! Recording feedback for a completed session has three effects, executed
//! in order and deliberately not wrapped in a transaction:
//!
//! 1. insert the feedback row -- a failure here aborts the whole operation;
//! 2. add the fixed karma bonus to the rated user -- if that user's row is
//!    missing, the feedback still counts and the operation reports a
//!    degraded success instead of failing;
//! 3. recompute the rated user's trust score from their full rating
//!    history minus the report count of this one session.
//!
//! A storage failure in step 2 or 3 leaves the already-durable feedback
//! row in place and is reported as a partial outcome, never rolled back.
//! The karma bonus is applied as an atomic in-store increment, so two
//! raters hitting the same user concurrently cannot lose an increment;
//! the trust overwrite stays last-writer-wins but converges because it is
//! recomputed from the full history each time.

use serde::Serialize;

use crate::error::CoreError;
use crate::reputation::{
    compute_trust_score, FeedbackStore, ReportRegistry, ReputationStore, KARMA_PER_FEEDBACK,
};
use crate::types::DbId;

/// Minimum accepted rating.
pub const MIN_RATING: i32 = 1;

/// Maximum accepted rating.
pub const MAX_RATING: i32 = 5;

/// A feedback submission. The rater supplies the ratee; participant
/// membership is the caller's responsibility, not re-verified here.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub session_id: DbId,
    pub from_user_id: DbId,
    pub to_user_id: DbId,
    pub rating: i32,
    pub comment: Option<String>,
}

/// What happened to the ratee's reputation, separately from the feedback
/// row itself. "Recorded but stats not updated" is a real outcome a caller
/// must be able to tell apart from full success.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReputationUpdate {
    /// Karma and trust were both written.
    Applied { karma_added: i64, trust_score: i64 },
    /// The ratee's user row no longer exists; nothing was mutated.
    SkippedMissingUser,
    /// A storage failure after the feedback row was durably written.
    Failed { reason: String },
}

/// Result of a successful `submit_feedback` call.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackOutcome {
    pub feedback_id: DbId,
    pub reputation: ReputationUpdate,
}

/// Validate that a rating lies in the accepted range.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

/// Record feedback and update the ratee's reputation.
///
/// Returns `Err` only when validation fails or the insert itself fails;
/// every later problem is carried inside [`FeedbackOutcome::reputation`].
pub async fn submit_feedback<S>(
    store: &S,
    feedback: NewFeedback,
) -> Result<FeedbackOutcome, CoreError>
where
    S: ReputationStore + FeedbackStore + ReportRegistry + Sync,
{
    validate_rating(feedback.rating)?;

    let feedback_id = FeedbackStore::insert(store, &feedback).await?;

    let reputation = match update_reputation(store, &feedback).await {
        Ok(update) => update,
        Err(err) => ReputationUpdate::Failed {
            reason: err.to_string(),
        },
    };

    Ok(FeedbackOutcome {
        feedback_id,
        reputation,
    })
}

/// Effects 2 and 3: karma bonus, then trust recomputation.
async fn update_reputation<S>(
    store: &S,
    feedback: &NewFeedback,
) -> Result<ReputationUpdate, CoreError>
where
    S: ReputationStore + FeedbackStore + ReportRegistry + Sync,
{
    let Some(_karma) = store.fetch_karma(feedback.to_user_id).await? else {
        return Ok(ReputationUpdate::SkippedMissingUser);
    };

    store
        .add_karma(feedback.to_user_id, KARMA_PER_FEEDBACK)
        .await?;

    let ratings = store.ratings_for_user(feedback.to_user_id).await?;
    let reports = store.count_for_session(feedback.session_id).await?;
    let trust_score = compute_trust_score(&ratings, reports);
    store.set_trust(feedback.to_user_id, trust_score).await?;

    Ok(ReputationUpdate::Applied {
        karma_added: KARMA_PER_FEEDBACK,
        trust_score,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use super::*;

    /// In-memory stand-in for the storage collaborator, with switchable
    /// failure injection per operation.
    #[derive(Default)]
    struct MemStore {
        users: Mutex<HashMap<DbId, (i64, i64)>>, // user_id -> (karma, trust)
        feedback: Mutex<Vec<NewFeedback>>,
        reports: Mutex<HashMap<DbId, i64>>, // session_id -> count
        fail_insert: bool,
        fail_set_trust: bool,
    }

    impl MemStore {
        fn with_user(self, user_id: DbId, karma: i64, trust: i64) -> Self {
            self.users.lock().unwrap().insert(user_id, (karma, trust));
            self
        }

        fn with_reports(self, session_id: DbId, count: i64) -> Self {
            self.reports.lock().unwrap().insert(session_id, count);
            self
        }

        fn karma_of(&self, user_id: DbId) -> Option<i64> {
            self.users.lock().unwrap().get(&user_id).map(|(k, _)| *k)
        }

        fn trust_of(&self, user_id: DbId) -> Option<i64> {
            self.users.lock().unwrap().get(&user_id).map(|(_, t)| *t)
        }

        fn feedback_count(&self) -> usize {
            self.feedback.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ReputationStore for MemStore {
        async fn fetch_karma(&self, user_id: DbId) -> Result<Option<i64>, CoreError> {
            Ok(self.karma_of(user_id))
        }

        async fn add_karma(&self, user_id: DbId, delta: i64) -> Result<(), CoreError> {
            let mut users = self.users.lock().unwrap();
            if let Some((karma, _)) = users.get_mut(&user_id) {
                *karma += delta;
            }
            Ok(())
        }

        async fn set_trust(&self, user_id: DbId, value: i64) -> Result<(), CoreError> {
            if self.fail_set_trust {
                return Err(CoreError::Storage("connection reset".to_string()));
            }
            let mut users = self.users.lock().unwrap();
            if let Some((_, trust)) = users.get_mut(&user_id) {
                *trust = value;
            }
            Ok(())
        }
    }

    #[async_trait]
    impl FeedbackStore for MemStore {
        async fn insert(&self, feedback: &NewFeedback) -> Result<DbId, CoreError> {
            if self.fail_insert {
                return Err(CoreError::Storage("insert refused".to_string()));
            }
            let mut rows = self.feedback.lock().unwrap();
            rows.push(feedback.clone());
            Ok(rows.len() as DbId)
        }

        async fn ratings_for_user(&self, user_id: DbId) -> Result<Vec<i32>, CoreError> {
            Ok(self
                .feedback
                .lock()
                .unwrap()
                .iter()
                .filter(|f| f.to_user_id == user_id)
                .map(|f| f.rating)
                .collect())
        }
    }

    #[async_trait]
    impl ReportRegistry for MemStore {
        async fn count_for_session(&self, session_id: DbId) -> Result<i64, CoreError> {
            Ok(*self.reports.lock().unwrap().get(&session_id).unwrap_or(&0))
        }
    }

    fn rating_for(to_user_id: DbId, session_id: DbId, rating: i32) -> NewFeedback {
        NewFeedback {
            session_id,
            from_user_id: 99,
            to_user_id,
            rating,
            comment: None,
        }
    }

    #[test]
    fn test_rating_bounds() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
        assert!(validate_rating(-3).is_err());
    }

    #[tokio::test]
    async fn test_out_of_range_rating_leaves_no_trace() {
        let store = MemStore::default().with_user(1, 0, 0);

        let result = submit_feedback(&store, rating_for(1, 10, 6)).await;

        assert_matches!(result, Err(CoreError::Validation(_)));
        assert_eq!(store.feedback_count(), 0);
        assert_eq!(store.karma_of(1), Some(0));
        assert_eq!(store.trust_of(1), Some(0));
    }

    #[tokio::test]
    async fn test_first_five_star_feedback() {
        let store = MemStore::default().with_user(1, 0, 0);

        let outcome = submit_feedback(&store, rating_for(1, 10, 5)).await.unwrap();

        // Fixed +5 karma regardless of rating; trust = 5*1 - 0 reports.
        assert_eq!(
            outcome.reputation,
            ReputationUpdate::Applied {
                karma_added: 5,
                trust_score: 5
            }
        );
        assert_eq!(store.karma_of(1), Some(5));
        assert_eq!(store.trust_of(1), Some(5));
    }

    #[tokio::test]
    async fn test_karma_bonus_independent_of_rating_value() {
        let store = MemStore::default().with_user(1, 20, 0);

        submit_feedback(&store, rating_for(1, 10, 1)).await.unwrap();

        assert_eq!(store.karma_of(1), Some(25));
    }

    #[tokio::test]
    async fn test_trust_uses_full_history_but_reports_of_rated_session_only() {
        let store = MemStore::default()
            .with_user(1, 0, 0)
            .with_reports(10, 2) // reports against the rated session
            .with_reports(11, 50); // reports elsewhere must not count

        submit_feedback(&store, rating_for(1, 10, 4)).await.unwrap();
        let outcome = submit_feedback(&store, rating_for(1, 10, 4)).await.unwrap();

        // History [4, 4]: avg 4.0 * count 2 - 2 reports = 6.
        assert_eq!(
            outcome.reputation,
            ReputationUpdate::Applied {
                karma_added: 5,
                trust_score: 6
            }
        );
        assert_eq!(store.karma_of(1), Some(10));
    }

    #[tokio::test]
    async fn test_missing_ratee_is_degraded_success() {
        let store = MemStore::default();

        let outcome = submit_feedback(&store, rating_for(404, 10, 5)).await.unwrap();

        assert_eq!(outcome.reputation, ReputationUpdate::SkippedMissingUser);
        // The feedback row itself is durable.
        assert_eq!(store.feedback_count(), 1);
    }

    #[tokio::test]
    async fn test_insert_failure_aborts_everything() {
        let store = MemStore {
            fail_insert: true,
            ..MemStore::default()
        }
        .with_user(1, 0, 0);

        let result = submit_feedback(&store, rating_for(1, 10, 5)).await;

        assert_matches!(result, Err(CoreError::Storage(_)));
        assert_eq!(store.karma_of(1), Some(0));
        assert_eq!(store.trust_of(1), Some(0));
    }

    #[tokio::test]
    async fn test_trust_write_failure_is_partial_not_rollback() {
        let store = MemStore {
            fail_set_trust: true,
            ..MemStore::default()
        }
        .with_user(1, 0, 0);

        let outcome = submit_feedback(&store, rating_for(1, 10, 5)).await.unwrap();

        assert_matches!(outcome.reputation, ReputationUpdate::Failed { .. });
        // Feedback row and the already-applied karma bonus both persist.
        assert_eq!(store.feedback_count(), 1);
        assert_eq!(store.karma_of(1), Some(5));
        assert_eq!(store.trust_of(1), Some(0));
    }

    #[tokio::test]
    async fn test_sequential_feedback_accumulates_karma() {
        let store = MemStore::default().with_user(1, 0, 0);

        submit_feedback(&store, rating_for(1, 10, 3)).await.unwrap();
        submit_feedback(&store, rating_for(1, 11, 5)).await.unwrap();

        // Increments are applied in-store, not read-modify-write, so both
        // bonuses land.
        assert_eq!(store.karma_of(1), Some(10));
    }

    #[tokio::test]
    async fn test_concurrent_feedback_loses_no_karma_increment() {
        let store = MemStore::default().with_user(1, 0, 0);

        // Two raters hit the same user at once. Because the bonus is an
        // in-store increment rather than fetch-add-write, neither update
        // can clobber the other regardless of interleaving.
        let (a, b) = tokio::join!(
            submit_feedback(&store, rating_for(1, 10, 5)),
            submit_feedback(&store, rating_for(1, 11, 4)),
        );
        let a = a.unwrap();
        let b = b.unwrap();

        assert_matches!(a.reputation, ReputationUpdate::Applied { .. });
        assert_matches!(b.reputation, ReputationUpdate::Applied { .. });
        assert_eq!(store.feedback_count(), 2);
        assert_eq!(store.karma_of(1), Some(10));
    }
}
