//! Reputation values and the storage ports they live behind.
//!
//! Two figures are kept per user. `karma_points` is a cumulative reward
//! counter: every piece of feedback received adds a fixed bonus. The
//! `trust_score` is recomputed from scratch on every feedback event:
//!
//! ```text
//! trust = max(0, round(avg_rating * rating_count - reports_for_session))
//! ```
//!
//! where `avg_rating` and `rating_count` are taken over every rating the
//! user has ever received, and `reports_for_session` counts reports
//! against the session being rated only, not all reports against the
//! user. The multiplicative term folds "how well rated" and "how often
//! rated" into one figure; that is the published scoring behaviour and is
//! kept as-is.
//!
//! The ports below are what the Feedback Processor is written against;
//! `skillswap-db` implements them over PostgreSQL and the processor tests
//! use an in-memory double.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::DbId;

/// Fixed karma bonus per feedback received, independent of the rating value.
pub const KARMA_PER_FEEDBACK: i64 = 5;

/// Recompute a user's trust score from their full rating history and the
/// report count of the rated session.
///
/// Returns 0 for an empty history (nothing to score yet). The result is
/// clamped at zero; reports can erase trust but never drive it negative.
pub fn compute_trust_score(ratings: &[i32], reports_for_session: i64) -> i64 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
    let count = ratings.len() as f64;
    let avg = sum as f64 / count;
    let raw = (avg * count - reports_for_session as f64).round() as i64;
    raw.max(0)
}

/// Read/write access to a user's reputation fields.
///
/// A write is visible to subsequent reads immediately; there is no caching
/// layer. Failures surface as [`CoreError::Storage`] and are never retried.
#[async_trait]
pub trait ReputationStore {
    /// Fetch the user's current karma, or `None` if no such user row exists.
    async fn fetch_karma(&self, user_id: DbId) -> Result<Option<i64>, CoreError>;

    /// Atomically add `delta` to the user's karma.
    async fn add_karma(&self, user_id: DbId, delta: i64) -> Result<(), CoreError>;

    /// Overwrite the user's trust score. The value has already been clamped
    /// non-negative by [`compute_trust_score`].
    async fn set_trust(&self, user_id: DbId, value: i64) -> Result<(), CoreError>;
}

/// Append-only feedback storage.
#[async_trait]
pub trait FeedbackStore {
    /// Insert a feedback row, returning its id.
    async fn insert(&self, feedback: &crate::feedback::NewFeedback) -> Result<DbId, CoreError>;

    /// Every rating ever given to the user, oldest first.
    async fn ratings_for_user(&self, user_id: DbId) -> Result<Vec<i32>, CoreError>;
}

/// Counted access to abuse reports.
#[async_trait]
pub trait ReportRegistry {
    /// Number of reports filed against one session.
    async fn count_for_session(&self, session_id: DbId) -> Result<i64, CoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_scores_zero() {
        assert_eq!(compute_trust_score(&[], 0), 0);
        assert_eq!(compute_trust_score(&[], 7), 0);
    }

    #[test]
    fn test_single_five_star_no_reports() {
        // avg 5.0 * count 1 - 0 reports = 5
        assert_eq!(compute_trust_score(&[5], 0), 5);
    }

    #[test]
    fn test_single_rating_with_session_reports() {
        // avg 5.0 * count 1 - 2 reports = 3
        assert_eq!(compute_trust_score(&[5], 2), 3);
    }

    #[test]
    fn test_average_times_count_equals_rating_sum() {
        // avg 4.0 * count 3 = 12, minus 1 report = 11
        assert_eq!(compute_trust_score(&[3, 4, 5], 1), 11);
    }

    #[test]
    fn test_clamped_at_zero() {
        // avg 1.0 * count 1 - 9 reports would be -8
        assert_eq!(compute_trust_score(&[1], 9), 0);
    }

    #[test]
    fn test_growing_history_grows_trust() {
        let short = compute_trust_score(&[4, 4], 0);
        let long = compute_trust_score(&[4, 4, 4, 4], 0);
        assert!(long > short);
    }
}
