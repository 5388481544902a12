//! Session lifecycle state machine.
//!
//! A session starts `pending` and is driven to exactly one of four terminal
//! states by the two participants. Every transition is a pure function of
//! the current status, the acting participant, and the wall clock, so the
//! guards hold server-side regardless of which controls a client exposes.
//!
//! ```text
//!              helper, future           learner, past
//!   pending ------------------> confirmed ------------> completed
//!      |  \
//!      |   \ helper, future
//!      |    +-----------------> declined
//!      |  learner, future
//!      +----------------------> cancelled
//! ```
//!
//! Deletion is not a transition: any session row may be hard-deleted by a
//! participant or a moderator regardless of status (see the moderation and
//! session handlers).

use crate::error::CoreError;
use crate::types::Timestamp;

/// Awaiting the helper's decision.
pub const STATUS_PENDING: &str = "pending";

/// Helper accepted; the meeting is on.
pub const STATUS_CONFIRMED: &str = "confirmed";

/// Helper turned the request down.
pub const STATUS_DECLINED: &str = "declined";

/// Learner withdrew the request.
pub const STATUS_CANCELLED: &str = "cancelled";

/// Learner marked the meeting as held; feedback becomes possible.
pub const STATUS_COMPLETED: &str = "completed";

/// All valid session status values.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_CONFIRMED,
    STATUS_DECLINED,
    STATUS_CANCELLED,
    STATUS_COMPLETED,
];

/// Which side of the session the caller is on, resolved from the session
/// row itself (`learner_id` / `helper_id`), never from a client claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionActor {
    Learner,
    Helper,
}

/// A lifecycle action requested by a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Confirm,
    Decline,
    Cancel,
    Complete,
}

impl SessionAction {
    /// The status this action moves a session into when the guards pass.
    pub fn target_status(self) -> &'static str {
        match self {
            SessionAction::Confirm => STATUS_CONFIRMED,
            SessionAction::Decline => STATUS_DECLINED,
            SessionAction::Cancel => STATUS_CANCELLED,
            SessionAction::Complete => STATUS_COMPLETED,
        }
    }
}

/// Validate that a session status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid session status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Whether a status admits no further state-machine transitions.
///
/// `declined`, `cancelled`, and `completed` are final; `confirmed` still
/// admits exactly one transition (to `completed`).
pub fn is_terminal(status: &str) -> bool {
    matches!(
        status,
        STATUS_DECLINED | STATUS_CANCELLED | STATUS_COMPLETED
    )
}

/// Apply a participant action to a session, returning the new status.
///
/// Guards, in evaluation order:
/// 1. the current status must admit the action (`Conflict` otherwise);
/// 2. the action must belong to the caller's side (`Forbidden` otherwise);
/// 3. the action's time window must hold (`Validation` otherwise);
///    confirm/decline/cancel require the session time to still be in the
///    future, complete requires it to have passed.
pub fn apply_action(
    current: &str,
    actor: SessionActor,
    action: SessionAction,
    now: Timestamp,
    session_time: Timestamp,
) -> Result<&'static str, CoreError> {
    let (required_state, required_actor, requires_future) = match action {
        SessionAction::Confirm => (STATUS_PENDING, SessionActor::Helper, true),
        SessionAction::Decline => (STATUS_PENDING, SessionActor::Helper, true),
        SessionAction::Cancel => (STATUS_PENDING, SessionActor::Learner, true),
        SessionAction::Complete => (STATUS_CONFIRMED, SessionActor::Learner, false),
    };

    if current != required_state {
        return Err(CoreError::Conflict(format!(
            "Cannot {} a session in status '{current}'",
            action_verb(action)
        )));
    }

    if actor != required_actor {
        let side = match required_actor {
            SessionActor::Learner => "learner",
            SessionActor::Helper => "helper",
        };
        return Err(CoreError::Forbidden(format!(
            "Only the {side} may {} this session",
            action_verb(action)
        )));
    }

    if requires_future && session_time <= now {
        return Err(CoreError::Validation(format!(
            "Cannot {} a session whose scheduled time has passed",
            action_verb(action)
        )));
    }
    if !requires_future && session_time > now {
        return Err(CoreError::Validation(
            "Cannot complete a session before its scheduled time".to_string(),
        ));
    }

    Ok(action.target_status())
}

fn action_verb(action: SessionAction) -> &'static str {
    match action {
        SessionAction::Confirm => "confirm",
        SessionAction::Decline => "decline",
        SessionAction::Cancel => "cancel",
        SessionAction::Complete => "complete",
    }
}

/// Validate the scheduled time of a new session request.
pub fn validate_session_time(session_time: Timestamp, now: Timestamp) -> Result<(), CoreError> {
    if session_time <= now {
        return Err(CoreError::Validation(
            "Session time must be in the future".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn future() -> Timestamp {
        Utc::now() + Duration::hours(2)
    }

    fn past() -> Timestamp {
        Utc::now() - Duration::hours(2)
    }

    #[test]
    fn test_all_statuses_valid() {
        for status in VALID_STATUSES {
            assert!(validate_status(status).is_ok());
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result = validate_status("rescheduled");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid session status"));
    }

    #[test]
    fn test_helper_confirms_pending_future() {
        let status = apply_action(
            STATUS_PENDING,
            SessionActor::Helper,
            SessionAction::Confirm,
            Utc::now(),
            future(),
        )
        .unwrap();
        assert_eq!(status, STATUS_CONFIRMED);
    }

    #[test]
    fn test_helper_declines_pending_future() {
        let status = apply_action(
            STATUS_PENDING,
            SessionActor::Helper,
            SessionAction::Decline,
            Utc::now(),
            future(),
        )
        .unwrap();
        assert_eq!(status, STATUS_DECLINED);
    }

    #[test]
    fn test_learner_cancels_pending_future() {
        let status = apply_action(
            STATUS_PENDING,
            SessionActor::Learner,
            SessionAction::Cancel,
            Utc::now(),
            future(),
        )
        .unwrap();
        assert_eq!(status, STATUS_CANCELLED);
    }

    #[test]
    fn test_learner_completes_confirmed_past() {
        let status = apply_action(
            STATUS_CONFIRMED,
            SessionActor::Learner,
            SessionAction::Complete,
            Utc::now(),
            past(),
        )
        .unwrap();
        assert_eq!(status, STATUS_COMPLETED);
    }

    #[test]
    fn test_learner_cannot_confirm() {
        let result = apply_action(
            STATUS_PENDING,
            SessionActor::Learner,
            SessionAction::Confirm,
            Utc::now(),
            future(),
        );
        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[test]
    fn test_helper_cannot_cancel() {
        let result = apply_action(
            STATUS_PENDING,
            SessionActor::Helper,
            SessionAction::Cancel,
            Utc::now(),
            future(),
        );
        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[test]
    fn test_helper_cannot_complete() {
        let result = apply_action(
            STATUS_CONFIRMED,
            SessionActor::Helper,
            SessionAction::Complete,
            Utc::now(),
            past(),
        );
        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[test]
    fn test_confirm_rejected_when_session_time_passed() {
        let result = apply_action(
            STATUS_PENDING,
            SessionActor::Helper,
            SessionAction::Confirm,
            Utc::now(),
            past(),
        );
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_complete_rejected_before_session_time() {
        let result = apply_action(
            STATUS_CONFIRMED,
            SessionActor::Learner,
            SessionAction::Complete,
            Utc::now(),
            future(),
        );
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_terminal_states_admit_no_action() {
        for status in [STATUS_DECLINED, STATUS_CANCELLED, STATUS_COMPLETED] {
            for action in [
                SessionAction::Confirm,
                SessionAction::Decline,
                SessionAction::Cancel,
                SessionAction::Complete,
            ] {
                for actor in [SessionActor::Learner, SessionActor::Helper] {
                    let result = apply_action(status, actor, action, Utc::now(), future());
                    assert!(
                        matches!(result, Err(CoreError::Conflict(_))),
                        "{status} must reject {action:?} by {actor:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_confirmed_rejects_everything_but_complete() {
        for action in [
            SessionAction::Confirm,
            SessionAction::Decline,
            SessionAction::Cancel,
        ] {
            let result = apply_action(
                STATUS_CONFIRMED,
                SessionActor::Helper,
                action,
                Utc::now(),
                future(),
            );
            assert!(matches!(result, Err(CoreError::Conflict(_))));
        }
    }

    #[test]
    fn test_is_terminal() {
        assert!(!is_terminal(STATUS_PENDING));
        assert!(!is_terminal(STATUS_CONFIRMED));
        assert!(is_terminal(STATUS_DECLINED));
        assert!(is_terminal(STATUS_CANCELLED));
        assert!(is_terminal(STATUS_COMPLETED));
    }

    #[test]
    fn test_session_time_must_be_future() {
        assert!(validate_session_time(future(), Utc::now()).is_ok());
        assert!(validate_session_time(past(), Utc::now()).is_err());
        let now = Utc::now();
        assert!(validate_session_time(now, now).is_err());
    }
}
