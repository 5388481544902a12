//! Account status values used by the moderation overwrite.
//!
//! Unlike the session lifecycle there is no transition graph here: a
//! moderator may set any status from any status, and repeating an
//! overwrite with the same target is a no-op from the caller's
//! perspective.

use crate::error::CoreError;

pub const USER_STATUS_ACTIVE: &str = "active";
pub const USER_STATUS_SUSPENDED: &str = "suspended";
pub const USER_STATUS_BANNED: &str = "banned";

/// All valid account status values.
pub const VALID_USER_STATUSES: &[&str] = &[
    USER_STATUS_ACTIVE,
    USER_STATUS_SUSPENDED,
    USER_STATUS_BANNED,
];

/// Validate an account status supplied to the moderation overwrite.
pub fn validate_user_status(status: &str) -> Result<(), CoreError> {
    if VALID_USER_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid user status '{status}'. Must be one of: {}",
            VALID_USER_STATUSES.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_user_statuses_accepted() {
        for status in VALID_USER_STATUSES {
            assert!(validate_user_status(status).is_ok());
        }
    }

    #[test]
    fn test_unknown_user_status_rejected() {
        assert!(validate_user_status("shadowbanned").is_err());
        assert!(validate_user_status("").is_err());
    }
}
