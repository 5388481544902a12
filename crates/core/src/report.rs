//! Abuse report reasons and validation.
//!
//! Reports are append-only and deduplicated nowhere: a user may file any
//! number of reports against the same session. They are consumed strictly
//! as a count, by the trust computation and the moderation listing.

use crate::error::CoreError;

pub const REASON_NO_SHOW: &str = "no-show";
pub const REASON_FAKE_USER: &str = "fake-user";
pub const REASON_PAYMENT_SCAM: &str = "payment-scam";
pub const REASON_INAPPROPRIATE: &str = "inappropriate-behavior";

/// All valid report reasons.
pub const VALID_REASONS: &[&str] = &[
    REASON_NO_SHOW,
    REASON_FAKE_USER,
    REASON_PAYMENT_SCAM,
    REASON_INAPPROPRIATE,
];

/// Validate that a report reason is one of the fixed set.
pub fn validate_reason(reason: &str) -> Result<(), CoreError> {
    if VALID_REASONS.contains(&reason) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid report reason '{reason}'. Must be one of: {}",
            VALID_REASONS.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_reasons_accepted() {
        for reason in VALID_REASONS {
            assert!(validate_reason(reason).is_ok());
        }
    }

    #[test]
    fn test_unknown_reason_rejected() {
        let result = validate_reason("rude");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid report reason"));
    }

    #[test]
    fn test_empty_reason_rejected() {
        assert!(validate_reason("").is_err());
    }
}
