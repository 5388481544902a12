//! Skill card status lifecycle and pricing rules.
//!
//! Cards follow a single moderated lifecycle: they are created `pending`,
//! and an admin publishes them with `approved` or hides them with
//! `rejected`. Rows written before moderation existed carry the legacy
//! `active` value; [`normalize_status`] maps it to `approved` on read so
//! the rest of the system only ever sees the three canonical values.

use crate::error::CoreError;

/// Awaiting moderation.
pub const STATUS_PENDING: &str = "pending";

/// Published and visible in discovery.
pub const STATUS_APPROVED: &str = "approved";

/// Hidden by moderation.
pub const STATUS_REJECTED: &str = "rejected";

/// Pre-moderation legacy value, read as `approved`.
pub const STATUS_LEGACY_ACTIVE: &str = "active";

/// Statuses moderation may set directly.
pub const MODERATABLE_STATUSES: &[&str] = &[STATUS_APPROVED, STATUS_REJECTED];

/// Map a stored status to its canonical value.
pub fn normalize_status(status: &str) -> &str {
    if status == STATUS_LEGACY_ACTIVE {
        STATUS_APPROVED
    } else {
        status
    }
}

/// Validate a status value supplied to the moderation overwrite.
pub fn validate_moderation_status(status: &str) -> Result<(), CoreError> {
    if MODERATABLE_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid skill card status '{status}'. Must be one of: {}",
            MODERATABLE_STATUSES.join(", ")
        )))
    }
}

/// Enforce the pricing invariant on a new card.
///
/// A paid card requires a positive price and carries no barter skill; a
/// barter card carries no price. Returns the `(price, skill_needed)` pair
/// to store, with the meaningless side nulled out.
pub fn validate_pricing(
    is_paid: bool,
    price: Option<i64>,
    skill_needed: Option<String>,
) -> Result<(Option<i64>, Option<String>), CoreError> {
    if is_paid {
        match price {
            Some(p) if p > 0 => Ok((Some(p), None)),
            Some(_) => Err(CoreError::Validation(
                "Price must be a positive integer for paid cards".to_string(),
            )),
            None => Err(CoreError::Validation(
                "A paid card requires a price".to_string(),
            )),
        }
    } else {
        if price.is_some() {
            return Err(CoreError::Validation(
                "A barter card must not carry a price".to_string(),
            ));
        }
        let skill_needed = skill_needed.filter(|s| !s.trim().is_empty());
        Ok((None, skill_needed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_maps_legacy_active_to_approved() {
        assert_eq!(normalize_status(STATUS_LEGACY_ACTIVE), STATUS_APPROVED);
    }

    #[test]
    fn test_normalize_passes_canonical_values_through() {
        assert_eq!(normalize_status(STATUS_PENDING), STATUS_PENDING);
        assert_eq!(normalize_status(STATUS_APPROVED), STATUS_APPROVED);
        assert_eq!(normalize_status(STATUS_REJECTED), STATUS_REJECTED);
    }

    #[test]
    fn test_moderation_statuses_accepted() {
        assert!(validate_moderation_status(STATUS_APPROVED).is_ok());
        assert!(validate_moderation_status(STATUS_REJECTED).is_ok());
    }

    #[test]
    fn test_moderation_cannot_set_pending_or_legacy() {
        assert!(validate_moderation_status(STATUS_PENDING).is_err());
        assert!(validate_moderation_status(STATUS_LEGACY_ACTIVE).is_err());
        assert!(validate_moderation_status("deleted").is_err());
    }

    #[test]
    fn test_paid_card_requires_positive_price() {
        let (price, needed) = validate_pricing(true, Some(25), None).unwrap();
        assert_eq!(price, Some(25));
        assert_eq!(needed, None);

        assert!(validate_pricing(true, None, None).is_err());
        assert!(validate_pricing(true, Some(0), None).is_err());
        assert!(validate_pricing(true, Some(-5), None).is_err());
    }

    #[test]
    fn test_paid_card_drops_skill_needed() {
        let (_, needed) =
            validate_pricing(true, Some(10), Some("Guitar".to_string())).unwrap();
        assert_eq!(needed, None);
    }

    #[test]
    fn test_barter_card_rejects_price() {
        assert!(validate_pricing(false, Some(10), None).is_err());
    }

    #[test]
    fn test_barter_card_keeps_skill_needed() {
        let (price, needed) =
            validate_pricing(false, None, Some("Guitar".to_string())).unwrap();
        assert_eq!(price, None);
        assert_eq!(needed, Some("Guitar".to_string()));
    }

    #[test]
    fn test_barter_card_blank_skill_needed_becomes_none() {
        let (_, needed) = validate_pricing(false, None, Some("   ".to_string())).unwrap();
        assert_eq!(needed, None);
    }
}
