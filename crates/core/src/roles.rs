//! Well-known role name constants.
//!
//! `admin` is the only role treated as a privilege level; the others are
//! descriptive labels chosen by the user during onboarding.

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_LEARNER: &str = "learner";
pub const ROLE_HELPER: &str = "helper";
pub const ROLE_BOTH: &str = "both";

/// Roles a user may assign to themselves. `admin` is excluded: it is only
/// ever granted out of band.
pub const SELF_ASSIGNABLE_ROLES: &[&str] = &[ROLE_LEARNER, ROLE_HELPER, ROLE_BOTH];

/// Validate a role value supplied through profile onboarding or update.
pub fn validate_self_assignable_role(role: &str) -> Result<(), CoreError> {
    if SELF_ASSIGNABLE_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid role '{role}'. Must be one of: {}",
            SELF_ASSIGNABLE_ROLES.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_assignable_roles_accepted() {
        assert!(validate_self_assignable_role(ROLE_LEARNER).is_ok());
        assert!(validate_self_assignable_role(ROLE_HELPER).is_ok());
        assert!(validate_self_assignable_role(ROLE_BOTH).is_ok());
    }

    #[test]
    fn test_admin_not_self_assignable() {
        assert!(validate_self_assignable_role(ROLE_ADMIN).is_err());
    }

    #[test]
    fn test_unknown_role_rejected() {
        let result = validate_self_assignable_role("wizard");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid role"));
    }
}
