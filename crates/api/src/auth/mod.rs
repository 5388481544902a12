//! Token validation for identities issued by the external auth provider.

pub mod jwt;
