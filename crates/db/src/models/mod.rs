//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts (caller identity is always
//!   passed separately by the repository, never trusted from the body)
//! - Where the entity is self-mutable, a `Deserialize` update DTO with
//!   all-`Option` fields for patches

pub mod announcement;
pub mod feedback;
pub mod report;
pub mod session;
pub mod skill_card;
pub mod user;
