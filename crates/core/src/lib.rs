//! Domain logic for the SkillSwap session lifecycle and reputation engine.
//!
//! This crate is deliberately free of web and database dependencies: it
//! holds the session state machine, the feedback/reputation computations,
//! validation helpers, and the storage-port traits the persistence layer
//! implements. The `skillswap-db` and `skillswap-api` crates build on it.

pub mod error;
pub mod feedback;
pub mod meeting;
pub mod moderation;
pub mod report;
pub mod reputation;
pub mod roles;
pub mod session;
pub mod skill_card;
pub mod types;
