//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod announcement_repo;
pub mod feedback_repo;
pub mod report_repo;
pub mod session_repo;
pub mod skill_card_repo;
pub mod user_repo;

pub use announcement_repo::AnnouncementRepo;
pub use feedback_repo::FeedbackRepo;
pub use report_repo::ReportRepo;
pub use session_repo::SessionRepo;
pub use skill_card_repo::SkillCardRepo;
pub use user_repo::UserRepo;
