pub mod admin;
pub mod announcements;
pub mod feedback;
pub mod reports;
pub mod sessions;
pub mod skill_cards;
pub mod users;
