//! Meeting link generation.
//!
//! Links are opaque to the engine: generated once when a session is
//! requested, stored verbatim, never regenerated or validated afterwards.

use rand::distr::Alphanumeric;
use rand::Rng;

/// Room name prefix on the public Jitsi instance.
const ROOM_PREFIX: &str = "SkillSwap";

/// Random suffix length appended after the timestamp.
const SUFFIX_LEN: usize = 9;

/// Generate a fresh meeting-room URL.
///
/// Uniqueness comes from the millisecond timestamp plus a 9-character
/// random alphanumeric suffix; the database additionally carries a unique
/// index on the stored link.
pub fn generate_meeting_link() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("https://meet.jit.si/{ROOM_PREFIX}-{millis}-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_shape() {
        let link = generate_meeting_link();
        assert!(link.starts_with("https://meet.jit.si/SkillSwap-"));

        let suffix = link.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_links_are_distinct() {
        let a = generate_meeting_link();
        let b = generate_meeting_link();
        assert_ne!(a, b);
    }
}
