//! Static profile content: skills and social links.

pub mod links;
pub mod skills;

pub use links::{SocialKind, SocialLink};
pub use skills::{Level, Skill, SkillIcon, SKILLS};

/// Profile content errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("skill level {0} is outside 0-100")]
    LevelOutOfRange(u8),
}
