//! Reusable profile page widgets.

pub mod skill_bar;
pub mod social_links;
pub mod theme_toggle;

pub use skill_bar::{BarGeometry, SkillBar};
