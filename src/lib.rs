//! Portfolio - personal profile viewer
//!
//! A single profile page: bio, a skills list with animated proficiency bars,
//! contact links and a light/dark toggle persisted to a local settings file.

pub mod i18n;
pub mod preference;
pub mod profile;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use preference::{resolve_preference, DisplayPreference};
pub use profile::{Skill, SKILLS};
pub use storage::config::AppConfig;
pub use ui::ProfileView;
