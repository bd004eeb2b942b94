//! UI module for egui-based user interface.

pub mod animation;
pub mod fonts;
pub mod icon;
pub mod screens;
pub mod theme;
pub mod widgets;

pub use screens::ProfileView;
pub use theme::Palette;
