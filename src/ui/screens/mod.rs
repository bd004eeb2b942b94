//! UI screens for the application.

pub mod profile;

pub use profile::ProfileView;
