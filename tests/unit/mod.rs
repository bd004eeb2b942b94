//! Unit test modules.

mod preference_test;
mod profile_view_test;
mod skills_test;
