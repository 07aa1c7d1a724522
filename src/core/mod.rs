//! Core module: the GPA computation and course-recommendation engine

pub mod gpa;
pub mod grades;
pub mod matcher;
pub mod models;
pub mod recommend;
pub mod roster;
pub mod target;

/// Returns the current version of the `GpaPlanner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
