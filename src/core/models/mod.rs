//! Data models for the GPA engine

mod course;
mod curriculum;

pub use course::{Course, CourseStatus};
pub use curriculum::{Category, CurriculumCourse, DEFAULT_DIFFICULTY};
