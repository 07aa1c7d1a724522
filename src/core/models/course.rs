//! Course model

use serde::{Deserialize, Serialize};

/// Passing threshold on the 10-point scale, used when no explicit status is set
pub(crate) const PASSING_SCORE10: f32 = 4.0;

/// Lifecycle status of a recorded course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    /// Course completed with a passing result
    Passed,
    /// Course completed with a failing result
    Failed,
    /// Course currently being taken
    InProgress,
}

/// A course on a student's transcript
///
/// Records are owned by the caller; the engine only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Stable identifier within the transcript
    pub id: String,

    /// Course name (e.g., "Data Structures and Algorithms")
    pub name: String,

    /// External course code (e.g., "CS102") used for curriculum matching
    #[serde(default)]
    pub code: Option<String>,

    /// Credit weight (positive, can be fractional)
    pub credits: f32,

    /// Raw score on the 10-point scale
    pub score10: f32,

    /// Semester label (e.g., "2024.1"); empty/absent means unassigned
    #[serde(default)]
    pub semester: Option<String>,

    /// Hypothetical course, excluded from current-GPA aggregation by default
    #[serde(default)]
    pub planned: bool,

    /// Explicit lifecycle status; inferred from `score10` when absent
    #[serde(default)]
    pub status: Option<CourseStatus>,
}

impl Course {
    /// Create a new completed course
    ///
    /// # Arguments
    /// * `id` - Transcript identifier
    /// * `name` - Full course name
    /// * `credits` - Credit weight
    /// * `score10` - Raw score on the 10-point scale
    #[must_use]
    pub const fn new(id: String, name: String, credits: f32, score10: f32) -> Self {
        Self {
            id,
            name,
            code: None,
            credits,
            score10,
            semester: None,
            planned: false,
            status: None,
        }
    }

    /// Set the external course code
    pub fn set_code(&mut self, code: String) {
        self.code = Some(code);
    }

    /// Set the semester label
    pub fn set_semester(&mut self, semester: String) {
        self.semester = Some(semester);
    }

    /// Set the explicit lifecycle status
    pub fn set_status(&mut self, status: CourseStatus) {
        self.status = Some(status);
    }

    /// Mark the course as planned (hypothetical)
    pub fn mark_planned(&mut self) {
        self.planned = true;
    }

    /// Whether the course counts as passed
    ///
    /// Uses the explicit status when present, otherwise infers a pass from
    /// `score10 >= 4.0`.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.status.map_or_else(
            || self.score10 >= PASSING_SCORE10,
            |status| status == CourseStatus::Passed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(
            "c1".to_string(),
            "Introduction to Programming".to_string(),
            3.0,
            8.2,
        );

        assert_eq!(course.name, "Introduction to Programming");
        assert!((course.credits - 3.0).abs() < f32::EPSILON);
        assert!((course.score10 - 8.2).abs() < f32::EPSILON);
        assert!(course.code.is_none());
        assert!(course.semester.is_none());
        assert!(!course.planned);
        assert!(course.status.is_none());
    }

    #[test]
    fn test_fractional_credits() {
        let course = Course::new("c1".to_string(), "Lab".to_string(), 1.5, 9.0);

        assert!((course.credits - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_pass_inferred_from_score() {
        let passed = Course::new("c1".to_string(), "Calculus 1".to_string(), 3.0, 4.0);
        let failed = Course::new("c2".to_string(), "Calculus 2".to_string(), 3.0, 3.9);

        assert!(passed.is_passed());
        assert!(!failed.is_passed());
    }

    #[test]
    fn test_explicit_status_overrides_score() {
        let mut course = Course::new("c1".to_string(), "Physics".to_string(), 3.0, 7.5);
        course.set_status(CourseStatus::Failed);
        assert!(!course.is_passed());

        let mut course = Course::new("c2".to_string(), "Physics".to_string(), 3.0, 2.0);
        course.set_status(CourseStatus::Passed);
        assert!(course.is_passed());
    }

    #[test]
    fn test_in_progress_is_not_passed() {
        let mut course = Course::new("c1".to_string(), "Thesis".to_string(), 10.0, 8.0);
        course.set_status(CourseStatus::InProgress);
        assert!(!course.is_passed());
    }

    #[test]
    fn test_mark_planned() {
        let mut course = Course::new("c1".to_string(), "Elective 1".to_string(), 3.0, 0.0);
        assert!(!course.planned);

        course.mark_planned();
        assert!(course.planned);
    }
}
