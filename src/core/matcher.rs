//! Matching transcript courses against a curriculum
//!
//! External-code equality takes precedence; the normalized-name comparison is
//! a heuristic fallback and can false-positive when distinctly-coded courses
//! share a name.

use crate::core::models::{Course, CurriculumCourse};
use std::collections::HashSet;

/// Normalize a course name for matching
///
/// Lowercases, strips punctuation, and collapses runs of whitespace so that
/// "Intro. to  Programming!" and "intro to programming" compare equal.
#[must_use]
pub fn normalize_course_name(name: &str) -> String {
    let cleaned: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Find the curriculum entry a transcript course corresponds to
///
/// # Returns
/// The matching entry, or `None` when neither the code nor the normalized
/// name matches.
#[must_use]
pub fn match_course_to_curriculum<'a>(
    course: &Course,
    curriculum: &'a [CurriculumCourse],
) -> Option<&'a CurriculumCourse> {
    // Try matching by course code first
    if let Some(code) = course.code.as_deref() {
        if let Some(entry) = curriculum.iter().find(|c| c.code == code) {
            return Some(entry);
        }
    }

    // Fall back to normalized-name matching
    let normalized = normalize_course_name(&course.name);
    curriculum
        .iter()
        .find(|entry| normalize_course_name(&entry.name) == normalized)
}

/// Curriculum courses not yet passed
///
/// A curriculum entry is considered passed when its code or its normalized
/// name appears among the passed transcript courses (explicit `passed` status,
/// or score10 >= 4.0 when no status is set).
#[must_use]
pub fn remaining_courses(
    curriculum: &[CurriculumCourse],
    completed: &[Course],
) -> Vec<CurriculumCourse> {
    let mut passed_codes: HashSet<String> = HashSet::new();
    let mut passed_names: HashSet<String> = HashSet::new();

    for course in completed.iter().filter(|c| c.is_passed()) {
        if let Some(code) = course.code.as_deref() {
            passed_codes.insert(code.to_string());
        }
        passed_names.insert(normalize_course_name(&course.name));
    }

    curriculum
        .iter()
        .filter(|entry| {
            !passed_codes.contains(&entry.code)
                && !passed_names.contains(&normalize_course_name(&entry.name))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passed_course(id: &str, name: &str, code: Option<&str>) -> Course {
        let mut course = Course::new(id.to_string(), name.to_string(), 3.0, 8.0);
        if let Some(code) = code {
            course.set_code(code.to_string());
        }
        course
    }

    #[test]
    fn normalizes_case_punctuation_whitespace() {
        assert_eq!(
            normalize_course_name("Intro.  to   Programming!"),
            "intro to programming"
        );
        assert_eq!(normalize_course_name("  Calculus I "), "calculus i");
        assert_eq!(normalize_course_name("C++ (Advanced)"), "c advanced");
    }

    #[test]
    fn matches_by_code_before_name() {
        let curriculum = vec![
            CurriculumCourse::new("CS101".to_string(), "Intro to Programming".to_string(), 3.0),
            CurriculumCourse::new("CS102".to_string(), "Data Structures".to_string(), 3.0),
        ];
        let course = passed_course("c1", "Something Else Entirely", Some("CS102"));

        let matched = match_course_to_curriculum(&course, &curriculum).expect("match");
        assert_eq!(matched.code, "CS102");
    }

    #[test]
    fn falls_back_to_normalized_name() {
        let curriculum = vec![CurriculumCourse::new(
            "CS101".to_string(),
            "Intro to Programming".to_string(),
            3.0,
        )];
        let course = passed_course("c1", "INTRO TO PROGRAMMING.", None);

        assert!(match_course_to_curriculum(&course, &curriculum).is_some());
    }

    #[test]
    fn no_match_returns_none() {
        let curriculum = vec![CurriculumCourse::new(
            "CS101".to_string(),
            "Intro to Programming".to_string(),
            3.0,
        )];
        let course = passed_course("c1", "Organic Chemistry", Some("CHEM201"));

        assert!(match_course_to_curriculum(&course, &curriculum).is_none());
    }

    #[test]
    fn remaining_excludes_passed_by_code() {
        let curriculum = vec![
            CurriculumCourse::new("CS101".to_string(), "Intro to Programming".to_string(), 3.0),
            CurriculumCourse::new("CS102".to_string(), "Data Structures".to_string(), 3.0),
        ];
        let completed = vec![passed_course("c1", "Different Name", Some("CS101"))];

        let remaining = remaining_courses(&curriculum, &completed);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].code, "CS102");
    }

    #[test]
    fn remaining_excludes_passed_by_name() {
        let curriculum = vec![
            CurriculumCourse::new("CS101".to_string(), "Intro to Programming".to_string(), 3.0),
            CurriculumCourse::new("CS102".to_string(), "Data Structures".to_string(), 3.0),
        ];
        let completed = vec![passed_course("c1", "intro to programming", None)];

        let remaining = remaining_courses(&curriculum, &completed);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].code, "CS102");
    }

    #[test]
    fn failed_courses_stay_remaining() {
        let curriculum = vec![CurriculumCourse::new(
            "CS101".to_string(),
            "Intro to Programming".to_string(),
            3.0,
        )];
        let mut failed = passed_course("c1", "Intro to Programming", Some("CS101"));
        failed.score10 = 3.0;

        let remaining = remaining_courses(&curriculum, &[failed]);
        assert_eq!(remaining.len(), 1);
    }
}
