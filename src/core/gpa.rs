//! Credit-weighted GPA aggregation
//!
//! All aggregates are `Σ(value·credits) / Σ(credits)` over the relevant
//! subset. Planned courses are excluded everywhere except
//! [`projected_gpa4`], which exists for what-if projections. An empty subset
//! (zero credit sum) aggregates to 0 rather than erroring.

use crate::core::grades::score_to_grade;
use crate::core::models::Course;

/// Cumulative GPA on the 4.0 scale, excluding planned courses
#[must_use]
pub fn weighted_gpa4(courses: &[Course]) -> f32 {
    let (points, credits) = courses
        .iter()
        .filter(|c| !c.planned)
        .fold((0.0_f32, 0.0_f32), |(points, credits), course| {
            let gpa4 = score_to_grade(course.score10).gpa4;
            (points + gpa4 * course.credits, credits + course.credits)
        });

    if credits > 0.0 {
        points / credits
    } else {
        0.0
    }
}

/// Cumulative GPA on the 10-point scale, excluding planned courses
#[must_use]
pub fn weighted_gpa10(courses: &[Course]) -> f32 {
    let (points, credits) = courses
        .iter()
        .filter(|c| !c.planned)
        .fold((0.0_f32, 0.0_f32), |(points, credits), course| {
            (
                points + course.score10 * course.credits,
                credits + course.credits,
            )
        });

    if credits > 0.0 {
        points / credits
    } else {
        0.0
    }
}

/// Total quality points (gpa4 × credits), excluding planned courses
#[must_use]
pub fn quality_points(courses: &[Course]) -> f32 {
    courses
        .iter()
        .filter(|c| !c.planned)
        .map(|course| score_to_grade(course.score10).gpa4 * course.credits)
        .sum()
}

/// Total credit weight
///
/// Planned courses are excluded unless `include_planned` is set.
#[must_use]
pub fn total_credits(courses: &[Course], include_planned: bool) -> f32 {
    courses
        .iter()
        .filter(|c| include_planned || !c.planned)
        .map(|course| course.credits)
        .sum()
}

/// Projected GPA on the 4.0 scale, planned courses included
///
/// The caller decides which subset to pass; this is the what-if variant of
/// [`weighted_gpa4`].
#[must_use]
pub fn projected_gpa4(courses: &[Course]) -> f32 {
    let (points, credits) = courses
        .iter()
        .fold((0.0_f32, 0.0_f32), |(points, credits), course| {
            let gpa4 = score_to_grade(course.score10).gpa4;
            (points + gpa4 * course.credits, credits + course.credits)
        });

    if credits > 0.0 {
        points / credits
    } else {
        0.0
    }
}

/// Whether a course belongs to the given semester scope
///
/// Planned courses and courses with no (or an empty) semester label never
/// match, so an unassigned course is distinct from any named semester.
fn matches_semester(course: &Course, semester: &str) -> bool {
    !course.planned
        && course
            .semester
            .as_deref()
            .is_some_and(|s| !s.is_empty() && s == semester)
}

/// GPA on the 4.0 scale for a single semester
#[must_use]
pub fn semester_gpa4(courses: &[Course], semester: &str) -> f32 {
    let scoped: Vec<Course> = courses
        .iter()
        .filter(|c| matches_semester(c, semester))
        .cloned()
        .collect();
    weighted_gpa4(&scoped)
}

/// GPA on the 10-point scale for a single semester
#[must_use]
pub fn semester_gpa10(courses: &[Course], semester: &str) -> f32 {
    let scoped: Vec<Course> = courses
        .iter()
        .filter(|c| matches_semester(c, semester))
        .cloned()
        .collect();
    weighted_gpa10(&scoped)
}

/// Total credits for a single semester
#[must_use]
pub fn semester_credits(courses: &[Course], semester: &str) -> f32 {
    courses
        .iter()
        .filter(|c| matches_semester(c, semester))
        .map(|course| course.credits)
        .sum()
}

/// Distinct non-empty semester labels in first-appearance order
#[must_use]
pub fn semesters(courses: &[Course]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for course in courses {
        if let Some(label) = course.semester.as_deref() {
            if !label.is_empty() && !labels.iter().any(|seen| seen == label) {
                labels.push(label.to_string());
            }
        }
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, credits: f32, score10: f32) -> Course {
        Course::new(id.to_string(), format!("Course {id}"), credits, score10)
    }

    fn semester_course(id: &str, credits: f32, score10: f32, semester: &str) -> Course {
        let mut c = course(id, credits, score10);
        c.set_semester(semester.to_string());
        c
    }

    #[test]
    fn empty_list_aggregates_to_zero() {
        assert!((weighted_gpa4(&[]) - 0.0).abs() < f32::EPSILON);
        assert!((weighted_gpa10(&[]) - 0.0).abs() < f32::EPSILON);
        assert!((quality_points(&[]) - 0.0).abs() < f32::EPSILON);
        assert!((total_credits(&[], false) - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn single_course_gpa() {
        let courses = vec![course("c1", 3.0, 8.5)];
        assert!((weighted_gpa4(&courses) - 4.0).abs() < f32::EPSILON);
        assert!((weighted_gpa10(&courses) - 8.5).abs() < f32::EPSILON);
    }

    #[test]
    fn gpa_is_credit_weighted() {
        // 4 credits of A (4.0) and 2 credits of C (2.0): (16 + 4) / 6
        let courses = vec![course("c1", 4.0, 9.0), course("c2", 2.0, 6.0)];
        let expected = (4.0 * 4.0 + 2.0 * 2.0) / 6.0;
        assert!((weighted_gpa4(&courses) - expected).abs() < 1e-6);
    }

    #[test]
    fn quality_points_match_gpa_times_credits() {
        let courses = vec![
            course("c1", 3.0, 8.2),
            course("c2", 4.0, 6.8),
            course("c3", 2.0, 9.5),
        ];
        let identity = weighted_gpa4(&courses) * total_credits(&courses, false);
        assert!((quality_points(&courses) - identity).abs() < 1e-4);
    }

    #[test]
    fn planned_courses_excluded_by_default() {
        let mut planned = course("p1", 3.0, 10.0);
        planned.mark_planned();
        let courses = vec![course("c1", 3.0, 6.0), planned];

        assert!((weighted_gpa4(&courses) - 2.0).abs() < f32::EPSILON);
        assert!((total_credits(&courses, false) - 3.0).abs() < f32::EPSILON);
        assert!((total_credits(&courses, true) - 6.0).abs() < f32::EPSILON);
    }

    #[test]
    fn projected_gpa_includes_planned() {
        let mut planned = course("p1", 3.0, 9.0);
        planned.mark_planned();
        let courses = vec![course("c1", 3.0, 6.0), planned];

        // (2.0*3 + 4.0*3) / 6
        assert!((projected_gpa4(&courses) - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn semester_scoping() {
        let courses = vec![
            semester_course("c1", 3.0, 8.5, "2024.1"),
            semester_course("c2", 3.0, 5.5, "2024.2"),
            course("c3", 3.0, 9.0),
        ];

        assert!((semester_gpa4(&courses, "2024.1") - 4.0).abs() < f32::EPSILON);
        assert!((semester_gpa4(&courses, "2024.2") - 2.0).abs() < f32::EPSILON);
        assert!((semester_credits(&courses, "2024.1") - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn unlabeled_courses_never_match_a_semester() {
        let mut empty_label = course("c1", 3.0, 8.0);
        empty_label.set_semester(String::new());
        let courses = vec![empty_label, course("c2", 3.0, 8.0)];

        assert!((semester_gpa4(&courses, "") - 0.0).abs() < f32::EPSILON);
        assert!((semester_credits(&courses, "2024.1") - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn planned_courses_excluded_from_semester_scope() {
        let mut planned = semester_course("p1", 3.0, 9.0, "2024.1");
        planned.mark_planned();
        let courses = vec![planned, semester_course("c1", 3.0, 6.0, "2024.1")];

        assert!((semester_gpa4(&courses, "2024.1") - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn semesters_in_first_appearance_order() {
        let mut unlabeled = course("c4", 3.0, 7.0);
        unlabeled.set_semester(String::new());
        let courses = vec![
            semester_course("c1", 3.0, 8.0, "2023.2"),
            semester_course("c2", 3.0, 8.0, "2023.1"),
            semester_course("c3", 3.0, 8.0, "2023.2"),
            unlabeled,
        ];

        assert_eq!(semesters(&courses), vec!["2023.2", "2023.1"]);
    }
}
