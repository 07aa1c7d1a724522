//! Plan allocation: assigning suggested grade points to selected courses
//!
//! Two modes. Simple mode spreads the required average across the plan with a
//! fixed difficulty adjustment and snaps to the grade ladder; it approximates
//! the quality-point target rather than hitting it. Optimized mode runs a
//! bounded greedy search over the ladder, raising easy high-credit courses one
//! rung at a time until the target is met or the single pass ends; it can
//! undershoot and never lowers a course below its starting grade.

use super::ranker::ease_score;
use super::RecommendedCourse;
use crate::core::grades::{snap_to_ladder, GPA_LADDER};
use crate::core::models::CurriculumCourse;
use std::collections::HashMap;

/// Grade-point adjustment applied per difficulty band in simple mode, and per
/// difficulty step when seeding optimized-mode baselines
pub const DIFFICULTY_ADJUSTMENT: f32 = 0.2;

/// Quality points an accepted raise may overshoot the plan target by
pub const OVERSHOOT_TOLERANCE: f32 = 0.1;

/// Lowest starting grade point in optimized mode
pub const BASELINE_FLOOR: f32 = 2.0;

/// Difficulty at or above which simple mode subtracts the adjustment
const HARD_DIFFICULTY: u8 = 4;

/// Difficulty at or below which simple mode adds the adjustment
const EASY_DIFFICULTY: u8 = 2;

/// Upper bound of the 4.0 grade scale
const MAX_GPA4: f32 = 4.0;

/// Comparison slack for ladder lookups
const RUNG_EPSILON: f32 = 1e-6;

/// Next ladder rung strictly above `current`, if any
fn next_rung(current: f32) -> Option<f32> {
    GPA_LADDER
        .iter()
        .copied()
        .find(|&rung| rung > current + RUNG_EPSILON)
}

/// Lowest ladder rung at or above `value`
fn ceil_to_rung(value: f32) -> f32 {
    GPA_LADDER
        .iter()
        .copied()
        .find(|&rung| rung >= value - RUNG_EPSILON)
        .unwrap_or(MAX_GPA4)
}

/// Starting grade point for a course in optimized mode
///
/// `max(2.0, baseline − (difficulty − 3) × 0.2)`, lifted to the lowest ladder
/// rung at or above it so every assigned grade is a ladder value and no course
/// ever sits below its computed baseline.
fn starting_grade(course: &CurriculumCourse, baseline_gpa: f32) -> f32 {
    let difficulty = f32::from(course.difficulty());
    let raw = (baseline_gpa - (difficulty - 3.0) * DIFFICULTY_ADJUSTMENT).max(BASELINE_FLOOR);
    ceil_to_rung(raw)
}

/// Simple mode: distribute the required average with a difficulty adjustment
///
/// Every course starts at `required_avg_gpa`; difficulty 4-5 subtracts 0.2
/// (floored at 0), difficulty 1-2 adds 0.2 (capped at 4.0), difficulty 3 is
/// unchanged. The adjusted value then snaps to the nearest ladder rung, lower
/// rung winning exact ties. The plan's total quality points only approximate
/// the target.
#[must_use]
pub fn simple_plan(
    selected: &[CurriculumCourse],
    required_avg_gpa: f32,
) -> Vec<RecommendedCourse> {
    selected
        .iter()
        .map(|course| {
            let difficulty = course.difficulty();
            let adjusted = if difficulty >= HARD_DIFFICULTY {
                (required_avg_gpa - DIFFICULTY_ADJUSTMENT).max(0.0)
            } else if difficulty <= EASY_DIFFICULTY {
                (required_avg_gpa + DIFFICULTY_ADJUSTMENT).min(MAX_GPA4)
            } else {
                required_avg_gpa
            };

            RecommendedCourse::from_grade(course, snap_to_ladder(adjusted))
        })
        .collect()
}

/// Optimized mode: greedy single-pass search toward the plan's quality-point target
///
/// Seeds every course at its starting grade, re-ranks the subset by ease score
/// (descending, independent of the selection strategy), then walks the list
/// once. While the running total is below `required_plan_qp`, a course may be
/// raised one ladder rung; the raise is accepted only if the new total stays
/// within [`OVERSHOOT_TOLERANCE`] of the target. The search stops as soon as
/// the total meets the target. A bounded heuristic, not an exact solver: it
/// can undershoot when one rung per course is not enough.
#[must_use]
pub fn optimized_plan(
    selected: &[CurriculumCourse],
    required_plan_qp: f32,
    baseline_gpa: f32,
) -> Vec<RecommendedCourse> {
    let mut grades: HashMap<&str, f32> = selected
        .iter()
        .map(|course| (course.code.as_str(), starting_grade(course, baseline_gpa)))
        .collect();

    // Running quality-point total threaded explicitly through the pass
    let mut total: f32 = selected
        .iter()
        .map(|course| grades[course.code.as_str()] * course.credits)
        .sum();

    let mut by_ease: Vec<&CurriculumCourse> = selected.iter().collect();
    by_ease.sort_by(|a, b| ease_score(b).total_cmp(&ease_score(a)));

    for course in by_ease {
        if total >= required_plan_qp {
            break;
        }

        let current = grades[course.code.as_str()];
        if let Some(next) = next_rung(current) {
            let gained = (next - current) * course.credits;
            if total + gained <= required_plan_qp + OVERSHOOT_TOLERANCE {
                grades.insert(course.code.as_str(), next);
                total += gained;
            }
        }
    }

    selected
        .iter()
        .map(|course| RecommendedCourse::from_grade(course, grades[course.code.as_str()]))
        .collect()
}
