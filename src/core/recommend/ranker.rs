//! Course ranking and plan selection
//!
//! Ranks a curriculum's remaining courses by one of three strategies, then
//! greedily fills a credit budget. All sorts are stable, so courses that
//! compare equal keep their curriculum order.

use super::RecommendationConfig;
use crate::core::models::{Category, CurriculumCourse};

/// Ranking strategy for choosing which courses enter the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Lowest difficulty first, ties broken by ascending credits
    Easiest,
    /// Highest credit weight first
    MostImpact,
    /// Highest `credits × (6 − difficulty)` first
    #[default]
    Balanced,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Easiest => "easiest",
            Self::MostImpact => "most-impact",
            Self::Balanced => "balanced",
        };
        write!(f, "{as_str}")
    }
}

/// Composite ease score rewarding high-credit, low-difficulty courses
#[must_use]
pub fn ease_score(course: &CurriculumCourse) -> f32 {
    course.credits * (6.0 - f32::from(course.difficulty()))
}

/// Rank courses by the given strategy
#[must_use]
pub fn rank_courses(courses: &[CurriculumCourse], strategy: Strategy) -> Vec<CurriculumCourse> {
    let mut ranked = courses.to_vec();

    match strategy {
        Strategy::Easiest => {
            ranked.sort_by(|a, b| {
                a.difficulty()
                    .cmp(&b.difficulty())
                    .then_with(|| a.credits.total_cmp(&b.credits))
            });
        }
        Strategy::MostImpact => {
            ranked.sort_by(|a, b| b.credits.total_cmp(&a.credits));
        }
        Strategy::Balanced => {
            ranked.sort_by(|a, b| ease_score(b).total_cmp(&ease_score(a)));
        }
    }

    ranked
}

/// Whether a course passes the configured category filters
fn category_allowed(course: &CurriculumCourse, config: &RecommendationConfig) -> bool {
    if config.electives_only && course.category != Some(Category::Elective) {
        return false;
    }

    if config.preferred_categories.is_empty() {
        return true;
    }

    // Uncategorized courses count as general for filtering purposes
    let category = course.category.unwrap_or(Category::General);
    config.preferred_categories.contains(&category)
}

/// Select courses for the plan within the configured credit budget
///
/// Filters by category, ranks by strategy, then accumulates ranked courses
/// while the running credit sum stays within
/// `max_credits_per_term × term_count_to_plan`. A course that would exceed
/// the budget is skipped and the scan continues with the next one, so the
/// result is a prefix-with-skips of the ranked order rather than an optimal
/// packing.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn select_for_plan(
    remaining: &[CurriculumCourse],
    config: &RecommendationConfig,
) -> Vec<CurriculumCourse> {
    let candidates: Vec<CurriculumCourse> = remaining
        .iter()
        .filter(|course| category_allowed(course, config))
        .cloned()
        .collect();

    let ranked = rank_courses(&candidates, config.strategy);

    let max_credits = config.max_credits_per_term * config.term_count_to_plan as f32;
    let mut selected = Vec::new();
    let mut credit_sum = 0.0_f32;

    for course in ranked {
        if credit_sum + course.credits <= max_credits {
            credit_sum += course.credits;
            selected.push(course);
        }
    }

    selected
}
