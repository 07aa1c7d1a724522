//! Course recommendation engine
//!
//! Orchestrates the target solver, course ranker, and plan allocator into a
//! single what-if answer: which remaining curriculum courses to register for,
//! and what grade to aim at in each to reach the target cumulative GPA.

pub mod allocator;
pub mod ranker;

pub use allocator::{optimized_plan, simple_plan};
pub use ranker::{rank_courses, select_for_plan, Strategy};

use crate::core::grades::{grade_to_score_range, ladder_grade, score_to_grade, ScoreRange};
use crate::core::matcher;
use crate::core::models::{Category, Course, CurriculumCourse};
use crate::core::target::{required_gpa_for_target, Feasibility};
use serde::Serialize;

/// Upper bound of the 4.0 grade scale
const MAX_GPA4: f32 = 4.0;

/// Allocation mode for the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Uniform distribution with a fixed difficulty adjustment
    #[default]
    Simple,
    /// Greedy incremental-improvement search
    Optimized,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Simple => "simple",
            Self::Optimized => "optimized",
        };
        write!(f, "{as_str}")
    }
}

/// Configuration for a recommendation run
#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    /// Desired cumulative GPA on the 4.0 scale
    pub target_gpa: f32,
    /// Credit count of the whole program
    pub total_program_credits: f32,
    /// Credit cap per term when selecting plan courses
    pub max_credits_per_term: f32,
    /// Number of upcoming terms the plan covers
    pub term_count_to_plan: usize,
    /// Restrict selection to these categories (empty = all)
    pub preferred_categories: Vec<Category>,
    /// Restrict selection to electives
    pub electives_only: bool,
    /// Ranking strategy for selection
    pub strategy: Strategy,
    /// Assumed GPA for remaining credits outside the plan
    pub baseline_gpa: f32,
    /// Allocation mode
    pub mode: Mode,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            target_gpa: 3.2,
            total_program_credits: 120.0,
            max_credits_per_term: 18.0,
            term_count_to_plan: 2,
            preferred_categories: Vec::new(),
            electives_only: false,
            strategy: Strategy::default(),
            baseline_gpa: 2.5,
            mode: Mode::default(),
        }
    }
}

/// A curriculum course with its suggested target grade
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedCourse {
    /// External course code
    pub code: String,
    /// Course name
    pub name: String,
    /// Credit weight
    pub credits: f32,
    /// Effective difficulty rating
    pub difficulty: u8,
    /// Suggested grade point (always one of the eight ladder values)
    pub suggested_gpa4: f32,
    /// Letter for the suggested grade point
    pub suggested_letter: &'static str,
    /// 10-point score interval the suggested grade corresponds to
    pub suggested_score_range: ScoreRange,
}

impl RecommendedCourse {
    /// Build a recommendation record for a course at a given grade point
    #[must_use]
    pub fn from_grade(course: &CurriculumCourse, gpa4: f32) -> Self {
        let grade = ladder_grade(gpa4);
        Self {
            code: course.code.clone(),
            name: course.name.clone(),
            credits: course.credits,
            difficulty: course.difficulty(),
            suggested_gpa4: grade.gpa4,
            suggested_letter: grade.letter,
            suggested_score_range: grade_to_score_range(grade.gpa4),
        }
    }
}

/// Full result of a recommendation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    /// Required average grade point on all remaining credits
    pub required_avg_gpa_on_remaining: f32,
    /// Feasibility of the target
    pub feasibility: Feasibility,
    /// Human-readable status
    pub message: String,
    /// Recommended courses, in selection order
    pub plan: Vec<RecommendedCourse>,
    /// Credit sum of the plan
    pub plan_total_credits: f32,
    /// Quality points the suggested grades add up to
    pub plan_total_quality_points: f32,
    /// Remaining credits not covered by the plan (assumed at the baseline GPA)
    pub remaining_after_plan: f32,
}

impl RecommendationResult {
    /// Result with an empty plan, used for the short-circuit paths
    fn without_plan(
        required_gpa: f32,
        feasibility: Feasibility,
        message: String,
        plan_total_credits: f32,
        remaining_after_plan: f32,
    ) -> Self {
        Self {
            required_avg_gpa_on_remaining: required_gpa,
            feasibility,
            message,
            plan: Vec::new(),
            plan_total_credits,
            plan_total_quality_points: 0.0,
            remaining_after_plan,
        }
    }
}

/// Generate a registration plan toward a target cumulative GPA
///
/// Sequence: aggregate quality points and credits over the passed transcript
/// courses, find the not-yet-passed curriculum courses, solve for the
/// required average on the remaining credits, and — when the target is still
/// feasible — select courses within the credit budget and allocate a
/// suggested grade to each. When the plan-only required average exceeds 4.0,
/// the run short-circuits to `impossible` even though the program-wide solve
/// was feasible; more plan credits or a higher baseline would be needed.
#[must_use]
pub fn generate_recommendation(
    curriculum: &[CurriculumCourse],
    completed: &[Course],
    config: &RecommendationConfig,
) -> RecommendationResult {
    let (current_quality_points, current_credits) = completed
        .iter()
        .filter(|c| c.is_passed())
        .fold((0.0_f32, 0.0_f32), |(points, credits), course| {
            let gpa4 = score_to_grade(course.score10).gpa4;
            (points + gpa4 * course.credits, credits + course.credits)
        });

    let remaining = matcher::remaining_courses(curriculum, completed);

    let outcome = required_gpa_for_target(
        current_quality_points,
        current_credits,
        config.target_gpa,
        config.total_program_credits,
    );

    if outcome.feasibility != Feasibility::Feasible {
        return RecommendationResult::without_plan(
            outcome.required_gpa,
            outcome.feasibility,
            outcome.message,
            0.0,
            outcome.remaining_credits,
        );
    }

    let selected = ranker::select_for_plan(&remaining, config);
    let plan_credits: f32 = selected.iter().map(|c| c.credits).sum();
    let remaining_after_plan = outcome.remaining_credits - plan_credits;

    // Quality points the plan itself must contribute, assuming every credit
    // outside the plan completes at the baseline GPA
    let required_plan_qp = config.target_gpa * config.total_program_credits
        - current_quality_points
        - config.baseline_gpa * remaining_after_plan;
    let required_avg_on_plan = if plan_credits > 0.0 {
        required_plan_qp / plan_credits
    } else {
        0.0
    };

    if required_avg_on_plan > MAX_GPA4 {
        return RecommendationResult::without_plan(
            outcome.required_gpa,
            Feasibility::Impossible,
            "The plan cannot carry the target at this baseline; add plan credits or raise the baseline GPA".to_string(),
            plan_credits,
            remaining_after_plan,
        );
    }

    let plan = match config.mode {
        Mode::Simple => allocator::simple_plan(&selected, required_avg_on_plan),
        Mode::Optimized => {
            allocator::optimized_plan(&selected, required_plan_qp, config.baseline_gpa)
        }
    };

    let plan_total_quality_points: f32 = plan
        .iter()
        .map(|course| course.suggested_gpa4 * course.credits)
        .sum();

    RecommendationResult {
        required_avg_gpa_on_remaining: outcome.required_gpa,
        feasibility: Feasibility::Feasible,
        message: outcome.message,
        plan,
        plan_total_credits: plan_credits,
        plan_total_quality_points,
        remaining_after_plan,
    }
}
