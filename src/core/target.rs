//! Target GPA solver
//!
//! A pure linear solve: given the quality points and credits already earned,
//! a target cumulative GPA, and the total program credit count, compute the
//! average grade point required on every remaining credit. The three-way
//! feasibility verdict and the clamping at each boundary are contract
//! requirements the plan allocator depends on.

use crate::core::gpa;
use crate::core::models::Course;
use serde::Serialize;
use std::fmt;

/// Upper bound of the 4.0 grade scale
const MAX_GPA4: f32 = 4.0;

/// Whether a target GPA is still attainable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Feasibility {
    /// Target already met or exceeded
    Achieved,
    /// Attainable within [0, 4.0] on the remaining credits
    Feasible,
    /// Required average exceeds 4.0
    Impossible,
}

impl fmt::Display for Feasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Achieved => "achieved",
            Self::Feasible => "feasible",
            Self::Impossible => "impossible",
        };
        write!(f, "{as_str}")
    }
}

/// Result of a target-GPA solve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetOutcome {
    /// Required average grade point on remaining credits (clamped to [0, 4.0] for display)
    pub required_gpa: f32,
    /// Credits not yet completed
    pub remaining_credits: f32,
    /// Feasibility verdict
    pub feasibility: Feasibility,
    /// Human-readable status
    pub message: String,
}

/// Solve for the required average GPA on remaining coursework
///
/// # Arguments
/// * `quality_points` - Quality points earned so far
/// * `credits` - Credits earned so far
/// * `target_gpa` - Desired cumulative GPA on the 4.0 scale
/// * `total_program_credits` - Credit count of the whole program
#[must_use]
pub fn required_gpa_for_target(
    quality_points: f32,
    credits: f32,
    target_gpa: f32,
    total_program_credits: f32,
) -> TargetOutcome {
    let remaining_credits = total_program_credits - credits;

    if remaining_credits <= 0.0 {
        return TargetOutcome {
            required_gpa: 0.0,
            remaining_credits: 0.0,
            feasibility: Feasibility::Achieved,
            message: "Target already met!".to_string(),
        };
    }

    let required_points = target_gpa * total_program_credits - quality_points;
    let required_gpa = required_points / remaining_credits;

    if required_gpa > MAX_GPA4 {
        return TargetOutcome {
            required_gpa: MAX_GPA4,
            remaining_credits,
            feasibility: Feasibility::Impossible,
            message: "Not achievable on a 4.0 scale".to_string(),
        };
    }

    if required_gpa < 0.0 {
        return TargetOutcome {
            required_gpa: 0.0,
            remaining_credits,
            feasibility: Feasibility::Achieved,
            message: "Target already met!".to_string(),
        };
    }

    TargetOutcome {
        required_gpa,
        remaining_credits,
        feasibility: Feasibility::Feasible,
        message: format!(
            "Need an average GPA of {required_gpa:.2} across the remaining {remaining_credits} credits"
        ),
    }
}

/// Solve for the required average GPA from a transcript
///
/// Convenience wrapper that aggregates quality points and credits over the
/// non-planned courses first.
#[must_use]
pub fn required_gpa_from_courses(
    courses: &[Course],
    target_gpa: f32,
    total_program_credits: f32,
) -> TargetOutcome {
    required_gpa_for_target(
        gpa::quality_points(courses),
        gpa::total_credits(courses, false),
        target_gpa,
        total_program_credits,
    )
}
