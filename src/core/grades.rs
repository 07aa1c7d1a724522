//! Grade conversion between the 10-point scale and the 4.0 scale
//!
//! The scale table is fixed for the life of the program: contiguous,
//! exhaustive over [0, 10], lower bounds inclusive. Out-of-range inputs are
//! not validated here; they fall through to the nearest band (negative scores
//! grade as F, scores above 10 as A). Input validation is the import layer's
//! responsibility.

use serde::Serialize;

/// One band of the grade scale
#[derive(Debug, Clone, Copy)]
struct GradeBand {
    /// Inclusive lower bound on the 10-point scale
    min_score10: f32,
    /// Exclusive upper bound on the 10-point scale (inclusive for the top band)
    max_score10: f32,
    /// Grade point on the 4.0 scale
    gpa4: f32,
    /// Letter grade
    letter: &'static str,
}

/// The grade scale, descending by score threshold
const GRADE_SCALE: [GradeBand; 8] = [
    GradeBand { min_score10: 8.5, max_score10: 10.0, gpa4: 4.0, letter: "A" },
    GradeBand { min_score10: 8.0, max_score10: 8.5, gpa4: 3.5, letter: "B+" },
    GradeBand { min_score10: 7.0, max_score10: 8.0, gpa4: 3.0, letter: "B" },
    GradeBand { min_score10: 6.5, max_score10: 7.0, gpa4: 2.5, letter: "C+" },
    GradeBand { min_score10: 5.5, max_score10: 6.5, gpa4: 2.0, letter: "C" },
    GradeBand { min_score10: 5.0, max_score10: 5.5, gpa4: 1.5, letter: "D+" },
    GradeBand { min_score10: 4.0, max_score10: 5.0, gpa4: 1.0, letter: "D" },
    GradeBand { min_score10: 0.0, max_score10: 4.0, gpa4: 0.0, letter: "F" },
];

/// The eight canonical 4.0-scale grade points, ascending
pub const GPA_LADDER: [f32; 8] = [0.0, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0];

/// A 4.0-scale grade point with its letter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeInfo {
    /// Grade point on the 4.0 scale
    pub gpa4: f32,
    /// Letter grade (A, B+, B, C+, C, D+, D, F)
    pub letter: &'static str,
}

/// A score interval on the 10-point scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreRange {
    /// Inclusive lower bound
    pub min: f32,
    /// Upper bound (exclusive except for the top band)
    pub max: f32,
}

/// Convert a 10-point score to its 4.0-scale grade point and letter
///
/// Total over real inputs: the first band whose inclusive lower bound the
/// score reaches wins, so boundary values belong to the higher band.
#[must_use]
pub fn score_to_grade(score10: f32) -> GradeInfo {
    let band = GRADE_SCALE
        .iter()
        .find(|band| score10 >= band.min_score10)
        .unwrap_or(&GRADE_SCALE[GRADE_SCALE.len() - 1]);

    GradeInfo {
        gpa4: band.gpa4,
        letter: band.letter,
    }
}

/// Map a 4.0-scale grade point back to its 10-point score interval
///
/// The inverse is lossy: every score in the returned range converts to the
/// same grade point. Only the eight ladder values are exact matches; callers
/// snap to the ladder first (the plan allocator always does).
#[must_use]
pub fn grade_to_score_range(gpa4: f32) -> ScoreRange {
    let band = GRADE_SCALE
        .iter()
        .find(|band| gpa4 >= band.gpa4)
        .unwrap_or(&GRADE_SCALE[GRADE_SCALE.len() - 1]);

    ScoreRange {
        min: band.min_score10,
        max: band.max_score10,
    }
}

/// Snap a grade point to the nearest ladder value
///
/// Scans the ladder in ascending order and requires strict improvement, so
/// the lower value wins exact ties (3.25 snaps to 3.0, not 3.5).
#[must_use]
pub fn snap_to_ladder(gpa4: f32) -> f32 {
    let mut nearest = GPA_LADDER[0];
    for &candidate in &GPA_LADDER {
        if (candidate - gpa4).abs() < (nearest - gpa4).abs() {
            nearest = candidate;
        }
    }
    nearest
}

/// Grade info for a ladder value, snapping first if needed
#[must_use]
pub fn ladder_grade(gpa4: f32) -> GradeInfo {
    let snapped = snap_to_ladder(gpa4);
    let band = GRADE_SCALE
        .iter()
        .find(|band| (band.gpa4 - snapped).abs() < f32::EPSILON)
        .unwrap_or(&GRADE_SCALE[GRADE_SCALE.len() - 1]);

    GradeInfo {
        gpa4: band.gpa4,
        letter: band.letter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_band_boundaries_upward() {
        assert_eq!(score_to_grade(8.5), GradeInfo { gpa4: 4.0, letter: "A" });
        assert_eq!(score_to_grade(8.499_99), GradeInfo { gpa4: 3.5, letter: "B+" });
        assert_eq!(score_to_grade(4.0), GradeInfo { gpa4: 1.0, letter: "D" });
        assert_eq!(score_to_grade(3.999_99), GradeInfo { gpa4: 0.0, letter: "F" });
    }

    #[test]
    fn covers_all_bands() {
        assert_eq!(score_to_grade(9.3).letter, "A");
        assert_eq!(score_to_grade(8.2).letter, "B+");
        assert_eq!(score_to_grade(7.5).letter, "B");
        assert_eq!(score_to_grade(6.7).letter, "C+");
        assert_eq!(score_to_grade(6.0).letter, "C");
        assert_eq!(score_to_grade(5.2).letter, "D+");
        assert_eq!(score_to_grade(4.5).letter, "D");
        assert_eq!(score_to_grade(1.0).letter, "F");
    }

    #[test]
    fn out_of_range_scores_fall_to_nearest_band() {
        assert_eq!(score_to_grade(-1.0).letter, "F");
        assert_eq!(score_to_grade(11.0).letter, "A");
    }

    #[test]
    fn grade_points_monotonic_in_score() {
        let mut previous = 0.0_f32;
        let mut score = 0.0_f32;
        while score < 10.0 {
            let gpa4 = score_to_grade(score).gpa4;
            assert!(gpa4 >= previous, "gpa4 decreased at score {score}");
            assert!(GPA_LADDER.contains(&gpa4));
            previous = gpa4;
            score += 0.05;
        }
    }

    #[test]
    fn inverse_range_per_ladder_value() {
        assert_eq!(grade_to_score_range(4.0), ScoreRange { min: 8.5, max: 10.0 });
        assert_eq!(grade_to_score_range(3.5), ScoreRange { min: 8.0, max: 8.5 });
        assert_eq!(grade_to_score_range(1.0), ScoreRange { min: 4.0, max: 5.0 });
        assert_eq!(grade_to_score_range(0.0), ScoreRange { min: 0.0, max: 4.0 });
    }

    #[test]
    fn range_lower_bound_round_trips() {
        for &gpa4 in &GPA_LADDER {
            let range = grade_to_score_range(gpa4);
            let round_tripped = score_to_grade(range.min).gpa4;
            assert!(
                (round_tripped - gpa4).abs() < f32::EPSILON,
                "ladder value {gpa4} round-tripped to {round_tripped}"
            );
        }
    }

    #[test]
    fn snaps_to_nearest_ladder_value() {
        assert!((snap_to_ladder(3.65) - 3.5).abs() < f32::EPSILON);
        assert!((snap_to_ladder(3.8) - 4.0).abs() < f32::EPSILON);
        assert!((snap_to_ladder(0.4) - 0.0).abs() < f32::EPSILON);
        assert!((snap_to_ladder(0.6) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn snap_ties_prefer_lower_value() {
        // 3.25 is equidistant from 3.0 and 3.5
        assert!((snap_to_ladder(3.25) - 3.0).abs() < f32::EPSILON);
        // 1.25 is equidistant from 1.0 and 1.5
        assert!((snap_to_ladder(1.25) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn snap_clamps_outside_ladder() {
        assert!((snap_to_ladder(-0.5) - 0.0).abs() < f32::EPSILON);
        assert!((snap_to_ladder(4.7) - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn ladder_grade_matches_letter() {
        assert_eq!(ladder_grade(4.0).letter, "A");
        assert_eq!(ladder_grade(3.5).letter, "B+");
        assert_eq!(ladder_grade(2.0).letter, "C");
        assert_eq!(ladder_grade(0.0).letter, "F");
        // Non-ladder inputs snap first
        assert_eq!(ladder_grade(3.4).letter, "B+");
    }
}
