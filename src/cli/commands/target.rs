//! Target command handler

use gpa_planner::config::Config;
use gpa_planner::core::{gpa, roster::parse_transcript_csv, target::required_gpa_from_courses};
use logger::{error, info};
use std::path::Path;

/// Run the target command.
///
/// # Arguments
/// * `transcript` - Path to the transcript CSV file
/// * `target_gpa` - Desired cumulative GPA on the 4.0 scale
/// * `total_credits` - Program credit count; falls back to config when omitted
pub fn run(transcript: &Path, target_gpa: f32, total_credits: Option<f32>, config: &Config) {
    let courses = match parse_transcript_csv(transcript) {
        Ok(courses) => courses,
        Err(e) => {
            error!("Failed to load transcript {}: {e}", transcript.display());
            eprintln!("✗ Failed to load {}: {e}", transcript.display());
            return;
        }
    };

    info!("Transcript loaded: {}", transcript.display());

    let program_credits = total_credits.unwrap_or(config.planner.total_credits);
    let outcome = required_gpa_from_courses(&courses, target_gpa, program_credits);

    println!("\n=== Target GPA {target_gpa:.2} ===");
    println!(
        "Current: GPA {:.2} over {} credits ({} of {} program credits done)",
        gpa::weighted_gpa4(&courses),
        gpa::total_credits(&courses, false),
        gpa::total_credits(&courses, false),
        program_credits
    );
    println!("Feasibility: {}", outcome.feasibility);
    println!(
        "Required average on remaining {} credits: {:.2}",
        outcome.remaining_credits, outcome.required_gpa
    );
    println!("{}", outcome.message);
}
