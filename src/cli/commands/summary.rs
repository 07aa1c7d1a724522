//! Summary command handler

use gpa_planner::core::{gpa, roster::parse_transcript_csv};
use logger::{error, info};
use std::path::Path;

/// Run the summary command.
///
/// # Arguments
/// * `transcript` - Path to the transcript CSV file
/// * `semester` - Optional semester label to restrict the breakdown to
/// * `include_planned` - Whether to also show the projected GPA with planned courses
pub fn run(transcript: &Path, semester: Option<&str>, include_planned: bool) {
    let courses = match parse_transcript_csv(transcript) {
        Ok(courses) => courses,
        Err(e) => {
            error!("Failed to load transcript {}: {e}", transcript.display());
            eprintln!("✗ Failed to load {}: {e}", transcript.display());
            return;
        }
    };

    info!("Transcript loaded: {}", transcript.display());

    if courses.is_empty() {
        println!("No courses found in {}", transcript.display());
        return;
    }

    let planned_count = courses.iter().filter(|c| c.planned).count();

    println!("\n=== GPA Summary ===");
    println!(
        "Courses: {} ({planned_count} planned)",
        courses.len()
    );
    println!("Credits: {}", gpa::total_credits(&courses, false));
    println!(
        "GPA: {:.2} (4.0 scale) | {:.2} (10-point scale)",
        gpa::weighted_gpa4(&courses),
        gpa::weighted_gpa10(&courses)
    );
    println!("Quality Points: {:.2}", gpa::quality_points(&courses));

    if include_planned {
        println!(
            "Projected GPA incl. planned: {:.2} (4.0 scale) over {} credits",
            gpa::projected_gpa4(&courses),
            gpa::total_credits(&courses, true)
        );
    }

    let labels = match semester {
        Some(label) => vec![label.to_string()],
        None => gpa::semesters(&courses),
    };

    if !labels.is_empty() {
        println!("\nPer semester:");
        for label in &labels {
            println!(
                "  {label}: GPA {:.2} (4.0) | {:.2} (10) | {} credits",
                gpa::semester_gpa4(&courses, label),
                gpa::semester_gpa10(&courses, label),
                gpa::semester_credits(&courses, label)
            );
        }
    }
}
