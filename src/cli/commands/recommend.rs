//! Recommend command handler
//!
//! Runs the full engine: transcript + curriculum in, a per-course grade plan
//! out, printed as a table and optionally exported to CSV.

use gpa_planner::config::Config;
use gpa_planner::core::models::{Category, CurriculumCourse};
use gpa_planner::core::recommend::{
    generate_recommendation, Mode, RecommendationConfig, RecommendationResult, Strategy,
};
use gpa_planner::core::roster::{
    default_curriculum, export_plan_csv, parse_curriculum_csv, parse_transcript_csv,
};
use gpa_planner::core::target::Feasibility;
use logger::{error, info};
use std::path::{Path, PathBuf};

/// Options for a recommendation run, assembled from CLI flags
pub struct RecommendOptions {
    /// Path to the transcript CSV file
    pub transcript: PathBuf,
    /// Path to the curriculum CSV file; built-in sample when omitted
    pub curriculum: Option<PathBuf>,
    /// Target cumulative GPA
    pub target: f32,
    /// Program credit count override
    pub total_credits: Option<f32>,
    /// Ranking strategy
    pub strategy: Strategy,
    /// Allocation mode
    pub mode: Mode,
    /// Baseline GPA override
    pub baseline: Option<f32>,
    /// Per-term credit cap override
    pub term_credits: Option<f32>,
    /// Term count override
    pub terms: Option<usize>,
    /// Only consider electives
    pub electives_only: bool,
    /// Category filter (empty = all)
    pub categories: Vec<Category>,
    /// Optional CSV export path
    pub output: Option<PathBuf>,
}

/// Run the recommend command.
pub fn run(options: &RecommendOptions, config: &Config, verbose: bool) {
    if let Err(err) = generate(options, config, verbose) {
        error!(
            "Recommendation failed for {}: {err}",
            options.transcript.display()
        );
        eprintln!("{err}");
    }
}

/// Load the curriculum, falling back to the built-in sample
fn load_curriculum(path: Option<&Path>) -> Result<Vec<CurriculumCourse>, String> {
    match path {
        Some(path) => parse_curriculum_csv(path).map_err(|e| {
            error!("Failed to load curriculum {}: {e}", path.display());
            format!("✗ Failed to load {}: {e}", path.display())
        }),
        None => {
            info!("No curriculum file given; using the built-in sample curriculum");
            Ok(default_curriculum())
        }
    }
}

fn generate(options: &RecommendOptions, config: &Config, verbose: bool) -> Result<(), String> {
    let completed = parse_transcript_csv(&options.transcript).map_err(|e| {
        error!(
            "Failed to load transcript {}: {e}",
            options.transcript.display()
        );
        format!("✗ Failed to load {}: {e}", options.transcript.display())
    })?;

    if verbose {
        println!(
            "✓ Transcript loaded successfully from: {}",
            options.transcript.display()
        );
    } else {
        info!("Transcript loaded: {}", options.transcript.display());
    }

    let curriculum = load_curriculum(options.curriculum.as_deref())?;

    let run_config = RecommendationConfig {
        target_gpa: options.target,
        total_program_credits: options
            .total_credits
            .unwrap_or(config.planner.total_credits),
        max_credits_per_term: options
            .term_credits
            .unwrap_or(config.planner.max_credits_per_term),
        term_count_to_plan: options.terms.unwrap_or(config.planner.term_count),
        preferred_categories: options.categories.clone(),
        electives_only: options.electives_only,
        strategy: options.strategy,
        baseline_gpa: options.baseline.unwrap_or(config.planner.baseline_gpa),
        mode: options.mode,
    };

    let result = generate_recommendation(&curriculum, &completed, &run_config);
    print_result(&result, &run_config);

    if let Some(output) = options.output.as_deref() {
        export_plan_csv(&result, output)
            .map_err(|e| format!("✗ Failed to export plan to {}: {e}", output.display()))?;
        println!("✓ Plan exported to: {}", output.display());
        info!("Plan exported to: {}", output.display());
    }

    Ok(())
}

/// Print the recommendation result as a table
fn print_result(result: &RecommendationResult, run_config: &RecommendationConfig) {
    println!(
        "\n=== Recommendation (target {:.2}, {} strategy, {} mode) ===",
        run_config.target_gpa, run_config.strategy, run_config.mode
    );
    println!("Feasibility: {}", result.feasibility);
    println!(
        "Required average on remaining credits: {:.2}",
        result.required_avg_gpa_on_remaining
    );
    println!("{}", result.message);

    if result.feasibility != Feasibility::Feasible {
        return;
    }

    if result.plan.is_empty() {
        println!("\nNo courses to plan.");
        return;
    }

    println!(
        "\n{:<10} {:<36} {:>3} {:>4}  {:>4}  {:<5} {}",
        "CODE", "COURSE", "CR", "DIFF", "GPA", "GRADE", "SCORE RANGE"
    );
    for course in &result.plan {
        println!(
            "{:<10} {:<36} {:>3} {:>4}  {:>4.1}  {:<5} {:.1}-{:.1}",
            course.code,
            course.name,
            course.credits,
            course.difficulty,
            course.suggested_gpa4,
            course.suggested_letter,
            course.suggested_score_range.min,
            course.suggested_score_range.max,
        );
    }

    println!(
        "\nPlan: {} credits, {:.2} quality points; {} credits left outside the plan (assumed GPA {:.2})",
        result.plan_total_credits,
        result.plan_total_quality_points,
        result.remaining_after_plan,
        run_config.baseline_gpa,
    );
}
