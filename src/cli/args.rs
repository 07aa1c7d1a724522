//! CLI argument definitions for `GpaPlanner`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gpa_planner::config::ConfigOverrides;
use gpa_planner::core::models::Category;
use gpa_planner::core::recommend::{Mode, Strategy};
use logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// CLI ranking strategy argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum StrategyArg {
    /// Lowest difficulty first
    Easiest,
    /// Highest credit weight first
    MostImpact,
    /// Highest credits × (6 − difficulty) first
    Balanced,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Easiest => Self::Easiest,
            StrategyArg::MostImpact => Self::MostImpact,
            StrategyArg::Balanced => Self::Balanced,
        }
    }
}

impl std::fmt::Display for StrategyArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Easiest => "easiest",
            Self::MostImpact => "most-impact",
            Self::Balanced => "balanced",
        };
        write!(f, "{as_str}")
    }
}

/// CLI allocation mode argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ModeArg {
    /// Uniform distribution with a difficulty adjustment
    Simple,
    /// Greedy incremental-improvement search
    Optimized,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Simple => Self::Simple,
            ModeArg::Optimized => Self::Optimized,
        }
    }
}

impl std::fmt::Display for ModeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Simple => "simple",
            Self::Optimized => "optimized",
        };
        write!(f, "{as_str}")
    }
}

/// CLI course category argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum CategoryArg {
    /// General-education requirement
    General,
    /// Major requirement
    Major,
    /// Elective
    Elective,
    /// Internship
    Internship,
    /// Graduation thesis
    Thesis,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::General => Self::General,
            CategoryArg::Major => Self::Major,
            CategoryArg::Elective => Self::Elective,
            CategoryArg::Internship => Self::Internship,
            CategoryArg::Thesis => Self::Thesis,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `out_dir`, `baseline_gpa`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Summarize a transcript: cumulative and per-semester GPA.
    Summary {
        /// Path to transcript CSV file
        #[arg(value_name = "FILE")]
        transcript: PathBuf,

        /// Restrict the breakdown to one semester
        #[arg(long, value_name = "SEMESTER")]
        semester: Option<String>,

        /// Also show the projected GPA including planned courses
        #[arg(long)]
        include_planned: bool,
    },
    /// Solve for the average GPA required on remaining credits.
    Target {
        /// Path to transcript CSV file
        #[arg(value_name = "FILE")]
        transcript: PathBuf,

        /// Target cumulative GPA on the 4.0 scale
        #[arg(short, long, value_name = "GPA")]
        target: f32,

        /// Total program credits (defaults to config `total_credits`)
        #[arg(long, value_name = "CREDITS")]
        total_credits: Option<f32>,
    },
    /// Recommend courses and per-course target grades for upcoming terms.
    Recommend {
        /// Path to transcript CSV file
        #[arg(value_name = "FILE")]
        transcript: PathBuf,

        /// Path to curriculum CSV file (defaults to the built-in sample curriculum)
        #[arg(long, value_name = "FILE")]
        curriculum: Option<PathBuf>,

        /// Target cumulative GPA on the 4.0 scale
        #[arg(short, long, value_name = "GPA")]
        target: f32,

        /// Total program credits (defaults to config `total_credits`)
        #[arg(long, value_name = "CREDITS")]
        total_credits: Option<f32>,

        /// Ranking strategy for selecting plan courses
        #[arg(long, value_enum, default_value_t = StrategyArg::Balanced)]
        strategy: StrategyArg,

        /// Allocation mode for suggested grades
        #[arg(long, value_enum, default_value_t = ModeArg::Simple)]
        mode: ModeArg,

        /// Assumed GPA for credits outside the plan (defaults to config `baseline_gpa`)
        #[arg(long, value_name = "GPA")]
        baseline: Option<f32>,

        /// Credit cap per term (defaults to config `max_credits_per_term`)
        #[arg(long, value_name = "CREDITS")]
        term_credits: Option<f32>,

        /// Number of upcoming terms to plan (defaults to config `term_count`)
        #[arg(long, value_name = "COUNT")]
        terms: Option<usize>,

        /// Only consider elective courses
        #[arg(long)]
        electives_only: bool,

        /// Restrict selection to these categories (repeatable)
        #[arg(long = "category", value_enum, value_name = "CATEGORY")]
        categories: Vec<CategoryArg>,

        /// Export the plan to a CSV file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gpaplanner",
    about = "GpaPlanner command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config data directory
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override config data directory (short form)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override config output directory
    #[arg(long = "config-out-dir", value_name = "DIR")]
    pub config_out_dir: Option<PathBuf>,

    /// Override config output directory (short form)
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be applied to
    /// the loaded configuration. Short-form flags (e.g., `--out-dir`) take precedence
    /// over long-form flags (e.g., `--config-out-dir`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_data_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            out_dir: self
                .out_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_out_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}
