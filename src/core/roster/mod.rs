//! Roster import/export: the persistence layer around the engine
//!
//! The engine itself performs no I/O; everything that reads or writes files
//! lives here. This layer is also the validation boundary: rows with missing
//! names or non-positive credits never reach the engine.

mod csv_parser;

pub use csv_parser::{
    default_curriculum, export_curriculum_csv, export_plan_csv, parse_curriculum_csv,
    parse_curriculum_str, parse_transcript_csv, parse_transcript_str,
};
