//! Command handlers for the CLI

pub mod config;
pub mod recommend;
pub mod summary;
pub mod target;
