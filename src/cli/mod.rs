//! Command Line Interface (CLI) layer for romanwords.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that merges flags with an optional
//! JSON config file and hands the run to `romanwords::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
