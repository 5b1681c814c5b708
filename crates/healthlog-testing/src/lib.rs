//! Testing infrastructure for healthlog integration tests.
//!
//! - `TestWorld`: isolated temp directory with a `HOME` for the CLI
//! - `fixtures`: health report blocks and sample logs
//! - `assertions`: checks over written CSV files

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::ReportBuilder;
pub use world::{CliResult, TestWorld};
