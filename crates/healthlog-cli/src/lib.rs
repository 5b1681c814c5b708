//! healthlog converts the reports of a periodic system health script into
//! CSV (or JSONL) and prints a short usage summary.

mod args;
mod commands;
pub mod config;
pub mod logging;
pub mod summary;
pub mod types;
pub mod writer;

pub use args::Cli;
pub use commands::run;
