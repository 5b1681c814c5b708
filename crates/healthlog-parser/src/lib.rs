//! Extraction of health check records from plain-text system health logs.
//!
//! A log is a sequence of report blocks:
//!
//! ```text
//! +++ Simple System Check +++
//! Date: Mon Jan 06 10:00:00 UTC 2025
//! Disk Usage:
//! Filesystem      Size  Used Avail Use% Mounted on
//! /dev/sda1        20G  8.5G   11G  45% /
//! ...
//! +++ Check Complete +++
//! ```
//!
//! Extraction is best-effort: a section that does not have the expected
//! shape leaves its fields unset instead of failing the scan.

pub mod error;
mod extractor;
pub mod markers;
mod sections;
mod timestamp;

pub use error::{Error, Result};
pub use extractor::{extract_records, parse_log_file, parse_log_str};
pub use timestamp::parse_report_date;
