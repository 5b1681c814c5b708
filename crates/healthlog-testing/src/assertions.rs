//! Assertions over CSV files written by the CLI.

use anyhow::{Context, Result};
use std::path::Path;

/// Read a CSV file back as header plus data rows.
pub fn read_csv(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let header = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for row in reader.records() {
        rows.push(row?.iter().map(str::to_string).collect());
    }

    Ok((header, rows))
}

/// Assert that a CSV file has the expected number of data rows.
pub fn assert_row_count(path: &Path, expected: usize) -> Result<()> {
    let (_, rows) = read_csv(path)?;
    if rows.len() != expected {
        anyhow::bail!("Expected {} rows, got {}", expected, rows.len());
    }
    Ok(())
}

/// Value of `column` in data row `row`.
pub fn cell(path: &Path, row: usize, column: &str) -> Result<String> {
    let (header, rows) = read_csv(path)?;
    let index = header
        .iter()
        .position(|name| name == column)
        .with_context(|| format!("Missing column {}", column))?;
    let data = rows
        .get(row)
        .with_context(|| format!("Missing row {}", row))?;

    Ok(data[index].clone())
}
