use crate::types::ExportFormat;
use healthlog_types::{Field, HealthRecord};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header row of the tabular output, in column order.
pub const COLUMNS: [&str; 13] = [
    "date",
    "timestamp",
    "disk_usage_percent",
    "disk_total",
    "disk_used",
    "disk_available",
    "memory_usage_percent",
    "memory_total",
    "memory_used",
    "memory_available",
    "user",
    "uptime",
    "load_average",
];

pub type Result<T> = std::result::Result<T, WriteError>;

#[derive(Debug)]
pub enum WriteError {
    /// Refusing to write an output with no data rows
    NoRecords,

    /// IO operation failed
    Io(std::io::Error),

    /// CSV serialization failed
    Csv(csv::Error),

    /// JSON serialization failed
    Json(serde_json::Error),
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::NoRecords => write!(f, "No records to write!"),
            WriteError::Io(err) => write!(f, "IO error: {}", err),
            WriteError::Csv(err) => write!(f, "CSV error: {}", err),
            WriteError::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WriteError::Io(err) => Some(err),
            WriteError::Csv(err) => Some(err),
            WriteError::Json(err) => Some(err),
            WriteError::NoRecords => None,
        }
    }
}

impl From<std::io::Error> for WriteError {
    fn from(err: std::io::Error) -> Self {
        WriteError::Io(err)
    }
}

impl From<csv::Error> for WriteError {
    fn from(err: csv::Error) -> Self {
        WriteError::Csv(err)
    }
}

impl From<serde_json::Error> for WriteError {
    fn from(err: serde_json::Error) -> Self {
        WriteError::Json(err)
    }
}

/// Write `records` to `path` in the given format.
///
/// No file is created when `records` is empty.
pub fn export(path: &Path, records: &[HealthRecord], format: ExportFormat) -> Result<()> {
    if records.is_empty() {
        return Err(WriteError::NoRecords);
    }

    let file = BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Csv => write_csv_to(file, records),
        ExportFormat::Jsonl => write_jsonl_to(file, records),
    }
}

pub fn write_csv(path: &Path, records: &[HealthRecord]) -> Result<()> {
    export(path, records, ExportFormat::Csv)
}

/// Header row, then one row per record with absent fields left empty.
/// Rows end with CRLF.
pub fn write_csv_to<W: Write>(writer: W, records: &[HealthRecord]) -> Result<()> {
    if records.is_empty() {
        return Err(WriteError::NoRecords);
    }

    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);
    wtr.write_record(COLUMNS)?;

    for record in records {
        wtr.write_record(Field::ALL.iter().map(|field| record.render(*field)))?;
    }

    wtr.flush()?;
    Ok(())
}

/// One JSON object per line holding the populated fields of each record.
pub fn write_jsonl_to<W: Write>(mut writer: W, records: &[HealthRecord]) -> Result<()> {
    if records.is_empty() {
        return Err(WriteError::NoRecords);
    }

    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthlog_types::FieldValue;

    fn sample_records() -> Vec<HealthRecord> {
        let mut first = HealthRecord::new();
        first.set(Field::Date, "2025-01-06");
        first.set(Field::DiskUsagePercent, 45_i64);
        first.set(Field::MemoryUsagePercent, 27.6);
        first.set(Field::Uptime, "up 3 days, load average: 0.15, 0.10, 0.05");
        first.set(Field::LoadAverage, 0.15);

        let mut second = HealthRecord::new();
        second.set(Field::User, "root");
        second.set(Field::MemoryUsagePercent, FieldValue::Integer(0));

        vec![first, second]
    }

    #[test]
    fn test_columns_match_field_order() {
        let names: Vec<&str> = Field::ALL.iter().map(Field::as_str).collect();
        assert_eq!(names, COLUMNS);
    }

    #[test]
    fn test_csv_fills_absent_fields() {
        let mut buf = Vec::new();
        write_csv_to(&mut buf, &sample_records()).unwrap();

        let text = String::from_utf8(buf).unwrap();
        insta::assert_snapshot!(text.replace("\r\n", "\n"), @r#"
        date,timestamp,disk_usage_percent,disk_total,disk_used,disk_available,memory_usage_percent,memory_total,memory_used,memory_available,user,uptime,load_average
        2025-01-06,,45,,,,27.6,,,,,"up 3 days, load average: 0.15, 0.10, 0.05",0.15
        ,,,,,,0,,,,root,,
        "#);
    }

    #[test]
    fn test_csv_rows_end_with_crlf() {
        let mut buf = Vec::new();
        write_csv_to(&mut buf, &sample_records()).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches("\r\n").count(), 3);
        assert_eq!(text.matches('\n').count(), 3);
        assert!(text.ends_with(",,,,,,0,,,,root,,\r\n"));
    }

    #[test]
    fn test_jsonl_has_one_object_per_record() {
        let mut buf = Vec::new();
        write_jsonl_to(&mut buf, &sample_records()).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["disk_usage_percent"], 45);
        assert_eq!(lines[1], serde_json::json!({"memory_usage_percent": 0, "user": "root"}));
    }

    #[test]
    fn test_empty_records_write_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        let err = write_csv(&path, &[]).unwrap_err();
        assert!(matches!(err, WriteError::NoRecords));
        assert!(!path.exists());
    }
}
