use healthlog_types::{Field, FieldValue, HealthRecord};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

const UNKNOWN: &str = "Unknown";

/// Figures reported after a conversion run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub records: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub latest_disk_usage_percent: Option<FieldValue>,
    pub latest_memory_usage_percent: Option<FieldValue>,
    pub output: Option<PathBuf>,
}

impl Summary {
    pub fn from_records(records: &[HealthRecord]) -> Self {
        let first = records.first();
        let last = records.last();

        Self {
            records: records.len(),
            first_date: first.and_then(|r| r.get(Field::Date)).map(ToString::to_string),
            last_date: last.and_then(|r| r.get(Field::Date)).map(ToString::to_string),
            latest_disk_usage_percent: last.and_then(|r| r.get(Field::DiskUsagePercent)).cloned(),
            latest_memory_usage_percent: last
                .and_then(|r| r.get(Field::MemoryUsagePercent))
                .cloned(),
            output: None,
        }
    }

    pub fn with_output(mut self, path: &Path) -> Self {
        self.output = Some(path.to_path_buf());
        self
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Summary:");
        let _ = writeln!(out, "- Total records: {}", self.records);
        let _ = writeln!(
            out,
            "- Date range: {} to {}",
            or_unknown(self.first_date.as_deref()),
            or_unknown(self.last_date.as_deref())
        );
        let _ = writeln!(
            out,
            "- Latest disk usage: {}%",
            or_unknown(self.latest_disk_usage_percent.as_ref())
        );
        let _ = writeln!(
            out,
            "- Latest memory usage: {}%",
            or_unknown(self.latest_memory_usage_percent.as_ref())
        );
        out
    }
}

fn or_unknown<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| UNKNOWN.to_string())
}

/// Suggested follow-ups for the written file.
pub fn render_hints(output: &Path) -> String {
    format!(
        "You can now:\n\
         1. Open {} in Excel/Google Sheets\n\
         2. Use this data for the web dashboard\n\
         3. Run analysis with pandas/matplotlib\n",
        output.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, disk: Option<i64>, memory: Option<f64>) -> HealthRecord {
        let mut record = HealthRecord::new();
        record.set(Field::Date, date);
        if let Some(disk) = disk {
            record.set(Field::DiskUsagePercent, disk);
        }
        if let Some(memory) = memory {
            record.set(Field::MemoryUsagePercent, memory);
        }
        record
    }

    #[test]
    fn test_summary_uses_first_and_last_records() {
        let records = vec![
            record("2025-01-06", Some(45), Some(27.6)),
            record("2025-01-07", Some(48), Some(50.0)),
        ];
        let summary = Summary::from_records(&records);

        insta::assert_snapshot!(summary.render_plain(), @r"
        Summary:
        - Total records: 2
        - Date range: 2025-01-06 to 2025-01-07
        - Latest disk usage: 48%
        - Latest memory usage: 50.0%
        ");
    }

    #[test]
    fn test_missing_figures_render_unknown() {
        let mut first = HealthRecord::new();
        first.set(Field::User, "root");
        let records = vec![first, record("2025-01-07", None, None)];
        let summary = Summary::from_records(&records);

        let text = summary.render_plain();
        assert!(text.contains("- Date range: Unknown to 2025-01-07"));
        assert!(text.contains("- Latest disk usage: Unknown%"));
        assert!(text.contains("- Latest memory usage: Unknown%"));
    }

    #[test]
    fn test_summary_serializes_numbers() {
        let records = vec![record("2025-01-06", Some(45), Some(27.6))];
        let summary = Summary::from_records(&records).with_output(Path::new("/tmp/out.csv"));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "records": 1,
                "first_date": "2025-01-06",
                "last_date": "2025-01-06",
                "latest_disk_usage_percent": 45,
                "latest_memory_usage_percent": 27.6,
                "output": "/tmp/out.csv",
            })
        );
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::from_records(&[]);
        assert_eq!(summary.records, 0);
        assert_eq!(summary.first_date, None);
    }
}
