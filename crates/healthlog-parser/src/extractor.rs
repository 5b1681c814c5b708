use crate::markers;
use crate::sections::Section;
use crate::{Error, Result};
use healthlog_types::HealthRecord;
use std::path::Path;

/// Line classification used by the scanner.
enum LineKind {
    RecordStart,
    RecordEnd,
    Section(Section),
    Other,
}

impl LineKind {
    fn classify(line: &str) -> Self {
        if line.starts_with(markers::RECORD_START) {
            LineKind::RecordStart
        } else if line == markers::RECORD_END {
            LineKind::RecordEnd
        } else if let Some(section) = Section::detect(line) {
            LineKind::Section(section)
        } else {
            LineKind::Other
        }
    }
}

/// Scan log lines and return completed health records in log order.
///
/// A record is emitted only when an end marker closes a non-empty record.
/// A start marker discards whatever was being built; a trailing record
/// without an end marker is dropped.
pub fn extract_records<S: AsRef<str>>(lines: &[S]) -> Vec<HealthRecord> {
    let mut records = Vec::new();
    let mut current = HealthRecord::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let line = lines[cursor].as_ref().trim();

        match LineKind::classify(line) {
            LineKind::RecordStart => {
                if !current.is_empty() {
                    tracing::debug!(
                        line = cursor + 1,
                        fields = current.len(),
                        "discarding unterminated record"
                    );
                }
                current = HealthRecord::new();
            }
            LineKind::RecordEnd => {
                if current.is_empty() {
                    tracing::trace!(line = cursor + 1, "skipping empty record");
                } else {
                    tracing::trace!(line = cursor + 1, fields = current.len(), "record complete");
                    records.push(std::mem::take(&mut current));
                }
            }
            LineKind::Section(section) => {
                let output = section.extract(lines, cursor);
                current.extend(output.fields);
                cursor = output.last_consumed;
            }
            LineKind::Other => {}
        }

        cursor += 1;
    }

    if !current.is_empty() {
        tracing::debug!(fields = current.len(), "dropping record without end marker");
    }
    tracing::debug!(records = records.len(), "scan finished");

    records
}

/// Extract records from the full text of a log.
pub fn parse_log_str(content: &str) -> Vec<HealthRecord> {
    let lines: Vec<&str> = content.lines().collect();
    extract_records(&lines)
}

/// Load a log file into memory and extract its records.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn parse_log_file(path: &Path) -> Result<Vec<HealthRecord>> {
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded log file");

    Ok(parse_log_str(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthlog_types::{Field, FieldValue};

    #[test]
    fn test_empty_input() {
        let lines: [&str; 0] = [];
        assert!(extract_records(&lines).is_empty());
    }

    #[test]
    fn test_end_marker_requires_exact_line() {
        let lines = [
            "+++ Simple System Check +++",
            "Current User:",
            "root",
            "+++ Check Complete +++ (late)",
        ];
        assert!(extract_records(&lines).is_empty());
    }

    #[test]
    fn test_fields_before_first_start_marker_are_kept() {
        let lines = ["Current User:", "root", "+++ Check Complete +++"];
        let records = extract_records(&lines);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get(Field::User), Some(&FieldValue::text("root")));
    }

    #[test]
    fn test_consumed_value_line_is_not_rescanned() {
        // The user line looks like a marker but belongs to the user section.
        let lines = [
            "+++ Simple System Check +++",
            "Current User:",
            "+++ Simple System Check +++",
            "+++ Check Complete +++",
        ];
        let records = extract_records(&lines);

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].get(Field::User),
            Some(&FieldValue::text("+++ Simple System Check +++"))
        );
    }

    #[test]
    fn test_later_section_overwrites_earlier_value() {
        let lines = [
            "+++ Simple System Check +++",
            "Current User:",
            "alice",
            "Current User:",
            "bob",
            "+++ Check Complete +++",
        ];
        let records = extract_records(&lines);
        assert_eq!(records[0].get(Field::User), Some(&FieldValue::text("bob")));
    }

    #[test]
    fn test_parse_log_str_handles_crlf() {
        let content = "+++ Simple System Check +++\r\nCurrent User:\r\nroot\r\n+++ Check Complete +++\r\n";
        let records = parse_log_str(content);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get(Field::User), Some(&FieldValue::text("root")));
    }
}
