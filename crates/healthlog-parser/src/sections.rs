use crate::markers;
use crate::timestamp::parse_report_date;
use healthlog_types::{Field, FieldValue};
use regex::Regex;
use std::sync::LazyLock;

/// First percentage in a `df -h` data row, e.g. "45%"
static PERCENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)%").unwrap());

/// First load average figure in `uptime` output
static LOAD_AVERAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"load average: ([\d.]+)").unwrap());

/// A sub-block introduced by a section marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Date,
    DiskUsage,
    MemoryUsage,
    CurrentUser,
    SystemUptime,
}

/// Fields read by one section handler.
#[derive(Debug, Default)]
pub(crate) struct SectionOutput {
    pub fields: Vec<(Field, FieldValue)>,
    /// Index of the last line the handler consumed. May point past the end
    /// of input when a look-ahead section is truncated.
    pub last_consumed: usize,
}

impl SectionOutput {
    fn at(last_consumed: usize) -> Self {
        Self {
            fields: Vec::new(),
            last_consumed,
        }
    }

    fn push(&mut self, field: Field, value: impl Into<FieldValue>) {
        self.fields.push((field, value.into()));
    }
}

impl Section {
    pub fn marker(&self) -> &'static str {
        match self {
            Section::Date => markers::DATE,
            Section::DiskUsage => markers::DISK_USAGE,
            Section::MemoryUsage => markers::MEMORY_USAGE,
            Section::CurrentUser => markers::CURRENT_USER,
            Section::SystemUptime => markers::SYSTEM_UPTIME,
        }
    }

    /// Section whose marker prefixes `line`, if any.
    pub fn detect(line: &str) -> Option<Section> {
        [
            Section::Date,
            Section::DiskUsage,
            Section::MemoryUsage,
            Section::CurrentUser,
            Section::SystemUptime,
        ]
        .into_iter()
        .find(|section| line.starts_with(section.marker()))
    }

    /// Run the section handler with `cursor` on the marker line.
    pub fn extract<S: AsRef<str>>(&self, lines: &[S], cursor: usize) -> SectionOutput {
        match self {
            Section::Date => date(lines, cursor),
            Section::DiskUsage => disk_usage(lines, cursor),
            Section::MemoryUsage => memory_usage(lines, cursor),
            Section::CurrentUser => current_user(lines, cursor),
            Section::SystemUptime => system_uptime(lines, cursor),
        }
    }
}

fn line_at<S: AsRef<str>>(lines: &[S], index: usize) -> Option<&str> {
    lines.get(index).map(|line| line.as_ref().trim())
}

fn date<S: AsRef<str>>(lines: &[S], cursor: usize) -> SectionOutput {
    let mut out = SectionOutput::at(cursor);
    let Some(line) = line_at(lines, cursor) else {
        return out;
    };
    let raw = line
        .strip_prefix(markers::DATE)
        .unwrap_or(line)
        .trim();

    match parse_report_date(raw) {
        Some(timestamp) => {
            out.push(Field::Timestamp, timestamp);
            out.push(Field::Date, timestamp.format("%Y-%m-%d").to_string());
        }
        None => {
            tracing::debug!(raw, "unrecognized date, keeping raw value");
            out.push(Field::Timestamp, raw);
            out.push(Field::Date, raw);
        }
    }
    out
}

/// Marker, column header, then one `df -h` row.
fn disk_usage<S: AsRef<str>>(lines: &[S], cursor: usize) -> SectionOutput {
    let data_index = cursor + 2;
    let mut out = SectionOutput::at(data_index);
    let Some(data) = line_at(lines, data_index) else {
        return out;
    };

    if let Some(percent) = PERCENT_REGEX
        .captures(data)
        .and_then(|caps| caps[1].parse::<i64>().ok())
    {
        out.push(Field::DiskUsagePercent, percent);
    }

    let tokens: Vec<&str> = data.split_whitespace().collect();
    if tokens.len() >= 5 {
        out.push(Field::DiskTotal, tokens[1]);
        out.push(Field::DiskUsed, tokens[2]);
        out.push(Field::DiskAvailable, tokens[3]);
    }
    out
}

/// Marker, column header, then the `Mem:` row of `free -h`.
fn memory_usage<S: AsRef<str>>(lines: &[S], cursor: usize) -> SectionOutput {
    let data_index = cursor + 2;
    let mut out = SectionOutput::at(data_index);
    let Some(data) = line_at(lines, data_index) else {
        return out;
    };

    let tokens: Vec<&str> = data.split_whitespace().collect();
    if tokens.len() >= 3 && tokens[0] == markers::MEMORY_ROW_LABEL {
        out.push(Field::MemoryTotal, tokens[1]);
        out.push(Field::MemoryUsed, tokens[2]);
        // Length guard is looser than the index read; rows with 4-6 tokens
        // leave available unset.
        if tokens.len() > 3 {
            if let Some(available) = tokens.get(6) {
                out.push(Field::MemoryAvailable, *available);
            }
        } else {
            out.push(Field::MemoryAvailable, "");
        }
    }

    match memory_usage_percent(&tokens) {
        UsagePercent::Computed(percent) => out.push(Field::MemoryUsagePercent, percent),
        UsagePercent::NotApplicable => {}
        UsagePercent::Unreadable => {
            tracing::debug!(line = data, "memory figures unreadable, using 0");
            out.push(Field::MemoryUsagePercent, 0_i64);
        }
    }
    out
}

enum UsagePercent {
    Computed(f64),
    /// Total is zero or negative.
    NotApplicable,
    /// Total or used is missing or not numeric.
    Unreadable,
}

/// Used/total of the memory row, independent of the row label.
fn memory_usage_percent(tokens: &[&str]) -> UsagePercent {
    let figure = |index: usize| -> Option<f64> {
        let digits: String = tokens
            .get(index)?
            .chars()
            .filter(|c| !c.is_ascii_alphabetic())
            .collect();
        digits.trim().parse::<f64>().ok()
    };

    match (figure(1), figure(2)) {
        (Some(total), Some(used)) if total > 0.0 => {
            UsagePercent::Computed(round_to_tenth(used / total * 100.0))
        }
        (Some(_), Some(_)) => UsagePercent::NotApplicable,
        _ => UsagePercent::Unreadable,
    }
}

/// One decimal, rounding the exact binary value with ties to even.
fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

fn current_user<S: AsRef<str>>(lines: &[S], cursor: usize) -> SectionOutput {
    let mut out = SectionOutput::at(cursor + 1);
    if let Some(user) = line_at(lines, cursor + 1) {
        out.push(Field::User, user);
    }
    out
}

fn system_uptime<S: AsRef<str>>(lines: &[S], cursor: usize) -> SectionOutput {
    let mut out = SectionOutput::at(cursor + 1);
    let Some(uptime) = line_at(lines, cursor + 1) else {
        return out;
    };

    out.push(Field::Uptime, uptime);
    if let Some(load) = LOAD_AVERAGE_REGEX
        .captures(uptime)
        .and_then(|caps| caps[1].parse::<f64>().ok())
    {
        out.push(Field::LoadAverage, load);
    }
    out
}
