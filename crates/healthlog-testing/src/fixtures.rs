//! Health report fixtures.
//!
//! Reports are assembled line by line so tests can drop, reorder or
//! corrupt individual sections.

pub const RECORD_START: &str = "+++ Simple System Check +++";
pub const RECORD_END: &str = "+++ Check Complete +++";

pub const DISK_HEADER: &str = "Filesystem      Size  Used Avail Use% Mounted on";
pub const DISK_ROW: &str = "/dev/sda1        20G  8.5G   11G  45% /";

pub const MEMORY_HEADER: &str =
    "               total        used        free      shared  buff/cache   available";
pub const MEMORY_ROW: &str =
    "Mem:           7.6Gi       2.1Gi       3.2Gi       0.0Ki       2.3Gi       5.2Gi";

pub const UPTIME_ROW: &str =
    " 10:00:00 up 3 days,  2:14,  1 user,  load average: 0.15, 0.10, 0.05";

/// Builder for one report block.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    lines: Vec<String>,
}

impl ReportBuilder {
    /// Start a block with the start marker.
    pub fn new() -> Self {
        Self {
            lines: vec![RECORD_START.to_string()],
        }
    }

    /// A block with every section filled from the default rows.
    pub fn full(date: &str) -> Self {
        Self::new()
            .date(date)
            .disk(DISK_ROW)
            .memory(MEMORY_ROW)
            .user("shlimmy")
            .uptime(UPTIME_ROW)
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn date(self, value: &str) -> Self {
        self.line(format!("Date: {}", value))
    }

    pub fn disk(self, row: &str) -> Self {
        self.line("Disk Usage:").line(DISK_HEADER).line(row)
    }

    pub fn memory(self, row: &str) -> Self {
        self.line("Memory Usage:").line(MEMORY_HEADER).line(row)
    }

    pub fn user(self, name: &str) -> Self {
        self.line("Current User:").line(name)
    }

    pub fn uptime(self, row: &str) -> Self {
        self.line("System Uptime:").line(row)
    }

    /// Close the block with the end marker.
    pub fn complete(self) -> String {
        self.line(RECORD_END).unterminated()
    }

    /// Render the block without an end marker.
    pub fn unterminated(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Two complete reports a day apart.
pub fn sample_log() -> String {
    let mut log = ReportBuilder::full("Mon Jan 06 10:00:00 UTC 2025").complete();
    log.push_str(
        &ReportBuilder::new()
            .date("Tue Jan 07 10:00:00 UTC 2025")
            .disk("/dev/sda1        20G  9.1G   10G  48% /")
            .memory("Mem:           7.6Gi       3.8Gi       1.5Gi       0.0Ki       2.3Gi       3.5Gi")
            .user("shlimmy")
            .uptime(" 10:00:00 up 4 days,  2:14,  1 user,  load average: 1.25, 0.90, 0.70")
            .complete(),
    );
    log
}
