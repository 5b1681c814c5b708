//! Fixed literals of the report template.

pub const RECORD_START: &str = "+++ Simple System Check +++";
pub const RECORD_END: &str = "+++ Check Complete +++";

pub const DATE: &str = "Date:";
pub const DISK_USAGE: &str = "Disk Usage:";
pub const MEMORY_USAGE: &str = "Memory Usage:";
pub const CURRENT_USER: &str = "Current User:";
pub const SYSTEM_UPTIME: &str = "System Uptime:";

/// Label of the physical memory row in `free -h` output.
pub const MEMORY_ROW_LABEL: &str = "Mem:";
