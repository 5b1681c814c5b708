use std::fmt;

/// A field recognized inside a health check report.
///
/// Variant order is the tabular column order; `Ord` follows it so records
/// keyed by `Field` iterate in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Date,
    Timestamp,
    DiskUsagePercent,
    DiskTotal,
    DiskUsed,
    DiskAvailable,
    MemoryUsagePercent,
    MemoryTotal,
    MemoryUsed,
    MemoryAvailable,
    User,
    Uptime,
    LoadAverage,
}

impl Field {
    /// Every field, in column order.
    pub const ALL: [Field; 13] = [
        Field::Date,
        Field::Timestamp,
        Field::DiskUsagePercent,
        Field::DiskTotal,
        Field::DiskUsed,
        Field::DiskAvailable,
        Field::MemoryUsagePercent,
        Field::MemoryTotal,
        Field::MemoryUsed,
        Field::MemoryAvailable,
        Field::User,
        Field::Uptime,
        Field::LoadAverage,
    ];

    /// Column name used in tabular and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Timestamp => "timestamp",
            Field::DiskUsagePercent => "disk_usage_percent",
            Field::DiskTotal => "disk_total",
            Field::DiskUsed => "disk_used",
            Field::DiskAvailable => "disk_available",
            Field::MemoryUsagePercent => "memory_usage_percent",
            Field::MemoryTotal => "memory_total",
            Field::MemoryUsed => "memory_used",
            Field::MemoryAvailable => "memory_available",
            Field::User => "user",
            Field::Uptime => "uptime",
            Field::LoadAverage => "load_average",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
