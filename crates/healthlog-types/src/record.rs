use crate::Field;
use chrono::NaiveDateTime;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Rendering used for parsed timestamps in tabular output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single extracted value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Timestamp(NaiveDateTime),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(n) => write!(f, "{}", n),
            // Whole floats keep a fractional digit ("45.0") so they stay
            // distinguishable from integer columns.
            FieldValue::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Timestamp(ts) => write!(f, "{}", ts.format(TIMESTAMP_FORMAT)),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        FieldValue::Timestamp(value)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Integer(n) => serializer.serialize_i64(*n),
            FieldValue::Float(v) => serializer.serialize_f64(*v),
            FieldValue::Timestamp(_) => serializer.collect_str(self),
        }
    }
}

/// One health check report, keyed by field.
///
/// Only fields the extractor could read are present. Iteration follows
/// column order regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthRecord {
    fields: BTreeMap<Field, FieldValue>,
}

impl HealthRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    /// Set a field, replacing any earlier value.
    pub fn set(&mut self, field: Field, value: impl Into<FieldValue>) {
        self.fields.insert(field, value.into());
    }

    pub fn extend(&mut self, fields: impl IntoIterator<Item = (Field, FieldValue)>) {
        self.fields.extend(fields);
    }

    /// Tabular rendering of a field; absent fields render empty.
    pub fn render(&self, field: Field) -> String {
        self.get(field).map(ToString::to_string).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.fields.iter().map(|(field, value)| (*field, value))
    }
}

impl Serialize for HealthRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.as_str(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_float_rendering_keeps_fraction() {
        assert_eq!(FieldValue::Float(45.0).to_string(), "45.0");
        assert_eq!(FieldValue::Float(27.6).to_string(), "27.6");
        assert_eq!(FieldValue::Float(0.15).to_string(), "0.15");
        assert_eq!(FieldValue::Integer(0).to_string(), "0");
    }

    #[test]
    fn test_timestamp_rendering() {
        let ts = NaiveDate::from_ymd_opt(2025, 1, 6)
            .unwrap()
            .and_hms_opt(10, 0, 5)
            .unwrap();
        assert_eq!(FieldValue::Timestamp(ts).to_string(), "2025-01-06 10:00:05");
    }

    #[test]
    fn test_iteration_follows_column_order() {
        let mut record = HealthRecord::new();
        record.set(Field::LoadAverage, 0.5);
        record.set(Field::User, "root");
        record.set(Field::Date, "2025-01-06");

        let order: Vec<Field> = record.iter().map(|(field, _)| field).collect();
        assert_eq!(order, vec![Field::Date, Field::User, Field::LoadAverage]);
    }

    #[test]
    fn test_render_absent_field_is_empty() {
        let record = HealthRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.render(Field::DiskTotal), "");
    }

    #[test]
    fn test_serialize_only_populated_fields() {
        let mut record = HealthRecord::new();
        record.set(Field::DiskUsagePercent, 45_i64);
        record.set(Field::DiskTotal, "20G");
        record.set(Field::MemoryUsagePercent, 27.6);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "disk_usage_percent": 45,
                "disk_total": "20G",
                "memory_usage_percent": 27.6,
            })
        );
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut record = HealthRecord::new();
        record.set(Field::User, "alice");
        let snapshot = record.clone();
        record.set(Field::User, "bob");

        assert_eq!(snapshot.get(Field::User), Some(&FieldValue::text("alice")));
    }
}
