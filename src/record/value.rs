use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;

/// A capture timestamp, with the UTC offset when the source recorded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreationDate {
    pub local: NaiveDateTime,
    pub offset: Option<FixedOffset>,
}

impl CreationDate {
    pub fn new(local: NaiveDateTime, offset: Option<FixedOffset>) -> Self {
        Self { local, offset }
    }

    /// Attach an offset to the wall-clock time (the time itself is not shifted).
    pub fn with_offset(self, offset: FixedOffset) -> Self {
        Self {
            offset: Some(offset),
            ..self
        }
    }

    /// The offset in seconds east of UTC, if known.
    pub fn offset_seconds(&self) -> Option<i32> {
        self.offset.map(|o| o.local_minus_utc())
    }

    /// The zoned timestamp, when an offset is known.
    pub fn to_datetime(&self) -> Option<DateTime<FixedOffset>> {
        let offset = self.offset?;
        self.local.and_local_timezone(offset).single()
    }

    /// Format the wall-clock part with a chrono format string.
    pub fn format(&self, fmt: &str) -> String {
        self.local.format(fmt).to_string()
    }
}

impl From<NaiveDateTime> for CreationDate {
    fn from(local: NaiveDateTime) -> Self {
        Self::new(local, None)
    }
}

impl From<DateTime<FixedOffset>> for CreationDate {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::new(dt.naive_local(), Some(*dt.offset()))
    }
}

impl fmt::Display for CreationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.local.format("%Y-%m-%d %H:%M:%S"))?;
        if let Some(offset) = self.offset {
            write!(f, "{offset}")?;
        }
        Ok(())
    }
}

impl Serialize for CreationDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A canonical field value.
///
/// Whole numbers serialize as JSON integers (`600`, not `600.0`).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    List(Vec<String>),
    Date(CreationDate),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&CreationDate> {
        match self {
            Value::Date(d) => Some(d),
            _ => None,
        }
    }
}

/// Serialize a number as an integer when it has no fractional part.
pub(crate) fn serialize_number<S: Serializer>(n: f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_EXACT {
        serializer.serialize_i64(n as i64)
    } else {
        serializer.serialize_f64(n)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Text(s) => serializer.serialize_str(s),
            Value::Number(n) => serialize_number(*n, serializer),
            Value::List(items) => items.serialize(serializer),
            Value::Date(d) => d.serialize(serializer),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{n}"),
            Value::List(items) => f.write_str(&items.join(", ")),
            Value::Date(d) => write!(f, "{d}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<CreationDate> for Value {
    fn from(d: CreationDate) -> Self {
        Value::Date(d)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(d: NaiveDateTime) -> Self {
        Value::Date(d.into())
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(d: DateTime<FixedOffset>) -> Self {
        Value::Date(d.into())
    }
}

/// A field slot in a canonical mapping.
///
/// `Absent` is the explicit "false" sentinel: the field was recognized in the
/// raw tags but its value could not be used. It serializes as `false`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Present(Value),
    Absent,
}

impl FieldValue {
    pub fn value(&self) -> Option<&Value> {
        match self {
            FieldValue::Present(v) => Some(v),
            FieldValue::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, FieldValue::Present(_))
    }
}

impl From<Option<Value>> for FieldValue {
    fn from(value: Option<Value>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Present)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Present(v) => v.serialize(serializer),
            FieldValue::Absent => serializer.serialize_bool(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2015, 4, 1)
            .unwrap()
            .and_hms_opt(12, 11, 9)
            .unwrap()
    }

    #[test]
    fn creation_date_display_with_and_without_offset() {
        let naive = CreationDate::from(noon());
        assert_eq!(naive.to_string(), "2015-04-01 12:11:09");
        assert!(naive.to_datetime().is_none());

        let zoned = naive.with_offset(FixedOffset::east_opt(7200).unwrap());
        assert_eq!(zoned.to_string(), "2015-04-01 12:11:09+02:00");
        assert_eq!(zoned.offset_seconds(), Some(7200));
        assert_eq!(zoned.format("%Y:%m:%d %H:%M:%S"), "2015:04:01 12:11:09");
        assert_eq!(
            zoned.to_datetime().unwrap().to_rfc3339(),
            "2015-04-01T12:11:09+02:00"
        );
    }

    #[test]
    fn value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Value::from("f/8.0")).unwrap(), r#""f/8.0""#);
        assert_eq!(serde_json::to_string(&Value::from(600)).unwrap(), "600");
        assert_eq!(serde_json::to_string(&Value::from(-35.0)).unwrap(), "-35");
        assert_eq!(serde_json::to_string(&Value::from(122.053)).unwrap(), "122.053");
        assert_eq!(
            serde_json::to_string(&Value::from(vec!["a", "b"])).unwrap(),
            r#"["a","b"]"#
        );
        assert_eq!(
            serde_json::to_string(&Value::from(noon())).unwrap(),
            r#""2015-04-01 12:11:09""#
        );
    }

    #[test]
    fn absent_serializes_as_false() {
        assert_eq!(serde_json::to_string(&FieldValue::Absent).unwrap(), "false");
        assert_eq!(FieldValue::from(None), FieldValue::Absent);
        assert!(FieldValue::from(Some(Value::from(1))).is_present());
    }

    #[test]
    fn number_display_is_shortest() {
        assert_eq!(Value::from(600).to_string(), "600");
        assert_eq!(Value::from(122.053).to_string(), "122.053");
        assert_eq!(Value::from(vec!["a", "b"]).to_string(), "a, b");
    }
}
