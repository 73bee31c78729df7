use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use uuid::Uuid;

use crate::error::DispatchError;

/// Completion percentage. Not clamped: 150 and -5 are both representable and rendered as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProgressPercent(pub i64);

impl ProgressPercent {
    pub const COMPLETE: ProgressPercent = ProgressPercent(100);

    /// `floor(current * 100 / total)`.
    pub fn from_counts(current: f64, total: f64) -> Result<Self, DispatchError> {
        if !current.is_finite() || !total.is_finite() {
            return Err(DispatchError::Payload(format!(
                "non-finite progress counts: current={current}, total={total}"
            )));
        }
        if total == 0.0 {
            return Err(DispatchError::Payload("progress total is zero".into()));
        }
        let ratio = (current * 100.0 / total).floor();
        if ratio < i64::MIN as f64 || ratio > i64::MAX as f64 {
            return Err(DispatchError::Payload(format!(
                "progress out of range: {ratio}"
            )));
        }
        Ok(Self(ratio as i64))
    }
}

impl fmt::Display for ProgressPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Server-reported elapsed time, kept as an opaque display string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ElapsedTime(pub String);

impl ElapsedTime {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Strings are shown verbatim, null as empty, anything else as its JSON text.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => Self(s.clone()),
            Value::Null => Self::default(),
            other => Self(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ElapsedTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(ElapsedTime::from_json(&value))
    }
}

impl From<&str> for ElapsedTime {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Correlates the log records of one dispatch when several are in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DispatchId(pub Uuid);

impl DispatchId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DispatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DispatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
