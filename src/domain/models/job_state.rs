use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Job state as reported by the status endpoint.
///
/// Matching is exact: `"progress"` is not `PROGRESS`, it lands in [`JobState::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JobState {
    Pending,
    Started,
    Progress,
    Success,
    Failure,
    Retry,
    Revoked,
    Other(String),
}

impl JobState {
    pub fn as_str(&self) -> &str {
        match self {
            JobState::Pending => "PENDING",
            JobState::Started => "STARTED",
            JobState::Progress => "PROGRESS",
            JobState::Success => "SUCCESS",
            JobState::Failure => "FAILURE",
            JobState::Retry => "RETRY",
            JobState::Revoked => "REVOKED",
            JobState::Other(raw) => raw.as_str(),
        }
    }

    /// States the dispatcher renders progress for.
    pub const fn is_recognized(&self) -> bool {
        matches!(self, JobState::Success | JobState::Progress)
    }

    pub const fn is_terminal_failure(&self) -> bool {
        matches!(self, JobState::Failure | JobState::Revoked)
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for JobState {
    fn from(s: &str) -> Self {
        match s {
            "PENDING" => JobState::Pending,
            "STARTED" => JobState::Started,
            "PROGRESS" => JobState::Progress,
            "SUCCESS" => JobState::Success,
            "FAILURE" => JobState::Failure,
            "RETRY" => JobState::Retry,
            "REVOKED" => JobState::Revoked,
            other => JobState::Other(other.to_string()),
        }
    }
}

impl FromStr for JobState {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(JobState::from(s))
    }
}

impl<'de> Deserialize<'de> for JobState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // un state que no es string no es error: cae en Other con su texto JSON
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => JobState::from(s.as_str()),
            other => JobState::Other(other.to_string()),
        })
    }
}
