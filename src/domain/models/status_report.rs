use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    domain::{
        models::job_state::JobState,
        value_objects::{ElapsedTime, ProgressPercent},
    },
    error::DispatchError,
};

/// Raw body returned by the status endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub state: Option<JobState>,
    #[serde(default)]
    pub current: Option<Value>,
    #[serde(default)]
    pub total: Option<Value>,
    #[serde(default)]
    pub elapsed_time: ElapsedTime,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Typed reading of a [`StatusResponse`].
#[derive(Debug, Clone, PartialEq)]
pub enum StatusReport {
    Success {
        elapsed: ElapsedTime,
        extra: Map<String, Value>,
    },
    Progress {
        current: f64,
        total: f64,
        elapsed: ElapsedTime,
        extra: Map<String, Value>,
    },
    Other {
        state: JobState,
        elapsed: ElapsedTime,
        extra: Map<String, Value>,
    },
}

impl StatusReport {
    pub fn from_body(body: &[u8]) -> Result<Self, DispatchError> {
        let raw: StatusResponse = serde_json::from_slice(body)
            .map_err(|err| DispatchError::Transport(format!("invalid status body: {err}")))?;
        Self::try_from(raw)
    }

    pub fn state(&self) -> JobState {
        match self {
            StatusReport::Success { .. } => JobState::Success,
            StatusReport::Progress { .. } => JobState::Progress,
            StatusReport::Other { state, .. } => state.clone(),
        }
    }

    pub fn elapsed(&self) -> &ElapsedTime {
        match self {
            StatusReport::Success { elapsed, .. }
            | StatusReport::Progress { elapsed, .. }
            | StatusReport::Other { elapsed, .. } => elapsed,
        }
    }

    /// Percentage to display, `None` for states that do not touch the progress bar.
    pub fn progress(&self) -> Result<Option<ProgressPercent>, DispatchError> {
        match self {
            StatusReport::Success { .. } => Ok(Some(ProgressPercent::COMPLETE)),
            StatusReport::Progress { current, total, .. } => {
                ProgressPercent::from_counts(*current, *total).map(Some)
            }
            StatusReport::Other { .. } => Ok(None),
        }
    }
}

impl TryFrom<StatusResponse> for StatusReport {
    type Error = DispatchError;

    fn try_from(raw: StatusResponse) -> Result<Self, Self::Error> {
        let state = raw.state.unwrap_or_else(|| JobState::Other(String::new()));
        match state {
            JobState::Success => Ok(StatusReport::Success {
                elapsed: raw.elapsed_time,
                extra: raw.extra,
            }),
            JobState::Progress => {
                let current = require_number("current", raw.current.as_ref())?;
                let total = require_number("total", raw.total.as_ref())?;
                // valida aquí para no reportar un PROGRESS imposible de dibujar
                ProgressPercent::from_counts(current, total)?;
                Ok(StatusReport::Progress {
                    current,
                    total,
                    elapsed: raw.elapsed_time,
                    extra: raw.extra,
                })
            }
            state => Ok(StatusReport::Other {
                state,
                elapsed: raw.elapsed_time,
                extra: raw.extra,
            }),
        }
    }
}

fn require_number(field: &str, value: Option<&Value>) -> Result<f64, DispatchError> {
    match value {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| DispatchError::Payload(format!("{field} is not representable"))),
        // numeric strings such as "30" are accepted too
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| DispatchError::Payload(format!("{field} is not numeric: {s:?}"))),
        Some(other) => Err(DispatchError::Payload(format!(
            "{field} is not numeric: {other}"
        ))),
        None => Err(DispatchError::Payload(format!(
            "PROGRESS payload missing {field}"
        ))),
    }
}
