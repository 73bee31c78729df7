use std::{fmt, str::FromStr};

pub mod job_state;
pub mod status_report;

pub use job_state::JobState;
pub use status_report::{StatusReport, StatusResponse};

use crate::{
    domain::value_objects::{DispatchId, ProgressPercent},
    error::AppError,
};

/// When the failure signal fires after a transport-level success.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureSignalPolicy {
    /// After every response, whatever the state. Matches the legacy client.
    #[default]
    Always,
    /// Only when the state is neither `SUCCESS` nor `PROGRESS`.
    UnrecognizedState,
    /// Only for `FAILURE` and `REVOKED`.
    TerminalFailure,
}

impl FailureSignalPolicy {
    pub fn signals_failure(&self, state: &JobState) -> bool {
        match self {
            FailureSignalPolicy::Always => true,
            FailureSignalPolicy::UnrecognizedState => !state.is_recognized(),
            FailureSignalPolicy::TerminalFailure => state.is_terminal_failure(),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            FailureSignalPolicy::Always => "always",
            FailureSignalPolicy::UnrecognizedState => "unrecognized-state",
            FailureSignalPolicy::TerminalFailure => "terminal-failure",
        }
    }
}

impl fmt::Display for FailureSignalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailureSignalPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(FailureSignalPolicy::Always),
            "unrecognized-state" | "unrecognized" => Ok(FailureSignalPolicy::UnrecognizedState),
            "terminal-failure" | "terminal" => Ok(FailureSignalPolicy::TerminalFailure),
            other => Err(AppError::Validation(format!(
                "invalid failure signal policy: {other}"
            ))),
        }
    }
}

/// Result of one dispatch that reached the server and decoded cleanly.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    pub dispatch_id: DispatchId,
    pub report: StatusReport,
    /// Percentage handed to the renderer, if any.
    pub rendered: Option<ProgressPercent>,
    pub success_signaled: bool,
    pub failure_signaled: bool,
}

impl DispatchOutcome {
    pub fn state(&self) -> JobState {
        self.report.state()
    }

    pub fn summary(&self) -> String {
        let progress = self
            .rendered
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "state={} progress={} elapsed={}",
            self.state(),
            progress,
            self.report.elapsed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_matrix() {
        let states = [
            JobState::Success,
            JobState::Progress,
            JobState::Pending,
            JobState::Failure,
            JobState::Revoked,
            JobState::Other("WHATEVER".into()),
        ];
        let always: Vec<bool> = states
            .iter()
            .map(|s| FailureSignalPolicy::Always.signals_failure(s))
            .collect();
        assert_eq!(always, vec![true; 6]);

        let unrecognized: Vec<bool> = states
            .iter()
            .map(|s| FailureSignalPolicy::UnrecognizedState.signals_failure(s))
            .collect();
        assert_eq!(unrecognized, vec![false, false, true, true, true, true]);

        let terminal: Vec<bool> = states
            .iter()
            .map(|s| FailureSignalPolicy::TerminalFailure.signals_failure(s))
            .collect();
        assert_eq!(terminal, vec![false, false, false, true, true, false]);
    }

    #[test]
    fn policy_parses_from_config_strings() {
        assert_eq!(
            "Unrecognized-State".parse::<FailureSignalPolicy>().unwrap(),
            FailureSignalPolicy::UnrecognizedState
        );
        assert_eq!(
            "terminal".parse::<FailureSignalPolicy>().unwrap(),
            FailureSignalPolicy::TerminalFailure
        );
        assert!("never".parse::<FailureSignalPolicy>().is_err());
    }
}
