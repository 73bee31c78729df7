use crate::{
    domain::models::DispatchOutcome,
    services::ServiceResult,
};

/// Process exit code for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Ok,
    DispatchFailed,
    JobFailed,
}

impl ExitStatus {
    pub fn from_outcome(result: &ServiceResult<DispatchOutcome>) -> Self {
        match result {
            Err(_) => ExitStatus::DispatchFailed,
            Ok(outcome) if outcome.failure_signaled && outcome.state().is_terminal_failure() => {
                ExitStatus::JobFailed
            }
            Ok(_) => ExitStatus::Ok,
        }
    }

    pub const fn code(&self) -> i32 {
        match self {
            ExitStatus::Ok => 0,
            ExitStatus::DispatchFailed => 1,
            ExitStatus::JobFailed => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Map;

    use super::*;
    use crate::{
        domain::{
            models::{JobState, StatusReport},
            value_objects::{DispatchId, ElapsedTime},
        },
        error::DispatchError,
    };

    fn outcome(state: JobState, failure_signaled: bool) -> DispatchOutcome {
        DispatchOutcome {
            dispatch_id: DispatchId::new(),
            report: StatusReport::Other {
                state,
                elapsed: ElapsedTime::default(),
                extra: Map::new(),
            },
            rendered: None,
            success_signaled: false,
            failure_signaled,
        }
    }

    #[test]
    fn maps_results_to_codes() {
        let err: ServiceResult<DispatchOutcome> = Err(DispatchError::Transport("down".into()));
        assert_eq!(ExitStatus::from_outcome(&err).code(), 1);

        let failed = Ok(outcome(JobState::Failure, true));
        assert_eq!(ExitStatus::from_outcome(&failed), ExitStatus::JobFailed);

        // con la política terminal-failure un PENDING no activa la señal
        let pending = Ok(outcome(JobState::Pending, false));
        assert_eq!(ExitStatus::from_outcome(&pending).code(), 0);
    }
}
