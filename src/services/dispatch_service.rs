use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use crate::{
    domain::{
        models::{DispatchOutcome, FailureSignalPolicy, JobState, StatusReport},
        traits::{Alerter, ProgressRenderer, StatusTransport},
        value_objects::DispatchId,
    },
    error::{DispatchError, GENERIC_ALERT_MESSAGE},
};

use super::ServiceResult;

/// Sends one status request per call and turns the answer into a render plus signals.
///
/// Calls are independent: two overlapping dispatches both write to the same renderer
/// and whichever finishes last wins.
#[derive(Clone)]
pub struct RequestDispatcher {
    transport: Arc<dyn StatusTransport>,
    renderer: Arc<dyn ProgressRenderer>,
    alerter: Arc<dyn Alerter>,
    policy: FailureSignalPolicy,
}

impl RequestDispatcher {
    pub fn new(
        transport: Arc<dyn StatusTransport>,
        renderer: Arc<dyn ProgressRenderer>,
        alerter: Arc<dyn Alerter>,
        policy: FailureSignalPolicy,
    ) -> Self {
        info!(policy = %policy, "request dispatcher ready");
        Self {
            transport,
            renderer,
            alerter,
            policy,
        }
    }

    pub fn policy(&self) -> FailureSignalPolicy {
        self.policy
    }

    pub async fn dispatch(&self, url: &str) -> ServiceResult<DispatchOutcome> {
        let dispatch_id = DispatchId::new();
        let span = info_span!("dispatch", %dispatch_id, %url);
        self.dispatch_inner(dispatch_id, url).instrument(span).await
    }

    /// Callback form: `on_success` runs for `SUCCESS`, `on_failure` runs whenever the
    /// policy says so. Neither runs when the request itself failed.
    pub async fn dispatch_with_callbacks<S, F>(
        &self,
        url: &str,
        on_success: S,
        on_failure: F,
    ) -> ServiceResult<DispatchOutcome>
    where
        S: FnOnce(),
        F: FnOnce(),
    {
        let outcome = self.dispatch(url).await?;
        if outcome.success_signaled {
            on_success();
        }
        if outcome.failure_signaled {
            on_failure();
        }
        Ok(outcome)
    }

    async fn dispatch_inner(
        &self,
        dispatch_id: DispatchId,
        url: &str,
    ) -> ServiceResult<DispatchOutcome> {
        let body = self
            .transport
            .post(url)
            .await
            .map_err(|err| self.raise(err))?;

        let report = StatusReport::from_body(&body).map_err(|err| self.raise(err))?;
        let rendered = report.progress().map_err(|err| self.raise(err))?;

        if let Some(progress) = rendered {
            self.renderer.render(progress, report.elapsed());
        }

        let state = report.state();
        let success_signaled = state == JobState::Success;
        let failure_signaled = self.policy.signals_failure(&state);
        if failure_signaled && state.is_recognized() {
            debug!(%state, "failure signal fires for a recognized state (policy=always)");
        }

        let outcome = DispatchOutcome {
            dispatch_id,
            report,
            rendered,
            success_signaled,
            failure_signaled,
        };
        info!(
            %state,
            progress = outcome.rendered.map(|p| p.0),
            elapsed = %outcome.report.elapsed(),
            success_signaled,
            failure_signaled,
            "dispatch completed"
        );
        Ok(outcome)
    }

    fn raise(&self, err: DispatchError) -> DispatchError {
        warn!(error = %err, "dispatch failed");
        self.alerter.alert(GENERIC_ALERT_MESSAGE);
        err
    }
}
