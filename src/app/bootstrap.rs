use std::sync::Arc;

use crate::{
    domain::traits::{Alerter, ProgressRenderer, StatusTransport},
    error::AppError,
    infra::{
        config::AppConfig,
        http::HttpStatusClient,
        ui::{
            ConsoleAlerter, ElapsedTimeHandle, ElementProgressRenderer, FanOutRenderer,
            ProgressBarHandle, TerminalProgressRenderer,
        },
    },
    services::RequestDispatcher,
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub dispatcher: RequestDispatcher,
    pub progress_bar: ProgressBarHandle,
    pub elapsed_time: ElapsedTimeHandle,
}

/// Wires the HTTP transport, the element view (mirrored to stdout) and the stderr alerter.
pub fn build_app(config: AppConfig) -> Result<AppState, AppError> {
    let transport: Arc<dyn StatusTransport> = Arc::new(HttpStatusClient::new_from_config(&config)?);

    let progress_bar = ProgressBarHandle::new();
    let elapsed_time = ElapsedTimeHandle::new();
    let elements = ElementProgressRenderer::new(progress_bar.clone(), elapsed_time.clone());
    let terminal = TerminalProgressRenderer::stdout(config.progress_bar_width);
    let targets: Vec<Arc<dyn ProgressRenderer>> = vec![Arc::new(elements), Arc::new(terminal)];
    let renderer: Arc<dyn ProgressRenderer> = Arc::new(FanOutRenderer::new(targets));

    let alerter: Arc<dyn Alerter> = Arc::new(ConsoleAlerter::stderr());

    let dispatcher = RequestDispatcher::new(transport, renderer, alerter, config.failure_policy);

    Ok(AppState {
        config,
        dispatcher,
        progress_bar,
        elapsed_time,
    })
}
