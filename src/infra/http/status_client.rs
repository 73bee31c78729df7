use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    domain::traits::StatusTransport,
    error::{AppError, DispatchError},
    infra::config::AppConfig,
};

#[derive(Clone, Debug)]
pub struct HttpStatusClient {
    http: Client,
}

impl HttpStatusClient {
    pub fn new_from_config(cfg: &AppConfig) -> Result<Self, AppError> {
        let timeout = Duration::from_millis(cfg.http_timeout_ms.max(1));
        let http = Client::builder()
            .user_agent("progress-poller/status-client")
            .timeout(timeout)
            .build()
            .map_err(|err| AppError::Internal(format!("failed to build http client: {err}")))?;
        Ok(Self { http })
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl StatusTransport for HttpStatusClient {
    async fn post(&self, url: &str) -> Result<Vec<u8>, DispatchError> {
        let response = self
            .http
            .post(url)
            .send()
            .await
            .map_err(|err| DispatchError::Transport(format!("failed to call {url}: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<empty>".to_string());
            return Err(DispatchError::Transport(format!(
                "status request failed ({status}): {body}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| DispatchError::Transport(format!("failed to read status body: {err}")))?;
        debug!(%url, bytes = body.len(), "status response received");
        Ok(body.to_vec())
    }
}
