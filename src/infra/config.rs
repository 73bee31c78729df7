use std::env;

use dotenvy::dotenv;

use crate::{domain::models::FailureSignalPolicy, error::AppError};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub status_url: Option<String>,
    pub http_timeout_ms: u64,
    pub failure_policy: FailureSignalPolicy,
    pub progress_bar_width: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            status_url: None,
            http_timeout_ms: 30_000,
            failure_policy: FailureSignalPolicy::default(),
            progress_bar_width: 40,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup (process env, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let status_url = lookup("STATUS_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let http_timeout_ms: u64 = match lookup("HTTP_TIMEOUT_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|err| AppError::Validation(format!("invalid HTTP_TIMEOUT_MS: {err}")))?,
            None => defaults.http_timeout_ms,
        };

        let failure_policy = match lookup("FAILURE_SIGNAL_POLICY") {
            Some(raw) => raw.parse::<FailureSignalPolicy>().map_err(|err| {
                AppError::Validation(format!("invalid FAILURE_SIGNAL_POLICY: {err}"))
            })?,
            None => defaults.failure_policy,
        };

        let progress_bar_width: usize = match lookup("PROGRESS_BAR_WIDTH") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|err| {
                AppError::Validation(format!("invalid PROGRESS_BAR_WIDTH: {err}"))
            })?,
            None => defaults.progress_bar_width,
        };

        Ok(Self {
            status_url,
            http_timeout_ms: http_timeout_ms.max(1),
            failure_policy,
            progress_bar_width: progress_bar_width.max(1),
        })
    }

    pub fn require_status_url(&self) -> Result<&str, AppError> {
        self.status_url
            .as_deref()
            .ok_or_else(|| AppError::Validation("STATUS_URL is not set".into()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert!(config.status_url.is_none());
        assert_eq!(config.http_timeout_ms, 30_000);
        assert_eq!(config.failure_policy, FailureSignalPolicy::Always);
        assert_eq!(config.progress_bar_width, 40);
        assert!(config.require_status_url().is_err());
    }

    #[test]
    fn reads_all_values() {
        let config = config_from(&[
            ("STATUS_URL", " http://localhost:5000/status/42 "),
            ("HTTP_TIMEOUT_MS", "0"),
            ("FAILURE_SIGNAL_POLICY", "terminal-failure"),
            ("PROGRESS_BAR_WIDTH", "20"),
        ])
        .unwrap();
        assert_eq!(
            config.require_status_url().unwrap(),
            "http://localhost:5000/status/42"
        );
        assert_eq!(config.http_timeout_ms, 1);
        assert_eq!(config.failure_policy, FailureSignalPolicy::TerminalFailure);
        assert_eq!(config.progress_bar_width, 20);
    }

    #[test]
    fn rejects_invalid_values() {
        let err = config_from(&[("HTTP_TIMEOUT_MS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("HTTP_TIMEOUT_MS"));

        let err = config_from(&[("FAILURE_SIGNAL_POLICY", "sometimes")]).unwrap_err();
        assert!(err.to_string().contains("FAILURE_SIGNAL_POLICY"));
    }
}
