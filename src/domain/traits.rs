use async_trait::async_trait;

use crate::{
    domain::value_objects::{ElapsedTime, ProgressPercent},
    error::DispatchError,
};

/// Sends the status request and hands back the raw response body.
///
/// Implementations map every HTTP-level problem (connect, timeout, non-2xx) to
/// [`DispatchError::Transport`].
#[async_trait]
pub trait StatusTransport: Send + Sync {
    async fn post(&self, url: &str) -> Result<Vec<u8>, DispatchError>;
}

/// Writes a percentage and an elapsed time to some display surface.
pub trait ProgressRenderer: Send + Sync {
    fn render(&self, progress: ProgressPercent, elapsed: &ElapsedTime);
}

/// Blocking, user-facing notice.
pub trait Alerter: Send + Sync {
    fn alert(&self, message: &str);
}
