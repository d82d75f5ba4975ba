use std::time::Duration;

use crate::{DispatchError, DispatchOk, FailureKind, SubmissionPayload};

#[derive(Debug, Clone)]
pub struct DispatchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Fire-and-forget delivery seam. A dispatch is awaited for completion only;
/// the response stays unread, so `DispatchOk` carries no payload and any
/// non-exception completion counts as success.
#[async_trait::async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(
        &self,
        endpoint: &str,
        payload: &SubmissionPayload,
    ) -> Result<DispatchOk, DispatchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestDispatcher {
    settings: DispatchSettings,
}

impl ReqwestDispatcher {
    pub fn new(settings: DispatchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, DispatchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| DispatchError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Dispatcher for ReqwestDispatcher {
    async fn dispatch(
        &self,
        endpoint: &str,
        payload: &SubmissionPayload,
    ) -> Result<DispatchOk, DispatchError> {
        let parsed = url::Url::parse(endpoint)
            .map_err(|err| DispatchError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        let client = self.build_client()?;

        // Completion is the only signal; the status line and body are never
        // inspected (opaque cross-origin response mode). A 4xx/5xx therefore
        // still counts as a successful dispatch.
        client
            .post(parsed)
            .json(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        Ok(DispatchOk)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> DispatchError {
    if err.is_timeout() {
        return DispatchError::new(FailureKind::Timeout, err.to_string());
    }
    DispatchError::new(FailureKind::Network, err.to_string())
}
