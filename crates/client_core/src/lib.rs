use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::OperationRequest,
    protocol::{output_from_success_body, ErrorBody, TextRequest},
};
use tracing::debug;

pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod files;
pub mod notify;
pub mod ui;

pub use config::{load_client_settings, ClientSettings};
pub use controller::{BusyGuard, OperationController};
pub use error::OperationError;
pub use notify::{Toast, ToastSurface};
pub use ui::{
    BusyableControl, ElementId, Notifier, PanelBindings, SharedControl, SharedPanel, SharedText,
    TabState, TextSurface, UiBindings,
};

/// Performs the actual transformation. The client never encodes locally.
#[async_trait]
pub trait CodecBackend: Send + Sync {
    async fn submit(&self, request: &OperationRequest) -> Result<String, OperationError>;
}

#[derive(Debug, Clone)]
pub struct HttpCodecBackend {
    http: Client,
    server_url: String,
}

impl HttpCodecBackend {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            server_url: normalize_server_url(server_url.into()),
        }
    }

    pub fn with_timeout(
        server_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, OperationError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            server_url: normalize_server_url(server_url.into()),
        })
    }

    pub fn from_settings(settings: &ClientSettings) -> anyhow::Result<Self> {
        let server_url = config::parse_server_url(&settings.server_url)?;
        Ok(Self::with_timeout(server_url, settings.request_timeout)?)
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

fn normalize_server_url(raw: String) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[async_trait]
impl CodecBackend for HttpCodecBackend {
    async fn submit(&self, request: &OperationRequest) -> Result<String, OperationError> {
        let mode = request.mode();
        let res = self
            .http
            .post(format!("{}{}", self.server_url, mode.endpoint()))
            .json(&TextRequest {
                text: request.payload().to_string(),
            })
            .send()
            .await?;

        let status = res.status();
        let body = res.bytes().await?;
        debug!(%mode, status = status.as_u16(), bytes = body.len(), "backend responded");

        if status.is_success() {
            return Ok(output_from_success_body(mode, &body)?);
        }

        let error_body: ErrorBody = serde_json::from_slice(&body)?;
        Err(OperationError::Backend {
            mode,
            status: status.as_u16(),
            message: error_body.error,
        })
    }
}

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
