use crate::config::DashboardConfig;
use crate::models::Resource;
use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;
use web_sys::AbortSignal;

/// Why a single retrieval failed. Kept for diagnostics only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EndpointError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("HTTP {status}: {status_text}")]
    HttpStatus { status: u16, status_text: String },
    #[error("parse error: {0}")]
    Payload(String),
}

/// One GET against one named resource of the orchestrator.
#[allow(async_fn_in_trait)]
pub trait Endpoint {
    async fn retrieve(&self, resource: Resource) -> Result<Value, EndpointError>;
}

#[derive(Clone)]
pub struct HttpEndpoint {
    config: DashboardConfig,
    signal: Option<AbortSignal>,
}

impl HttpEndpoint {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            config: config.clone(),
            signal: None,
        }
    }

    /// Requests issued after this share `signal`; aborting it cancels them in the browser.
    pub fn with_abort_signal(mut self, signal: AbortSignal) -> Self {
        self.signal = Some(signal);
        self
    }
}

impl Endpoint for HttpEndpoint {
    async fn retrieve(&self, resource: Resource) -> Result<Value, EndpointError> {
        let url = self.config.resource_url(resource.path());
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .abort_signal(self.signal.as_ref())
            .send()
            .await
            .map_err(|e| EndpointError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(EndpointError::HttpStatus {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| EndpointError::Payload(e.to_string()))
    }
}
