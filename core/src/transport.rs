//! The network seam: executes an `HttpRequest` and returns an `HttpResponse`.
//!
//! # Design
//! `ApiClient` never performs I/O itself. It is handed a `Transport` at
//! construction, so tests substitute a recording fake and production code
//! uses `UreqTransport`. A transport reports non-2xx statuses as data, not
//! as errors; status interpretation belongs to the client.

use ureq::{Agent, RequestBuilder};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one request, once. No retry.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a `ureq` agent.
///
/// With credentials included, one agent (and so one cookie jar) serves every
/// call; otherwise each call gets a fresh agent and no cookies carry over.
/// Response bodies are read in full unless a limit is set.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
    include_credentials: bool,
    body_limit: Option<u64>,
}

impl UreqTransport {
    pub fn new(include_credentials: bool) -> Self {
        Self {
            agent: new_agent(),
            include_credentials,
            body_limit: None,
        }
    }

    /// Cap the response body size; a larger body fails as a transport error.
    pub fn with_body_limit(mut self, limit: Option<u64>) -> Self {
        self.body_limit = limit;
        self
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(true)
    }
}

fn new_agent() -> Agent {
    Agent::config_builder().http_status_as_error(false).build().new_agent()
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let fresh;
        let agent = if self.include_credentials {
            &self.agent
        } else {
            fresh = new_agent();
            &fresh
        };

        let url = request.url()?;
        let url = url.as_str();
        let headers = &request.headers;

        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(agent.get(url), headers).call(),
            (HttpMethod::Delete, _) => with_headers(agent.delete(url), headers).call(),
            (HttpMethod::Post, Some(body)) => with_headers(agent.post(url), headers).send(body.as_bytes()),
            (HttpMethod::Post, None) => with_headers(agent.post(url), headers).send_empty(),
            (HttpMethod::Put, Some(body)) => with_headers(agent.put(url), headers).send(body.as_bytes()),
            (HttpMethod::Put, None) => with_headers(agent.put(url), headers).send_empty(),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| value.to_str().ok().map(|v| (name.as_str().to_string(), v.to_string())))
            .collect();
        let body = response
            .body_mut()
            .with_config()
            .limit(self.body_limit.unwrap_or(u64::MAX))
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, headers, body })
    }
}
