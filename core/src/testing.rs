//! In-process transport that records requests and replays canned responses.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::client::ApiClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

pub(crate) const BASE_URL: &str = "http://localhost:4000";

/// Answers each call with the next queued response, or `200 {}` once the
/// queue is empty.
#[derive(Default)]
pub(crate) struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<HttpResponse>>,
}

impl RecordingTransport {
    pub(crate) fn respond(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        });
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request was sent")
    }

    pub(crate) fn last_body(&self) -> serde_json::Value {
        let body = self.last().body.expect("request has no body");
        serde_json::from_str(&body).unwrap()
    }
}

impl Transport for RecordingTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        let response = self.responses.lock().unwrap().pop_front().unwrap_or(HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "{}".to_string(),
        });
        Ok(response)
    }
}

pub(crate) fn client(transport: &RecordingTransport) -> ApiClient<&RecordingTransport> {
    ApiClient::new(ApiConfig::new(BASE_URL), transport)
}

pub(crate) fn url(path: &str) -> String {
    format!("{BASE_URL}{path}")
}
