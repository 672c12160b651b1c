//! Interception points around every request.
//!
//! Both hooks default to doing nothing. They exist so an application can
//! attach credentials or react to 401/403 responses in one place; no such
//! policy is built in.

use crate::http::{HttpRequest, HttpResponse};

/// Called with the outgoing request just before it is handed to the transport.
pub trait RequestHook: Send + Sync {
    fn on_request(&self, _request: &mut HttpRequest) {}
}

/// Called with every non-2xx response before the error reaches the caller.
/// The error is returned unchanged whatever the hook does.
pub trait ResponseErrorHook: Send + Sync {
    fn on_response_error(&self, _response: &HttpResponse) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl RequestHook for NoopHook {}

impl ResponseErrorHook for NoopHook {}
