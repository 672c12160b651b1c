//! The shared request client every resource wrapper goes through.
//!
//! # Design
//! `ApiClient` holds the configuration, the transport and two hooks, and
//! carries no mutable state between calls. A request is split into
//! `build_request` (pure: URL, headers, JSON body) and `parse_response`
//! (status check, body unwrapping), with the transport in between.
//!
//! The return contract of `request` is the parsed response body, never the
//! transport response: a 2xx body is deserialized into the caller's type,
//! and an empty body is read as JSON `null`.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::hooks::{NoopHook, RequestHook, ResponseErrorHook};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};

/// Pre-configured request function shared by all resource wrappers.
///
/// Construct it once and hand it to the wrappers (`ClientesApi::new(&api)`
/// or `api.clientes()`).
#[derive(Clone)]
pub struct ApiClient<T = UreqTransport> {
    config: ApiConfig,
    transport: T,
    request_hook: Arc<dyn RequestHook>,
    error_hook: Arc<dyn ResponseErrorHook>,
}

impl<T> fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient").field("config", &self.config).finish_non_exhaustive()
    }
}

impl ApiClient<UreqTransport> {
    /// Validate `config` and pair it with a `ureq`-backed transport.
    pub fn from_config(config: ApiConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let transport = UreqTransport::new(config.include_credentials).with_body_limit(config.max_response_bytes);
        Ok(Self::new(config, transport))
    }

    /// Same as `from_config(ApiConfig::from_env())`.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_config(ApiConfig::from_env())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            request_hook: Arc::new(NoopHook),
            error_hook: Arc::new(NoopHook),
        }
    }

    pub fn with_request_hook(mut self, hook: impl RequestHook + 'static) -> Self {
        self.request_hook = Arc::new(hook);
        self
    }

    pub fn with_error_hook(mut self, hook: impl ResponseErrorHook + 'static) -> Self {
        self.error_hook = Arc::new(hook);
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Describe a request against `path` without sending it.
    pub fn build_request<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<HttpRequest, ApiError> {
        let mut headers = vec![("accept".to_string(), self.config.accept.clone())];
        let body = match body {
            Some(body) => {
                headers.push(("content-type".to_string(), "application/json".to_string()));
                Some(serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?)
            }
            None => None,
        };

        Ok(HttpRequest {
            method,
            path: self.config.endpoint(path),
            query: query.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
            headers,
            body,
        })
    }

    /// Check the status and unwrap the body of a transport response.
    ///
    /// Non-2xx responses go through the error hook and come back as
    /// `ApiError::Status` with the body untouched.
    pub fn parse_response<R: DeserializeOwned>(&self, response: HttpResponse) -> Result<R, ApiError> {
        if !response.is_success() {
            self.error_hook.on_response_error(&response);
            tracing::warn!(status = response.status, "backend returned an error status");
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }

        let body = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };
        serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Issue one request and return the parsed response body.
    pub fn request<R, B>(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.build_request(method, path, query, body)?;
        self.request_hook.on_request(&mut request);

        tracing::debug!(method = %request.method, url = %request.path, "sending request");
        let response = self.transport.execute(&request).inspect_err(|e| {
            tracing::warn!(method = %request.method, url = %request.path, error = %e, "request failed");
        })?;

        self.parse_response(response)
    }

    pub fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(HttpMethod::Get, path, &[], None::<&()>)
    }

    pub fn get_with_query<R: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<R, ApiError> {
        self.request(HttpMethod::Get, path, query, None::<&()>)
    }

    pub fn post<R: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        self.request(HttpMethod::Post, path, &[], Some(body))
    }

    pub fn put<R: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        self.request(HttpMethod::Put, path, &[], Some(body))
    }

    pub fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(HttpMethod::Delete, path, &[], None::<&()>)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU16, Ordering};

    use serde_json::{json, Value};

    use super::*;
    use crate::testing::{client, url, RecordingTransport};

    #[test]
    fn build_request_without_body_sends_only_accept() {
        let transport = RecordingTransport::default();
        let req = client(&transport)
            .build_request(HttpMethod::Get, "/api/clientes", &[], None::<&()>)
            .unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, url("/api/clientes"));
        assert_eq!(req.headers, vec![("accept".to_string(), "application/json".to_string())]);
        assert!(req.body.is_none());
        assert!(req.query.is_empty());
    }

    #[test]
    fn build_request_with_body_sets_content_type() {
        let transport = RecordingTransport::default();
        let req = client(&transport)
            .build_request(HttpMethod::Post, "/api/clientes", &[], Some(&json!({"a": 1})))
            .unwrap();
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.body.as_deref(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn request_returns_parsed_body_not_response() {
        let transport = RecordingTransport::default();
        transport.respond(201, r#"{"id":1,"nombre":"Acme"}"#);
        let body: Value = client(&transport)
            .post("/api/clientes", &json!({"cliente": {"nombre": "Acme"}}))
            .unwrap();
        assert_eq!(body, json!({"id": 1, "nombre": "Acme"}));
    }

    #[test]
    fn empty_body_parses_as_null() {
        let transport = RecordingTransport::default();
        transport.respond(204, "");
        let api = client(&transport);
        let body: Value = api.delete("/api/producciones/3").unwrap();
        assert_eq!(body, Value::Null);

        transport.respond(204, "");
        api.delete::<()>("/api/producciones/3").unwrap();
    }

    #[test]
    fn non_success_status_surfaces_unmodified() {
        let transport = RecordingTransport::default();
        transport.respond(500, "boom");
        let err = client(&transport).get::<Value>("/api/clientes").unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.requests().len(), 1, "no retry");
    }

    #[test]
    fn bad_json_is_a_deserialization_error() {
        let transport = RecordingTransport::default();
        transport.respond(200, "not json");
        let err = client(&transport).get::<Value>("/api/clientes").unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn query_pairs_are_kept_separate_from_path() {
        let transport = RecordingTransport::default();
        transport.respond(200, "[]");
        let _: Value = client(&transport)
            .get_with_query("/api/obtener_detalles_compra_by_id_compra", &[("id_compra", "5".to_string())])
            .unwrap();
        let req = transport.last();
        assert_eq!(req.path, url("/api/obtener_detalles_compra_by_id_compra"));
        assert_eq!(req.query, vec![("id_compra".to_string(), "5".to_string())]);
    }

    struct StatusRecorder(Arc<AtomicU16>);

    impl ResponseErrorHook for StatusRecorder {
        fn on_response_error(&self, response: &HttpResponse) {
            self.0.store(response.status, Ordering::SeqCst);
        }
    }

    #[test]
    fn error_hook_sees_failed_response_and_error_still_propagates() {
        let seen = Arc::new(AtomicU16::new(0));
        let transport = RecordingTransport::default();
        transport.respond(401, "unauthorized");
        let api = client(&transport).with_error_hook(StatusRecorder(seen.clone()));

        let err = api.get::<Value>("/api/pedidos").unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(seen.load(Ordering::SeqCst), 401);
    }

    #[test]
    fn error_hook_not_called_on_success() {
        let seen = Arc::new(AtomicU16::new(0));
        let transport = RecordingTransport::default();
        let api = client(&transport).with_error_hook(StatusRecorder(seen.clone()));
        let _: Value = api.get("/api/pedidos").unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }

    struct Stamp;

    impl RequestHook for Stamp {
        fn on_request(&self, request: &mut HttpRequest) {
            request.headers.push(("x-request-source".to_string(), "erp-client".to_string()));
        }
    }

    #[test]
    fn request_hook_can_amend_outgoing_request() {
        let transport = RecordingTransport::default();
        let api = client(&transport).with_request_hook(Stamp);
        let _: Value = api.get("/api/productos").unwrap();
        assert_eq!(transport.last().header("x-request-source"), Some("erp-client"));
    }

    #[test]
    fn from_config_rejects_invalid_origin() {
        let err = ApiClient::from_config(ApiConfig::new("localhost:4000/")).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
