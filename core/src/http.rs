//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! `ApiClient` builds `HttpRequest` values and parses `HttpResponse` values;
//! a `Transport` implementation is the only piece that touches the network.
//! Keeping the request a value makes every wrapper operation checkable
//! without a server.

use std::fmt;

use url::Url;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `path` is the absolute URL without its query string; query parameters
/// stay separate so they can be inspected before encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Render the absolute URL with the query parameters percent-encoded.
    pub fn url(&self) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.path).map_err(|e| ApiError::Config(format!("{}: {e}", self.path)))?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url)
    }

    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` after executing an `HttpRequest`, then handed
/// to `ApiClient::parse_response` for status checking and body unwrapping.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(query: Vec<(&str, &str)>) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: "http://localhost:4000/api/obtener_detalles_pedido_by_id_pedido".to_string(),
            query: query.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            headers: vec![("Accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    #[test]
    fn url_appends_query_pairs() {
        let url = request(vec![("id_pedido", "P9")]).url().unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:4000/api/obtener_detalles_pedido_by_id_pedido?id_pedido=P9"
        );
    }

    #[test]
    fn url_without_query_has_no_question_mark() {
        let url = request(Vec::new()).url().unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn url_encodes_reserved_characters() {
        let url = request(vec![("id_pedido", "a b&c")]).url().unwrap();
        assert_eq!(url.query(), Some("id_pedido=a+b%26c"));
    }

    #[test]
    fn header_lookup_ignores_case() {
        assert_eq!(request(Vec::new()).header("accept"), Some("application/json"));
        assert_eq!(request(Vec::new()).header("content-type"), None);
    }

    #[test]
    fn method_renders_uppercase() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn success_range_is_2xx() {
        let mut response = HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(response.is_success());
        response.status = 302;
        assert!(!response.is_success());
    }
}
