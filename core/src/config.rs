//! Client configuration: base origin, default headers and credential mode.

use url::Url;

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Environment variables consulted by `ApiConfig::from_env`, in order.
pub const BASE_URL_ENV_VARS: [&str; 2] = ["NUXT_PUBLIC_API_BASE", "API_BASE"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin every resource path is joined onto. Never ends with `/`.
    pub base_url: String,
    /// Value of the `Accept` header sent with every request.
    pub accept: String,
    /// Keep and resend cookies across calls, like `credentials: "include"`.
    pub include_credentials: bool,
    /// Largest response body read before giving up, in bytes. `None` reads
    /// the whole body: collection endpoints are not paginated.
    pub max_response_bytes: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            accept: "application/json".to_string(),
            include_credentials: true,
            max_response_bytes: None,
        }
    }

    /// Build from the environment, falling back to `DEFAULT_BASE_URL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        BASE_URL_ENV_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty())
            .map(|value| Self::new(value.trim()))
            .unwrap_or_default()
    }

    /// Check that `base_url` parses as an absolute http(s) origin.
    pub fn validate(&self) -> Result<(), ApiError> {
        let url = Url::parse(&self.base_url).map_err(|e| ApiError::Config(format!("{}: {e}", self.base_url)))?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(ApiError::Config(format!("unsupported scheme `{other}`"))),
        }
        if url.host_str().is_none() {
            return Err(ApiError::Config(format!("{} has no host", self.base_url)));
        }
        Ok(())
    }

    /// Join a resource path such as `/api/clientes` onto the base origin.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:4000");
        assert_eq!(config.accept, "application/json");
        assert!(config.include_credentials);
        assert_eq!(config.max_response_bytes, None);
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ApiConfig::new("http://api.example.com/");
        assert_eq!(config.endpoint("/api/clientes"), "http://api.example.com/api/clientes");
    }

    #[test]
    fn lookup_prefers_nuxt_variable() {
        let config = ApiConfig::from_lookup(|key| match key {
            "NUXT_PUBLIC_API_BASE" => Some("http://nuxt:4000".to_string()),
            "API_BASE" => Some("http://plain:4000".to_string()),
            _ => None,
        });
        assert_eq!(config.base_url, "http://nuxt:4000");
    }

    #[test]
    fn lookup_skips_blank_values() {
        let config = ApiConfig::from_lookup(|key| match key {
            "NUXT_PUBLIC_API_BASE" => Some("  ".to_string()),
            "API_BASE" => Some("http://plain:4000/".to_string()),
            _ => None,
        });
        assert_eq!(config.base_url, "http://plain:4000");
    }

    #[test]
    fn lookup_falls_back_to_default() {
        let config = ApiConfig::from_lookup(|_| None);
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn validate_rejects_non_http_origins() {
        assert!(ApiConfig::default().validate().is_ok());
        assert!(matches!(ApiConfig::new("ftp://files").validate(), Err(ApiError::Config(_))));
        assert!(matches!(ApiConfig::new("not a url").validate(), Err(ApiError::Config(_))));
    }
}
