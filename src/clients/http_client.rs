//! HTTP client for Admin API communication.
//!
//! [`HttpClient`] turns an [`HttpRequest`] into a single authenticated
//! round trip and normalizes non-2xx answers into [`HttpError`].

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ClientConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Admin API.
///
/// The client owns:
/// - base URI construction from the shop domain or the API host override
/// - default headers (User-Agent, Accept, access token)
/// - response header capture and JSON body parsing
/// - mapping of non-2xx responses to [`HttpResponseError`]
///
/// Each request is attempted exactly once.
///
/// `HttpClient` is `Send + Sync` and can be shared across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Scheme and authority, e.g. `https://my-store.myshopify.com`.
    base_uri: String,
    /// Path prefix, e.g. `/admin/api/2025-10`.
    base_path: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The base path for API requests (e.g., "/admin/api/2025-10")
    /// * `config` - Shop, token, host override and user agent settings
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client
    /// cannot be created (e.g., TLS backend initialization failure).
    pub fn new(base_path: impl Into<String>, config: &ClientConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Shopify Inventory Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Shopify-Access-Token".to_string(),
            config.access_token().as_ref().to_string(),
        );

        // Proxied requests still need to name the shop.
        if config.api_host().is_some() {
            default_headers.insert("Host".to_string(), config.shop().as_ref().to_string());
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri: config.base_uri(),
            base_path: base_path.into(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Admin API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - A network error occurs (`Network`)
    /// - A 2xx response body is not JSON (`InvalidBody`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);

        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Put => self.client.put(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status = code,
            "Admin API request completed"
        );

        let body = Self::parse_body(code, &body_text)?;
        let response = HttpResponse::new(code, res_headers, body);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify API at {}, received reason: {}",
                request.path,
                reason
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// A blank body becomes `{}`. A 2xx body that is not JSON is an error,
    /// since decoding `{}` would pass for an empty result. Unparseable 5xx
    /// bodies are kept under `raw_body` so the error message still shows
    /// them.
    fn parse_body(code: u16, body_text: &str) -> Result<serde_json::Value, HttpError> {
        if body_text.trim().is_empty() {
            return Ok(serde_json::json!({}));
        }
        match serde_json::from_str(body_text) {
            Ok(body) => Ok(body),
            Err(source) if (200..300).contains(&code) => {
                tracing::warn!(status = code, "Admin API returned a non-JSON success body");
                Err(HttpError::InvalidBody { code, source })
            }
            Err(_) if code >= 500 => Ok(serde_json::json!({ "raw_body": body_text })),
            Err(_) => Ok(serde_json::json!({})),
        }
    }

    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["errors", "error", "raw_body"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }
        if response.body.get("error").is_some() {
            if let Some(desc) = response.body.get("error_description") {
                error_body.insert("error_description".to_string(), desc.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::Value::Object(error_body).to_string()
    }
}
