//! Shared client configuration and request/response plumbing.
//!
//! # Design
//! `LoanClient` is the single configured transport description every service
//! module builds on: it holds the base URL and the default header set, both
//! read-only after construction. Each service operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. The caller executes the actual HTTP
//! round-trip, keeping the core deterministic and free of I/O dependencies.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Base URL of the backend as deployed alongside the original frontend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Stateless client for the loan management API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The per-resource operations live in the
/// [`crate::services`] modules; this type only carries the shared
/// configuration they all stamp onto their requests.
#[derive(Debug, Clone)]
pub struct LoanClient {
    base_url: String,
    default_headers: Vec<(String, String)>,
}

impl LoanClient {
    /// Create a client bound to `base_url` (trailing slash tolerated).
    ///
    /// Every request built by this client carries the default
    /// `content-type: application/json` header.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            default_headers: vec![(
                "content-type".to_string(),
                "application/json".to_string(),
            )],
        }
    }

    /// Build a bodyless request for `path` relative to the base URL.
    pub(crate) fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: self.default_headers.clone(),
            body: None,
        }
    }

    /// Build a request carrying `payload` serialized as the JSON body.
    pub(crate) fn request_with_body<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let mut request = self.request(method, path);
        request.body = Some(body);
        Ok(request)
    }
}

impl Default for LoanClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
pub(crate) fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Check the status and deserialize the body into `T`.
pub(crate) fn parse_json<T: DeserializeOwned>(
    response: HttpResponse,
    expected: u16,
) -> Result<T, ApiError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
