//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — the caller (host) is responsible for executing
//! the actual I/O. This separation keeps the core deterministic and easy to
//! test: every request a service method produces can be asserted on directly.
//!
//! All fields use owned types (`String`, `Vec`) so values outlive the client
//! that built them.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by the `LoanClient` service methods. The caller is responsible for
/// executing this request against the network and returning the corresponding
/// `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to the `LoanClient` parse methods for deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Append `params` to `path` as a percent-encoded query string.
///
/// Keys are assumed to be plain identifiers; values are encoded.
pub(crate) fn with_query(path: &str, params: &[(&str, String)]) -> String {
    let mut out = String::from(path);
    for (i, (key, value)) in params.iter().enumerate() {
        out.push(if i == 0 { '?' } else { '&' });
        out.push_str(key);
        out.push('=');
        out.push_str(&urlencoding::encode(value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_query_no_params_is_identity() {
        assert_eq!(with_query("/api/clientes", &[]), "/api/clientes");
    }

    #[test]
    fn with_query_joins_params() {
        let path = with_query(
            "/api/clientes",
            &[("page", "1".to_string()), ("size", "10".to_string())],
        );
        assert_eq!(path, "/api/clientes?page=1&size=10");
    }

    #[test]
    fn with_query_encodes_values() {
        let path = with_query("/api/clientes", &[("q", "a b&c".to_string())]);
        assert_eq!(path, "/api/clientes?q=a%20b%26c");
    }
}
