//! Request source: method, routable path and headers of the current request.
//!
//! The raw request URI may carry the application's base directory as a prefix
//! (`/myApp/users/3` when the app lives under `/myApp`) and a query string.
//! Both are removed and the remainder is normalized like a registered path.

use std::collections::HashMap;
use tracing::debug;

use crate::path::normalize_path;

/// Method, routable path and headers of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Uppercase method token
    method: String,
    /// Routable path: base dir stripped, query dropped, normalized
    path: String,
    /// Raw query string, without the `?`
    query: Option<String>,
    headers: HashMap<String, String>,
}

/// Turn a raw request URI into a routable path
///
/// Strips `base_dir` when the URI starts with it, discards everything from the
/// first `?`, and normalizes the remainder. An empty remainder routes as `/`.
#[must_use]
pub fn routable_path(raw_uri: &str, base_dir: Option<&str>) -> String {
    let mut uri = raw_uri;
    if let Some(base) = base_dir.filter(|b| !b.is_empty()) {
        if let Some(rest) = uri.strip_prefix(base) {
            uri = rest;
        }
    }
    let uri = uri.split('?').next().unwrap_or_default();
    match normalize_path(uri) {
        "" => "/".to_string(),
        path => path.to_string(),
    }
}

/// Convert a CGI header variable name (`HTTP_USER_AGENT`) into a header name (`User-Agent`)
#[must_use]
pub fn cgi_header_name(var: &str) -> Option<String> {
    let name = var.strip_prefix("HTTP_")?;
    let words: Vec<String> = name
        .split('_')
        .map(|word| {
            let lower = word.to_ascii_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();
    Some(words.join("-"))
}

impl RequestContext {
    /// Build a context from a method token and a raw request URI
    pub fn new(method: &str, raw_uri: &str, base_dir: Option<&str>) -> Self {
        let query = raw_uri
            .split_once('?')
            .map(|(_, q)| q.to_string())
            .filter(|q| !q.is_empty());
        let ctx = Self {
            method: method.to_ascii_uppercase(),
            path: routable_path(raw_uri, base_dir),
            query,
            headers: HashMap::new(),
        };
        debug!(method = %ctx.method, raw_uri = %raw_uri, path = %ctx.path, "Request context built");
        ctx
    }

    /// Attach request headers
    #[must_use]
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Build a context from an `http::Request`, keeping its UTF-8 headers
    pub fn from_http<B>(request: &http::Request<B>, base_dir: Option<&str>) -> Self {
        let uri = request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let headers = request.headers().iter().filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        });
        Self::new(request.method().as_str(), uri, base_dir).with_headers(headers)
    }

    /// Build a context from CGI-style variables
    ///
    /// Reads `REQUEST_METHOD` and `REQUEST_URI`; every `HTTP_*` variable
    /// becomes a header. Returns `None` when the method or URI is missing.
    pub fn from_cgi_env<I>(vars: I, base_dir: Option<&str>) -> Option<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut method = None;
        let mut uri = None;
        let mut headers = HashMap::new();

        for (key, value) in vars {
            match key.as_str() {
                "REQUEST_METHOD" => method = Some(value),
                "REQUEST_URI" => uri = Some(value),
                _ => {
                    if let Some(name) = cgi_header_name(&key) {
                        headers.insert(name, value);
                    }
                }
            }
        }

        Some(Self::new(&method?, &uri?, base_dir).with_headers(headers))
    }

    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Get a header by name (case-insensitive)
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// URL-decoded query parameters; the last value of a repeated name wins
    #[must_use]
    pub fn query_params(&self) -> HashMap<String, String> {
        self.query
            .as_deref()
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default()
    }
}
