use std::fmt;

/// Router error
///
/// Only configuration and construction paths can fail. Looking up a route that
/// does not exist, registering an unknown method token, or removing a route that
/// was never registered are normal outcomes and never produce a `RouterError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// A method token outside the supported set was parsed as a [`crate::Method`]
    UnknownMethod {
        /// The rejected token
        token: String,
    },
    /// A checked registration declared a handler arity that differs from the
    /// number of wildcard segments in the template
    ArityMismatch {
        /// The registered path or template
        path: String,
        /// Wildcard segments found in the template
        expected: usize,
        /// Arity declared by the caller
        declared: usize,
    },
    /// The configured base URL is not an absolute URL
    InvalidBaseUrl {
        /// The rejected URL
        url: String,
    },
    /// A redirect target cannot be encoded as a `Location` header
    InvalidLocation {
        /// The rejected target
        location: String,
    },
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::UnknownMethod { token } => {
                write!(
                    f,
                    "Unknown HTTP method '{}'. \
                    Expected one of GET, POST, PUT, DELETE, OPTIONS, CONNECT.",
                    token
                )
            }
            RouterError::ArityMismatch {
                path,
                expected,
                declared,
            } => {
                write!(
                    f,
                    "Handler arity mismatch for '{}': template has {} wildcard segment(s) \
                    but the handler declares {} parameter(s).",
                    path, expected, declared
                )
            }
            RouterError::InvalidBaseUrl { url } => {
                write!(
                    f,
                    "Invalid base URL '{}'. Expected an absolute URL (e.g., https://example.com/app)",
                    url
                )
            }
            RouterError::InvalidLocation { location } => {
                write!(f, "Redirect target '{}' is not a valid Location header value", location)
            }
        }
    }
}

impl std::error::Error for RouterError {}
