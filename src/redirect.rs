//! Redirect responses with loop prevention.
//!
//! Before redirecting, the target is resolved against the application's base
//! URL and compared with the current request path. A redirect that would land
//! on the page being served is suppressed.

use http::{header, Response, StatusCode};
use tracing::{debug, info};

use crate::error::RouterError;

/// Builds `302 Found` responses relative to the application's base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirector {
    base_url: String,
}

impl Redirector {
    /// `base_url` is the absolute URL the application is served from,
    /// without a trailing slash (e.g. `https://example.com/myApp`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Routable path a redirect target would land on, when it can be told
    ///
    /// - `/x` is local: `base_url + /x`
    /// - a relative target not starting with `http`: `base_url + / + target`
    /// - an absolute URL under `base_url` (case-insensitive prefix): itself
    /// - anything else points elsewhere and yields `None`
    #[must_use]
    pub fn landing_path(&self, target: &str) -> Option<String> {
        let base = self.base_url.as_str();
        let absolute = if target.starts_with('/') {
            format!("{}{}", base, target)
        } else if !has_prefix_ignore_case(target, "http") {
            format!("{}/{}", base, target)
        } else if has_prefix_ignore_case(target, base) {
            target.to_string()
        } else {
            return None;
        };

        Some(absolute.get(base.len()..).unwrap_or_default().to_string())
    }

    /// Build a redirect to `target`
    ///
    /// With `prevent_loop`, returns `Ok(None)` when the target lands on
    /// `current_path` (the routable path of the request being served).
    pub fn redirect(
        &self,
        target: &str,
        current_path: &str,
        prevent_loop: bool,
    ) -> Result<Option<Response<()>>, RouterError> {
        if prevent_loop {
            if let Some(landing) = self.landing_path(target) {
                if landing == current_path {
                    info!(target = %target, current_path = %current_path, "Redirect loop prevented");
                    return Ok(None);
                }
            }
        }

        let response = Response::builder()
            .status(StatusCode::FOUND)
            .header(header::LOCATION, target)
            .body(())
            .map_err(|_| RouterError::InvalidLocation {
                location: target.to_string(),
            })?;
        debug!(target = %target, "Redirect emitted");
        Ok(Some(response))
    }
}

fn has_prefix_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
