//! # Router Configuration Module
//!
//! Environment-driven settings for where the application is mounted.
//!
//! ## Environment Variables
//!
//! ### `NANOROUTER_BASE_DIR`
//!
//! Path prefix stripped from every request URI before routing, for
//! applications that are not served from the document root.
//! Example: `/myApp` when the app lives in `/home/me/public_html/myApp`.
//!
//! ### `NANOROUTER_BASE_URL`
//!
//! Absolute URL of the application (e.g. `https://example.com/myApp`). Used
//! by [`crate::Redirector`] to detect redirect loops. A trailing slash is
//! removed.
//!
//! ## Usage
//!
//! ```rust
//! use nanorouter::config::RouterConfig;
//!
//! let config = RouterConfig::from_env().unwrap_or_default();
//! println!("base dir: {:?}", config.base_dir);
//! ```

use std::env;

use crate::error::RouterError;
use crate::redirect::Redirector;

pub const BASE_DIR_VAR: &str = "NANOROUTER_BASE_DIR";
pub const BASE_URL_VAR: &str = "NANOROUTER_BASE_URL";

/// Mount point of the application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterConfig {
    /// Prefix stripped from request URIs
    pub base_dir: Option<String>,
    /// Absolute URL of the application, without a trailing slash
    pub base_url: Option<String>,
}

impl RouterConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, RouterError> {
        Self::from_values(env::var(BASE_DIR_VAR).ok(), env::var(BASE_URL_VAR).ok())
    }

    /// Build and validate a configuration from raw values
    ///
    /// Empty values count as unset.
    pub fn from_values(
        base_dir: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, RouterError> {
        let base_dir = base_dir.filter(|d| !d.is_empty());
        let base_url = match base_url.filter(|u| !u.is_empty()) {
            Some(url) => Some(validate_base_url(&url)?),
            None => None,
        };
        Ok(Self { base_dir, base_url })
    }

    /// Redirect builder for the configured base URL
    #[must_use]
    pub fn redirector(&self) -> Redirector {
        Redirector::new(self.base_url.clone().unwrap_or_default())
    }
}

fn validate_base_url(url: &str) -> Result<String, RouterError> {
    match url::Url::parse(url) {
        Ok(parsed) if !parsed.cannot_be_a_base() => Ok(url.trim_end_matches('/').to_string()),
        _ => Err(RouterError::InvalidBaseUrl {
            url: url.to_string(),
        }),
    }
}
