//! # Route Manifest
//!
//! Declarative route definitions loaded from YAML (or JSON), used by the CLI to
//! build a router without writing handler code. Every route gets an echo
//! handler whose output names the handler, its status, the positional values it
//! received and an optional canned body.
//!
//! ```yaml
//! base_dir: /myApp
//! base_url: https://example.com/myApp
//! routes:
//!   - method: GET|POST
//!     path: /
//!     handler: index
//!   - method: [GET]
//!     path: /user/{user_id}/profile
//!     handler: user_profile
//!     body: { tab: overview }
//! not_found:
//!   - method: ALL
//!     handler: not_found
//!     status: 404
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::Path;
use tracing::{info, warn};

use crate::config::RouterConfig;
use crate::method::{IntoMethods, MethodSet};
use crate::router::Router;

/// Method specifier as written in a manifest: a token string or a list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MethodField {
    Spec(String),
    List(Vec<String>),
}

impl IntoMethods for &MethodField {
    fn into_methods(self) -> MethodSet {
        match self {
            MethodField::Spec(spec) => spec.into_methods(),
            MethodField::List(list) => list.as_slice().into_methods(),
        }
    }
}

fn default_status() -> u16 {
    200
}

/// A route with an echo handler
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteDef {
    pub method: MethodField,
    pub path: String,
    pub handler: String,
    #[serde(default = "default_status")]
    pub status: u16,
    #[serde(default)]
    pub body: Option<Value>,
}

fn default_not_found_status() -> u16 {
    404
}

/// A fallback handler for one or more methods
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NotFoundDef {
    pub method: MethodField,
    pub handler: String,
    #[serde(default = "default_not_found_status")]
    pub status: u16,
    #[serde(default)]
    pub body: Option<Value>,
}

/// Parsed manifest file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub base_dir: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub routes: Vec<RouteDef>,
    #[serde(default)]
    pub not_found: Vec<NotFoundDef>,
}

/// Output of an echo handler
#[must_use]
pub fn echo(handler: &str, status: u16, params: &[String], body: Option<&Value>) -> Value {
    json!({
        "handler": handler,
        "status": status,
        "params": params,
        "body": body,
    })
}

impl Manifest {
    /// Parse a manifest from YAML text (JSON is valid YAML)
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse route manifest")
    }

    /// Build a router with one echo handler per definition
    ///
    /// Definitions whose method spec selects no supported method are skipped
    /// with a warning, mirroring how registration ignores unknown tokens.
    #[must_use]
    pub fn build_router(&self) -> Router<Value> {
        let mut router = Router::new();

        for def in &self.routes {
            if def.method.into_methods().is_empty() {
                warn!(method = ?def.method, path = %def.path, "Route selects no supported method");
                continue;
            }
            let (name, status, body) = (def.handler.clone(), def.status, def.body.clone());
            router.register(&def.method, &def.path, move |params: &[String]| {
                echo(&name, status, params, body.as_ref())
            });
        }

        for def in &self.not_found {
            if def.method.into_methods().is_empty() {
                warn!(method = ?def.method, "Not-found handler selects no supported method");
                continue;
            }
            let (name, status, body) = (def.handler.clone(), def.status, def.body.clone());
            router.register_not_found(&def.method, move |params: &[String]| {
                echo(&name, status, params, body.as_ref())
            });
        }

        info!(routes = router.len(), "Router built from manifest");
        router
    }

    /// Mount configuration: manifest values override `fallback`
    pub fn config(&self, fallback: &RouterConfig) -> Result<RouterConfig> {
        let config = RouterConfig::from_values(
            self.base_dir.clone().or_else(|| fallback.base_dir.clone()),
            self.base_url.clone().or_else(|| fallback.base_url.clone()),
        )?;
        Ok(config)
    }
}

/// Load a manifest file
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Manifest> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read route manifest {}", path.display()))?;
    Manifest::from_yaml(&content).with_context(|| format!("Invalid route manifest {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Method;

    const MANIFEST: &str = r#"
routes:
  - method: GET|POST
    path: /
    handler: index
  - method: [GET]
    path: /user/{user_id}/profile/
    handler: user_profile
    body: { tab: overview }
  - method: PATCH
    path: /ignored
    handler: ignored
not_found:
  - method: ALL
    handler: not_found
"#;

    #[test]
    fn test_parse_method_forms() {
        let manifest = Manifest::from_yaml(MANIFEST).expect("manifest");
        assert_eq!(manifest.routes[0].method, MethodField::Spec("GET|POST".to_string()));
        assert_eq!(manifest.routes[1].method, MethodField::List(vec!["GET".to_string()]));
        assert_eq!(manifest.routes[0].status, 200);
        assert_eq!(manifest.not_found[0].status, 404);
    }

    #[test]
    fn test_build_router_skips_unsupported_methods() {
        let router = Manifest::from_yaml(MANIFEST).expect("manifest").build_router();
        assert_eq!(router.len(), 3);
        assert!(router.has_not_found(Method::Connect));
    }

    #[test]
    fn test_echo_output() {
        let router = Manifest::from_yaml(MANIFEST).expect("manifest").build_router();
        let output = router
            .dispatch("GET", "/user/31/profile")
            .into_output()
            .expect("output");
        assert_eq!(
            output,
            json!({
                "handler": "user_profile",
                "status": 200,
                "params": ["31"],
                "body": { "tab": "overview" },
            })
        );
    }

    #[test]
    fn test_manifest_overrides_config() {
        let manifest = Manifest::from_yaml("base_dir: /app\n").expect("manifest");
        let fallback = RouterConfig::from_values(
            Some("/other".to_string()),
            Some("https://example.com".to_string()),
        )
        .expect("config");
        let config = manifest.config(&fallback).expect("config");
        assert_eq!(config.base_dir.as_deref(), Some("/app"));
        assert_eq!(config.base_url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_invalid_manifest_is_an_error() {
        assert!(Manifest::from_yaml("routes: 12").is_err());
    }
}
