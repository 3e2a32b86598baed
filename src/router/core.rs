//! Router core: registration, removal and route resolution.

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::error::RouterError;
use crate::handler::{BoxedHandler, Handler, ParamVec};
use crate::method::{IntoMethods, Method};
use crate::path::{is_dynamic, normalize_path, wildcard_count};

use super::matcher::find_dynamic;
use super::table::RouteTable;

/// Kind of a registered route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    Static,
    Dynamic,
}

/// One entry of a route listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub method: Method,
    pub path: String,
    pub kind: RouteKind,
}

/// How a request was resolved against the table
#[derive(Debug)]
pub(crate) enum Resolved<'a, R> {
    Static(&'a BoxedHandler<R>),
    Dynamic {
        handler: &'a BoxedHandler<R>,
        template: Arc<str>,
        params: ParamVec,
    },
    NotFound(&'a BoxedHandler<R>),
}

/// Method/path router producing handler outputs of type `R`
///
/// Construct one instance at startup, register routes, then share it for
/// dispatching. Dispatch only needs `&self`, and every dispatch returns its
/// own [`crate::Dispatch`] value, so nothing leaks between requests.
///
/// # Example
///
/// ```rust
/// use nanorouter::Router;
///
/// let mut router: Router<String> = Router::new();
/// router.register("GET", "/", |_: &[String]| "index".to_string());
/// router.register("GET|POST", "/user/{id}/profile", |p: &[String]| format!("user {}", p[0]));
/// router.register_not_found("ALL", |_: &[String]| "not found".to_string());
///
/// let dispatch = router.dispatch("GET", "/user/42/profile/");
/// assert!(dispatch.is_dynamic());
/// assert_eq!(dispatch.params(), ["42".to_string()]);
/// assert_eq!(dispatch.output().map(String::as_str), Some("user 42"));
/// ```
pub struct Router<R> {
    table: RouteTable<BoxedHandler<R>>,
}

impl<R> Default for Router<R> {
    fn default() -> Self {
        Self {
            table: RouteTable::default(),
        }
    }
}

impl<R> Clone for Router<R> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<R> Router<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for every method in `methods` at `path`
    ///
    /// The path is normalized and classified once: paths containing a `{...}`
    /// group go to the dynamic registry, all others to the static one. A later
    /// registration for the same (method, path) replaces the earlier handler.
    /// Unknown method tokens are skipped.
    pub fn register<M, H>(&mut self, methods: M, path: &str, handler: H)
    where
        M: IntoMethods,
        H: Handler<R> + 'static,
    {
        let methods = methods.into_methods();
        let path = normalize_path(path);
        let dynamic = is_dynamic(path);
        let handler = BoxedHandler::new(handler);

        for method in &methods {
            if dynamic {
                self.table.insert_dynamic(*method, path, handler.clone());
            } else {
                self.table.insert_static(*method, path, handler.clone());
            }
        }

        debug!(
            methods = ?methods,
            path = %path,
            kind = if dynamic { "dynamic" } else { "static" },
            "Route registered"
        );
    }

    /// Like [`Router::register`], but rejects a handler whose declared arity
    /// differs from the number of wildcard segments in `path`
    pub fn register_with_arity<M, H>(
        &mut self,
        methods: M,
        path: &str,
        arity: usize,
        handler: H,
    ) -> Result<(), RouterError>
    where
        M: IntoMethods,
        H: Handler<R> + 'static,
    {
        let expected = wildcard_count(normalize_path(path));
        if expected != arity {
            return Err(RouterError::ArityMismatch {
                path: path.to_string(),
                expected,
                declared: arity,
            });
        }
        self.register(methods, path, handler);
        Ok(())
    }

    /// Register the fallback handler of every method in `methods`
    pub fn register_not_found<M, H>(&mut self, methods: M, handler: H)
    where
        M: IntoMethods,
        H: Handler<R> + 'static,
    {
        let methods = methods.into_methods();
        let handler = BoxedHandler::new(handler);
        for method in &methods {
            self.table.set_not_found(*method, handler.clone());
        }
        debug!(methods = ?methods, "Not-found handler registered");
    }

    /// Remove the route stored under the exact key `path`
    ///
    /// The key is **not** normalized: `/a/` does not remove a route registered
    /// as `/a` (stored as `/a`). Missing keys are ignored. Returns whether any
    /// entry was removed.
    pub fn unregister<M: IntoMethods>(&mut self, methods: M, path: &str) -> bool {
        let mut removed = false;
        for method in methods.into_methods() {
            removed |= self.table.remove(method, path);
        }
        debug!(path = %path, removed, "Route unregistered");
        removed
    }

    /// Remove the fallback handler of every method in `methods`
    pub fn unregister_not_found<M: IntoMethods>(&mut self, methods: M) -> bool {
        let mut removed = false;
        for method in methods.into_methods() {
            removed |= self.table.clear_not_found(method);
        }
        removed
    }

    /// Total number of static and dynamic routes over all methods
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the static and dynamic routes, for debugging and route pages
    ///
    /// Methods follow [`Method::ALL`] order. Within a method, static paths are
    /// sorted and dynamic templates follow in registration order. Not-found
    /// handlers are not listed.
    #[must_use]
    pub fn list_routes(&self) -> Vec<RouteEntry> {
        let mut entries = Vec::with_capacity(self.len());
        for method in Method::ALL {
            let routes = self.table.get(method);

            let mut statics: Vec<&str> = routes.statics.keys().map(|k| &**k).collect();
            statics.sort_unstable();
            entries.extend(statics.into_iter().map(|path| RouteEntry {
                method,
                path: path.to_string(),
                kind: RouteKind::Static,
            }));

            entries.extend(routes.dynamics.iter().map(|r| RouteEntry {
                method,
                path: r.template.to_string(),
                kind: RouteKind::Dynamic,
            }));
        }
        entries
    }

    /// Whether `method` has a fallback handler
    #[must_use]
    pub fn has_not_found(&self, method: Method) -> bool {
        self.table.get(method).not_found.is_some()
    }

    /// Resolve a normalized path in precedence order: static, dynamic, not-found
    pub(crate) fn resolve(&self, method: Method, path: &str) -> Option<Resolved<'_, R>> {
        let routes = self.table.get(method);

        if let Some(handler) = routes.statics.get(path) {
            return Some(Resolved::Static(handler));
        }

        if !routes.dynamics.is_empty() {
            if let Some(found) = find_dynamic(&routes.dynamics, path) {
                return Some(Resolved::Dynamic {
                    handler: &found.route.handler,
                    template: Arc::clone(&found.route.template),
                    params: found.params,
                });
            }
        }

        if let Some(handler) = &routes.not_found {
            return Some(Resolved::NotFound(handler));
        }

        None
    }
}

impl<R> std::fmt::Debug for Router<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router").field("routes", &self.len()).finish()
    }
}
