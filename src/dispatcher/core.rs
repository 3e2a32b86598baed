//! Dispatcher core: runs the precedence chain and invokes the resolved handler.

use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::handler::ParamVec;
use crate::method::Method;
use crate::path::normalize_path;
use crate::request::RequestContext;
use crate::router::{Resolved, Router};

/// Which step of the precedence chain produced the response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Exact static entry
    Static,
    /// Dynamic template match
    Dynamic,
    /// Fallback handler of the method
    NotFound,
    /// No handler ran
    Unhandled,
}

/// Outcome of one dispatch
///
/// Carries the handler output together with the state of the dispatch: whether
/// the match was dynamic, which template matched and the extracted values. Each
/// call returns a fresh value, so concurrent dispatches cannot observe each
/// other's state.
#[derive(Debug, Clone)]
pub struct Dispatch<R> {
    resolution: Resolution,
    template: Option<Arc<str>>,
    params: ParamVec,
    output: Option<R>,
}

impl<R> Dispatch<R> {
    /// Dispatch that ran no handler
    #[must_use]
    pub fn unhandled() -> Self {
        Self {
            resolution: Resolution::Unhandled,
            template: None,
            params: ParamVec::new(),
            output: None,
        }
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// True when a handler ran
    #[must_use]
    pub fn is_handled(&self) -> bool {
        self.resolution != Resolution::Unhandled
    }

    /// True when a dynamic template matched
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.resolution == Resolution::Dynamic
    }

    /// Matched template, e.g. `/user/{user_id}/profile` for `/user/31/profile`
    #[must_use]
    pub fn dynamic_path(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Wildcard values in template order; empty unless the match was dynamic
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    #[must_use]
    pub fn output(&self) -> Option<&R> {
        self.output.as_ref()
    }

    #[must_use]
    pub fn into_output(self) -> Option<R> {
        self.output
    }

    /// Serializable summary of the dispatch state (without the output)
    #[must_use]
    pub fn report(&self) -> DispatchReport {
        DispatchReport {
            resolution: self.resolution,
            handled: self.is_handled(),
            dynamic_path: self.template.as_deref().map(str::to_string),
            params: self.params.to_vec(),
        }
    }
}

/// Dispatch state in a form suitable for logs and JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    pub resolution: Resolution,
    pub handled: bool,
    pub dynamic_path: Option<String>,
    pub params: Vec<String>,
}

impl<R> Router<R> {
    /// Dispatch a request given its method token and path
    ///
    /// The method is matched case-insensitively against the closed set; an
    /// unsupported method runs nothing (not even a not-found handler). The path
    /// is normalized before lookup.
    pub fn dispatch(&self, method: &str, path: &str) -> Dispatch<R> {
        match method.parse::<Method>() {
            Ok(method) => self.dispatch_method(method, path),
            Err(_) => {
                warn!(method = %method, path = %path, "Unsupported method, no handler invoked");
                Dispatch::unhandled()
            }
        }
    }

    /// Dispatch a request captured by a [`RequestContext`]
    pub fn dispatch_request(&self, request: &RequestContext) -> Dispatch<R> {
        self.dispatch(request.method(), request.path())
    }

    /// Dispatch a request with an already-parsed method
    pub fn dispatch_method(&self, method: Method, path: &str) -> Dispatch<R> {
        let path = normalize_path(path);
        debug!(method = %method, path = %path, "Dispatch attempt");

        let start = Instant::now();
        let dispatch = match self.resolve(method, path) {
            Some(Resolved::Static(handler)) => Dispatch {
                resolution: Resolution::Static,
                template: None,
                params: ParamVec::new(),
                output: Some(handler.call(&[])),
            },
            Some(Resolved::Dynamic {
                handler,
                template,
                params,
            }) => {
                let output = handler.call(&params);
                Dispatch {
                    resolution: Resolution::Dynamic,
                    template: Some(template),
                    params,
                    output: Some(output),
                }
            }
            Some(Resolved::NotFound(handler)) => Dispatch {
                resolution: Resolution::NotFound,
                template: None,
                params: ParamVec::new(),
                output: Some(handler.call(&[])),
            },
            None => Dispatch::unhandled(),
        };
        let duration_us = start.elapsed().as_micros();

        if dispatch.is_handled() {
            info!(
                method = %method,
                path = %path,
                resolution = ?dispatch.resolution,
                template = dispatch.dynamic_path(),
                params = ?dispatch.params,
                duration_us,
                "Request dispatched"
            );
        } else {
            warn!(
                method = %method,
                path = %path,
                duration_us,
                "No route matched and no not-found handler registered"
            );
        }
        dispatch
    }
}
