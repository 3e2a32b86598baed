//! # nanorouter
//!
//! **nanorouter** selects and invokes a registered handler for an HTTP method
//! and request path. It supports exact ("static") paths, templates with
//! wildcard segments (`/user/{user_id}/profile`) and a per-method not-found
//! fallback.
//!
//! ## Architecture
//!
//! - **[`method`]** - closed method set and method-spec normalization (`"GET|POST"`, `"ALL"`, lists)
//! - **[`path`]** - path normalization and wildcard detection
//! - **[`router`]** - route tables, dynamic template matching, registration and listing
//! - **[`dispatcher`]** - precedence chain and per-call [`Dispatch`] result
//! - **[`request`]** - request source: base-dir stripping, query discarding, headers
//! - **[`redirect`]** - `302` redirects with loop prevention
//! - **[`config`]** - environment configuration of the mount point
//! - **[`manifest`]** - YAML route manifests with echo handlers
//! - **[`logging`]** - `tracing-subscriber` initialization
//! - **[`cli`]** - the `nanorouter` command-line tool
//!
//! ### Request Handling Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Request as RequestContext
//!     participant Router
//!     participant Handler
//!
//!     Caller->>Request: method + raw URI (+ base dir)
//!     Request->>Request: strip base dir, drop query,<br/>normalize path
//!     Caller->>Router: dispatch_request(&request)
//!     alt static entry
//!         Router->>Handler: call(&[])
//!     else dynamic template (last match wins)
//!         Router->>Handler: call(&params)
//!     else not-found handler
//!         Router->>Handler: call(&[])
//!     end
//!     Router-->>Caller: Dispatch { resolution, template, params, output }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use nanorouter::{Resolution, Router};
//!
//! let mut router: Router<String> = Router::new();
//! router.register("GET", "/", |_: &[String]| "index".to_string());
//! router.register("GET", "/items/{id}", |p: &[String]| format!("item {}", p[0]));
//! router.register_not_found("GET", |_: &[String]| "missing".to_string());
//!
//! assert_eq!(router.dispatch("GET", "/").into_output().as_deref(), Some("index"));
//!
//! let item = router.dispatch("GET", "/items/9");
//! assert_eq!(item.params(), ["9".to_string()]);
//! assert_eq!(item.output().map(String::as_str), Some("item 9"));
//!
//! assert_eq!(router.dispatch("GET", "/missing").resolution(), Resolution::NotFound);
//! assert_eq!(router.dispatch("PUT", "/missing").resolution(), Resolution::Unhandled);
//! ```
//!
//! ## Runtime Considerations
//!
//! Registration takes `&mut self` and is meant to happen at startup. Dispatch
//! takes `&self`, holds no per-request state in the router and runs the
//! handler synchronously on the calling thread, so a fully built router can
//! be shared (for example behind an `Arc`) between request threads.

pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod logging;
pub mod manifest;
pub mod method;
pub mod path;
pub mod redirect;
pub mod request;
pub mod router;

pub use config::RouterConfig;
pub use dispatcher::{Dispatch, DispatchReport, Resolution};
pub use error::RouterError;
pub use handler::{Handler, ParamVec};
pub use manifest::{load_manifest, Manifest};
pub use method::{IntoMethods, Method};
pub use redirect::Redirector;
pub use request::RequestContext;
pub use router::{RouteEntry, RouteKind, Router};
