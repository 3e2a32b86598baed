//! # Router Module
//!
//! The router module stores routes and resolves a request (method, path) to
//! the handler that should run.
//!
//! ## Overview
//!
//! Every method of the closed [`crate::Method`] set owns three registries:
//!
//! - **static**: exact path → handler, looked up by key equality
//! - **dynamic**: path templates with wildcard segments (`/user/{id}/profile`),
//!   scanned in registration order
//! - **not-found**: a single fallback handler
//!
//! A path is classified once, at registration: if it contains a `{...}` group
//! anywhere it is stored as a template, otherwise as a static path. Paths are
//! normalized the same way at registration and lookup (`/` is kept, any other
//! path loses its trailing slashes).
//!
//! ## Resolution order
//!
//! 1. static entry for (method, path)
//! 2. dynamic template match, **last matching template wins**
//! 3. not-found handler of the method
//! 4. nothing: the dispatch reports that no handler ran
//!
//! The last-match-wins rule is deliberate and can be surprising: with
//! `/a/{x}` registered before `/a/{y}`, the request `/a/5` resolves to
//! `/a/{y}`. Register the template that should win last.
//!
//! ## Removal
//!
//! [`Router::unregister`] removes the exact key it is given, without
//! normalization. A route registered as `/a/` is stored as `/a` and can only be
//! removed with `/a`.

mod core;
mod matcher;
mod table;
#[cfg(test)]
mod tests;

pub use self::core::{RouteEntry, RouteKind, Router};
pub(crate) use self::core::Resolved;
