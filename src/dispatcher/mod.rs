//! # Dispatcher Module
//!
//! The dispatcher runs one request through the router's precedence chain and
//! invokes exactly one handler, synchronously.
//!
//! ## Request Flow
//!
//! 1. The method token is parsed; methods outside the closed set run nothing
//! 2. The path is normalized (`/` kept, trailing slashes stripped)
//! 3. A static entry for (method, path) runs with no arguments
//! 4. Otherwise the dynamic templates of the method are scanned; the last
//!    matching template runs with the captured values as positional arguments
//! 5. Otherwise the method's not-found handler runs with no arguments
//! 6. Otherwise nothing runs and the [`Dispatch`] reports `Unhandled`
//!
//! Failing to find a route is a normal outcome, never an error.
//!
//! ## Dispatch state
//!
//! Whether the match was dynamic, which template matched and the captured
//! values are returned with the handler output in a [`Dispatch`] value. The
//! router itself holds no per-request state, so a single router can be shared
//! across threads once registration is complete.
//!
//! ```rust
//! use nanorouter::{Resolution, Router};
//!
//! let mut router: Router<usize> = Router::new();
//! router.register("GET", "/items/{id}", |p: &[String]| p.len());
//!
//! let dispatch = router.dispatch("GET", "/items/9");
//! assert_eq!(dispatch.resolution(), Resolution::Dynamic);
//! assert_eq!(dispatch.into_output(), Some(1));
//!
//! assert_eq!(router.dispatch("GET", "/missing").resolution(), Resolution::Unhandled);
//! ```

mod core;

pub use self::core::{Dispatch, DispatchReport, Resolution};
