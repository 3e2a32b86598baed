//! # CLI Module
//!
//! Command-line front end for inspecting and exercising a route manifest.
//!
//! ## Commands
//!
//! ### `routes`
//!
//! Print the registered routes, one heading per method. With `--group`, paths
//! served by both GET and POST are listed once under `GET/POST`.
//!
//! ```bash
//! nanorouter routes --manifest routes.yaml --group
//! ```
//!
//! ### `dispatch`
//!
//! Run one request through the router and print a JSON report of the
//! resolution, the matched template, the extracted values and the handler
//! output.
//!
//! ```bash
//! nanorouter dispatch --manifest routes.yaml --method GET --path /user/31/profile
//! ```
//!
//! ### `redirect`
//!
//! Show the `Location` a redirect would emit, or that it would be suppressed
//! because it loops back to the current path.
//!
//! ```bash
//! nanorouter redirect --manifest routes.yaml --target /login --current /login
//! ```
//!
//! Base directory and base URL come from the manifest, falling back to
//! `NANOROUTER_BASE_DIR` / `NANOROUTER_BASE_URL`.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{execute, group_routes, run_cli, Cli, Commands, OutputFormat, RouteGroup};
