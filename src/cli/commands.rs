use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;

use crate::config::RouterConfig;
use crate::manifest::load_manifest;
use crate::method::Method;
use crate::request::RequestContext;
use crate::router::RouteEntry;

/// Command-line interface for nanorouter
#[derive(Parser)]
#[command(name = "nanorouter")]
#[command(about = "Inspect and exercise a nanorouter route manifest", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format of the `routes` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List registered routes per method
    Routes {
        /// Path to the route manifest (YAML or JSON)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Merge paths served by both GET and POST under a GET/POST heading
        #[arg(long, default_value_t = false)]
        group: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Dispatch one request and print a JSON report
    Dispatch {
        /// Path to the route manifest (YAML or JSON)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Request method
        #[arg(long, default_value = "GET")]
        method: String,

        /// Raw request URI, may include the base directory and a query string
        #[arg(long)]
        path: String,

        /// Request header as `Name: value` (repeatable)
        #[arg(long = "header", value_name = "NAME: VALUE")]
        headers: Vec<String>,
    },
    /// Show where a redirect would point, or that it would loop
    Redirect {
        /// Path to the route manifest (YAML or JSON)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Redirect target (local path, relative path or absolute URL)
        #[arg(long)]
        target: String,

        /// Raw URI of the request being served
        #[arg(long, default_value = "/")]
        current: String,

        /// Emit the redirect even if it loops back to the current path
        #[arg(long, default_value_t = false)]
        allow_loop: bool,
    },
}

/// Routes listed under one heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteGroup {
    pub heading: String,
    pub paths: Vec<String>,
}

/// Group a route listing by method
///
/// With `merge_get_post`, paths present under both GET and POST move to a
/// trailing `GET/POST` group. Empty groups are dropped.
#[must_use]
pub fn group_routes(entries: &[RouteEntry], merge_get_post: bool) -> Vec<RouteGroup> {
    let mut groups: Vec<RouteGroup> = Method::ALL
        .iter()
        .map(|method| RouteGroup {
            heading: method.to_string(),
            paths: entries
                .iter()
                .filter(|e| e.method == *method)
                .map(|e| e.path.clone())
                .collect(),
        })
        .collect();

    if merge_get_post {
        let (get, post) = (Method::Get.index(), Method::Post.index());
        let shared: Vec<String> = groups[get]
            .paths
            .iter()
            .filter(|p| groups[post].paths.contains(p))
            .cloned()
            .collect();
        groups[get].paths.retain(|p| !shared.contains(p));
        groups[post].paths.retain(|p| !shared.contains(p));
        groups.push(RouteGroup {
            heading: "GET/POST".to_string(),
            paths: shared,
        });
    }

    groups.retain(|g| !g.paths.is_empty());
    groups
}

fn parse_header(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once(':')
        .with_context(|| format!("Header '{}' must look like 'Name: value'", raw))?;
    Ok((name.trim().to_string(), value.trim().to_string()))
}

/// Run a parsed command, writing its output to `out`
pub fn execute(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Routes {
            manifest,
            group,
            format,
        } => {
            let router = load_manifest(&manifest)?.build_router();
            let groups = group_routes(&router.list_routes(), group);
            match format {
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut *out, &groups)?;
                    writeln!(out)?;
                }
                OutputFormat::Text => {
                    for group in &groups {
                        writeln!(out, "{}", group.heading)?;
                        for path in &group.paths {
                            writeln!(out, "  {}", path)?;
                        }
                    }
                }
            }
            Ok(())
        }
        Commands::Dispatch {
            manifest,
            method,
            path,
            headers,
        } => {
            let manifest = load_manifest(&manifest)?;
            let config = manifest.config(&RouterConfig::from_env()?)?;
            let router = manifest.build_router();

            let headers = headers
                .iter()
                .map(|h| parse_header(h))
                .collect::<Result<Vec<_>>>()?;
            let request =
                RequestContext::new(&method, &path, config.base_dir.as_deref()).with_headers(headers);
            let dispatch = router.dispatch_request(&request);

            let report = json!({
                "request": {
                    "method": request.method(),
                    "path": request.path(),
                    "query": request.query_params(),
                },
                "dispatch": dispatch.report(),
                "output": dispatch.output(),
            });
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
            Ok(())
        }
        Commands::Redirect {
            manifest,
            target,
            current,
            allow_loop,
        } => {
            let manifest = load_manifest(&manifest)?;
            let config = manifest.config(&RouterConfig::from_env()?)?;
            let request = RequestContext::new("GET", &current, config.base_dir.as_deref());

            match config
                .redirector()
                .redirect(&target, request.path(), !allow_loop)?
            {
                Some(response) => {
                    let location = response
                        .headers()
                        .get(http::header::LOCATION)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default();
                    writeln!(out, "{} Location: {}", response.status(), location)?;
                }
                None => writeln!(out, "suppressed: {} loops back to {}", target, request.path())?,
            }
            Ok(())
        }
    }
}

/// Parse the process arguments and run the command against stdout
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)
}
