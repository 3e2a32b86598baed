//! Unit tests for CLI commands

use crate::cli::{group_routes, Cli, Commands, OutputFormat};
use crate::method::Method;
use crate::router::{RouteEntry, RouteKind};
use clap::Parser;

fn entry(method: Method, path: &str) -> RouteEntry {
    RouteEntry {
        method,
        path: path.to_string(),
        kind: RouteKind::Static,
    }
}

#[test]
fn test_routes_command_parses() {
    let cli = Cli::try_parse_from([
        "nanorouter",
        "routes",
        "--manifest",
        "routes.yaml",
        "--group",
        "--format",
        "json",
    ])
    .unwrap();

    match cli.command {
        Commands::Routes {
            manifest,
            group,
            format,
        } => {
            assert_eq!(manifest.to_string_lossy(), "routes.yaml");
            assert!(group);
            assert_eq!(format, OutputFormat::Json);
        }
        _ => panic!("Expected Routes command"),
    }
}

#[test]
fn test_dispatch_command_defaults() {
    let cli = Cli::try_parse_from([
        "nanorouter",
        "dispatch",
        "-m",
        "routes.yaml",
        "--path",
        "/items/9",
        "--header",
        "Accept: text/html",
    ])
    .unwrap();

    match cli.command {
        Commands::Dispatch {
            method,
            path,
            headers,
            ..
        } => {
            assert_eq!(method, "GET");
            assert_eq!(path, "/items/9");
            assert_eq!(headers, vec!["Accept: text/html".to_string()]);
        }
        _ => panic!("Expected Dispatch command"),
    }
}

#[test]
fn test_dispatch_requires_path() {
    assert!(Cli::try_parse_from(["nanorouter", "dispatch", "-m", "routes.yaml"]).is_err());
}

#[test]
fn test_group_routes_merges_get_post() {
    let entries = vec![
        entry(Method::Get, "/"),
        entry(Method::Get, "/only-get"),
        entry(Method::Post, "/"),
        entry(Method::Post, "/only-post"),
        entry(Method::Delete, "/items/{id}"),
    ];

    let groups = group_routes(&entries, true);
    let headings: Vec<&str> = groups.iter().map(|g| g.heading.as_str()).collect();
    assert_eq!(headings, vec!["GET", "POST", "DELETE", "GET/POST"]);
    assert_eq!(groups[0].paths, vec!["/only-get".to_string()]);
    assert_eq!(groups[3].paths, vec!["/".to_string()]);
}

#[test]
fn test_group_routes_without_merge() {
    let entries = vec![entry(Method::Get, "/"), entry(Method::Post, "/")];
    let groups = group_routes(&entries, false);
    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|g| g.paths == vec!["/".to_string()]));
}
