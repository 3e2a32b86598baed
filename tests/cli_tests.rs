#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::Value;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const MANIFEST: &str = r#"
base_dir: /myApp
base_url: https://example.com/myApp
routes:
  - method: POST|GET
    path: /
    handler: index
  - method: POST|GET
    path: /user/{0}/profile
    handler: user_profile
  - method: GET
    path: /routes
    handler: route_page
  - method: DELETE
    path: /user/{0}
    handler: delete_user
not_found:
  - method: POST|GET
    handler: not_found
    body: "Not Found!"
"#;

fn manifest_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("temp manifest");
    file.write_all(MANIFEST.as_bytes()).unwrap();
    file
}

fn run(args: &[&str]) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_nanorouter"))
        .args(args)
        .env_remove("NANOROUTER_BASE_DIR")
        .env_remove("NANOROUTER_BASE_URL")
        .env("NANOROUTER_LOG_LEVEL", "error")
        .output()
        .expect("run cli");
    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
    )
}

#[test]
fn test_cli_dispatch_dynamic_route() {
    let manifest = manifest_file();
    let path = manifest.path().to_str().unwrap();
    let (ok, stdout) = run(&[
        "dispatch",
        "--manifest",
        path,
        "--method",
        "post",
        "--path",
        "/myApp/user/31/profile?tab=posts",
    ]);
    assert!(ok);

    let report: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["request"]["method"], "POST");
    assert_eq!(report["request"]["path"], "/user/31/profile");
    assert_eq!(report["request"]["query"]["tab"], "posts");
    assert_eq!(report["dispatch"]["resolution"], "dynamic");
    assert_eq!(report["dispatch"]["dynamic_path"], "/user/{0}/profile");
    assert_eq!(report["dispatch"]["params"], serde_json::json!(["31"]));
    assert_eq!(report["output"]["handler"], "user_profile");
}

#[test]
fn test_cli_dispatch_not_found_and_unhandled() {
    let manifest = manifest_file();
    let path = manifest.path().to_str().unwrap();

    let (ok, stdout) = run(&["dispatch", "-m", path, "--path", "/myApp/missing"]);
    assert!(ok);
    let report: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["dispatch"]["resolution"], "not_found");
    assert_eq!(report["output"]["status"], 404);
    assert_eq!(report["output"]["body"], "Not Found!");

    let (ok, stdout) = run(&["dispatch", "-m", path, "--method", "PUT", "--path", "/"]);
    assert!(ok);
    let report: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["dispatch"]["handled"], false);
    assert!(report["output"].is_null());
}

#[test]
fn test_cli_routes_grouped() {
    let manifest = manifest_file();
    let path = manifest.path().to_str().unwrap();
    let (ok, stdout) = run(&["routes", "-m", path, "--group", "--format", "json"]);
    assert!(ok);

    let groups: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        groups,
        serde_json::json!([
            { "heading": "GET", "paths": ["/routes"] },
            { "heading": "DELETE", "paths": ["/user/{0}"] },
            { "heading": "GET/POST", "paths": ["/", "/user/{0}/profile"] },
        ])
    );
}

#[test]
fn test_cli_routes_text() {
    let manifest = manifest_file();
    let path = manifest.path().to_str().unwrap();
    let (ok, stdout) = run(&["routes", "-m", path]);
    assert!(ok);
    assert!(stdout.starts_with("GET\n  /\n  /routes\n  /user/{0}/profile\nPOST\n"));
}

#[test]
fn test_cli_redirect_loop_prevention() {
    let manifest = manifest_file();
    let path = manifest.path().to_str().unwrap();

    let (ok, stdout) = run(&[
        "redirect",
        "-m",
        path,
        "--target",
        "/login",
        "--current",
        "/myApp/login/",
    ]);
    assert!(ok);
    assert!(stdout.starts_with("suppressed"));

    let (ok, stdout) = run(&["redirect", "-m", path, "--target", "/login"]);
    assert!(ok);
    assert_eq!(stdout.trim(), "302 Found Location: /login");
}

#[test]
fn test_cli_missing_manifest_fails() {
    let (ok, _) = run(&["routes", "-m", "/definitely/not/here.yaml"]);
    assert!(!ok);
}
