//! End-to-end tests for the logo step against a temporary workspace

use std::fs;

use theme_logos::action::{read_response, write_github_outputs};
use theme_logos::{run, ActionConfig, ActionError, LogoJob};

const RESPONSE: &str = r##"Sure! Here are both variants.

```svg
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <title>Logo (Light Theme)</title>
  <circle cx="50" cy="50" r="40" fill="#000000"/>
</svg>
```

```svg
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <title>Logo (Dark Theme)</title>
  <circle cx="50" cy="50" r="40" fill="#ffffff"/>
</svg>
```
"##;

fn job_in(workspace: &std::path::Path) -> LogoJob {
    let config = ActionConfig::default()
        .with_output_dir(workspace.join("assets"))
        .with_debug_file(workspace.join("debug_logo_response.txt"));
    LogoJob::new(config, workspace)
}

#[test]
fn test_full_run_writes_logos_and_readme() {
    let dir = tempfile::tempdir().expect("tempdir");
    let workspace = dir.path();
    fs::write(workspace.join("README.md"), "# Demo\nA demo project.\n").expect("write readme");

    let logos = run(RESPONSE, &job_in(workspace)).expect("Should run");

    assert_eq!(logos.light_path, workspace.join("assets/logo-light.svg"));
    let light = fs::read_to_string(&logos.light_path).expect("light logo");
    let dark = fs::read_to_string(&logos.dark_path).expect("dark logo");
    assert!(light.contains("#000000"));
    assert!(dark.contains("#ffffff"));

    let readme = fs::read_to_string(workspace.join("README.md")).expect("readme");
    assert!(readme.starts_with("# Demo\n\n<p align=\"center\">"));
    assert!(readme.contains(r#"srcset="assets/logo-dark.svg""#));
    assert!(readme.contains(r#"<img src="assets/logo-light.svg""#));
    assert!(readme.ends_with("\nA demo project.\n"));

    let debug = fs::read_to_string(workspace.join("debug_logo_response.txt")).expect("debug");
    assert_eq!(debug, RESPONSE);
}

#[test]
fn test_rerun_keeps_single_block() {
    let dir = tempfile::tempdir().expect("tempdir");
    let workspace = dir.path();
    let job = job_in(workspace);

    run(RESPONSE, &job).expect("first run");
    let first = fs::read_to_string(workspace.join("README.md")).expect("readme");
    run(RESPONSE, &job).expect("second run");
    let second = fs::read_to_string(workspace.join("README.md")).expect("readme");

    assert_eq!(first, second);
    assert_eq!(second.matches("<picture>").count(), 1);
}

#[test]
fn test_failed_extraction_writes_no_assets() {
    let dir = tempfile::tempdir().expect("tempdir");
    let workspace = dir.path();
    let job = job_in(workspace);

    let err = run("```svg\n<svg viewBox=\"0 0 1 1\"><rect/></svg>\n```", &job).unwrap_err();
    assert!(matches!(err, ActionError::Extract(_)));
    assert!(!workspace.join("assets").exists());
    assert!(!workspace.join("README.md").exists());
}

#[test]
fn test_readme_can_be_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let workspace = dir.path();
    let job = job_in(workspace).without_readme();

    run(RESPONSE, &job).expect("Should run");
    assert!(workspace.join("assets/logo-dark.svg").exists());
    assert!(!workspace.join("README.md").exists());
}

#[test]
fn test_missing_response_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = read_response(&dir.path().join("response.txt")).unwrap_err();
    assert!(matches!(err, ActionError::InputMissing { .. }));
}

#[test]
fn test_read_response_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("response.txt");
    fs::write(&path, RESPONSE).expect("write response");
    assert_eq!(read_response(&path).expect("Should read"), RESPONSE);
}

#[test]
fn test_github_outputs_appended() {
    let dir = tempfile::tempdir().expect("tempdir");
    let workspace = dir.path();
    let output = workspace.join("github_output");
    fs::write(&output, "existing=1\n").expect("seed output");

    let logos = run(RESPONSE, &job_in(workspace).without_readme()).expect("Should run");
    write_github_outputs(&output, &logos).expect("Should write outputs");

    let written = fs::read_to_string(&output).expect("outputs");
    let expected = format!(
        "existing=1\nlight-logo-path={}\ndark-logo-path={}\n",
        logos.light_path.display(),
        logos.dark_path.display()
    );
    assert_eq!(written, expected);
}
