use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const LANDING_PAGE: &str = "export default function ProjectLandingPage() {
  const handleCreateProject = async () => {
    if (!user) {
      await signIn();
      return;
    }
    await createProject();
  };
}
";

const PATCHED_LANDING_PAGE: &str = "export default function ProjectLandingPage() {
  const handleCreateProject = async () => {
    if (!user) {
      const result = await signIn();
      if (!result) return;
    }
    await createProject();
  };
}
";

fn patchlet(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_patchlet"))
        .args(args)
        .current_dir(cwd)
        .env_remove("PATCHLET_FILE")
        .env_remove("PATCHLET_LOG")
        .output()
        .unwrap()
}

fn landing_project(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    let pages = dir.path().join("src/pages");
    fs::create_dir_all(&pages).unwrap();
    fs::write(pages.join("ProjectLandingPage.jsx"), content).unwrap();
    dir
}

fn landing_page(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("src/pages/ProjectLandingPage.jsx")).unwrap()
}

#[test]
fn patches_default_target_and_reports_success() {
    let dir = landing_project(LANDING_PAGE);

    let output = patchlet(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Successfully patched handleCreateProject\n"
    );
    assert_eq!(landing_page(&dir), PATCHED_LANDING_PAGE);
}

#[test]
fn unrelated_content_is_left_alone() {
    let unrelated = "export const answer = 42;\n";
    let dir = landing_project(unrelated);

    let output = patchlet(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(3));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Could not find code to patch\n"
    );
    assert_eq!(landing_page(&dir), unrelated);
}

#[test]
fn not_found_prints_only_the_status_line() {
    let dir = landing_project("export const answer = 42;\n");

    let output = patchlet(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(3));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Could not find code to patch\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn second_run_reports_not_found() {
    let dir = landing_project(LANDING_PAGE);

    assert_eq!(patchlet(dir.path(), &[]).status.code(), Some(0));
    let second = patchlet(dir.path(), &[]);

    assert_eq!(second.status.code(), Some(3));
    assert_eq!(landing_page(&dir), PATCHED_LANDING_PAGE);
}

#[test]
fn allow_missing_exits_zero() {
    let dir = landing_project(PATCHED_LANDING_PAGE);

    let output = patchlet(dir.path(), &["--allow-missing"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Could not find code to patch\n"
    );
}

#[test]
fn missing_target_fails() {
    let dir = TempDir::new().unwrap();

    let output = patchlet(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("ProjectLandingPage.jsx"));
}

#[test]
fn dry_run_does_not_write() {
    let dir = landing_project(LANDING_PAGE);

    let output = patchlet(dir.path(), &["--dry-run"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "DRY Successfully patched handleCreateProject\n"
    );
    assert_eq!(landing_page(&dir), LANDING_PAGE);
}

#[test]
fn file_flag_overrides_target() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Landing.jsx"), LANDING_PAGE).unwrap();

    let output = patchlet(dir.path(), &["--file", "Landing.jsx"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(dir.path().join("Landing.jsx")).unwrap(),
        PATCHED_LANDING_PAGE
    );
}

#[test]
fn json_report_describes_the_run() {
    let dir = landing_project(LANDING_PAGE);

    let output = patchlet(dir.path(), &["--format", "json"]);

    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["outcome"], "applied");
    assert_eq!(report["occurrences"], 1);
    assert_eq!(report["dry_run"], false);
    assert_eq!(report["sha256_after"].as_str().unwrap().len(), 64);
}
