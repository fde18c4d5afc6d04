use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kubecomply").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn scan_framework_prints_target_rows() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["scan", "framework", "nsa"])
        .assert()
        .success()
        .stdout(contains("framework\tnsa"));
}

#[test]
fn bare_scan_covers_the_native_catalog() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("scan")
        .assert()
        .success()
        .stdout(contains("framework\tnsa"))
        .stdout(contains("framework\tmitre"));
}

#[test]
fn invalid_scan_verb_is_rejected() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["scan", "cluster"])
        .assert()
        .failure()
        .stderr(contains("unrecognized subcommand"));
}

#[test]
fn scan_framework_requires_a_name() {
    let home = TempDir::new().unwrap();
    cmd(&home).args(["scan", "framework"]).assert().failure();
}

#[test]
fn submit_results_requires_a_file() {
    let home = TempDir::new().unwrap();
    cmd(&home).args(["submit", "results"]).assert().failure();
}
