use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("gridhaul-cli");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .arg("--no-logo");
    cmd
}

#[test]
fn text_path_lists_cells() {
    cli()
        .args(["path", "--rows", "3", "--cols", "3", "--from", "0,0", "--to", "2,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Path from (0, 0) to (2, 2) (4 units; algorithm: a-star):",
        ))
        .stdout(predicate::str::contains(" - (0, 1)"))
        .stdout(predicate::str::contains(" - (2, 2)"));
}

#[test]
fn basic_path_ends_with_distance() {
    cli()
        .args(["--format", "basic", "path", "--rows", "1", "--cols", "4"])
        .args(["--from", "0,3", "--to", "0,0", "--algorithm", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "+ (0, 3)\n| (0, 2)\n| (0, 1)\n- (0, 0)\ndistance: 3\n",
        ));
}

#[test]
fn json_path_reports_algorithm() {
    let output = cli()
        .args(["--format", "json", "path", "--rows", "6", "--cols", "9"])
        .args(["--from", "5,8", "--to", "0,2", "--algorithm", "bfs"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["algorithm"], "bfs");
    assert_eq!(json["distance"], 11);
    assert_eq!(json["cells"].as_array().map(Vec::len), Some(12));
}

#[test]
fn endpoint_outside_grid_is_rejected() {
    cli()
        .args(["path", "--rows", "3", "--cols", "3", "--from", "0,0", "--to", "3,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("goal (3, 0) lies outside the 3x3 grid"));
}

#[test]
fn malformed_coordinate_is_a_usage_error() {
    cli()
        .args(["path", "--rows", "3", "--cols", "3", "--from", "zero", "--to", "1,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected row,col"));
}
