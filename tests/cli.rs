use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn positions_table_lists_every_planet() {
    Command::cargo_bin("positions")
        .expect("positions bin")
        .args(["--date", "2024-01-01", "--orbit-points", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("planet"))
        .stdout(predicate::str::contains("Mercury"))
        .stdout(predicate::str::contains("Neptune"))
        .stdout(predicate::str::contains("#4B0082"));
}

#[test]
fn positions_writes_csv_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out").join("positions.csv");

    Command::cargo_bin("positions")
        .expect("positions bin")
        .args([
            "--date",
            "2024-01-01",
            "--orbit-points",
            "6",
            "--format",
            "csv",
            "--output",
            path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let text = fs::read_to_string(&path).expect("csv output");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert!(lines[0].starts_with("planet,color,relative_size"));
    assert!(lines[4].starts_with("mars,"));
    assert!(lines[4].ends_with(",7"));
}

#[test]
fn positions_json_to_stdout() {
    let output = Command::cargo_bin("positions")
        .expect("positions bin")
        .args([
            "--date",
            "2024-01-01T12:00:00Z",
            "--orbit-points",
            "0",
            "--format",
            "json",
        ])
        .output()
        .expect("run positions");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    let planets = value.as_array().expect("array");
    assert_eq!(planets.len(), 8);
    assert_eq!(planets[4]["planet"], "jupiter");
    assert!(planets[4]["orbitPoints"].as_array().unwrap().is_empty());
}

#[test]
fn positions_rejects_bad_dates() {
    Command::cargo_bin("positions")
        .expect("positions bin")
        .args(["--date", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --date"));
}

#[test]
fn render_frame_writes_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let png_path = dir.path().join("frame.png");

    Command::cargo_bin("render_frame")
        .expect("render_frame bin")
        .args([
            "--date",
            "2024-01-01",
            "--output",
            png_path.to_str().unwrap(),
            "--width",
            "320",
            "--height",
            "200",
            "--frames",
            "3",
            "--spin",
            "5",
        ])
        .assert()
        .success();

    let bytes = fs::read(&png_path).expect("png output");
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[test]
fn render_frame_reads_yaml_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("explorer.yaml");
    let png_path = dir.path().join("frame.png");
    fs::write(
        &config_path,
        "render:\n  width: 96\n  height: 64\n  orbit_points: 12\n  frame_rate: 0\n",
    )
    .expect("write config");

    Command::cargo_bin("render_frame")
        .expect("render_frame bin")
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "--date",
            "2024-01-01",
            "--output",
            png_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(fs::metadata(&png_path).expect("png metadata").len() > 0);
}

#[test]
fn render_frame_rejects_zero_size() {
    let dir = tempfile::tempdir().expect("tempdir");
    Command::cargo_bin("render_frame")
        .expect("render_frame bin")
        .args([
            "--width",
            "0",
            "--output",
            dir.path().join("frame.png").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("frame size must be non-zero"));
}

#[test]
fn positions_caps_orbit_points() {
    let too_many = usize::MAX.to_string();
    Command::cargo_bin("positions")
        .expect("positions bin")
        .args(["--date", "2024-01-01", "--orbit-points", too_many.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--orbit-points must not exceed 2000"));
}
