use std::{fs, process::Command};

use programs::{ProgramId, evaluate};
use spiral::{Spiral, io::write_features};

fn driver() -> Command {
    Command::new(env!("CARGO_BIN_EXE_driver"))
}

#[test]
fn missing_input_argument_exits_with_usage() {
    let out = driver().output().unwrap();

    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("usage"));
}

#[test]
fn too_many_arguments_exits_with_usage() {
    let out = driver().args(["a", "b", "c"]).output().unwrap();

    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn unreadable_input_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let out = driver()
        .arg(dir.path().join("missing.bin"))
        .env_remove("SAMPLES")
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("io error"));
}

#[test]
fn bad_config_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("spiral.bin");
    let points: Vec<_> = Spiral::default().iter().take(10).collect();
    write_features(&input, &points).unwrap();

    let out = driver().arg(&input).env("SAMPLES", "zero").output().unwrap();

    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn writes_predictions_and_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("spiral.bin");
    let output = dir.path().join("preds.bin");
    let points: Vec<_> = Spiral::default().iter().take(10).collect();
    write_features(&input, &points).unwrap();

    let out = driver()
        .arg(&input)
        .arg(&output)
        .env_remove("SAMPLES")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));

    let written: Vec<f32> = bytemuck::pod_collect_to_vec(&fs::read(&output).unwrap());
    let (x0, x1) = points[3].features();
    let id = ProgramId::try_from(4).unwrap();
    assert_eq!(written[4 * 10 + 3].to_bits(), evaluate(id, x0, x1).to_bits());
}

#[test]
fn without_output_prints_one_line_per_program() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("spiral.bin");
    let points: Vec<_> = Spiral::default().iter().take(10).collect();
    write_features(&input, &points).unwrap();

    let out = driver().arg(&input).env_remove("SAMPLES").output().unwrap();
    assert_eq!(out.status.code(), Some(0));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), programs::PROGRAM_COUNT);
    assert!(lines[0].starts_with("0: "));
    assert_eq!(lines[0].split_whitespace().count(), 11);
}
