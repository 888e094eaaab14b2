use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("estimate_pi_cli_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_estimate_pi"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch estimate_pi")
}

fn assert_rejected(name: &str, args: &[&str], message: &str) {
    let dir = scratch_dir(name);
    let out = run_in(&dir, args);
    let stderr = String::from_utf8_lossy(&out.stderr);

    assert!(!out.status.success(), "{args:?} should fail");
    assert!(stderr.contains(message), "stderr for {args:?} was: {stderr}");
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0, "{args:?} must not create files");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_rejects_invalid_input() {
    assert_rejected("indivisible", &["4", "10"], "num_points must be divisible by 4");
    assert_rejected("zero_threads", &["0", "100"], "num_threads must be positive");
    assert_rejected("negative_threads", &["-2", "100"], "num_threads must be positive");
    assert_rejected("many_threads", &["9", "90"], "don't use more than 8 threads");
    assert_rejected("zero_points", &["2", "0"], "num_points must be positive");
    assert_rejected("parse_threads", &["two", "100"], "num_threads");
    assert_rejected("parse_points", &["2", "lots"], "num_points");
    assert_rejected("huge_points", &["1", "3000000000"], "num_points");
}

#[test]
fn test_wrong_argument_count_prints_usage() {
    for args in [&[][..], &["4"][..], &["4", "100", "7"][..]] {
        assert_rejected("usage", args, "Usage");
    }
}

#[test]
fn test_successful_run_writes_artifacts() {
    let dir = scratch_dir("success");

    for _ in 0..2 {
        let out = run_in(&dir, &["4", "1000"]);
        assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
        assert!(String::from_utf8_lossy(&out.stdout).contains("Pi estimate"));
    }

    let points = fs::read_to_string(dir.join("points_1000.csv")).unwrap();
    let mut lines = points.lines();
    assert_eq!(lines.next(), Some("x,y"));
    assert_eq!(lines.count(), 1000);

    let errors = fs::read_to_string(dir.join("errors.csv")).unwrap();
    let rows: Vec<&str> = errors.lines().collect();
    assert_eq!(rows.len(), 3, "Header once, one row per run");
    assert_eq!(rows[0], "num_points,error");
    assert_eq!(rows[1], rows[2], "Seeded runs must agree");

    let timings = fs::read_to_string(dir.join("timings.csv")).unwrap();
    let rows: Vec<&str> = timings.lines().collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], "num_points,main_seconds");
    assert!(rows[1].starts_with("1000,"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_points_independent_of_thread_count() {
    let one = scratch_dir("threads_one");
    let eight = scratch_dir("threads_eight");

    assert!(run_in(&one, &["1", "800"]).status.success());
    assert!(run_in(&eight, &["8", "800"]).status.success());

    for file in ["points_800.csv", "errors.csv"] {
        assert_eq!(
            fs::read(one.join(file)).unwrap(),
            fs::read(eight.join(file)).unwrap(),
            "{file} differs between 1 and 8 threads"
        );
    }

    fs::remove_dir_all(&one).unwrap();
    fs::remove_dir_all(&eight).unwrap();
}

#[test]
fn test_options() {
    let dir = scratch_dir("options");
    let out_dir = dir.join("out");
    fs::create_dir_all(&out_dir).unwrap();

    let out = run_in(
        &dir,
        &["--seed", "42", "--with-estimate", "--no-points", "--output-dir", "out", "2", "100"],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    assert!(!out_dir.join("points_100.csv").exists());
    let errors = fs::read_to_string(out_dir.join("errors.csv")).unwrap();
    assert!(errors.starts_with("num_points,pi_estimate,error\n100,"));
    assert!(out_dir.join("timings.csv").exists());
    assert!(!dir.join("errors.csv").exists());

    fs::remove_dir_all(&dir).unwrap();
}
