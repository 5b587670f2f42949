use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn words(args: &[&Path], rust_log: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_words"));
    command.args(args).env_remove("RUST_LOG");
    if let Some(filter) = rust_log {
        command.env("RUST_LOG", filter);
    }
    command.output().unwrap()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_file_is_reported_and_skipped() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let present = dir.path().join("present.txt");
    fs::write(&present, "a bb cc cc dog").unwrap();

    for rust_log in [None, Some("off"), Some("error"), Some("hyper=debug")] {
        let output = words(&[missing.as_path(), present.as_path()], rust_log);
        let stderr = stderr_of(&output);

        assert_eq!(output.status.code(), Some(0), "RUST_LOG={rust_log:?}");
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "The total number of words is: 4\n"
        );
        assert!(
            stderr.contains(&format!("Error opening file: {}", missing.display())),
            "RUST_LOG={rust_log:?}, stderr: {stderr}"
        );
        assert!(!stderr.contains('\u{1b}'), "colour codes in piped stderr");
    }
}

#[test]
fn unreadable_source_fails_the_run() {
    let dir = tempdir().unwrap();

    for rust_log in [None, Some("off")] {
        let output = words(&[dir.path()], rust_log);
        let stderr = stderr_of(&output);

        assert_eq!(output.status.code(), Some(1), "RUST_LOG={rust_log:?}");
        assert!(output.stdout.is_empty());
        assert!(
            stderr.contains("Error counting words from"),
            "RUST_LOG={rust_log:?}, stderr: {stderr}"
        );
        assert!(stderr.contains("Is a directory"), "stderr: {stderr}");
    }
}

#[test]
fn frequency_mode_prints_sorted_entries() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "The the THE end").unwrap();

    let mut command = Command::new(env!("CARGO_BIN_EXE_words"));
    let output = command.arg("-f").arg(&input).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "The frequencies of each word are: \n1\tend\n3\tthe\n"
    );
}
