//! Exit codes of the `vocab-tools` binary.

use std::fs;
use std::process::Command;

#[test]
fn test_merge_without_english_input_exits_with_2() {
    let input = tempfile::tempdir().unwrap();
    fs::write(input.path().join("dutch-spanish.csv"), "hallo,hola\n").unwrap();
    let output = input.path().join("out").join("merged.csv");

    let status = Command::new(env!("CARGO_BIN_EXE_vocab-tools"))
        .current_dir(input.path())
        .arg("merge")
        .arg(input.path())
        .arg(&output)
        .status()
        .expect("failed to run vocab-tools merge");

    assert_eq!(status.code(), Some(2));
    assert!(!output.exists());
}

#[test]
fn test_merge_with_english_input_succeeds() {
    let input = tempfile::tempdir().unwrap();
    fs::write(input.path().join("english-russian.csv"), "hello,привет\n").unwrap();
    let output = input.path().join("merged.csv");

    let status = Command::new(env!("CARGO_BIN_EXE_vocab-tools"))
        .current_dir(input.path())
        .arg("merge")
        .arg(input.path())
        .arg(&output)
        .status()
        .expect("failed to run vocab-tools merge");

    assert!(status.success());
    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content.lines().nth(1), Some("hello,привет,,,,"));
}
