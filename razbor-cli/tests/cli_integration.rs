//! Integration tests for the razbor CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn razbor() -> Command {
    Command::cargo_bin("razbor").unwrap()
}

#[test]
fn test_tokenize_russian_text() {
    razbor()
        .args(["tokenize", "-i", &fixture_path("russian-sample.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Кот-д'Ивуар\n"))
        .stdout(predicate::str::contains("т.е.\n"))
        .stdout(predicate::str::contains("5-й\n"))
        .stdout(predicate::str::contains("1,5\n"));
}

#[test]
fn test_tokenize_english_text() {
    razbor()
        .args(["tokenize", "-i", &fixture_path("english-sample.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("ca\nn't\n"))
        .stdout(predicate::str::contains("1990s\n"))
        .stdout(predicate::str::contains("https://example.com/page\n.\n"));
}

#[test]
fn test_tokenize_stdin() {
    razbor()
        .args(["tokenize", "-i", "-"])
        .write_stdin("Нью-Йорк :))) :-)")
        .assert()
        .success()
        .stdout("Нью-Йорк\n:)))\n:\n-\n)\n");
}

#[test]
fn test_russian_profile_flag() {
    razbor()
        .args(["tokenize", "-i", "-", "-l", "russian"])
        .write_stdin("can't")
        .assert()
        .success()
        .stdout("can\n'\nt\n");
}

#[test]
fn test_json_output() {
    razbor()
        .args(["tokenize", "-i", "-", "-f", "json"])
        .write_stdin("Ёж 1,5")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source\": \"<stdin>\""))
        .stdout(predicate::str::contains("\"text\": \"1,5\""))
        .stdout(predicate::str::contains("\"start\": 3"))
        .stdout(predicate::str::contains("\"kind\": \"INT\""));
}

#[test]
fn test_markdown_output() {
    razbor()
        .args(["tokenize", "-i", &fixture_path("russian-sample.txt"), "-f", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. `Кот-д'Ивуар` (RU)"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total tokens:"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    razbor()
        .args(["tokenize", "-i", &fixture_path("russian-sample.txt"), "-o"])
        .arg(&output_file)
        .assert()
        .success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("Кот-д'Ивуар"));
}

#[test]
fn test_glob_pattern() {
    razbor()
        .args(["tokenize", "-q", "-i", &fixture_path("*.txt")])
        .assert()
        .success()
        // english-sample.txt sorts first; a blank line separates the inputs
        .stdout(predicate::str::contains(".\n\nКот-д'Ивуар\n"));
}

#[test]
fn test_config_words() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("lexicon.toml");
    fs::write(&config, "[words]\nru = [\"что-то\"]\n").unwrap();

    razbor()
        .args(["tokenize", "-i", "-", "-c"])
        .arg(&config)
        .write_stdin("что-то кое-что")
        .assert()
        .success()
        .stdout("что-то\nкое\n-\nчто\n");
}

#[test]
fn test_invalid_file() {
    razbor()
        .args(["tokenize", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_stdin_with_files() {
    razbor()
        .args(["tokenize", "-i", "-", "-i", &fixture_path("english-sample.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be combined"));
}

#[test]
fn test_zero_threads() {
    razbor()
        .args(["tokenize", "-i", "-", "-t", "0"])
        .write_stdin("текст")
        .assert()
        .failure()
        .stderr(predicate::str::contains("threads must be greater than 0"));
}

#[test]
fn test_help_command() {
    razbor()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokenize"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_list_languages() {
    razbor()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mixed"))
        .stdout(predicate::str::contains("russian"))
        .stdout(predicate::str::contains("english"));
}

#[test]
fn test_list_formats() {
    razbor()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("markdown"));
}
