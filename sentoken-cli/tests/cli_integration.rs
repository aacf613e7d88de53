//! Integration tests for the sentoken CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{name}")
}

fn sentoken() -> Command {
    Command::cargo_bin("sentoken").unwrap()
}

#[test]
fn test_process_french_text() {
    sentoken()
        .arg("process")
        .arg("-i")
        .arg(fixture_path("french-sample.txt"))
        .assert()
        .success()
        .stdout(
            "Bonjour .\n\
             \n\
             Comment allez -vous ?\n\
             \n\
             Très bien , merci !\n\
             \n\
             Viendra -t-il demain ?\n\
             \n\
             L' homme a dit ( sans rire) qu' il pleuvait .\n",
        );
}

#[test]
fn test_process_english_text() {
    sentoken()
        .arg("process")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Mr. Smith arrived .\n"))
        .stdout(predicate::str::contains(
            "He bought 5 kg of rice for 3.50 dollars ...\n",
        ))
        .stdout(predicate::str::contains("The U.S.A. is large .\n"))
        .stdout(predicate::str::contains("Really ? !\n"));
}

#[test]
fn test_vertical_output() {
    sentoken()
        .args(["process", "-f", "vertical", "-i"])
        .arg(fixture_path("french-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Bonjour\n.\n\nComment\nallez\n-vous\n?\n"));
}

#[test]
fn test_json_output() {
    let output = sentoken()
        .args(["process", "-f", "json", "-i"])
        .arg(fixture_path("english-sample.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sentences = value.as_array().unwrap();
    assert_eq!(sentences.len(), 5);
    assert_eq!(sentences[0]["text"], "Mr. Smith arrived .");
    assert_eq!(sentences[4]["tokens"], serde_json::json!(["Yes", "."]));
}

#[test]
fn test_markdown_output() {
    sentoken()
        .args(["process", "-f", "markdown", "-i"])
        .arg(fixture_path("french-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Bonjour ."))
        .stdout(predicate::str::contains("*Total sentences: 5*"));
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("out.txt");

    sentoken()
        .args(["process", "-i"])
        .arg(fixture_path("french-sample.txt"))
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success()
        .stdout("");

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.starts_with("Bonjour .\n\n"));
}

#[test]
fn test_glob_pattern_processes_files_in_order() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("b.txt"), "Second.").unwrap();
    fs::write(temp_dir.path().join("a.txt"), "Premier.").unwrap();

    let pattern = format!("{}/*.txt", temp_dir.path().display());
    sentoken()
        .args(["process", "-q", "-i", &pattern])
        .assert()
        .success()
        .stdout("Premier .\n\nSecond .\n");
}

#[test]
fn test_parallel_processing() {
    let temp_dir = TempDir::new().unwrap();
    for i in 0..4 {
        fs::write(temp_dir.path().join(format!("{i}.txt")), format!("Texte {i}. Fin!")).unwrap();
    }

    let pattern = format!("{}/*.txt", temp_dir.path().display());
    sentoken()
        .args(["process", "-q", "--parallel", "-t", "2", "-i", &pattern])
        .assert()
        .success()
        .stdout(
            "Texte 0 .\n\nFin !\n\nTexte 1 .\n\nFin !\n\n\
             Texte 2 .\n\nFin !\n\nTexte 3 .\n\nFin !\n",
        );
}

#[test]
fn test_no_apostrophes_flag() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.txt");
    fs::write(&input, "L'homme dit \"oui\".").unwrap();

    sentoken()
        .args(["process", "--no-apostrophes", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout("L'homme dit \"oui\" .\n");
}

#[test]
fn test_nonexistent_file() {
    sentoken()
        .args(["process", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_invalid_utf8_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("latin1.txt");
    fs::write(&input, b"caf\xe9.\n").unwrap();

    sentoken()
        .args(["process", "-i"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Processing error"));
}

#[test]
fn test_list_formats() {
    sentoken()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("vertical"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_list_classes() {
    sentoken()
        .args(["list", "classes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("([{«"))
        .stdout(predicate::str::contains("?!…"));
}

#[test]
fn test_help() {
    sentoken()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("generate-config"));
}

#[test]
fn test_missing_input_argument() {
    sentoken()
        .arg("process")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--input"));
}
