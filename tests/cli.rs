//! Command-line tests for the `strrand` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn strrand() -> Command {
    let mut cmd = Command::cargo_bin("strrand").unwrap();
    cmd.env_remove("STRRAND_MAX")
        .env_remove("STRRAND_SEED")
        .env_remove("STRRAND_REPEAT_LIMIT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn literal_pattern_is_echoed() {
    strrand().arg("hello").assert().success().stdout("hello\n");
}

#[test]
fn one_line_per_pattern_and_count() {
    let output = strrand()
        .args(["--count", "3", r"\d{4}", "[a-c]"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[..3].iter().all(|l| l.len() == 4 && l.chars().all(|c| c.is_ascii_digit())));
    assert!(lines[3..].iter().all(|l| ["a", "b", "c"].contains(l)));
}

#[test]
fn seed_makes_output_reproducible() {
    let run = || {
        strrand()
            .args(["--seed", "1234", r"\w{12}.+"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn seed_from_environment() {
    let a = strrand().env("STRRAND_SEED", "9").arg("[a-z]{10}").output().unwrap().stdout;
    let b = strrand().args(["--seed", "9", "[a-z]{10}"]).output().unwrap().stdout;
    assert_eq!(a, b);
}

#[test]
fn max_bounds_open_quantifiers() {
    let output = strrand()
        .args(["--max", "2", "--count", "20", "x+"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().all(|l| l == "x" || l == "xx"));
}

#[test]
fn legacy_patterns() {
    let output = strrand().args(["--legacy", "Cn"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let line: Vec<char> = stdout.trim_end().chars().collect();
    assert_eq!(line.len(), 2);
    assert!(line[0].is_ascii_uppercase());
    assert!(line[1].is_ascii_digit());
}

#[test]
fn compile_error_fails_with_message() {
    strrand()
        .arg("[abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unmatched []"))
        .stderr(predicate::str::contains("[abc"));
}

#[test]
fn diagnostics_are_logged_as_warnings() {
    strrand()
        .arg(r"a\q")
        .assert()
        .success()
        .stdout("aq\n")
        .stderr(predicate::str::contains("being treated as literal"));
}

#[test]
fn quiet_suppresses_warnings() {
    strrand()
        .args(["--quiet", r"a\q"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn hex_byte_is_utf8_by_default() {
    strrand().arg(r"\xff").assert().success().stdout("\u{ff}\n");
}

#[test]
fn raw_writes_single_bytes() {
    let output = strrand().args(["--raw", r"a\xff\x00"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, vec![b'a', 0xff, 0x00, b'\n']);
}

#[test]
fn raw_rejects_wide_characters() {
    strrand()
        .args(["--raw", "\u{263a}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("above U+00FF"));
}

#[test]
fn help_describes_output_encoding() {
    strrand()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--raw"))
        .stdout(predicate::str::contains("UTF-8"));
}

#[test]
fn huge_repeat_count_fails_cleanly() {
    strrand()
        .arg("a{18446744073709551615}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the limit"));
}

#[test]
fn repeat_limit_flag() {
    strrand()
        .args(["--repeat-limit", "2", "a{3}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit of 2"));
    strrand().args(["--repeat-limit", "3", "a{3}"]).assert().success().stdout("aaa\n");
}
