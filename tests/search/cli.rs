//! End-to-end runs of the `cribsheet` binary over a temporary record file.

use std::io::{Read, Write};
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::NamedTempFile;

const BANK: &str = r#"{
  "answers": [
    { "type": "单选", "question": "（单选）太阳系有几大行星？", "options": ["8", "9"], "answer": ["8"] },
    { "type": "判断", "question": "月亮会自己发光。", "options": ["对", "错"], "answer": ["错"] }
  ]
}"#;

fn bank_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(BANK.as_bytes()).unwrap();
    file
}

fn cribsheet(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cribsheet"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("CRIBSHEET_RECORDS")
        .env_remove("CRIBSHEET_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    if let Some(input) = stdin {
        child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
    } else {
        drop(child.stdin.take());
    }
    child.wait_with_output().unwrap()
}

#[test]
fn test_json_output_matches_library() {
    let file = bank_file();
    let path = file.path().to_str().unwrap();
    let output = cribsheet(&["search", "--records", path, "太阳系有几大行星", "--json"], None);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let response: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["success"], true);
    let results = response["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    // "单选" stays in the normalized question, so this is containment
    let score = results[0]["score"].as_f64().unwrap();
    assert!((score - 0.94).abs() < 1e-9, "score {}", score);
    assert_eq!(results[0]["questionMatches"], serde_json::json!([4, 5, 6, 7, 8, 9, 10, 11]));
}

#[test]
fn test_filter_and_limit_flags() {
    let file = bank_file();
    let path = file.path().to_str().unwrap();
    let output = cribsheet(&["search", "-r", path, "行星", "--high", "--json"], None);
    let response: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["results"].as_array().unwrap().len(), 1);

    let output = cribsheet(&["search", "-r", path, "行星", "--limit", "0", "--json"], None);
    let response: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(response["results"].as_array().unwrap().is_empty());
}

#[test]
fn test_query_from_stdin() {
    let file = bank_file();
    let path = file.path().to_str().unwrap();
    let output = cribsheet(&["search", "-r", path, "-", "--json"], Some("月亮会自己发光\n"));
    let response: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["results"][0]["item"]["question"], "月亮会自己发光。");
}

#[test]
fn test_plain_output_brackets_highlights() {
    let file = bank_file();
    let path = file.path().to_str().unwrap();
    let output = cribsheet(&["search", "-r", path, "行星", "--high"], None);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[行星]"), "{}", stdout);
    assert!(stdout.contains("[HIGH]"));
}

#[test]
fn test_missing_file_fails_cleanly() {
    let output = cribsheet(&["search", "-r", "/nonexistent/bank.json", "x"], None);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read record file"), "{}", stderr);
}

#[test]
fn test_malformed_file_fails_cleanly() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ \"records\": 3 }").unwrap();
    let output = cribsheet(&["search", "-r", file.path().to_str().unwrap(), "x"], None);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("is not a record array"));
}

#[test]
fn test_explain_reports_tier() {
    let output = cribsheet(&["explain", "行星", "（太阳系）有几大行星？"], None);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("contains"), "{}", stdout);
    assert!(stdout.contains("有几大[行星]？"), "{}", stdout);
}

#[test]
fn test_reader_closing_early_is_not_a_crash() {
    // far more output than a pipe buffer holds
    let records: Vec<Value> = (0..3000)
        .map(|i| {
            serde_json::json!({
                "type": "单选",
                "question": format!("第{}题：太阳系有几大行星？", i),
                "options": ["8", "9"],
                "answer": ["8"],
            })
        })
        .collect();
    let mut file = NamedTempFile::new().unwrap();
    serde_json::to_writer(&mut file, &records).unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_cribsheet"))
        .args(["search", "-r", file.path().to_str().unwrap(), "行星"])
        .env("NO_COLOR", "1")
        .env_remove("CRIBSHEET_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut head = [0u8; 20];
    child.stdout.take().unwrap().read_exact(&mut head).unwrap();
    // stdout handle dropped here, like `| head -c 20`

    let output = child.wait_with_output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("panicked"), "{}", stderr);
    assert!(output.status.success(), "{}", stderr);
}
