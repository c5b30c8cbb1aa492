use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

fn sort_flights_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sort-flights"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_resolves_flights_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"{"flights":[{"source":"IND","dest":"EWR"},{"source":"SFO","dest":"ATL"},{"source":"GSO","dest":"IND"},{"source":"ATL","dest":"GSO"}]}"#,
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_sort-flights"))
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap().trim(),
        r#"{"flight":{"source":"SFO","dest":"EWR"}}"#
    );
}

#[test]
fn test_resolves_flights_from_stdin() {
    let output = sort_flights_with_stdin(
        &["-"],
        r#"{"flights":[{"source":"ATL","dest":"EWR"},{"source":"SFO","dest":"ATL"}]}"#,
    );

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["flight"]["source"], "SFO");
    assert_eq!(json["flight"]["dest"], "EWR");
}

#[test]
fn test_reports_loop() {
    let output = sort_flights_with_stdin(
        &[],
        r#"{"flights":[{"source":"A","dest":"B"},{"source":"B","dest":"A"}]}"#,
    );

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Cannot build itinerary: flight loop detected"));
    assert!(stderr.contains("Remove the flights that return to an airport already visited"));
}

#[test]
fn test_reports_validation_error() {
    let output = sort_flights_with_stdin(&[], r#"{"flights":[]}"#);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid input: at least one flight expected"));
}

#[test]
fn test_reports_malformed_json() {
    let output = sort_flights_with_stdin(&[], "{");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid input: json parsing: "));
}

#[test]
fn test_missing_file_is_a_system_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_sort-flights"))
        .arg("/definitely/not/here.json")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("System error: IO error: "));
}
