use regex::Regex;
use std::process::{Command, ExitStatus};

fn run_binary() -> (String, ExitStatus) {
    let output = Command::new(env!("CARGO_BIN_EXE_profile-card"))
        .output()
        .expect("failed to run profile-card");
    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    (stdout, output.status)
}

#[test]
fn prints_one_record_line_and_exits_zero() {
    let (stdout, status) = run_binary();

    assert!(status.success());
    assert_eq!(status.code(), Some(0));

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);

    let line = lines[0];
    assert!(line.starts_with("Record {"));
    assert!(line.contains("name: \"Ansar\""));
    assert!(line.contains("age: 18"));
    assert!(line.contains("windows: true"));
    assert!(line.contains("mac: false"));
    assert!(line.contains("wifi: true"));
    assert!(line.contains("next: None"));
    assert!(line.contains("2007-11-10T12:00:00Z"));
}

#[test]
fn repeated_runs_differ_only_in_updated_at() {
    let (first, first_status) = run_binary();
    let (second, second_status) = run_binary();

    assert!(first_status.success());
    assert!(second_status.success());

    let mask = Regex::new(r"updated_at: [^,]+").unwrap();
    assert_eq!(
        mask.replace(&first, "updated_at: <masked>"),
        mask.replace(&second, "updated_at: <masked>")
    );
}
