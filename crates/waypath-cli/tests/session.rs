use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("waypath-cli");
    cmd.env("RUST_LOG", "error")
        .env_remove("WAYPATH_NETWORK")
        .env_remove("WAYPATH_VEHICLES")
        .args(["--no-color", "--conditions", "1"]);
    cmd
}

#[test]
fn session_keeps_three_most_recent_searches() {
    let mut cmd = cli();
    cmd.arg("session").write_stdin(
        "Hyderabad,Warangal,Car\n\
         Hyderabad,Nalgonda,Car\n\
         Warangal,Khammam,Car\n\
         Vijayawada,Guntur,Car\n",
    );

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).expect("utf-8 output");
    let last_log = stdout
        .rsplit("Recent searches:")
        .next()
        .expect("recent log printed");

    assert!(last_log.contains("  1. Vijayawada → Guntur | 0.67 hours | ₹80.00"));
    assert!(last_log.contains("  2. Warangal → Khammam | 2.00 hours | ₹240.00"));
    assert!(last_log.contains("  3. Hyderabad → Nalgonda | 1.67 hours | ₹200.00"));
    assert!(!last_log.contains("Hyderabad → Warangal |"));
}

#[test]
fn session_reports_bad_lines_and_continues() {
    let mut cmd = cli();
    cmd.arg("session")
        .write_stdin("Warangal,Warangal,Car\nHyderabad,Karimnagar,Train\nHyderabad,Warangal,Bus\n");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("line 1: Invalid selection"))
        .stderr(predicate::str::contains("line 2: Unsupported vehicle 'Train'"))
        .stdout(predicate::str::contains("  1. Hyderabad → Warangal | 3.50 hours | ₹280.00"));
}

#[test]
fn json_session_emits_one_object_per_answer() {
    let mut cmd = cli();
    cmd.args(["--format", "json", "session"])
        .write_stdin("Hyderabad,Warangal,Car\nHyderabad,Nalgonda,Bike\n");

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).expect("utf-8 output");
    let answers: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();

    assert_eq!(answers.len(), 2);
    assert_eq!(answers[1]["recent"].as_array().map(Vec::len), Some(2));
    assert_eq!(answers[1]["recent"][0]["goal"], "Nalgonda");
}
