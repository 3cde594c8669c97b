use assert_cmd::Command;
use serde_json::Value;

fn json_stdout(args: &[&str]) -> Value {
    let output = Command::new(env!("CARGO_BIN_EXE_sample_tally"))
        .args(args)
        .output()
        .expect("runs");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("valid JSON")
}

#[test]
fn count_emits_record_object() {
    let value = json_stdout(&["--format", "json", "count", "widget", "--times", "3"]);
    assert_eq!(value["name"], "widget");
    assert_eq!(value["count"], 3);
    assert_eq!(value["policy"], "wrap");
}

#[test]
fn saturate_stays_at_limit() {
    let value = json_stdout(&[
        "count", "edge", "--start", "18446744073709551615", "--times", "5", "--overflow", "saturate", "--format", "json",
    ]);
    assert_eq!(value["count"].as_u64(), Some(u64::MAX));
}

#[test]
fn upper_emits_array() {
    let value = json_stdout(&["upper", "--format", "json", "--mapping", "ascii", "straße"]);
    assert_eq!(value, serde_json::json!(["STRAßE"]));
}
