use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sample_tally"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sample_tally"));
}

#[test]
fn counts_widget_twice() {
    bin()
        .args(["count", "widget", "--times", "2"])
        .assert()
        .success()
        .stdout("widget: 2\n");
}

#[test]
fn upper_prints_one_item_per_line() {
    bin()
        .args(["upper", "a", "Bee", "sea"])
        .assert()
        .success()
        .stdout("A\nBEE\nSEA\n");
}

#[test]
fn upper_reads_stdin() {
    bin()
        .arg("upper")
        .write_stdin("straße\nok\n")
        .assert()
        .success()
        .stdout("STRASSE\nOK\n");
}

#[test]
fn overflow_fail_exits_with_error() {
    bin()
        .args(["count", "edge", "--start", "18446744073709551615", "--times", "1", "--overflow", "fail"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be incremented"));
}

#[test]
fn max_times_finishes_under_every_policy() {
    bin()
        .args(["count", "big", "--times", "18446744073709551615"])
        .assert()
        .success()
        .stdout("big: 18446744073709551615\n");

    bin()
        .args(["count", "big", "--start", "7", "--times", "18446744073709551615", "--overflow", "saturate"])
        .assert()
        .success()
        .stdout("big: 18446744073709551615\n");

    bin()
        .args(["count", "big", "--start", "7", "--times", "18446744073709551615", "--overflow", "fail"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be incremented"));
}
