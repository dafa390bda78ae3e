use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn hello_greets_world_by_default() {
    cargo_bin_cmd!("mytool")
        .arg("hello")
        .assert()
        .success()
        .stdout("Hello, world!\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn hello_upper_cases_the_message() {
    cargo_bin_cmd!("mytool")
        .args(["hello", "Alice", "--upper"])
        .assert()
        .success()
        .stdout("HELLO, ALICE!\n");
}

#[test]
fn hello_json_emits_message_object() {
    let assert = cargo_bin_cmd!("mytool")
        .args(["hello", "Bob", "--json"])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["message"], "Hello, Bob!");
}

#[test]
fn sum_prints_total_in_plain_text() {
    cargo_bin_cmd!("mytool")
        .args(["sum", "10", "20", "30"])
        .assert()
        .success()
        .stdout("合計: 60\n");
}

#[test]
fn sum_accepts_negative_numbers() {
    cargo_bin_cmd!("mytool")
        .args(["sum", "-5", "5"])
        .assert()
        .success()
        .stdout("合計: 0\n");
}

#[test]
fn sum_json_emits_sum_and_count() {
    let assert = cargo_bin_cmd!("mytool")
        .args(["sum", "1", "2", "3", "--json"])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["sum"], 6);
    assert_eq!(value["count"], 3);
}

#[test]
fn sum_without_numbers_is_a_usage_error() {
    cargo_bin_cmd!("mytool")
        .arg("sum")
        .assert()
        .failure()
        .code(2)
        .stderr(
            predicate::str::contains("エラー: ").and(predicate::str::contains("少なくとも1つ")),
        );
}

#[test]
fn check_ok_prints_success_marker() {
    cargo_bin_cmd!("mytool")
        .args(["check", "--mode", "ok"])
        .assert()
        .success()
        .stdout(predicate::str::contains("チェック成功"));
}

#[test]
fn check_fail_exits_with_intentional_failure() {
    cargo_bin_cmd!("mytool")
        .args(["check", "--mode", "fail"])
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("意図的な失敗")
                .and(predicate::str::contains("スタックトレース").not()),
        );
}

#[test]
fn check_fail_verbose_includes_backtrace() {
    cargo_bin_cmd!("mytool")
        .args(["check", "--mode", "fail", "--verbose"])
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("意図的な失敗")
                .and(predicate::str::contains("--- スタックトレース ---")),
        );
}

#[test]
fn check_unknown_mode_is_a_usage_error() {
    cargo_bin_cmd!("mytool")
        .args(["check", "--mode", "bogus"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn verbose_is_accepted_before_the_subcommand() {
    cargo_bin_cmd!("mytool")
        .args(["-v", "check", "--mode", "fail"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("スタックトレース"));
}

#[test]
fn help_lists_all_subcommands() {
    cargo_bin_cmd!("mytool")
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("hello")
                .and(predicate::str::contains("sum"))
                .and(predicate::str::contains("check")),
        );
}

#[test]
fn version_flag_prints_version() {
    cargo_bin_cmd!("mytool")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
