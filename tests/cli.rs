use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("wqi").unwrap()
}

#[test]
fn analyze_rejects_blank_text() {
    cmd()
        .args(["analyze", "--text", "   "])
        .assert()
        .failure()
        .stderr(contains("Please enter some text first."));
}

#[test]
fn analyze_rejects_unknown_purpose() {
    cmd()
        .args(["analyze", "--text", "A fine draft.", "--purpose", "sonnet"])
        .assert()
        .failure()
        .stderr(contains("Unknown purpose 'sonnet'"));
}

#[test]
fn improve_requires_a_focus_area() {
    cmd()
        .args(["improve", "--text", "A fine draft."])
        .assert()
        .failure()
        .stderr(contains("Please select at least one focus area."));
}

#[test]
fn improve_reports_blank_text_before_missing_focus() {
    cmd()
        .args(["improve", "--text", "  "])
        .assert()
        .failure()
        .stderr(contains("Please enter text."));
}

#[test]
fn text_and_file_are_mutually_exclusive() {
    cmd()
        .args(["analyze", "--text", "draft", "--file", "draft.txt"])
        .assert()
        .failure();
}
