use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("sentinel").unwrap()
}

#[test]
fn demo_prints_summary() {
    cmd()
        .arg("demo")
        .assert()
        .success()
        .stdout(contains("Signals found: 1"))
        .stdout(contains(
            "  Artifact not found: Searched for \"INCIDENT_TICKET\" - no matches. VOID CONFIRMED.",
        ))
        .stdout(contains(
            "  Artifact not found: Searched for \"BACKUP_LOG\" - no matches. VOID CONFIRMED.",
        ));
}

#[test]
fn scan_reads_stdin() {
    cmd()
        .arg("scan")
        .write_stdin("[FATAL] disk checksum mismatch")
        .assert()
        .success()
        .stdout(contains("Signals found: 1"));
}

#[test]
fn scan_json_output() {
    let output = cmd()
        .args(["scan", "--json"])
        .write_stdin("[VOID_DETECTED]: AUDIT_TRAIL | Missing trail for purge window")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["signals_found"], 1);
    assert_eq!(
        value["escalations"][0]["escalation"]["status"],
        "ESCALATED"
    );
}

#[test]
fn scan_rejects_oversized_input() {
    cmd()
        .args(["scan", "--max-input-bytes", "8"])
        .write_stdin("[VOID_DETECTED]: BACKUP_LOG | far past the limit")
        .assert()
        .failure()
        .stderr(contains("exceeds limit"));
}
