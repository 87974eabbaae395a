use std::fs;
use std::process::Command;

use yarish::registry::{Organization, Record};
use yarish::sha256;

const PDF: &[u8] = b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\n%%EOF\n";

fn yarish() -> Command {
    Command::new(env!("CARGO_BIN_EXE_yarish"))
}

#[test]
fn digest_prints_hash() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("abc.txt");
    fs::write(&path, b"abc").unwrap();

    let output = yarish().arg("digest").arg(&path).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn verify_exit_codes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.pdf");
    fs::write(&path, PDF).unwrap();

    // 未登记：退出码1
    let output = yarish().current_dir(dir.path()).arg("verify").arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Document not verified"));
    assert!(stdout.contains("bitninja.net"));

    let record = Record {
        reference_number: String::from("BN-2025-0042"),
        issue_date: String::from("2025-02-02"),
        organization: Organization { name: String::from("BitNinja Technology") },
        verification_id: String::from("VID-42"),
    };
    let entry = dir.path().join("records").join(sha256::digest(PDF));
    fs::create_dir_all(&entry).unwrap();
    fs::write(entry.join("config.json"), serde_json::to_vec(&record).unwrap()).unwrap();

    let output = yarish().current_dir(dir.path()).arg("verify").arg(&path).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("BN-2025-0042"));
}

#[test]
fn verify_rejects_oversize_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.pdf");
    let mut data = PDF.to_vec();
    data.resize(2048, b' ');
    fs::write(&path, &data).unwrap();
    let config = dir.path().join("yarish.json");
    fs::write(&config, r#"{"maxSize": 100}"#).unwrap();

    let output = yarish().arg("--config").arg(&config).arg("verify").arg(&path).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("exceeds"));
}
