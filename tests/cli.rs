use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn polybase() -> Command {
    Command::cargo_bin("polybase").unwrap()
}

#[test]
fn encodes_stdin_as_base64_by_default() {
    polybase().write_stdin("Man").assert().success().stdout("TWFu\n");
}

#[test]
fn decodes_trimmed_input() {
    polybase()
        .arg("-d")
        .write_stdin("  TWE=\n")
        .assert()
        .success()
        .stdout("Ma");
}

#[test]
fn reads_from_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("input.bin");
    fs::write(&path, b"\xde\xad\xbe\xef").unwrap();

    polybase()
        .arg("--encoding")
        .arg("hex")
        .arg(&path)
        .assert()
        .success()
        .stdout("deadbeef\n");
}

#[test]
fn missing_file_fails() {
    let temp = tempdir().unwrap();
    polybase()
        .arg(temp.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not open file"));
}

#[test]
fn unknown_encoding_lists_choices() {
    polybase()
        .args(["-e", "base65"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid encoding type"))
        .stderr(predicate::str::contains("base58xmr"));
}

#[test]
fn invalid_input_fails() {
    polybase()
        .args(["-d", "-e", "base58"])
        .write_stdin("0OIl")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: input is not valid"));
}

#[test]
fn lists_encodings() {
    polybase()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("utf8\n"))
        .stdout(predicate::str::contains("base32crockford\n"))
        .stdout(predicate::str::ends_with("bech32\nbech32m\n"));
}

#[test]
fn bech32_round_trip() {
    polybase()
        .args(["-e", "bech32", "--prefix", "bc"])
        .write_stdin(&b"\xde\xad\xbe\xef"[..])
        .assert()
        .success()
        .stdout("bc1m6kmamcr0f7ys\n");

    polybase()
        .args(["-d", "-e", "bech32m"])
        .write_stdin("bc1m6kmamcknejpj\n")
        .assert()
        .success()
        .stdout(&b"\xde\xad\xbe\xef"[..]);
}

#[test]
fn bech32_requires_prefix() {
    polybase()
        .args(["-e", "bech32"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--prefix"));
}

#[test]
fn bech32_limit() {
    polybase()
        .args(["-e", "bech32", "--prefix", "bc", "--limit", "10"])
        .write_stdin(&b"\xde\xad\xbe\xef"[..])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad length 16"));

    let long = vec![0x42_u8; 60];
    polybase()
        .args(["-e", "bech32", "--prefix", "bc"])
        .write_stdin(long.clone())
        .assert()
        .failure();
    polybase()
        .args(["-e", "bech32", "--prefix", "bc", "--no-limit"])
        .write_stdin(long)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("bc1"));
}
