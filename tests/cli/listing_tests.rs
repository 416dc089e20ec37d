use std::{fs, fs::File, path::Path, time::UNIX_EPOCH};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dirls() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dirls"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Writes an 11-byte file whose modification time is the epoch.
fn epoch_file(dir: &Path, name: &str) {
    let path = dir.join(name);
    fs::write(&path, "sample data").unwrap();
    File::options().write(true).open(&path).unwrap().set_modified(UNIX_EPOCH).unwrap();
}

#[test]
fn empty_directory_prints_nothing() {
    let tmp = TempDir::new().unwrap();

    dirls().arg(tmp.path()).assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn defaults_to_current_directory() {
    let tmp = TempDir::new().unwrap();
    epoch_file(tmp.path(), "testfile");

    dirls().current_dir(tmp.path()).assert().success().stdout("testfile\n");
}

#[test]
fn lists_every_entry_once() {
    let tmp = TempDir::new().unwrap();
    epoch_file(tmp.path(), "a.txt");
    epoch_file(tmp.path(), "b.txt");
    fs::create_dir(tmp.path().join("sub")).unwrap();

    let output = dirls().arg(tmp.path()).output().unwrap();
    assert!(output.status.success());

    let mut lines: Vec<_> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect();
    lines.sort();
    assert_eq!(lines, vec!["a.txt", "b.txt", "sub"]);
}

#[test]
fn filetype_marks_directories() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("myfiles")).unwrap();

    dirls().arg("-F").arg(tmp.path()).assert().success().stdout("myfiles/\n");
    dirls().arg(tmp.path()).assert().success().stdout("myfiles\n");
}

#[cfg(unix)]
#[test]
fn filetype_marks_executables() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let tool = tmp.path().join("tool");
    fs::write(&tool, "#!/bin/sh\n").unwrap();
    fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();

    dirls().arg("--filetype").arg(tmp.path()).assert().success().stdout("tool*\n");
}

#[test]
fn long_format_in_utc() {
    let tmp = TempDir::new().unwrap();
    epoch_file(tmp.path(), "testfile");

    dirls()
        .env("TZ", "UTC")
        .arg("-l")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("1970-01-01 00:00:00           11 testfile\n");
}

#[cfg(unix)]
#[test]
fn long_format_uses_local_offset() {
    let tmp = TempDir::new().unwrap();
    epoch_file(tmp.path(), "cats_and_dogs.txt");

    // POSIX TZ string for UTC+5:30.
    dirls()
        .env("TZ", "IST-5:30")
        .args(["-l", "-F"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("1970-01-01 05:30:00           11 cats_and_dogs.txt\n");
}

#[test]
fn long_format_shows_zero_size_for_directories() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("myfiles")).unwrap();
    fs::write(tmp.path().join("myfiles").join("big.bin"), vec![0_u8; 4096]).unwrap();

    dirls()
        .args(["--long-format", "--filetype"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}            0 myfiles/\n$")
                .unwrap(),
        );
}

#[test]
fn missing_directory_fails_without_stdout() {
    let tmp = TempDir::new().unwrap();

    dirls()
        .arg(tmp.path().join("nope"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn regular_file_fails_without_stdout() {
    let tmp = TempDir::new().unwrap();
    epoch_file(tmp.path(), "plain.txt");

    dirls()
        .arg(tmp.path().join("plain.txt"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("dirls: "));
}

#[test]
fn repeated_listings_are_identical() {
    let tmp = TempDir::new().unwrap();
    epoch_file(tmp.path(), "one");
    epoch_file(tmp.path(), "two");
    fs::create_dir(tmp.path().join("three")).unwrap();

    let first = dirls().args(["-l", "-F"]).arg(tmp.path()).output().unwrap();
    let second = dirls().args(["-l", "-F"]).arg(tmp.path()).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[cfg(target_os = "linux")]
#[test]
fn non_utf8_names_are_written_as_raw_bytes() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join(OsStr::from_bytes(b"caf\xe9"))).unwrap();

    dirls().arg("-F").arg(tmp.path()).assert().success().stdout(b"caf\xe9/\n".as_slice());
}
