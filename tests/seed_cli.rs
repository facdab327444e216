use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

fn seed_command(bin: &str, dir: &TempDir) -> Command {
    let db_path = dir.path().join("gifted_eternity.db");
    let mut cmd = Command::cargo_bin(bin).expect("binary");
    cmd.env("RUST_LOG", "info")
        .env("GIFTED_DATA_DIR", dir.path())
        .env("DATABASE_URL", db_path);
    cmd
}

#[test]
#[serial]
fn test_seed_tracks_inserts_catalog() {
    let dir = TempDir::new().expect("temp dir");

    seed_command("seed-tracks", &dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Added: Amazing Grace"))
        .stderr(predicate::str::contains("Successfully seeded 50 tracks"));
}

#[test]
#[serial]
fn test_seed_tracks_raw_inserts_catalog() {
    let dir = TempDir::new().expect("temp dir");

    seed_command("seed-tracks-raw", &dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Successfully seeded 50 tracks"));
}

#[test]
#[serial]
fn test_seed_rerun_appends() {
    let dir = TempDir::new().expect("temp dir");

    seed_command("seed-tracks", &dir).assert().success();
    seed_command("seed-tracks", &dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Successfully seeded 50 tracks"));
}
