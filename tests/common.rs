#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Utc};
use geoclock::models::coordinate::Coordinate;
use geoclock::models::event::ClockEvent;
use geoclock::models::event_kind::EventKind;
use geoclock::models::zone::Zone;
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, with HOME pointed at a scratch directory so no real
/// configuration is read.
pub fn gcl() -> Command {
    let mut cmd = cargo_bin_cmd!("geoclock");
    cmd.env("HOME", test_home("shared"));
    cmd
}

/// A scratch HOME directory, created on demand.
pub fn test_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_geoclock_home", name));
    fs::create_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_geoclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub const USER: &str = "jane@example.com";

/// Initialize DB, one zone ("Office HQ", 100 m around 45.0, 9.0) and one user.
pub fn init_db_with_user(db_path: &str) {
    gcl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    gcl()
        .args([
            "--db",
            db_path,
            "zone",
            "add",
            "--name",
            "Office HQ",
            "--address",
            "1 Main St",
            "--lat",
            "45.0",
            "--lon",
            "9.0",
            "--radius",
            "100",
        ])
        .assert()
        .success();

    gcl()
        .args([
            "--db",
            db_path,
            "user",
            "add",
            "--email",
            USER,
            "--first",
            "Jane",
            "--last",
            "Doe",
            "--phone",
            "555-123-4567",
        ])
        .assert()
        .success();
}

pub fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid RFC3339")
        .with_timezone(&Utc)
}

/// Event for user 1 at an RFC3339 instant.
pub fn ev(kind: EventKind, ts: &str) -> ClockEvent {
    ClockEvent::new(1, kind, utc(ts))
}

pub fn clock_in(ts: &str) -> ClockEvent {
    ev(EventKind::ClockIn, ts)
}

pub fn clock_out(ts: &str) -> ClockEvent {
    ev(EventKind::ClockOut, ts)
}

pub fn zone(id: i64, lat: f64, lon: f64, radius: f64) -> Zone {
    Zone::new(
        id,
        format!("Zone {id}"),
        "",
        Coordinate::new(lat, lon).expect("valid center"),
        radius,
    )
}
