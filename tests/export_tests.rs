use chrono::{Local, NaiveDate};
use geoclock::core::users::UserForm;
use geoclock::export::csv::to_csv_string;
use geoclock::export::{ExportFormat, ExportLogic, build_rows};
use geoclock::models::coordinate::Coordinate;
use geoclock::models::user::{Role, User};
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{USER, clock_in, clock_out, gcl, init_db_with_user, setup_test_db, temp_out, zone};

fn jane() -> User {
    let mut user = UserForm {
        email: "jane@example.com".into(),
        first_name: "Jane".into(),
        last_name: "Doe".into(),
        phone: "555-123-4567".into(),
        role: Role::Staff,
        employee_number: String::new(),
        zone_id: None,
    }
    .validate()
    .expect("valid user");
    user.id = 1;
    user
}

#[test]
fn test_csv_rows_are_chronological_and_quoted_when_needed() {
    let mut office = zone(3, 45.0, 9.0, 100.0);
    office.name = "Office HQ".into();

    let events = vec![
        clock_out("2025-03-03T17:00:00Z"),
        clock_in("2025-03-03T09:00:00Z")
            .with_zone(Some(3))
            .with_coordinate(Coordinate::new(45.5, 9.25).ok()),
    ];

    let rows = build_rows(&events, &[jane()], &[office], &chrono::Utc);
    let csv = to_csv_string(&rows).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "User,Email,Type,Date,Time,Location,Coordinates");
    assert_eq!(
        lines[1],
        "Jane Doe,jane@example.com,IN,2025-03-03,09:00:00,Office HQ,\"45.5, 9.25\""
    );
    assert_eq!(
        lines[2],
        "Jane Doe,jane@example.com,OUT,2025-03-03,17:00:00,Remote,"
    );
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_rows_for_missing_user_and_deleted_zone() {
    let mut orphan = clock_in("2025-03-03T09:00:00Z").with_zone(Some(99));
    orphan.user_id = 42;

    let rows = build_rows(&[orphan], &[jane()], &[], &chrono::Utc);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user, "Unknown");
    assert_eq!(rows[0].email, "");
    assert_eq!(rows[0].location, "Unknown");
    assert_eq!(rows[0].coordinates, "");
}

#[test]
fn test_default_file_name() {
    let day = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    assert_eq!(
        ExportLogic::default_file_name(day, &ExportFormat::Csv),
        "time_records_2025-03-03.csv"
    );
    assert_eq!(
        ExportLogic::default_file_name(day, &ExportFormat::Json),
        "time_records_2025-03-03.json"
    );
}

fn clock_day(db_path: &str) {
    gcl()
        .args([
            "--db",
            db_path,
            "--user",
            USER,
            "clock",
            "in",
            "--lat",
            "45.0003",
            "--lon",
            "9.0",
            "--at",
            "2025-03-03 09:00",
        ])
        .assert()
        .success();

    gcl()
        .args([
            "--db",
            db_path,
            "--user",
            USER,
            "clock",
            "out",
            "--at",
            "2025-03-03 17:00",
        ])
        .assert()
        .success();
}

#[test]
fn test_export_csv_via_cli() {
    let db_path = setup_test_db("export_csv_cli");
    let out = temp_out("export_csv_cli", "csv");
    init_db_with_user(&db_path);
    clock_day(&db_path);

    gcl()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("exported file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "User,Email,Type,Date,Time,Location,Coordinates");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("Jane Doe,jane@example.com,IN,2025-03-03,09:00:00,Office HQ,"));
    assert!(lines[1].ends_with("\"45.0003, 9\""));
    assert_eq!(
        lines[2],
        "Jane Doe,jane@example.com,OUT,2025-03-03,17:00:00,Remote,"
    );
}

#[test]
fn test_export_json_with_range_and_users() {
    let db_path = setup_test_db("export_json_cli");
    let out = temp_out("export_json_cli", "json");
    init_db_with_user(&db_path);
    clock_day(&db_path);

    gcl()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--users",
            USER,
            "--range",
            "2025-03",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("exported file");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");
    let rows = parsed.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Type"], "IN");
    assert_eq!(rows[0]["Location"], "Office HQ");
    assert_eq!(rows[1]["Type"], "OUT");
}

#[test]
fn test_export_nothing_creates_no_file() {
    let db_path = setup_test_db("export_empty_cli");
    let out = temp_out("export_empty_cli", "csv");
    init_db_with_user(&db_path);
    clock_day(&db_path);

    gcl()
        .args(["--db", &db_path, "export", "--file", &out, "--range", "2024"])
        .assert()
        .success()
        .stdout(contains("No time records found"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_unknown_user_fails() {
    let db_path = setup_test_db("export_unknown_user_cli");
    let out = temp_out("export_unknown_user_cli", "csv");
    init_db_with_user(&db_path);

    gcl()
        .args(["--db", &db_path, "export", "--file", &out, "--users", "ghost@example.com"])
        .assert()
        .failure()
        .stderr(contains("User not found"));
}

#[test]
fn test_local_dates_in_rows() {
    let ev = clock_in("2025-03-03T12:00:00Z");
    let rows = build_rows(std::slice::from_ref(&ev), &[jane()], &[], &Local);
    assert_eq!(rows[0].date, ev.timestamp.with_timezone(&Local).format("%Y-%m-%d").to_string());
}
