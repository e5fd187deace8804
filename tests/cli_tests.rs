mod common;
use common::{cr, init_db, insert_call, seed_agents, seed_calls, setup_test_db, temp_out};
use predicates::prelude::*;
use std::fs;
use std::path::Path;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");
    init_db(&db_path);
    assert!(Path::new(&db_path).exists());

    cr().args(["--db", &db_path, "log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_queue_json_has_windows() {
    let db_path = setup_test_db("queue_json_has_windows");
    seed_calls(&db_path);

    cr().args(["--db", &db_path, "queue", "--queue", "9008", "--range", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hora_pico\": \"07h+08h\""))
        .stdout(predicate::str::contains("\"cantidad_hora_pico\": 3"))
        .stdout(predicate::str::contains("\"fecha\": \"2025-01-06\""))
        .stdout(predicate::str::contains("\"cola\": \"9008\""))
        .stdout(predicate::str::contains("\"pct_abandonadas\": 25.0"));
}

#[test]
fn test_queue_all_queues_has_no_queue_field() {
    let db_path = setup_test_db("queue_all_queues");
    seed_calls(&db_path);

    cr().args(["--db", &db_path, "queue", "--range", "2025-01-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"llamadas_totales\": 5"))
        .stdout(predicate::str::contains("\"cola\"").not());
}

#[test]
fn test_queue_csv_to_file() {
    let db_path = setup_test_db("queue_csv_to_file");
    seed_calls(&db_path);
    let out = temp_out("queue_csv_to_file", "csv");

    cr().args([
        "--db", &db_path, "queue", "--queue", "9008", "--range", "2025-01-06:2025-01-13", "--format",
        "csv", "--file", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    let head = lines.next().expect("header");
    assert!(head.starts_with("fecha,cola,llamadas_totales,respondidas"));
    assert!(head.contains("hora_menos_pico"));
    // Sunday rows stay in the daily listing; only weekly views drop them
    assert_eq!(lines.count(), 8);
    assert!(content.contains("2025-01-12"));
}

#[test]
fn test_queue_bad_range_fails() {
    let db_path = setup_test_db("queue_bad_range");
    seed_calls(&db_path);

    cr().args(["--db", &db_path, "queue", "--queue", "9008", "--range", "2025-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range"));
}

#[test]
fn test_unparsable_stored_date_aborts() {
    let db_path = setup_test_db("unparsable_stored_date");
    seed_calls(&db_path);
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    insert_call(&conn, "9008", "2025-01-3X 07:00:00", "terminada", 10, 60);

    cr().args(["--db", &db_path, "queue", "--queue", "9008", "--range", "2025-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_hourly_mismatch_is_warned_not_fatal() {
    let db_path = setup_test_db("hourly_mismatch");
    seed_calls(&db_path);
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    // 22h is outside the analyzed hours but still part of the day total
    insert_call(&conn, "9008", "2025-01-06 22:15:00", "terminada", 10, 60);

    cr().args(["--db", &db_path, "queue", "--queue", "9008", "--range", "2025-01-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"llamadas_totales\": 5"))
        .stderr(predicate::str::contains("Data inconsistency"));
}

#[test]
fn test_answered_call_without_pickup_has_no_hour() {
    let db_path = setup_test_db("answered_without_pickup");
    seed_calls(&db_path);
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    conn.execute(
        "INSERT INTO call_entry
            (id_queue_call_entry, datetime_entry_queue, datetime_init, status, duration_wait, duration)
         SELECT id, '2025-01-07 11:00:00', NULL, 'terminada', 5, 60
         FROM queue_call_entry WHERE queue = '9008'",
        [],
    )
    .expect("insert call without pickup");

    // counted in the day total but in no hour of the breakdown
    cr().args(["--db", &db_path, "queue", "--queue", "9008", "--range", "2025-01-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"llamadas_totales\": 5"))
        .stderr(predicate::str::contains("hourly sum 4 != total calls 5"));
}

#[test]
fn test_missing_database_fails() {
    let db_path = setup_test_db("missing_database");

    cr().args(["--db", &db_path, "queue", "--range", "2025-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Database error"));
}

#[test]
fn test_dashboard_json() {
    let db_path = setup_test_db("dashboard_json");
    seed_calls(&db_path);

    cr().args(["--db", &db_path, "dashboard", "--date", "2025-01-06", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totales\""))
        .stdout(predicate::str::contains("\"llamadas_totales\": 5"))
        .stdout(predicate::str::contains("\"pct_abandonadas\": 20.0"))
        .stdout(predicate::str::contains("\"pct_exito\": 75.0"))
        .stdout(predicate::str::contains("\"pct_abandonadas\": 25.0"))
        .stdout(predicate::str::contains("\"pct_exito\": 100.0"));
}

#[test]
fn test_dashboard_table() {
    let db_path = setup_test_db("dashboard_table");
    seed_calls(&db_path);

    cr().args(["--db", &db_path, "dashboard", "--date", "2025-01-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9008 : Call Rehabilitar"))
        .stdout(predicate::str::contains("TOTAL"));
}

#[test]
fn test_dashboard_bad_date_fails() {
    let db_path = setup_test_db("dashboard_bad_date");
    seed_calls(&db_path);

    cr().args(["--db", &db_path, "dashboard", "--date", "07/01/2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_agents_json_statuses() {
    let db_path = setup_test_db("agents_json");
    seed_agents(&db_path);

    cr().args(["--db", &db_path, "agents", "--range", "2025-01-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"agente\": \"Ana Gomez\""))
        .stdout(predicate::str::contains("\"estado\": \"INCUMPLE\""))
        .stdout(predicate::str::contains("\"estado\": \"CUMPLE\""))
        .stdout(predicate::str::contains("\"tipo_pausa\": \"SIN PAUSA\""));
}

#[test]
fn test_agents_csv() {
    let db_path = setup_test_db("agents_csv");
    seed_agents(&db_path);

    cr().args(["--db", &db_path, "agents", "--range", "2025-01", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("agente,tiempo_logueado,tiempo_activo,tipo_pausa,tiempo_pausa,estado"))
        .stdout(predicate::str::contains("Luis Perez,3000,0,Almuerzo,3000,CUMPLE"));
}

#[test]
fn test_export_callcenter_xlsx() {
    let db_path = setup_test_db("export_callcenter_xlsx");
    seed_calls(&db_path);
    let out = temp_out("export_callcenter_xlsx", "xlsx");

    cr().args(["--db", &db_path, "export", "--range", "2025-01", "--file", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("read workbook");
    assert!(bytes.starts_with(b"PK"));

    cr().args(["--db", &db_path, "log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("export"));
}

#[test]
fn test_export_agents_xlsx() {
    let db_path = setup_test_db("export_agents_xlsx");
    seed_agents(&db_path);
    let out = temp_out("export_agents_xlsx", "xlsx");

    cr().args(["--db", &db_path, "export", "--kind", "agents", "--range", "2025-01", "--file", &out])
        .assert()
        .success();

    assert!(Path::new(&out).exists());
}

#[test]
fn test_export_empty_range_still_writes_workbook() {
    let db_path = setup_test_db("export_empty_range");
    seed_calls(&db_path);
    let out = temp_out("export_empty_range", "xlsx");

    cr().args(["--db", &db_path, "export", "--range", "2023", "--file", &out])
        .assert()
        .success()
        .stderr(predicate::str::contains("No calls found"));

    assert!(Path::new(&out).exists());
}

#[test]
fn test_export_relative_path_fails() {
    let db_path = setup_test_db("export_relative_path");
    seed_calls(&db_path);

    cr().args(["--db", &db_path, "export", "--range", "2025-01", "--file", "report.xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be absolute"));
}

#[test]
fn test_export_existing_file_needs_force() {
    let db_path = setup_test_db("export_existing_file");
    seed_calls(&db_path);
    let out = temp_out("export_existing_file", "xlsx");
    fs::write(&out, b"old").expect("write placeholder");

    cr().args(["--db", &db_path, "export", "--range", "2025-01", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Export cancelled"));

    cr().args(["--db", &db_path, "export", "--range", "2025-01", "--file", &out, "--force"])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read workbook");
    assert!(bytes.starts_with(b"PK"));
}
