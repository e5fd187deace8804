#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rusqlite::{Connection, params};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cr() -> Command {
    cargo_bin_cmd!("callreport")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_callreport.sqlite", name));
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

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Initialize the schema through the CLI (test mode leaves the config alone)
pub fn init_db(db_path: &str) {
    cr().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

fn queue_id(conn: &Connection, queue: &str) -> i64 {
    conn.execute(
        "INSERT OR IGNORE INTO queue_call_entry (queue) VALUES (?1)",
        params![queue],
    )
    .expect("insert queue");
    conn.query_row(
        "SELECT id FROM queue_call_entry WHERE queue = ?1",
        params![queue],
        |r| r.get(0),
    )
    .expect("queue id")
}

/// Insert one call. Answered calls are picked up `wait` seconds after entry,
/// in the same hour.
pub fn insert_call(conn: &Connection, queue: &str, entry: &str, status: &str, wait: i64, duration: i64) {
    let qid = queue_id(conn, queue);
    let init = (status == "terminada").then(|| entry.to_string());
    conn.execute(
        "INSERT INTO call_entry
            (id_queue_call_entry, datetime_entry_queue, datetime_init, status, duration_wait, duration)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![qid, entry, init, status, wait, duration],
    )
    .expect("insert call");
}

/// Two queues over two weeks of January 2025:
/// - 9008: Mon 6 .. Sat 11, Sunday 12 (ignored by weekly views), Mon 13
/// - 9001: Mon 6 and Tue 7 only
pub fn seed_calls(db_path: &str) {
    let conn = Connection::open(db_path).expect("open db");
    callreport::db::initialize::init_db(&conn).expect("init db");

    for day in ["06", "07", "08", "09", "10", "11", "12", "13"] {
        let date = format!("2025-01-{day}");
        insert_call(&conn, "9008", &format!("{date} 07:10:00"), "terminada", 20, 180);
        insert_call(&conn, "9008", &format!("{date} 07:40:00"), "terminada", 40, 240);
        insert_call(&conn, "9008", &format!("{date} 08:05:00"), "terminada", 30, 120);
        insert_call(&conn, "9008", &format!("{date} 14:30:00"), "abandonada", 90, 0);
    }
    // ignored status
    insert_call(&conn, "9008", "2025-01-06 09:00:00", "activa", 0, 0);

    insert_call(&conn, "9001", "2025-01-06 10:00:00", "terminada", 15, 300);
    insert_call(&conn, "9001", "2025-01-07 10:20:00", "abandonada", 60, 0);
}

/// One agent with a work session, an overlong lunch and a short bathroom break.
pub fn seed_agents(db_path: &str) {
    let conn = Connection::open(db_path).expect("open db");
    callreport::db::initialize::init_db(&conn).expect("init db");

    conn.execute_batch(
        r#"
        INSERT INTO agent (id, name) VALUES (1, 'Ana Gomez'), (2, 'Luis Perez');
        INSERT INTO "break" (id, name) VALUES (1, 'Almuerzo'), (2, 'Baño');
        INSERT INTO audit (id_agent, id_break, datetime_init, datetime_end, duration) VALUES
            (1, NULL, '2025-01-06 08:00:00', '2025-01-06 12:00:00', 14400),
            (1, 1,    '2025-01-06 12:00:00', '2025-01-06 13:10:00', 4200),
            (1, 2,    '2025-01-06 15:00:00', '2025-01-06 15:10:00', 600),
            (2, NULL, '2025-01-06 08:00:00', '2025-01-06 16:00:00', 28800),
            (2, 1,    '2025-01-06 12:00:00', '2025-01-06 12:50:00', 3000);
        "#,
    )
    .expect("seed agents");
}
