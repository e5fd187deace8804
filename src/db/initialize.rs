use crate::errors::AppResult;
use rusqlite::Connection;

/// Call-center schema: queues, calls, agents, breaks and the agent audit
/// trail, plus the internal `log` table.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS queue_call_entry (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    queue  TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS call_entry (
    id                    INTEGER PRIMARY KEY AUTOINCREMENT,
    id_queue_call_entry   INTEGER NOT NULL REFERENCES queue_call_entry(id),
    datetime_entry_queue  TEXT NOT NULL,
    datetime_init         TEXT,
    status                TEXT NOT NULL,
    duration_wait         INTEGER DEFAULT 0,
    duration              INTEGER DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_call_entry_queue_time
    ON call_entry(id_queue_call_entry, datetime_entry_queue);

CREATE TABLE IF NOT EXISTS agent (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS "break" (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS audit (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    id_agent       INTEGER NOT NULL REFERENCES agent(id),
    id_break       INTEGER REFERENCES "break"(id),
    datetime_init  TEXT NOT NULL,
    datetime_end   TEXT NOT NULL,
    duration       INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS log (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    date      TEXT NOT NULL,
    operation TEXT NOT NULL,
    target    TEXT DEFAULT '',
    message   TEXT NOT NULL
);
"#;

/// Initialize the database. Safe to run on an existing store.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
