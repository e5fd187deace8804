//! Read-only report queries against the call-center store.
//!
//! Only calls with status `terminada` (answered) or `abandonada` (abandoned)
//! are counted. The hour of a call is its queue-entry time when abandoned and
//! its pickup time otherwise. Dates come back as text and are parsed once,
//! here, into `NaiveDate`.

use crate::core::compliance::BreakLimits;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::agent::{AgentActivity, NO_BREAK};
use crate::models::daily::{DailyQueueRecord, QueueDaySummary};
use crate::models::hourly::HourlyCount;
use crate::models::period::Period;
use crate::utils::date::parse_date;
use rusqlite::{Row, params};

const ANSWERED: &str = "terminada";
const ABANDONED: &str = "abandonada";

/// Raw daily row: the date is still text.
struct DailyRow {
    date: String,
    queue: Option<String>,
    total: i64,
    answered: i64,
    abandoned: i64,
    avg_wait: i64,
    max_wait: i64,
    avg_duration: i64,
    max_duration: i64,
}

impl DailyRow {
    fn into_record(self) -> AppResult<DailyQueueRecord> {
        let date = parse_date(&self.date)?;
        let mut rec = DailyQueueRecord::new(
            date,
            self.queue.as_deref(),
            self.total,
            self.answered,
            self.abandoned,
        );
        rec.avg_wait = self.avg_wait;
        rec.max_wait = self.max_wait;
        rec.avg_duration = self.avg_duration;
        rec.max_duration = self.max_duration;
        Ok(rec)
    }
}

fn map_daily_row(row: &Row<'_>) -> rusqlite::Result<DailyRow> {
    Ok(DailyRow {
        date: row.get("fecha")?,
        queue: row.get("cola")?,
        total: row.get("llamadas_totales")?,
        answered: row.get("respondidas")?,
        abandoned: row.get("abandonadas")?,
        avg_wait: row.get("promedio_espera")?,
        max_wait: row.get("espera_mas_larga")?,
        avg_duration: row.get("promedio_duracion_llamada")?,
        max_duration: row.get("duracion_mas_larga")?,
    })
}

/// Daily aggregates of one queue, ordered by date.
pub fn load_queue_daily(pool: &mut DbPool, queue: &str, period: &Period) -> AppResult<Vec<DailyQueueRecord>> {
    let mut stmt = pool.conn.prepare(
        "SELECT
            substr(c.datetime_entry_queue, 1, 10) AS fecha,
            q.queue AS cola,
            COUNT(*) AS llamadas_totales,
            SUM(c.status = ?4) AS respondidas,
            SUM(c.status = ?5) AS abandonadas,
            COALESCE(CAST(ROUND(AVG(c.duration_wait)) AS INTEGER), 0) AS promedio_espera,
            COALESCE(MAX(c.duration_wait), 0) AS espera_mas_larga,
            COALESCE(CAST(ROUND(AVG(c.duration)) AS INTEGER), 0) AS promedio_duracion_llamada,
            COALESCE(MAX(c.duration), 0) AS duracion_mas_larga
         FROM call_entry c
         JOIN queue_call_entry q ON c.id_queue_call_entry = q.id
         WHERE q.queue = ?1
           AND c.datetime_entry_queue >= ?2
           AND c.datetime_entry_queue < ?3
           AND c.status IN (?4, ?5)
         GROUP BY substr(c.datetime_entry_queue, 1, 10), q.queue
         ORDER BY fecha",
    )?;

    let rows = stmt.query_map(
        params![queue, period.start_ts(), period.end_ts(), ANSWERED, ABANDONED],
        map_daily_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?.into_record()?);
    }
    Ok(out)
}

/// Daily aggregates across every queue (dashboard scope), ordered by date.
pub fn load_daily_all_queues(pool: &mut DbPool, period: &Period) -> AppResult<Vec<DailyQueueRecord>> {
    let mut stmt = pool.conn.prepare(
        "SELECT
            substr(c.datetime_entry_queue, 1, 10) AS fecha,
            NULL AS cola,
            COUNT(*) AS llamadas_totales,
            SUM(c.status = ?3) AS respondidas,
            SUM(c.status = ?4) AS abandonadas,
            COALESCE(CAST(ROUND(AVG(c.duration_wait)) AS INTEGER), 0) AS promedio_espera,
            COALESCE(MAX(c.duration_wait), 0) AS espera_mas_larga,
            COALESCE(CAST(ROUND(AVG(c.duration)) AS INTEGER), 0) AS promedio_duracion_llamada,
            COALESCE(MAX(c.duration), 0) AS duracion_mas_larga
         FROM call_entry c
         WHERE c.datetime_entry_queue >= ?1
           AND c.datetime_entry_queue < ?2
           AND c.status IN (?3, ?4)
         GROUP BY substr(c.datetime_entry_queue, 1, 10)
         ORDER BY fecha",
    )?;

    let rows = stmt.query_map(
        params![period.start_ts(), period.end_ts(), ANSWERED, ABANDONED],
        map_daily_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?.into_record()?);
    }
    Ok(out)
}

/// Calls per hour of one queue, hours 6..=19 only. An answered call without
/// a pickup time has no hour and is left out.
pub fn load_queue_hourly(pool: &mut DbPool, queue: &str, period: &Period) -> AppResult<Vec<HourlyCount>> {
    let mut stmt = pool.conn.prepare(
        "SELECT fecha, hora, COUNT(*) AS cantidad
         FROM (
            SELECT
                substr(c.datetime_entry_queue, 1, 10) AS fecha,
                CAST(strftime('%H',
                    CASE WHEN c.status = ?5 THEN c.datetime_entry_queue
                         ELSE c.datetime_init END
                ) AS INTEGER) AS hora
            FROM call_entry c
            JOIN queue_call_entry q ON c.id_queue_call_entry = q.id
            WHERE q.queue = ?1
              AND c.datetime_entry_queue >= ?2
              AND c.datetime_entry_queue < ?3
              AND c.status IN (?4, ?5)
         )
         WHERE hora BETWEEN 6 AND 19
         GROUP BY fecha, hora
         ORDER BY fecha, hora",
    )?;

    let rows = stmt.query_map(
        params![queue, period.start_ts(), period.end_ts(), ANSWERED, ABANDONED],
        |row| {
            Ok((
                row.get::<_, String>("fecha")?,
                row.get::<_, i64>("hora")?,
                row.get::<_, i64>("cantidad")?,
            ))
        },
    )?;

    let mut out = Vec::new();
    for r in rows {
        let (date, hour, count) = r?;
        let hour = u32::try_from(hour)
            .ok()
            .filter(|h| *h < 24)
            .ok_or(AppError::InvalidHour(hour))?;
        out.push(HourlyCount::new(parse_date(&date)?, hour, count));
    }
    Ok(out)
}

/// Per (date, queue) counters across every queue with calls, ordered by
/// queue then date.
pub fn load_queue_day_summaries(pool: &mut DbPool, period: &Period) -> AppResult<Vec<QueueDaySummary>> {
    let mut stmt = pool.conn.prepare(
        "SELECT
            substr(c.datetime_entry_queue, 1, 10) AS fecha,
            q.queue AS cola,
            COUNT(*) AS llamadas_totales,
            SUM(c.status = ?3) AS respondidas,
            SUM(c.status = ?4) AS abandonadas
         FROM call_entry c
         JOIN queue_call_entry q ON c.id_queue_call_entry = q.id
         WHERE c.datetime_entry_queue >= ?1
           AND c.datetime_entry_queue < ?2
           AND c.status IN (?3, ?4)
         GROUP BY substr(c.datetime_entry_queue, 1, 10), q.queue
         HAVING llamadas_totales > 0
         ORDER BY cola, fecha",
    )?;

    let rows = stmt.query_map(
        params![period.start_ts(), period.end_ts(), ANSWERED, ABANDONED],
        |row| {
            Ok((
                row.get::<_, String>("fecha")?,
                row.get::<_, String>("cola")?,
                row.get::<_, i64>("llamadas_totales")?,
                row.get::<_, i64>("respondidas")?,
                row.get::<_, i64>("abandonadas")?,
            ))
        },
    )?;

    let mut out = Vec::new();
    for r in rows {
        let (date, queue, total, answered, abandoned) = r?;
        out.push(QueueDaySummary {
            date: parse_date(&date)?,
            queue,
            total,
            answered,
            abandoned,
        });
    }
    Ok(out)
}

/// Logged, active and break seconds per (agent, break type), with the
/// compliance status derived from `limits`.
pub fn load_agent_activity(
    pool: &mut DbPool,
    period: &Period,
    limits: &BreakLimits,
) -> AppResult<Vec<AgentActivity>> {
    let mut stmt = pool.conn.prepare(
        r#"SELECT
            ag.name AS agente,
            SUM(a.duration) AS tiempo_logueado,
            SUM(CASE WHEN a.id_break IS NULL THEN a.duration ELSE 0 END) AS tiempo_activo,
            b.name AS tipo_pausa,
            SUM(CASE WHEN a.id_break IS NOT NULL THEN a.duration ELSE 0 END) AS tiempo_pausa
         FROM audit a
         JOIN agent ag ON a.id_agent = ag.id
         LEFT JOIN "break" b ON a.id_break = b.id
         WHERE a.datetime_init >= ?1
           AND a.datetime_end < ?2
         GROUP BY ag.name, b.name
         ORDER BY ag.name, b.name"#,
    )?;

    let rows = stmt.query_map(params![period.start_ts(), period.end_ts()], |row| {
        Ok((
            row.get::<_, String>("agente")?,
            row.get::<_, i64>("tiempo_logueado")?,
            row.get::<_, i64>("tiempo_activo")?,
            row.get::<_, Option<String>>("tipo_pausa")?,
            row.get::<_, i64>("tiempo_pausa")?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (agent, logged_secs, active_secs, break_name, break_secs) = r?;
        let status = limits.classify(break_name.as_deref(), break_secs);
        out.push(AgentActivity {
            agent,
            logged_secs,
            active_secs,
            break_type: break_name.unwrap_or_else(|| NO_BREAK.to_string()),
            break_secs,
            status,
        });
    }
    Ok(out)
}

