use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::queue_report;
use crate::db::pool::DbPool;
use crate::db::queries::load_daily_all_queues;
use crate::errors::AppResult;
use crate::export::{DataFormat, parse_range, write_csv, write_json};
use std::path::Path;

/// Print or save the daily rows of a queue (or of all queues combined).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Queue {
        queue,
        range,
        format,
        file,
    } = cmd
    {
        let period = parse_range(range)?;
        let mut pool = DbPool::open_existing(&cfg.database)?;

        let records = match queue {
            Some(q) => queue_report(&mut pool, q, &period)?.records,
            None => load_daily_all_queues(&mut pool, &period)?,
        };

        let out = file.as_deref().map(Path::new);
        match format {
            DataFormat::Json => write_json(&records, out)?,
            DataFormat::Csv => write_csv(&records, out)?,
        }
    }
    Ok(())
}
