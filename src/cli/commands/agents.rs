use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_agent_activity;
use crate::errors::AppResult;
use crate::export::{DataFormat, parse_range, write_csv, write_json};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Agents {
        range,
        format,
        file,
    } = cmd
    {
        let period = parse_range(range)?;
        let mut pool = DbPool::open_existing(&cfg.database)?;
        let rows = load_agent_activity(&mut pool, &period, &cfg.break_limits)?;

        let out = file.as_deref().map(Path::new);
        match format {
            DataFormat::Json => write_json(&rows, out)?,
            DataFormat::Csv => write_csv(&rows, out)?,
        }
    }
    Ok(())
}
