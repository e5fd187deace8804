use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        kind,
        range,
        file,
        force,
    } = cmd
    {
        let mut pool = DbPool::open_existing(&cfg.database)?;
        ExportLogic::export(&mut pool, cfg, *kind, file, range, *force)?;
    }
    Ok(())
}
