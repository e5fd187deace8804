use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    if !cli.test {
        success(format!("Config file: {}", Config::config_file().display()));
    }

    let pool = DbPool::new(&db_str)?;
    init_db(&pool.conn)?;

    if let Err(e) = log::ttlog(&pool.conn, "init", "database", &format!("Database initialized at {db_str}")) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success(format!("Database initialized at {db_str}"));
    Ok(())
}
