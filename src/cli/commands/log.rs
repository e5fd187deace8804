use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { limit } = cmd {
        let pool = DbPool::open_existing(&cfg.database)?;
        let lines = load_log(&pool.conn, *limit)?;

        if lines.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        header("Internal log");
        let mut table = Table::new(vec![
            Column::new("Date", 25),
            Column::new("Operation", 10),
            Column::new("Target", 12),
            Column::new("Message", 0),
        ]);
        for (date, op, target, msg) in lines {
            table.add_row(vec![date, op, target, msg]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
