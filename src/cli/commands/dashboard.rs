use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::dashboard;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::write_json;
use crate::ui::messages::{header, info};
use crate::utils::date::{parse_date, today};
use crate::utils::formatting::pct;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { date, json } = cmd {
        let day = match date {
            Some(d) => parse_date(d)?,
            None => today(),
        };

        let mut pool = DbPool::open_existing(&cfg.database)?;
        let dash = dashboard(&mut pool, day)?;

        if *json {
            return write_json(&dash, None);
        }

        header(format!("Dashboard {}", dash.date));
        if dash.queues.is_empty() {
            info("No calls recorded for this day.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("Queue", 28),
            Column::numeric("Total", 7),
            Column::numeric("Answered", 9),
            Column::numeric("Abandoned", 10),
            Column::numeric("Aband. %", 9),
        ]);
        for q in &dash.queues {
            let s = &q.summary;
            table.add_row(vec![
                cfg.queue_summary_name(&s.queue),
                s.total.to_string(),
                s.answered.to_string(),
                s.abandoned.to_string(),
                pct(q.abandoned_pct),
            ]);
        }
        let t = &dash.totals;
        table.add_row(vec![
            "TOTAL".to_string(),
            t.total.to_string(),
            t.answered.to_string(),
            t.abandoned.to_string(),
            pct(t.abandoned_pct),
        ]);
        print!("{}", table.render());
    }
    Ok(())
}
