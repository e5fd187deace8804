// src/export/logic.rs

use crate::config::Config;
use crate::core::report::{agent_report, callcenter_report};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::range::parse_range;
use crate::export::{AgentWorkbook, CallCenterWorkbook, ReportKind, notify_export_success};
use crate::ui::messages::{info, warning};
use std::path::Path;

/// High-level workbook export.
pub struct ExportLogic;

impl ExportLogic {
    /// Render a workbook for `range` into `file`.
    ///
    /// - `kind`: call-center weekly workbook or agent compliance sheet
    /// - `file`: absolute path of the `.xlsx` to write
    /// - `range`: `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or `A:B` of the same shape
    ///
    /// An empty period still produces a workbook with "no data" sheets.
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        kind: ReportKind,
        file: &str,
        range: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let period = parse_range(range)?;
        info(format!("Exporting {} workbook for {period}: {}", kind.as_str(), path.display()));

        let rows = match kind {
            ReportKind::Callcenter => {
                let report = callcenter_report(pool, &period)?;
                if report.sheets.is_empty() {
                    warning("No calls found for the selected range.");
                }
                let mut workbook = CallCenterWorkbook::new(cfg).build(&report)?;
                workbook.save(path)?;
                report.sheets.len()
            }
            ReportKind::Agents => {
                let report = agent_report(pool, &period, &cfg.break_limits)?;
                if report.rows.is_empty() {
                    warning("No agent activity found for the selected range.");
                }
                let mut workbook = AgentWorkbook::new(cfg).build(&report)?;
                workbook.save(path)?;
                report.rows.len()
            }
        };

        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            kind.as_str(),
            &format!("{} ({rows} rows) for {period}", path.display()),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        notify_export_success("XLSX", path);
        Ok(())
    }
}
