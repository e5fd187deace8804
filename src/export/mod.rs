// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
pub mod range;
mod styles;
mod xlsx_agents;
mod xlsx_callcenter;

pub use json_csv::{write_csv, write_json};
pub use logic::ExportLogic;
pub use range::parse_range;
pub use xlsx_agents::AgentWorkbook;
pub use xlsx_callcenter::CallCenterWorkbook;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// Output format of the data commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DataFormat {
    Json,
    Csv,
}

/// Which workbook to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    Callcenter,
    Agents,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Callcenter => "callcenter",
            ReportKind::Agents => "agents",
        }
    }
}
