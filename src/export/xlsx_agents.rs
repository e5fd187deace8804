// src/export/xlsx_agents.rs

use crate::config::Config;
use crate::core::report::AgentReport;
use crate::errors::AppResult;
use crate::export::styles::{
    CORPORATE_PALETTE, LIGHT_BORDER, MUTED, Palette, TEXT, WHITE, band, boxed, cell, left, rule,
    status_color,
};
use crate::models::agent::ComplianceStatus;
use crate::utils::formatting::secs2hms;
use rust_xlsxwriter::{Color, Workbook, Worksheet};
use unicode_width::UnicodeWidthStr;

const SHEET: &str = "Control Agentes";

/// Column title and minimum width.
const COLUMNS: [(&str, usize); 6] = [
    ("Agente", 45),
    ("Tiempo Logueado", 18),
    ("Tiempo Activo", 18),
    ("Tipo Pausa", 22),
    ("Tiempo Pausa", 18),
    ("Estado", 16),
];

/// Renders the agent compliance sheet.
pub struct AgentWorkbook<'a> {
    cfg: &'a Config,
    generated: String,
}

impl<'a> AgentWorkbook<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        let generated = chrono::Local::now().format(&cfg.timestamp_format).to_string();
        Self { cfg, generated }
    }

    pub fn build(&self, report: &AgentReport) -> AppResult<Workbook> {
        let pal = CORPORATE_PALETTE;
        let cols = COLUMNS.len() as u16;
        let mut ws = Worksheet::new();
        ws.set_name(SHEET)?;
        ws.set_tab_color(Color::RGB(pal.tab));
        ws.set_screen_gridlines(false);

        let mut row = self.header(&mut ws, cols, &pal)?;

        // Column headers
        let head = boxed(cell(pal.mid, WHITE).set_bold(), pal.mid);
        for (c, (name, _)) in COLUMNS.iter().enumerate() {
            ws.write_string_with_format(row, c as u16, *name, &head)?;
        }
        ws.set_row_height(row, 22)?;
        row += 1;
        rule(&mut ws, row, cols, pal.accent, 3.0)?;
        row += 1;
        ws.set_freeze_panes(row, 0)?;

        // Data rows
        let mut widths: Vec<usize> = COLUMNS.iter().map(|(_, w)| *w).collect();
        for (i, r) in report.rows.iter().enumerate() {
            let bg = pal.band(i);
            let values = [
                r.agent.clone(),
                secs2hms(r.logged_secs),
                secs2hms(r.active_secs),
                r.break_type.clone(),
                if r.has_break() {
                    secs2hms(r.break_secs)
                } else {
                    "-".to_string()
                },
                r.status.to_string(),
            ];

            for (c, v) in values.iter().enumerate() {
                let fmt = match c {
                    0 => boxed(left(cell(bg, pal.dark).set_bold(), 1), LIGHT_BORDER),
                    5 => boxed(cell(status_color(r.status), TEXT).set_bold(), LIGHT_BORDER),
                    _ => boxed(cell(bg, TEXT), LIGHT_BORDER),
                };
                ws.write_string_with_format(row, c as u16, v, &fmt)?;
                widths[c] = widths[c].max(UnicodeWidthStr::width(v.as_str()) + 2);
            }
            ws.set_row_height(row, 18)?;
            row += 1;
        }

        for (c, w) in widths.iter().enumerate() {
            ws.set_column_width(c as u16, *w as f64)?;
        }

        row = self.summary(&mut ws, report, row, cols, &pal)?;
        self.footer(&mut ws, row, cols)?;

        let mut workbook = Workbook::new();
        workbook.push_worksheet(ws);
        Ok(workbook)
    }

    pub fn to_buffer(&self, report: &AgentReport) -> AppResult<Vec<u8>> {
        Ok(self.build(report)?.save_to_buffer()?)
    }

    fn header(&self, ws: &mut Worksheet, cols: u16, pal: &Palette) -> AppResult<u32> {
        let last = cols - 1;

        let title = boxed(cell(pal.dark, WHITE).set_bold().set_font_size(13), pal.dark);
        band(
            ws,
            0,
            0,
            last,
            &format!("{}  —  Sistema de Reportes Call Center", self.cfg.company_title),
            &title,
        )?;
        ws.set_row_height(0, 28)?;

        let sub = boxed(left(cell(pal.mid, WHITE).set_bold().set_font_size(11), 1), pal.mid);
        band(ws, 1, 0, last, "Control de Agentes  —  Tiempos, Pausas y Cumplimiento", &sub)?;
        ws.set_row_height(1, 22)?;

        let when = boxed(
            left(cell(pal.lighter, pal.dark).set_italic().set_font_size(9), 1),
            pal.lighter,
        );
        band(ws, 2, 0, last, &format!("Generado el: {}", self.generated), &when)?;
        ws.set_row_height(2, 16)?;

        rule(ws, 3, cols, pal.accent, 4.0)?;
        Ok(4)
    }

    fn summary(
        &self,
        ws: &mut Worksheet,
        report: &AgentReport,
        start_row: u32,
        cols: u16,
        pal: &Palette,
    ) -> AppResult<u32> {
        let mut row = start_row;
        rule(ws, row, cols, pal.accent, 3.0)?;
        row += 1;

        let head = boxed(left(cell(pal.dark, WHITE).set_bold().set_font_size(9), 1), pal.dark);
        band(ws, row, 0, cols - 1, "▸  RESUMEN DE CUMPLIMIENTO", &head)?;
        ws.set_row_height(row, 14)?;
        row += 1;

        let s = &report.summary;
        let lines = [
            ("Total Agentes", s.agents, pal.mid, WHITE),
            (
                "Trabajo",
                s.working,
                status_color(ComplianceStatus::Work),
                TEXT,
            ),
            (
                "Cumple",
                s.compliant,
                status_color(ComplianceStatus::Compliant),
                TEXT,
            ),
            (
                "Incumple",
                s.non_compliant,
                status_color(ComplianceStatus::NonCompliant),
                TEXT,
            ),
        ];

        let label = boxed(
            left(cell(pal.lighter, pal.dark).set_bold().set_font_size(9), 1),
            LIGHT_BORDER,
        );
        for (name, value, bg, fg) in lines {
            ws.write_string_with_format(row, 0, name, &label)?;
            let fmt = boxed(cell(bg, fg).set_bold().set_font_size(11), LIGHT_BORDER);
            ws.write_number_with_format(row, 1, value as f64, &fmt)?;
            ws.set_row_height(row, 20)?;
            row += 1;
        }

        Ok(row)
    }

    fn footer(&self, ws: &mut Worksheet, row: u32, cols: u16) -> AppResult<()> {
        let fmt = boxed(
            left(cell(WHITE, MUTED).set_italic().set_font_size(8), 0),
            WHITE,
        );
        band(
            ws,
            row,
            0,
            cols - 1,
            &format!(
                "Generado el {} — Sistema de Reportes Call Center  |  {}",
                self.generated, self.cfg.company_title
            ),
            &fmt,
        )?;
        ws.set_row_height(row, 16)?;
        Ok(())
    }
}
