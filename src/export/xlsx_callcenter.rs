// src/export/xlsx_callcenter.rs

use crate::config::Config;
use crate::core::report::{CallCenterReport, QueueSheet};
use crate::core::rollup::{CrossQueueWeek, QueueWeek, Rollup, abandonment_level, success_level};
use crate::errors::AppResult;
use crate::export::styles::{
    BLACK, CORPORATE_PALETTE, LIGHT_BORDER, MUTED, Palette, QUEUE_PALETTE, TEXT, WHITE, band, boxed,
    cell, left, level_color, number_pair, rule, sheet_name, span, underlined,
};
use crate::models::daily::{DailyQueueRecord, HourWindow, NO_WINDOW};
use crate::utils::date::{format_long, format_short, weekday_es, weekday_upper_es};
use crate::utils::formatting::{secs2hms, secs2mins};
use rust_xlsxwriter::{Color, Workbook, Worksheet};

const SUMMARY_SHEET: &str = "Resumen Colas";
const COLS_PER_DAY: u16 = 5;

/// A row of a weekly queue block.
#[derive(Clone, Copy)]
enum Line {
    Section(&'static str),
    Metric(Metric),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Metric {
    Total,
    Answered,
    Abandoned,
    Peak,
    Trough,
    AvgWait,
    MaxWait,
    AvgDuration,
    MaxDuration,
}

impl Metric {
    fn title(self) -> &'static str {
        match self {
            Metric::Total => "Llamadas Total",
            Metric::Answered => "Respondidas",
            Metric::Abandoned => "Abandonadas",
            Metric::Peak => "Horario + Tráfico",
            Metric::Trough => "Horario - Tráfico",
            Metric::AvgWait => "Promedio Espera",
            Metric::MaxWait => "Espera + Larga",
            Metric::AvgDuration => "Prom. Dur. Llamada",
            Metric::MaxDuration => "Dur. + Larga Llamada",
        }
    }
}

const LINES: [Line; 12] = [
    Line::Section("VOLUMEN DE LLAMADAS"),
    Line::Metric(Metric::Total),
    Line::Metric(Metric::Answered),
    Line::Metric(Metric::Abandoned),
    Line::Section("DISTRIBUCIÓN DE TRÁFICO"),
    Line::Metric(Metric::Peak),
    Line::Metric(Metric::Trough),
    Line::Section("TIEMPOS"),
    Line::Metric(Metric::AvgWait),
    Line::Metric(Metric::MaxWait),
    Line::Metric(Metric::AvgDuration),
    Line::Metric(Metric::MaxDuration),
];

/// What one day shows for one metric.
enum DayValue {
    /// A single value across both day columns.
    Merged(String),
    MergedNumber(f64),
    /// Count plus a side value; the side cell may carry its own background.
    Split(String, String, Option<u32>),
}

fn day_value(metric: Metric, d: &DailyQueueRecord) -> DayValue {
    match metric {
        Metric::Total => DayValue::MergedNumber(d.total as f64),
        Metric::Answered => DayValue::Split(
            d.answered.to_string(),
            format!("{}%", d.answered_pct),
            Some(level_color(success_level(d.answered_pct))),
        ),
        Metric::Abandoned => DayValue::Split(
            d.abandoned.to_string(),
            format!("{}%", d.abandoned_pct),
            Some(level_color(abandonment_level(d.abandoned_pct))),
        ),
        Metric::Peak => window_value(d.peak()),
        Metric::Trough => window_value(d.trough()),
        Metric::AvgWait => wait_value(d.avg_wait),
        Metric::MaxWait => wait_value(d.max_wait),
        Metric::AvgDuration => DayValue::Merged(format!("{} min", secs2hms(d.avg_duration))),
        Metric::MaxDuration => DayValue::Merged(format!("{} min", secs2hms(d.max_duration))),
    }
}

fn window_value(w: HourWindow) -> DayValue {
    let side = if w.is_none() {
        NO_WINDOW.to_string()
    } else {
        format!("{} Llam", w.count)
    };
    DayValue::Split(w.label, side, None)
}

fn wait_value(secs: i64) -> DayValue {
    DayValue::Split(format!("{secs} s"), format!("{} min", secs2mins(secs)), None)
}

/// Renders the per-queue sheets and the cross-queue summary sheet.
pub struct CallCenterWorkbook<'a> {
    cfg: &'a Config,
    generated: String,
}

impl<'a> CallCenterWorkbook<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        let generated = chrono::Local::now().format(&cfg.timestamp_format).to_string();
        Self { cfg, generated }
    }

    pub fn build(&self, report: &CallCenterReport) -> AppResult<Workbook> {
        let mut workbook = Workbook::new();

        for sheet in &report.sheets {
            workbook.push_worksheet(self.queue_sheet(sheet)?);
        }
        workbook.push_worksheet(self.summary_sheet(&report.summary)?);

        Ok(workbook)
    }

    pub fn to_buffer(&self, report: &CallCenterReport) -> AppResult<Vec<u8>> {
        Ok(self.build(report)?.save_to_buffer()?)
    }

    // ---------------------------
    // Queue sheets
    // ---------------------------

    fn queue_sheet(&self, sheet: &QueueSheet) -> AppResult<Worksheet> {
        let pal = QUEUE_PALETTE;
        let mut ws = Worksheet::new();
        ws.set_name(sheet_name(&self.cfg.queue_tab(&sheet.queue)))?;
        ws.set_tab_color(Color::RGB(pal.tab));

        if sheet.is_empty() {
            ws.write_string(0, 0, format!("No hay datos para la cola {}", sheet.queue))?;
            return Ok(ws);
        }

        let total_cols = week_cols(sheet.max_days());
        let mut row = self.company_header(&mut ws, &sheet.queue, total_cols, &pal)?;

        for week in &sheet.weeks {
            row = self.queue_week(&mut ws, week, &sheet.queue, row, &pal)?;
        }

        let footer = boxed(
            left(cell(WHITE, MUTED).set_italic().set_font_size(8), 0),
            WHITE,
        );
        ws.write_string_with_format(
            row,
            0,
            format!("Generado el {} — Sistema de Reportes Call Center", self.generated),
            &footer,
        )?;
        ws.set_row_height(row, 16)?;

        ws.set_column_width(0, 24)?;
        for c in 1..total_cols {
            ws.set_column_width(c, 13)?;
        }
        ws.set_freeze_panes(0, 1)?;
        ws.set_screen_gridlines(false);

        Ok(ws)
    }

    fn company_header(&self, ws: &mut Worksheet, queue: &str, cols: u16, pal: &Palette) -> AppResult<u32> {
        let title = boxed(cell(pal.dark, WHITE).set_bold().set_font_size(13), pal.dark);
        band(
            ws,
            0,
            0,
            cols - 1,
            &format!("{}  —  Sistema de Reportes Call Center", self.cfg.company_title),
            &title,
        )?;
        ws.set_row_height(0, 28)?;

        let sub = boxed(left(cell(pal.mid, WHITE).set_bold().set_font_size(11), 1), pal.mid);
        band(ws, 1, 0, cols - 1, &self.cfg.queue_title(queue), &sub)?;
        ws.set_row_height(1, 22)?;

        rule(ws, 2, cols, pal.accent, 4.0)?;
        Ok(3)
    }

    fn queue_week(
        &self,
        ws: &mut Worksheet,
        week: &QueueWeek,
        queue: &str,
        start_row: u32,
        pal: &Palette,
    ) -> AppResult<u32> {
        let days = &week.bucket.records;
        let total_cols = week_cols(days.len());
        let last_col = total_cols - 1;
        let mut row = start_row;

        let dark = boxed(cell(pal.dark, WHITE).set_bold(), pal.dark);
        let mid = boxed(cell(pal.mid, WHITE).set_bold(), pal.mid);
        let accent = boxed(cell(pal.accent, WHITE).set_font_size(9), pal.mid);

        // Week title
        let title = format!(
            "SEMANA {}   ·   {}   ·   {}  →  {}",
            week.number,
            self.cfg.queue_title(queue),
            format_long(week.bucket.first_date()),
            format_long(week.bucket.last_date()),
        );
        band(ws, row, 0, last_col, &title, &left(dark.clone().set_font_size(11), 1))?;
        ws.set_row_height(row, 26)?;
        row += 1;

        // Day headers
        span(ws, row, 0, row + 1, 0, "MÉTRICA", &mid.clone().set_font_size(9))?;
        let mut col: u16 = 1;
        for d in days {
            band(ws, row, col, col + 1, weekday_upper_es(d.date), &mid)?;
            band(ws, row + 1, col, col + 1, &format_short(d.date), &accent)?;
            col += 2;
        }
        span(ws, row, col, row + 1, col + 1, "TOTAL\nSEMANA", &dark.clone().set_text_wrap())?;
        ws.set_row_height(row, 20)?;
        ws.set_row_height(row + 1, 16)?;
        row += 2;

        // Metrics
        let mut data_index = 0;
        for line in LINES {
            let metric = match line {
                Line::Section(name) => {
                    band(
                        ws,
                        row,
                        0,
                        last_col,
                        &format!("▸  {name}"),
                        &left(dark.clone().set_font_size(9), 1),
                    )?;
                    ws.set_row_height(row, 14)?;
                    row += 1;
                    continue;
                }
                Line::Metric(m) => m,
            };

            let bg = pal.band(data_index);
            data_index += 1;

            let label = underlined(left(cell(bg, pal.dark).set_bold(), 1), LIGHT_BORDER, pal.mid);
            ws.write_string_with_format(row, 0, metric.title(), &label)?;
            ws.set_row_height(row, 18)?;

            let plain = boxed(cell(bg, TEXT), LIGHT_BORDER);
            let mut col: u16 = 1;
            for d in days {
                match day_value(metric, d) {
                    DayValue::Merged(text) => band(ws, row, col, col + 1, &text, &plain)?,
                    DayValue::MergedNumber(n) => number_pair(ws, row, col, n, &plain)?,
                    DayValue::Split(main, side, side_bg) => {
                        ws.write_string_with_format(row, col, main, &plain)?;
                        let side_fmt = match side_bg {
                            Some(c) => boxed(cell(c, TEXT).set_bold(), LIGHT_BORDER),
                            None => plain.clone(),
                        };
                        ws.write_string_with_format(row, col + 1, side, &side_fmt)?;
                    }
                }
                col += 2;
            }

            self.week_total(ws, week, metric, row, col, pal)?;
            row += 1;
        }

        rule(ws, row, total_cols, pal.accent, 3.0)?;
        Ok(row + 3)
    }

    fn week_total(
        &self,
        ws: &mut Worksheet,
        week: &QueueWeek,
        metric: Metric,
        row: u32,
        col: u16,
        pal: &Palette,
    ) -> AppResult<()> {
        let t = &week.totals;
        let count_fmt = boxed(cell(pal.lighter, pal.dark).set_bold(), pal.mid);

        match metric {
            Metric::Total => {
                let fmt = boxed(cell(pal.mid, WHITE).set_bold().set_font_size(11), pal.mid);
                number_pair(ws, row, col, t.total as f64, &fmt)?;
            }
            Metric::Answered => {
                ws.write_number_with_format(row, col, t.answered as f64, &count_fmt)?;
                let fmt = boxed(cell(level_color(t.answered_level()), TEXT).set_bold(), pal.mid);
                ws.write_string_with_format(row, col + 1, format!("{}%", t.answered_pct), &fmt)?;
            }
            Metric::Abandoned => {
                ws.write_number_with_format(row, col, t.abandoned as f64, &count_fmt)?;
                let fmt = boxed(cell(level_color(t.abandoned_level()), TEXT).set_bold(), pal.mid);
                ws.write_string_with_format(row, col + 1, format!("{}%", t.abandoned_pct), &fmt)?;
            }
            _ => {
                let fmt = boxed(cell(pal.lighter, BLACK), LIGHT_BORDER);
                band(ws, row, col, col + 1, "", &fmt)?;
            }
        }
        Ok(())
    }

    // ---------------------------
    // Summary sheet
    // ---------------------------

    fn summary_sheet(&self, weeks: &[CrossQueueWeek]) -> AppResult<Worksheet> {
        let pal = CORPORATE_PALETTE;
        let mut ws = Worksheet::new();
        ws.set_name(SUMMARY_SHEET)?;
        ws.set_tab_color(Color::RGB(pal.tab));
        ws.set_screen_gridlines(false);

        if weeks.is_empty() {
            ws.write_string(0, 0, "No hay datos por cola")?;
            return Ok(ws);
        }

        let mut row = 0;
        let mut widest = 0;
        for week in weeks {
            row = self.summary_week(&mut ws, week, row, &pal)?;
            widest = widest.max(week.dates.len());
        }

        ws.set_column_width(0, 34)?;
        for day in 0..widest as u16 {
            for (offset, w) in [9, 7, 9, 7, 9].into_iter().enumerate() {
                ws.set_column_width(1 + day * COLS_PER_DAY + offset as u16, w)?;
            }
        }
        ws.set_freeze_panes(0, 1)?;

        Ok(ws)
    }

    fn summary_week(&self, ws: &mut Worksheet, week: &CrossQueueWeek, start_row: u32, pal: &Palette) -> AppResult<u32> {
        let total_cols = 1 + week.dates.len() as u16 * COLS_PER_DAY;
        let last_col = total_cols - 1;
        let mut row = start_row;

        let dark = boxed(cell(pal.dark, WHITE).set_bold(), pal.dark);
        let mid = boxed(cell(pal.mid, WHITE).set_bold(), pal.mid);

        band(
            ws,
            row,
            0,
            last_col,
            &format!("{}  —  Resumen de Comportamiento por Cola", self.cfg.company_title),
            &dark.clone().set_font_size(12),
        )?;
        ws.set_row_height(row, 26)?;
        row += 1;

        band(
            ws,
            row,
            0,
            last_col,
            &format!(
                "SEMANA {}   ·   {}  →  {}",
                week.number,
                format_long(week.first),
                format_long(week.last)
            ),
            &left(mid.clone().set_font_size(11), 1),
        )?;
        ws.set_row_height(row, 20)?;
        row += 1;

        rule(ws, row, total_cols, pal.accent, 3.0)?;
        row += 1;

        // Date headers
        span(ws, row, 0, row + 1, 0, "", &dark)?;
        let mut col: u16 = 1;
        for d in &week.dates {
            let end = col + COLS_PER_DAY - 1;
            band(ws, row, col, end, &format_short(*d), &mid)?;
            band(ws, row + 1, col, end, weekday_es(*d), &boxed(cell(pal.accent, WHITE), pal.mid))?;
            col += COLS_PER_DAY;
        }
        ws.set_row_height(row, 18)?;
        ws.set_row_height(row + 1, 16)?;
        row += 2;

        // Column labels
        let label_fmt = dark.clone().set_font_size(9);
        ws.write_string_with_format(row, 0, "COLA", &label_fmt)?;
        let mut col: u16 = 1;
        for _ in &week.dates {
            for lbl in ["Exitosas", "%", "Aband.", "%", "Total"] {
                ws.write_string_with_format(row, col, lbl, &label_fmt)?;
                col += 1;
            }
        }
        ws.set_row_height(row, 18)?;
        row += 1;

        // Queue rows
        for (i, queue) in week.queues.iter().enumerate() {
            let bg = pal.band(i);
            let name_fmt = boxed(left(cell(pal.mid, WHITE).set_bold(), 1), pal.mid);
            ws.write_string_with_format(row, 0, self.cfg.queue_summary_name(queue), &name_fmt)?;

            let mut col: u16 = 1;
            for d in &week.dates {
                let r = week.cell(queue, *d);
                summary_cells(ws, row, col, &r, bg, false)?;
                col += COLS_PER_DAY;
            }
            ws.set_row_height(row, 17)?;
            row += 1;
        }

        // Grand total per date
        ws.write_string_with_format(row, 0, "▸  TOTAL", &left(dark.clone(), 1))?;
        let mut col: u16 = 1;
        for d in &week.dates {
            summary_cells(ws, row, col, &week.total(*d), pal.lighter, true)?;
            col += COLS_PER_DAY;
        }
        ws.set_row_height(row, 20)?;
        row += 1;

        Ok(row + 3)
    }
}

/// The five cells of one (queue, date): answered, %, abandoned, %, total.
fn summary_cells(
    ws: &mut Worksheet,
    row: u32,
    col: u16,
    r: &Rollup,
    bg: u32,
    bold: bool,
) -> AppResult<()> {
    let mut plain = boxed(cell(bg, TEXT), LIGHT_BORDER);
    if bold {
        plain = plain.set_bold();
    }
    let ok = boxed(cell(level_color(r.answered_level()), TEXT).set_bold(), LIGHT_BORDER);
    let ko = boxed(cell(level_color(r.abandoned_level()), TEXT).set_bold(), LIGHT_BORDER);

    ws.write_number_with_format(row, col, r.answered as f64, &plain)?;
    ws.write_string_with_format(row, col + 1, format!("{}%", r.answered_pct), &ok)?;
    ws.write_number_with_format(row, col + 2, r.abandoned as f64, &plain)?;
    ws.write_string_with_format(row, col + 3, format!("{}%", r.abandoned_pct), &ko)?;
    ws.write_number_with_format(row, col + 4, r.total as f64, &plain)?;
    Ok(())
}

/// Metric column + two columns per day + two total columns.
fn week_cols(days: usize) -> u16 {
    1 + days as u16 * 2 + 2
}
