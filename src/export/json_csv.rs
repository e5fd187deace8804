// src/export/json_csv.rs

use crate::errors::AppResult;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Pretty-printed JSON to `path`, or stdout when `path` is `None`.
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: Option<&Path>) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(value)?;

    match path {
        Some(p) => {
            let mut file = File::create(p)?;
            file.write_all(json_data.as_bytes())?;
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(json_data.as_bytes())?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// CSV with a header row derived from the field names.
pub fn write_csv<T: Serialize>(rows: &[T], path: Option<&Path>) -> AppResult<()> {
    match path {
        Some(p) => serialize_rows(csv::Writer::from_path(p)?, rows),
        None => serialize_rows(csv::Writer::from_writer(io::stdout().lock()), rows),
    }
}

fn serialize_rows<W: Write, T: Serialize>(mut wtr: csv::Writer<W>, rows: &[T]) -> AppResult<()> {
    for item in rows {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}
