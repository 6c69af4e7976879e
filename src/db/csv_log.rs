// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Append-only CSV log, one file per calendar date.
//!
//! Files are created lazily on the first write of a given date and only ever
//! appended to. The header row is written exactly once per physical file,
//! gated on file existence on disk so a restarted process never repeats it.

use crate::error::{CollectorError, Result};
use crate::models::LocationRecord;
use crate::time_utils;
use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Canonical header row; data rows follow this column order.
const HEADER: &str =
    "timestamp,device_id,latitude,longitude,speed,direction,rpm,fuel_wear,idling";

/// Placeholder for fields absent in the source data, distinct from both the
/// empty string and a legitimate zero or `false`.
const MISSING: &str = "N/A";

/// Date-partitioned CSV store under a fixed base directory.
pub struct CsvLogStore {
    base_dir: PathBuf,
}

impl CsvLogStore {
    /// Create the store, ensuring the base directory exists.
    ///
    /// Failure here means no write can ever succeed, so callers may treat it
    /// as fatal at startup.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        std::fs::create_dir_all(&base_dir)
            .map_err(|e| CollectorError::Persistence(format!("{}: {}", base_dir.display(), e)))?;

        Ok(Self { base_dir })
    }

    /// Append one row per record to today's file, in input order, creating
    /// the file (header included) on the first write of the date.
    ///
    /// Returns the number of rows written. An empty slice still ensures the
    /// header and returns `Ok(0)`.
    pub fn append(&self, records: &[LocationRecord]) -> Result<usize> {
        self.append_at(Local::now(), records)
    }

    // "Today" is re-evaluated on every call, so a cycle that spans midnight
    // lands in the new day's file.
    fn append_at(&self, now: DateTime<Local>, records: &[LocationRecord]) -> Result<usize> {
        let path = self.file_path(now);
        let header_needed = !path.exists();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| CollectorError::Persistence(format!("{}: {}", path.display(), e)))?;

        if header_needed {
            writeln!(file, "{HEADER}")
                .map_err(|e| CollectorError::Persistence(format!("{}: {}", path.display(), e)))?;
            tracing::info!(path = %path.display(), "Created new CSV log file");
        }

        let timestamp = time_utils::format_row_timestamp(now);
        for record in records {
            writeln!(file, "{}", render_row(&timestamp, record))
                .map_err(|e| CollectorError::Persistence(format!("{}: {}", path.display(), e)))?;
        }

        tracing::info!(records = records.len(), path = %path.display(), "Saved location records");
        Ok(records.len())
    }

    fn file_path(&self, now: DateTime<Local>) -> PathBuf {
        self.base_dir.join(format!(
            "gps_data_{}.csv",
            time_utils::date_partition(now.date_naive())
        ))
    }
}

/// Render one CSV row in header order, stamped with the write time.
fn render_row(timestamp: &str, record: &LocationRecord) -> String {
    [
        timestamp.to_string(),
        record
            .dev_id
            .as_deref()
            .map(escape)
            .unwrap_or_else(|| MISSING.to_string()),
        render_float(record.lat),
        render_float(record.lng),
        render_float(record.speed),
        render_float(record.direction),
        render_float(record.rpm),
        render_value(record.fuel_wear.as_ref()),
        render_value(record.idling.as_ref()),
    ]
    .join(",")
}

/// Numeric field or the missing placeholder.
fn render_float(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| MISSING.to_string())
}

/// Loosely-typed field (`fuelWear` and `idling` vary by device model):
/// scalars render literally, anything missing or null renders the
/// placeholder.
fn render_value(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => MISSING.to_string(),
        Some(serde_json::Value::String(s)) => escape(s),
        Some(other) => escape(&other.to_string()),
    }
}

/// Quote a field if it contains a comma, quote or line break.
fn escape(field: &str) -> String {
    let needs_quoting = field
        .chars()
        .any(|c| matches!(c, '"' | ',' | '\n' | '\r'));

    if needs_quoting {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
