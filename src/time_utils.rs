// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Local, NaiveDate, SecondsFormat};

/// Format a local timestamp as RFC3339 with its UTC offset, second precision.
pub fn format_row_timestamp(date: DateTime<Local>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// File-name partition for a calendar date (`YYYYMMDD`).
pub fn date_partition(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}
