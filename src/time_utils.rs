// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format Strava's `start_date_local` for display.
///
/// Strava sends local wall-clock time with a misleading `Z` suffix, so the
/// value is rendered as-is without any timezone conversion. Unparseable
/// input is returned unchanged.
pub fn format_local_start(raw: &str) -> String {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return date.naive_local().format(DISPLAY_FORMAT).to_string();
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|date| date.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|_| raw.to_string())
}
