//! Date-string parsing for raster metadata fields
//!
//! Metadata dates show up in a handful of textual layouts depending on the
//! product that wrote them. This module normalizes a date string and tries an
//! ordered list of layouts, so callers get one parser regardless of source.

use crate::errors::{RastimeError, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Accepted date layouts, tried in order against the normalized string.
///
/// The strings are matched after lower-casing and whitespace removal, so the
/// verbose layout reads e.g. `january1,2001`.
const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%B%d,%Y"];

/// Converts a date string in one of three possible layouts into a timestamp.
///
/// Accepted inputs:
/// - `2002-05-28` (ISO year-month-day)
/// - `January 1, 2001` (verbose month-day-year)
/// - `Present` (case-insensitive; resolves to the current local time)
///
/// Matching is case-insensitive and ignores all whitespace. Dates without a
/// time component parse to midnight. If no layout matches, the error lists
/// every attempted layout with its individual diagnostic.
pub fn string_to_date(str_date: &str) -> Result<NaiveDateTime> {
    string_to_date_at(str_date, Local::now().naive_local())
}

/// Same as [`string_to_date`], but with the instant that `present` resolves
/// to supplied by the caller.
///
/// Callers that need determinism (tests, reproducible pipelines) pin the
/// clock here instead of depending on the wall clock at call time.
pub fn string_to_date_at(str_date: &str, present: NaiveDateTime) -> Result<NaiveDateTime> {
    // Remove upper cases and spaces
    let normalized: String = str_date
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if normalized == "present" {
        return Ok(present);
    }

    let mut attempts = Vec::with_capacity(DATE_LAYOUTS.len());
    for layout in DATE_LAYOUTS {
        match NaiveDate::parse_from_str(&normalized, layout) {
            Ok(date) => return Ok(date.and_time(NaiveTime::MIN)),
            Err(e) => attempts.push((*layout, e)),
        }
    }

    Err(RastimeError::DateParse {
        input: str_date.to_string(),
        attempts,
    })
}
