// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Class hours and the textual date/time formats shared by every adapter.
//!
//! ## Formats
//!
//! - Dates are read and displayed as `dd/mm/yyyy`
//! - Times of day are read and displayed as `HH:MM` (24-hour clock)
//!
//! Seconds are never meaningful in this domain; parsed times always carry
//! zero seconds.

use crate::error::DomainError;
use time::format_description::BorrowedFormatItem;
use time::macros::{format_description, time};
use time::{Date, OffsetDateTime, Time};

/// Start of class hours. Sessions may begin at this time.
pub const HORA_COMIENZO_CLASES: Time = time!(16:00);

/// End of class hours. Sessions may end at, but not begin at, this time.
pub const HORA_FIN_CLASES: Time = time!(22:15);

const FORMATO_FECHA: &[BorrowedFormatItem<'_>] = format_description!("[day]/[month]/[year]");
const FORMATO_HORA: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]");

/// Parses a `dd/mm/yyyy` date.
///
/// # Errors
///
/// Returns `DomainError::Missing` if the input is blank, or
/// `DomainError::DateParseError` if it is not a valid calendar date in that format.
pub fn parse_fecha(input: &str) -> Result<Date, DomainError> {
    let trimmed: &str = input.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Missing { field: "date" });
    }
    Date::parse(trimmed, FORMATO_FECHA).map_err(|e| DomainError::DateParseError {
        date_string: trimmed.to_string(),
        error: e.to_string(),
    })
}

/// Parses an `HH:MM` time of day.
///
/// # Errors
///
/// Returns `DomainError::Missing` if the input is blank, or
/// `DomainError::TimeParseError` if it is not a valid 24-hour time in that format.
pub fn parse_hora(input: &str) -> Result<Time, DomainError> {
    let trimmed: &str = input.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Missing { field: "time" });
    }
    Time::parse(trimmed, FORMATO_HORA).map_err(|e| DomainError::TimeParseError {
        time_string: trimmed.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date as `dd/mm/yyyy`.
#[must_use]
pub fn format_fecha(fecha: Date) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        fecha.day(),
        u8::from(fecha.month()),
        fecha.year()
    )
}

/// Formats a time of day as `HH:MM`.
#[must_use]
pub fn format_hora(hora: Time) -> String {
    format!("{:02}:{:02}", hora.hour(), hora.minute())
}

/// Returns the current calendar date (UTC).
#[must_use]
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
