// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::schedule::{format_fecha, format_hora};
use time::{Date, Time};

/// Errors that can occur during domain validation.
///
/// `Missing` is the absence kind: a required value was not supplied at all.
/// Every other variant is the invalid-argument kind: a value was supplied
/// but violates a specific rule, and the variant names that rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required value was not supplied.
    Missing {
        /// The name of the missing field.
        field: &'static str,
    },
    /// A person's name is malformed.
    InvalidName(String),
    /// An email address is malformed.
    InvalidEmail(String),
    /// A national ID does not have the shape of 8 digits and a letter.
    InvalidDni(String),
    /// A national ID has the right shape but the wrong check letter.
    WrongDniLetter {
        /// The rejected ID.
        dni: String,
        /// The letter the checksum requires.
        expected: char,
    },
    /// A session date is today or earlier.
    PastDate {
        /// The rejected date.
        fecha: Date,
    },
    /// A session start time lies outside class hours.
    InvalidStartTime(Time),
    /// A session end time lies outside class hours.
    InvalidEndTime(Time),
    /// A session start time is not strictly before its end time.
    StartNotBeforeEnd {
        /// The session start.
        start: Time,
        /// The session end.
        end: Time,
    },
    /// A session slot duration is zero.
    InvalidDuration(u32),
    /// A session span is not a whole number of slots.
    DurationNotDivisor {
        /// The session span in minutes.
        span: i64,
        /// The slot duration in minutes.
        duration: u32,
    },
    /// An appointment time lies outside its session window.
    AppointmentOutsideSession {
        /// The rejected appointment time.
        hora: Time,
        /// The session start.
        start: Time,
        /// The session end.
        end: Time,
    },
    /// An appointment time does not start a slot.
    AppointmentOffSlot {
        /// The rejected appointment time.
        hora: Time,
        /// The slot duration in minutes.
        duration: u32,
    },
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a time of day from a string.
    TimeParseError {
        /// The invalid time string.
        time_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl DomainError {
    /// Returns whether this is an absence failure rather than a rule violation.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "Missing required value: {field}"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidDni(msg) => write!(f, "Invalid national ID: {msg}"),
            Self::WrongDniLetter { dni, expected } => {
                write!(
                    f,
                    "National ID '{dni}' has the wrong check letter, expected '{expected}'"
                )
            }
            Self::PastDate { fecha } => {
                write!(
                    f,
                    "Sessions must be scheduled for future dates, got {}",
                    format_fecha(*fecha)
                )
            }
            Self::InvalidStartTime(start) => {
                write!(
                    f,
                    "Session start time {} is outside class hours [16:00, 22:15)",
                    format_hora(*start)
                )
            }
            Self::InvalidEndTime(end) => {
                write!(
                    f,
                    "Session end time {} is outside class hours (16:00, 22:15]",
                    format_hora(*end)
                )
            }
            Self::StartNotBeforeEnd { start, end } => {
                write!(
                    f,
                    "Session start time {} must be before end time {}",
                    format_hora(*start),
                    format_hora(*end)
                )
            }
            Self::InvalidDuration(duration) => {
                write!(
                    f,
                    "Invalid slot duration: {duration}. Must be greater than 0"
                )
            }
            Self::DurationNotDivisor { span, duration } => {
                write!(
                    f,
                    "Slot duration of {duration} minutes does not divide the session span of {span} minutes"
                )
            }
            Self::AppointmentOutsideSession { hora, start, end } => {
                write!(
                    f,
                    "Appointment time {} must be between session start {} and end {}",
                    format_hora(*hora),
                    format_hora(*start),
                    format_hora(*end)
                )
            }
            Self::AppointmentOffSlot { hora, duration } => {
                write!(
                    f,
                    "Appointment time {} does not start a {duration}-minute slot",
                    format_hora(*hora)
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::TimeParseError { time_string, error } => {
                write!(f, "Failed to parse time '{time_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
