//! Error types for calendar computations.

/// Broad classification of an [`Error`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// The caller passed a value outside the domain of the operation. Raised
    /// before any computation starts.
    InvalidInput,
    /// The algorithm could not produce a result for valid input. This points
    /// at a defect in the calendar rules, not at the caller.
    ComputationFailure,
}

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A Buddhist-Era or Jolak-Sakaraj year below zero.
    #[error("year must not be negative, got {year}")]
    NegativeYear {
        /// The rejected year.
        year: i64,
    },

    /// A year beyond what the arithmetic is defined for.
    #[error("year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange {
        /// The rejected year.
        year: i64,
        /// Smallest accepted year.
        min: i64,
        /// Largest accepted year.
        max: i64,
    },

    /// A lunar month index outside `0..=13`.
    #[error("lunar month index must be in 0..=13, got {index}")]
    InvalidMonthIndex {
        /// The rejected index.
        index: i64,
    },

    /// A lunar day outside `0..=29`.
    #[error("lunar day must be in 0..=29, got {day}")]
    InvalidLunarDay {
        /// The rejected day.
        day: i64,
    },

    /// Calendar fields that do not name a real civil instant.
    #[error("invalid date-time {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")]
    InvalidDateTime {
        year: i32,
        month: i32,
        day: i32,
        hour: u32,
        minute: u32,
        second: u32,
    },

    /// A text form that could not be parsed into a date-time.
    #[error("cannot parse date-time {input:?}")]
    UnparsableDateTime {
        /// The rejected text.
        input: String,
    },

    /// A Khmer month name not present in the month table.
    #[error("unknown Khmer month name {name:?}")]
    UnknownMonthName {
        /// The rejected name.
        name: String,
    },

    /// Visakha Bochea was not met while scanning the whole year.
    #[error("cannot find Visakha Bochea in {year}")]
    VisakhaBocheaNotFound {
        /// The Gregorian year that was scanned.
        year: i32,
    },
}

impl Error {
    /// Returns the broad classification of the error.
    ///
    /// ```
    /// use chhankitek::{Error, ErrorKind};
    ///
    /// assert_eq!(ErrorKind::InvalidInput, Error::NegativeYear { year: -1 }.kind());
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::VisakhaBocheaNotFound { .. } => ErrorKind::ComputationFailure,
            _ => ErrorKind::InvalidInput,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
