//! Calendar-month spans that key expense partitions.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::errors::{FinanceError, Result};

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// A (year, month) pair, canonically rendered as `YYYY_MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    year: i32,
    month: u32,
}

impl Span {
    /// Width in bytes of the canonical `YYYY_MM` form.
    pub const ENCODED_LEN: usize = 7;

    /// Validates that `(year, month)` names a real calendar month.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) || !(1..=12).contains(&month) {
            return Err(FinanceError::InvalidSpan { year, month });
        }
        Ok(Self { year, month })
    }

    /// The span that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Composes a calendar date for `day` within this month.
    pub fn date(&self, day: u32) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day).ok_or_else(|| {
            FinanceError::InvalidDate {
                span: self.to_string(),
                day,
            }
        })
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}_{:02}", self.year, self.month)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{0}` is not a YYYY_MM span")]
pub struct ParseSpanError(String);

impl FromStr for Span {
    type Err = ParseSpanError;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || ParseSpanError(raw.to_string());
        let (year, month) = raw.split_once('_').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        if !year.chars().chain(month.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        Span::new(year, month).map_err(|_| invalid())
    }
}
