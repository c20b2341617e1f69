//! Date windows and month buckets.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::survey::SurveyResponse;

/// Month bucket key of an instant, `YYYY-MM` in UTC.
#[must_use]
pub fn month_key(at: DateTime<Utc>) -> String {
    format!("{:04}-{:02}", at.year(), at.month())
}

/// Parse a `YYYY-MM` month into year and month.
///
/// # Errors
///
/// Returns [`InputError::InvalidMonth`] for anything else.
pub fn parse_month(value: &str) -> Result<(i32, u32), InputError> {
    let invalid = || InputError::InvalidMonth {
        value: value.to_string(),
    };
    let trimmed = value.trim();
    let (year, month) = trimmed.split_once('-').ok_or_else(invalid)?;
    let digits = year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit());
    if year.len() != 4 || month.len() != 2 || !digits {
        return Err(invalid());
    }
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

fn month_start(year: i32, month: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn next_month_start(year: i32, month: u32) -> Option<DateTime<Utc>> {
    if month == 12 {
        month_start(year + 1, 1)
    } else {
        month_start(year, month + 1)
    }
}

/// An inclusive time range; an open bound admits everything on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateWindow {
    /// First admitted instant.
    pub start: Option<DateTime<Utc>>,
    /// Last admitted instant.
    pub end: Option<DateTime<Utc>>,
}

impl DateWindow {
    /// The unbounded window.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// A window between two optional instants.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidWindow`] if `start` is after `end`.
    pub fn new(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, InputError> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(InputError::InvalidWindow {
                    start: s.to_rfc3339(),
                    end: e.to_rfc3339(),
                });
            }
        }
        Ok(Self { start, end })
    }

    /// A window from the first instant of `from` to the last millisecond of `to`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidMonth`] for a malformed month, or
    /// [`InputError::InvalidWindow`] if `from` is after `to`.
    pub fn from_months(from: Option<&str>, to: Option<&str>) -> Result<Self, InputError> {
        let start = from
            .map(|value| {
                let (y, m) = parse_month(value)?;
                month_start(y, m).ok_or_else(|| InputError::InvalidMonth {
                    value: value.to_string(),
                })
            })
            .transpose()?;
        let end = to
            .map(|value| {
                let (y, m) = parse_month(value)?;
                next_month_start(y, m)
                    .map(|next| next - Duration::milliseconds(1))
                    .ok_or_else(|| InputError::InvalidMonth {
                        value: value.to_string(),
                    })
            })
            .transpose()?;
        Self::new(start, end)
    }

    /// Whether an instant falls within the window.
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start.is_none_or(|s| at >= s) && self.end.is_none_or(|e| at <= e)
    }

    /// Responses submitted within the window, in input order.
    #[must_use]
    pub fn filter<'a>(&self, responses: &'a [SurveyResponse]) -> Vec<&'a SurveyResponse> {
        responses
            .iter()
            .filter(|r| self.contains(r.submitted_at))
            .collect()
    }
}
