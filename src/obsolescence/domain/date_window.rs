use crate::shared::error::ReportError;
use chrono::{Datelike, Local, Months, NaiveDate};
use std::fmt;

/// Calendar date format used for every date the report reads or writes
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` calendar date.
///
/// `context` names where the value came from and ends up in the error.
pub fn parse_date(value: &str, context: &str) -> Result<NaiveDate, ReportError> {
    let malformed = || ReportError::MalformedDate {
        value: value.to_string(),
        context: context.to_string(),
    };

    // chrono tolerates signs, spaces and unpadded fields; only YYYY-MM-DD passes here
    let well_formed = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(malformed());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| malformed())
}

/// Reporting window. Both bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Creates a window, rejecting a start date after the end date
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ReportError> {
        if start > end {
            return Err(ReportError::InvalidDateWindow {
                start: start.format(DATE_FORMAT).to_string(),
                end: end.format(DATE_FORMAT).to_string(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, ReportError> {
        let start = parse_date(start, "window start date")?;
        let end = parse_date(end, "window end date")?;
        Self::new(start, end)
    }

    /// Default window: from `today` to the last day of next month
    pub fn default_from(today: NaiveDate) -> Self {
        Self {
            start: today,
            end: last_day_of_next_month(today),
        }
    }

    /// Default window anchored on the local calendar date
    pub fn starting_today() -> Self {
        Self::default_from(Local::now().date_naive())
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// True when `start < date < end`
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start < date && date < self.end
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

fn last_day_of_next_month(today: NaiveDate) -> NaiveDate {
    today
        .with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(2)))
        .and_then(|first_after_next| first_after_next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}
