//! Date overlay text.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Server-local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Builds the date overlay: a supplied value is passed through verbatim,
/// otherwise today's date as `DD.MM.YYYY (Weekday)`.
pub fn date_line(supplied: Option<&str>, clock: &dyn Clock) -> String {
    match supplied.filter(|s| !s.is_empty()) {
        Some(date) => format!("Date: {date}"),
        None => format!("Date: {}", clock.today().format("%d.%m.%Y (%A)")),
    }
}
