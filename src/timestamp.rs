//! Wall-clock timestamps for the "Processed on" footer
//!
//! The clock is passed in explicitly so sessions can be driven with a fixed
//! time in tests.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Template used when none is configured
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current local time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn from_datetime<Tz: TimeZone>(dt: DateTime<Tz>) -> Self {
        Self(dt.naive_local())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Render the clock's current time with a strftime-style template.
///
/// Templates chrono cannot parse, or cannot render for a local time without
/// an offset (`%z`, `%Z`), fall back to [`DEFAULT_TIMESTAMP_FORMAT`].
pub fn make_timestamp(clock: &dyn Clock, format_spec: &str) -> String {
    let now = clock.now();
    render(&now, format_spec).unwrap_or_else(|| {
        tracing::warn!(
            "Invalid timestamp format {:?}, using {:?}",
            format_spec,
            DEFAULT_TIMESTAMP_FORMAT
        );
        now.format(DEFAULT_TIMESTAMP_FORMAT).to_string()
    })
}

/// True if the template renders for a local time without an offset
pub fn is_valid_format(format_spec: &str) -> bool {
    render(&NaiveDateTime::default(), format_spec).is_some()
}

fn render(now: &NaiveDateTime, format_spec: &str) -> Option<String> {
    let items = parse_format(format_spec)?;
    let mut out = String::new();
    write!(out, "{}", now.format_with_items(items.iter())).ok()?;
    Some(out)
}

fn parse_format(format_spec: &str) -> Option<Vec<Item<'_>>> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format_spec).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        None
    } else {
        Some(items)
    }
}
