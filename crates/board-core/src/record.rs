// File: crates/board-core/src/record.rs
// Summary: Flat stock record (one row of the input table) and field accessors.

use chrono::{Datelike, NaiveDate};

/// One raw input row. Numeric fields hold `NaN` when the source text was not a number.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub date: Option<NaiveDate>,
    pub brand_name: String,
    pub industry_tag: String,
    pub country: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Numeric field selector used by reducers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Open,
    High,
    Low,
    Close,
    Volume,
}

impl Field {
    #[inline]
    pub fn of(self, r: &Record) -> f64 {
        match self {
            Field::Open => r.open,
            Field::High => r.high,
            Field::Low => r.low,
            Field::Close => r.close,
            Field::Volume => r.volume,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Open => "open",
            Field::High => "high",
            Field::Low => "low",
            Field::Close => "close",
            Field::Volume => "volume",
        }
    }
}

impl Record {
    /// Build a record from text cells the way the loader does: bad numbers become `NaN`,
    /// a bad date becomes `None`.
    #[allow(clippy::too_many_arguments)]
    pub fn from_text(
        date: &str,
        brand_name: &str,
        industry_tag: &str,
        country: &str,
        open: &str,
        high: &str,
        low: &str,
        close: &str,
        volume: &str,
    ) -> Self {
        Self {
            date: parse_date(date),
            brand_name: brand_name.trim().to_string(),
            industry_tag: industry_tag.trim().to_string(),
            country: country.trim().to_string(),
            open: parse_number(open),
            high: parse_number(high),
            low: parse_number(low),
            close: parse_number(close),
            volume: parse_number(volume),
        }
    }

    pub fn year(&self) -> Option<i32> { self.date.map(|d| d.year()) }

    /// Month number, 1..=12.
    pub fn month(&self) -> Option<u32> { self.date.map(|d| d.month()) }

    /// True when open/high/low/close are all finite.
    pub fn has_ohlc(&self) -> bool {
        self.open.is_finite() && self.high.is_finite() && self.low.is_finite() && self.close.is_finite()
    }
}

/// Parse a numeric cell. Empty or malformed text yields `NaN`.
pub fn parse_number(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse the leading `YYYY-MM-DD` part of a date or timestamp cell
/// (`2024-03-01 00:00:00-05:00` -> 2024-03-01).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let head = s.trim().split(|c: char| c == ' ' || c == 'T').next()?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
