// src/period.rs
//! Rating periods and the trailing lookback window.
//!
//! FIDE publishes one list per calendar month, so a period is a `(year, month)`
//! pair. Pages spell them several ways (`2026-Oct`, `Oct 2026`, `2026-10-01`);
//! [`Period::parse`] accepts all of them and [`Display`](fmt::Display) always
//! writes `YYYY-MM`.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// One calendar month. Field order makes the derived `Ord` chronological.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(d: NaiveDate) -> Self {
        Self { year: d.year(), month: d.month() }
    }

    fn index(self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    fn from_index(i: i64) -> Self {
        Self { year: i.div_euclid(12) as i32, month: i.rem_euclid(12) as u32 + 1 }
    }

    pub fn minus_months(self, n: u32) -> Self {
        Self::from_index(self.index() - n as i64)
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Lenient parse of the spellings found on FIDE pages.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some((a, b)) = s.split_once(char::is_whitespace) {
            // "Oct 2026"
            return Self::new(b.trim().parse().ok()?, month_from_name(a)?);
        }
        let mut parts = s.split('-');
        let year: i32 = parts.next()?.trim().parse().ok()?;
        let m = parts.next()?.trim();
        let month = match m.parse::<u32>() {
            Ok(n) => n,
            Err(_) => month_from_name(m)?,
        };
        // A trailing day ("2026-10-01") is ignored, anything beyond that is not a period.
        if let Some(day) = parts.next() {
            day.trim().parse::<u32>().ok()?;
        }
        if parts.next().is_some() {
            return None;
        }
        Self::new(year, month)
    }
}

fn month_from_name(s: &str) -> Option<u32> {
    let lc = s.trim().to_ascii_lowercase();
    if lc.len() < 3 {
        return None;
    }
    MONTHS.iter().position(|m| lc.starts_with(m)).map(|i| i as u32 + 1)
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("not a rating period: {s:?}"))
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Trailing lookback window anchored at the current month.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub start: Period,
    pub end: Period,
}

impl Window {
    /// `start = month(today) - months`, `end = month(today)`.
    pub fn trailing(today: NaiveDate, months: u32) -> Self {
        let end = Period::from_date(today);
        Self { start: end.minus_months(months), end }
    }

    /// Membership is inclusive at the cutoff.
    pub fn contains(&self, p: Period) -> bool {
        p >= self.start
    }

    /// Every period from `start` to `end`, oldest first.
    pub fn periods(&self) -> impl Iterator<Item = Period> {
        let end = self.end;
        std::iter::successors(Some(self.start), move |p| Some(p.next())).take_while(move |p| *p <= end)
    }
}
