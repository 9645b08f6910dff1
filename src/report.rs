// src/report.rs
//! Report rows: what ends up in the exported file, one struct per report kind.

use serde::Serialize;

use crate::performance::performance;
use crate::period::{Period, Window};
use crate::specs::calculations::TournamentRecord;
use crate::specs::history::RatingEntry;

/// A serializable row with a fixed header.
pub trait ReportRow: Serialize {
    const HEADERS: &'static [&'static str];
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    pub period: Period,
    pub rating: u32,
    /// Change from the previous row; `None` on the first row.
    pub delta: Option<i64>,
    pub games: Option<u32>,
}

impl ReportRow for HistoryRow {
    const HEADERS: &'static [&'static str] = &["Period", "Rating", "Delta", "Games"];
}

/// Rated periods inside `window`, oldest first, with deltas between
/// consecutive retained rows. Unrated periods are dropped.
pub fn history_rows(entries: &[RatingEntry], window: &Window) -> Vec<HistoryRow> {
    let mut kept: Vec<(Period, u32, Option<u32>)> = entries
        .iter()
        .filter(|e| window.contains(e.period))
        .filter_map(|e| e.rating.map(|r| (e.period, r, e.games)))
        .collect();
    kept.sort_by_key(|(p, _, _)| *p);

    let mut prev: Option<u32> = None;
    kept.into_iter()
        .map(|(period, rating, games)| {
            let delta = prev.map(|p| rating as i64 - p as i64);
            prev = Some(rating);
            HistoryRow { period, rating, delta, games }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TournamentRow {
    pub period: Period,
    pub name: String,
    pub city: String,
    pub country: String,
    pub points: f64,
    pub rounds: u32,
    pub opponents_avg: u32,
    pub rating_change: f64,
    pub performance: Option<i32>,
}

impl ReportRow for TournamentRow {
    const HEADERS: &'static [&'static str] = &[
        "Rating Period",
        "Tournament Name",
        "City",
        "Country",
        "Pts.",
        "Rds.",
        "Avg. Opponents",
        "Rtg. Change",
        "Performance",
    ];
}

impl TournamentRow {
    pub fn new(period: Period, t: TournamentRecord) -> Self {
        let performance = performance(t.opponents_avg, t.points, t.rounds);
        Self {
            period,
            name: t.name,
            city: t.city,
            country: t.country,
            points: t.points,
            rounds: t.rounds,
            opponents_avg: t.opponents_avg,
            rating_change: t.rating_change,
            performance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn e(p: &str, rating: Option<u32>) -> RatingEntry {
        RatingEntry { period: p.parse().unwrap(), rating, games: Some(1) }
    }

    fn window(months: u32) -> Window {
        Window::trailing(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(), months)
    }

    #[test]
    fn keeps_cutoff_and_drops_older() {
        let entries = [e("2025-09", Some(2000)), e("2025-10", Some(2010)), e("2026-10", Some(2030))];
        let rows = history_rows(&entries, &window(12));
        let periods: Vec<String> = rows.iter().map(|r| r.period.to_string()).collect();
        assert_eq!(periods, ["2025-10", "2026-10"]);
    }

    #[test]
    fn deltas_follow_retained_rows() {
        let entries = [
            e("2026-06", Some(2000)),
            e("2026-07", None),
            e("2026-08", Some(2015)),
            e("2026-09", Some(2007)),
        ];
        let rows = history_rows(&entries, &window(12));
        let deltas: Vec<Option<i64>> = rows.iter().map(|r| r.delta).collect();
        assert_eq!(deltas, [None, Some(15), Some(-8)]);
    }

    #[test]
    fn first_delta_ignores_rows_outside_window() {
        let entries = [e("2026-01", Some(1900)), e("2026-10", Some(1950))];
        let rows = history_rows(&entries, &window(1));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].delta, None);
    }

    #[test]
    fn empty_window_is_empty_report() {
        let entries = [e("2024-01", Some(1900))];
        assert!(history_rows(&entries, &window(1)).is_empty());
    }

    #[test]
    fn unsorted_input_comes_out_ascending() {
        let entries = [e("2026-09", Some(2)), e("2026-08", Some(1))];
        let rows = history_rows(&entries, &window(3));
        assert!(rows.windows(2).all(|w| w[0].period <= w[1].period));
    }

    #[test]
    fn tournament_row_computes_performance() {
        let t = TournamentRecord {
            name: "Open".into(),
            city: "Oslo".into(),
            country: "NOR".into(),
            points: 6.5,
            rounds: 9,
            opponents_avg: 2400,
            rating_change: 20.4,
        };
        let row = TournamentRow::new("2026-09".parse().unwrap(), t);
        assert_eq!(row.performance, Some(2566));
    }
}
