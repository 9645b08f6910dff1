// src/specs/history.rs
//! Spec for the profile chart page (`/profile/{id}/chart`).
//!
//! The page carries the player name in `.profile-top-title` and the whole
//! published history in `table.profile-table_chart-table`:
//!
//! ```text
//! Period | RTNG | GMS | RPD | GMS | BLZ | GMS
//! 2026-Oct | 2837 | 0 | 2823 | 9 | 2886 | 18
//! ```
//!
//! Rows come newest first; the parsed series are ascending. Column positions
//! are read from the header so reordered or missing kinds still parse.
//! A page without a profile title is an unknown id (`Ok(None)`).

use scraper::{ElementRef, Html};
use tracing::debug;

use super::ParseError;
use crate::config::options::RatingKind;
use crate::core::html::{cell_texts, sel, text_of};
use crate::core::sanitize::parse_int;
use crate::period::Period;

/// One published rating period for one rating kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatingEntry {
    pub period: Period,
    /// `None` when the player was unrated that period.
    pub rating: Option<u32>,
    pub games: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerHistory {
    pub name: String,
    pub standard: Vec<RatingEntry>,
    pub rapid: Vec<RatingEntry>,
    pub blitz: Vec<RatingEntry>,
}

impl PlayerHistory {
    /// Ascending, one entry per period.
    pub fn series(&self, kind: RatingKind) -> &[RatingEntry] {
        match kind {
            RatingKind::Standard => &self.standard,
            RatingKind::Rapid => &self.rapid,
            RatingKind::Blitz => &self.blitz,
        }
    }

    fn series_mut(&mut self, kind: RatingKind) -> &mut Vec<RatingEntry> {
        match kind {
            RatingKind::Standard => &mut self.standard,
            RatingKind::Rapid => &mut self.rapid,
            RatingKind::Blitz => &mut self.blitz,
        }
    }
}

pub fn url(base: &str, player_id: &str) -> String {
    format!("{base}/profile/{player_id}/chart")
}

/// Column positions inside a chart row.
#[derive(Debug, PartialEq, Eq)]
struct Layout {
    period: usize,
    /// (kind, rating column, games column)
    ratings: Vec<(RatingKind, usize, Option<usize>)>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            period: 0,
            ratings: vec![
                (RatingKind::Standard, 1, Some(2)),
                (RatingKind::Rapid, 3, Some(4)),
                (RatingKind::Blitz, 5, Some(6)),
            ],
        }
    }
}

fn kind_for_label(label: &str) -> Option<RatingKind> {
    match label {
        "RTNG" | "STD" | "STANDARD" => Some(RatingKind::Standard),
        "RPD" | "RAPID" => Some(RatingKind::Rapid),
        "BLZ" | "BLITZ" => Some(RatingKind::Blitz),
        _ => None,
    }
}

fn layout_from_headers(headers: &[String]) -> Result<Layout, ParseError> {
    let mut period = None;
    let mut ratings: Vec<(RatingKind, usize, Option<usize>)> = Vec::new();

    for (i, h) in headers.iter().enumerate() {
        let label = h.trim_end_matches('.').to_ascii_uppercase();
        if label == "PERIOD" {
            period = Some(i);
        } else if let Some(kind) = kind_for_label(&label) {
            ratings.push((kind, i, None));
        } else if matches!(label.as_str(), "GMS" | "GAMES") {
            // games belong to the rating column right before them
            if let Some(last) = ratings.last_mut() {
                if last.1 + 1 == i {
                    last.2 = Some(i);
                }
            }
        }
    }

    let period = period.ok_or_else(|| ParseError::new("chart table has no Period column"))?;
    if ratings.is_empty() {
        return Err(ParseError::new("chart table has no rating columns"));
    }
    Ok(Layout { period, ratings })
}

fn is_header_row(row: ElementRef<'_>) -> bool {
    let mut has_th = false;
    for c in row.children().filter_map(ElementRef::wrap) {
        match c.value().name() {
            "td" => return false,
            "th" => has_th = true,
            _ => {}
        }
    }
    has_th
}

fn find_chart_table(doc: &Html) -> Option<ElementRef<'_>> {
    if let Some(t) = doc.select(&sel("table.profile-table_chart-table")).next() {
        return Some(t);
    }
    // Fallback: any table whose first header cell reads "Period".
    doc.select(&sel("table")).find(|t| {
        t.select(&sel("th"))
            .next()
            .is_some_and(|th| text_of(th).eq_ignore_ascii_case("period"))
    })
}

/// Parse a profile chart document.
///
/// `Ok(None)`: no profile on the page. `Ok(Some)` with empty series: profile
/// without published ratings.
pub fn parse(doc: &str) -> Result<Option<PlayerHistory>, ParseError> {
    let html = Html::parse_document(doc);

    let name = match html.select(&sel(".profile-top-title")).next().map(text_of) {
        Some(n) if !n.is_empty() => n,
        _ => return Ok(None),
    };
    let mut history = PlayerHistory { name, ..PlayerHistory::default() };

    let Some(table) = find_chart_table(&html) else {
        debug!(player = %history.name, "no chart table, empty history");
        return Ok(Some(history));
    };

    let rows: Vec<ElementRef<'_>> = table.select(&sel("tr")).collect();
    let layout = match rows.iter().find(|r| is_header_row(**r)) {
        Some(h) => layout_from_headers(&cell_texts(*h))?,
        None => Layout::default(),
    };

    for row in rows.into_iter().filter(|r| !is_header_row(*r)) {
        let cells = cell_texts(row);
        if cells.is_empty() {
            continue;
        }
        let Some(period) = cells.get(layout.period).and_then(|c| Period::parse(c)) else {
            debug!(?cells, "skipping chart row without a valid period");
            continue;
        };
        for &(kind, r_col, g_col) in &layout.ratings {
            let rating = cells
                .get(r_col)
                .and_then(|c| parse_int::<u32>(c))
                .filter(|r| *r > 0);
            let games = g_col.and_then(|g| cells.get(g)).and_then(|c| parse_int::<u32>(c));
            history.series_mut(kind).push(RatingEntry { period, rating, games });
        }
    }

    for kind in RatingKind::ALL {
        let series = history.series_mut(kind);
        series.sort_by_key(|e| e.period);
        series.dedup_by_key(|e| e.period);
    }

    Ok(Some(history))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> String {
        format!(
            r#"<html><body>
              <div class="profile-top-title">Doe, Jane</div>
              {body}
            </body></html>"#
        )
    }

    const CHART: &str = r#"
      <table class="profile-table profile-table_chart-table">
        <thead><tr><th>Period</th><th>RTNG</th><th>GMS</th><th>RPD</th><th>GMS</th><th>BLZ</th><th>GMS</th></tr></thead>
        <tbody>
          <tr><td>2026-Oct</td><td>2105</td><td>4</td><td>2050</td><td>0</td><td></td><td></td></tr>
          <tr><td>2026-Sep</td><td>2098</td><td>9</td><td>2050</td><td>7</td><td>1990</td><td>11</td></tr>
          <tr><td>2026-Aug</td><td>&nbsp;</td><td>&nbsp;</td><td>2031</td><td>0</td><td>1990</td><td>0</td></tr>
        </tbody>
      </table>"#;

    fn p(s: &str) -> Period { Period::parse(s).unwrap() }

    #[test]
    fn parses_all_kinds_ascending() {
        let h = parse(&page(CHART)).unwrap().unwrap();
        assert_eq!(h.name, "Doe, Jane");

        let standard: Vec<_> = h.standard.iter().map(|e| (e.period, e.rating, e.games)).collect();
        assert_eq!(standard, [
            (p("2026-08"), None, None),
            (p("2026-09"), Some(2098), Some(9)),
            (p("2026-10"), Some(2105), Some(4)),
        ]);
        assert_eq!(h.series(RatingKind::Blitz)[0].rating, Some(1990));
        assert_eq!(h.series(RatingKind::Blitz)[2].rating, None);
        assert_eq!(h.series(RatingKind::Rapid).len(), 3);
    }

    #[test]
    fn missing_profile_is_none() {
        let doc = "<html><body><div class=\"profile-top-title\"> </div></body></html>";
        assert_eq!(parse(doc).unwrap(), None);
        assert_eq!(parse("<html><body><p>No record found</p></body></html>").unwrap(), None);
    }

    #[test]
    fn profile_without_table_is_empty() {
        let h = parse(&page("<p>No rating history</p>")).unwrap().unwrap();
        assert!(h.standard.is_empty() && h.rapid.is_empty() && h.blitz.is_empty());
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let body = r#"
          <table class="profile-table_chart-table">
            <tr><th>Period</th><th>RTNG</th><th>GMS</th></tr>
            <tr><td>soon</td><td>2100</td><td>1</td></tr>
            <tr><td>2026-Jan</td><td>2100</td><td>x</td></tr>
            <tr></tr>
          </table>"#;
        let h = parse(&page(body)).unwrap().unwrap();
        assert_eq!(h.standard.len(), 1);
        assert_eq!(h.standard[0].rating, Some(2100));
        assert_eq!(h.standard[0].games, None);
        assert!(h.rapid.is_empty());
    }

    #[test]
    fn header_order_is_respected() {
        let body = r#"
          <table class="profile-table_chart-table">
            <tr><th>BLZ</th><th>GMS</th><th>Period</th></tr>
            <tr><td>1800</td><td>12</td><td>2025-Dec</td></tr>
          </table>"#;
        let h = parse(&page(body)).unwrap().unwrap();
        assert!(h.standard.is_empty());
        assert_eq!(h.blitz, [RatingEntry { period: p("2025-12"), rating: Some(1800), games: Some(12) }]);
    }

    #[test]
    fn duplicate_periods_collapse() {
        let body = r#"
          <table class="profile-table_chart-table">
            <tr><th>Period</th><th>RTNG</th></tr>
            <tr><td>2026-Feb</td><td>2000</td></tr>
            <tr><td>2026-Feb</td><td>2000</td></tr>
          </table>"#;
        let h = parse(&page(body)).unwrap().unwrap();
        assert_eq!(h.standard.len(), 1);
    }

    #[test]
    fn header_without_period_is_an_error() {
        let body = r#"
          <table class="profile-table_chart-table">
            <tr><th>When</th><th>RTNG</th></tr>
            <tr><td>2026-Feb</td><td>2000</td></tr>
          </table>"#;
        assert!(parse(&page(body)).is_err());
    }

    #[test]
    fn url_shape() {
        assert_eq!(url("https://ratings.fide.com", "1503014"), "https://ratings.fide.com/profile/1503014/chart");
    }
}
