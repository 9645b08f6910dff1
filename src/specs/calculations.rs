// src/specs/calculations.rs
//! Spec for the individual calculations page of one rating period.
//!
//! Layout: the first `table.contentpaneopen` is the page title, the second
//! holds the tournaments. Each tournament is a pair of rows told apart only
//! by background colour:
//!
//! - `bgcolor="#CC9966"`: name, city, country, date
//! - `bgcolor="#e6e6e6"`: opponents avg, own rating, points, rounds,
//!   change, K, rating change, ...
//!
//! A period without rated games says so in plain text instead.

use scraper::{ElementRef, Html};

use super::ParseError;
use crate::config::options::RatingKind;
use crate::core::html::{attr_is, cell_texts, sel, text_of};
use crate::core::sanitize::{parse_decimal, parse_int};
use crate::period::Period;

const TRN_NAME_COLOR: &str = "#CC9966";
const TRN_SCORE_COLOR: &str = "#e6e6e6";
const NO_RECORDS: &str = "No records found";

#[derive(Clone, Debug, PartialEq)]
pub struct TournamentRecord {
    pub name: String,
    pub city: String,
    pub country: String,
    pub points: f64,
    pub rounds: u32,
    pub opponents_avg: u32,
    pub rating_change: f64,
}

pub fn url(base: &str, player_id: &str, period: Period, kind: RatingKind) -> String {
    format!(
        "{base}/individual_calculations.phtml?idnumber={player_id}&rating_period={period}-01&t={}",
        kind.calc_code()
    )
}

fn rows_with_color<'a>(table: ElementRef<'a>, color: &str) -> Vec<ElementRef<'a>> {
    table
        .select(&sel("tr"))
        .filter(|tr| attr_is(*tr, "bgcolor", color))
        .collect()
}

fn number<T>(value: Option<&String>, field: &str, name: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T, ParseError> {
    let raw = value.map(String::as_str).unwrap_or("");
    parse(raw).ok_or_else(|| ParseError(format!("tournament {name:?}: bad {field} {raw:?}")))
}

/// Tournaments of one period, in page order. Empty when the page reports no
/// records.
pub fn parse(doc: &str) -> Result<Vec<TournamentRecord>, ParseError> {
    let html = Html::parse_document(doc);
    let tables: Vec<ElementRef<'_>> = html.select(&sel("table.contentpaneopen")).collect();

    let Some(body) = tables.get(1).copied() else {
        if html.root_element().text().any(|t| t.contains(NO_RECORDS)) {
            return Ok(Vec::new());
        }
        return Err(ParseError::new("calculations tables missing"));
    };
    if text_of(body).contains(NO_RECORDS) {
        return Ok(Vec::new());
    }

    let headers = rows_with_color(body, TRN_NAME_COLOR);
    let scores = rows_with_color(body, TRN_SCORE_COLOR);
    if headers.len() != scores.len() {
        return Err(ParseError(format!(
            "{} tournament headers but {} score rows",
            headers.len(),
            scores.len()
        )));
    }

    let mut out = Vec::with_capacity(headers.len());
    for (h, s) in headers.into_iter().zip(scores) {
        let head = cell_texts(h);
        let score = cell_texts(s);
        if head.len() < 3 {
            return Err(ParseError(format!("tournament header has {} cells", head.len())));
        }
        let name = head[0].clone();

        let opponents_avg = number(score.get(0), "opponents average", &name, parse_int::<u32>)?;
        let points = number(score.get(2), "points", &name, parse_decimal)?;
        let rounds = number(score.get(3), "rounds", &name, parse_int::<u32>)?;
        let rating_change = number(score.get(6), "rating change", &name, parse_decimal)?;

        out.push(TournamentRecord {
            city: head[1].clone(),
            country: head[2].clone(),
            name,
            points,
            rounds,
            opponents_avg,
            rating_change,
        });
    }
    Ok(out)
}
