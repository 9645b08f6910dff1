// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use super::consts::*;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Which published rating list to read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum RatingKind {
    #[default]
    Standard,
    Rapid,
    Blitz,
}

impl RatingKind {
    pub const ALL: [RatingKind; 3] = [RatingKind::Standard, RatingKind::Rapid, RatingKind::Blitz];

    /// `t=` parameter of the individual calculations page.
    pub fn calc_code(self) -> u8 {
        match self {
            RatingKind::Standard => 0,
            RatingKind::Rapid => 1,
            RatingKind::Blitz => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// One row per rating period
    #[default]
    History,
    /// One row per rated tournament; requests every month from the cutoff
    /// through the current one (months + 1 pages)
    Calculations,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub player_id: String,
    pub months: u32,
    pub kind: RatingKind,
    pub report: ReportKind,
    pub base_url: String,
    pub timeout: Duration,
    /// Pause between successive period requests.
    pub pause: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            player_id: String::new(),
            months: DEFAULT_MONTHS as u32,
            kind: RatingKind::Standard,
            report: ReportKind::History,
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

impl ScrapeOptions {
    /// Validated constructor: the id must be non-blank, usable as a file
    /// name, and `months > 0`.
    pub fn new(player_id: &str, months: i64) -> Result<Self> {
        let player_id = player_id.trim();
        if player_id.is_empty() {
            return Err(ScrapeError::invalid("player id must not be empty"));
        }
        // the id names the output file, so it must stay a single path component
        if player_id.contains(['/', '\\']) || matches!(player_id, "." | "..") {
            return Err(ScrapeError::invalid(format!(
                "player id must not contain path components (got {player_id:?})"
            )));
        }
        if months <= 0 {
            return Err(ScrapeError::invalid(format!(
                "months must be a positive integer (got {months})"
            )));
        }
        let months = u32::try_from(months)
            .map_err(|_| ScrapeError::invalid(format!("months out of range: {months}")))?;

        Ok(Self {
            player_id: player_id.to_string(),
            months,
            ..Self::default()
        })
    }

    /// Base URL without a trailing slash.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub dir: PathBuf,
    pub format: ExportFormat,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            format: ExportFormat::Csv,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<player_id>.<ext>`
    pub fn out_path(&self, player_id: &str) -> PathBuf {
        self.dir.join(format!("{player_id}.{}", self.format.ext()))
    }
}
