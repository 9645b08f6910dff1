// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use clap::{ArgAction, Parser};

use crate::config::consts::{BASE_URL, DEFAULT_MONTHS, DEFAULT_OUT_DIR, TIMEOUT_SECS};
use crate::config::options::{
    AppOptions, ExportFormat, ExportOptions, RatingKind, ReportKind, ScrapeOptions,
};
use crate::core::HttpFetcher;
use crate::error::Result;
use crate::progress::LogProgress;
use crate::runner::{self, RunSummary};

/// Export a FIDE player's rating history over the last N months to CSV.
#[derive(Parser, Debug)]
#[command(name = "fide_scrape", version, about)]
pub struct Args {
    /// FIDE player ID
    #[arg(short = 'i', long = "id", value_name = "PLAYER_ID")]
    pub id: String,

    /// How many months to report for
    ///
    /// The cutoff month (today minus N months) is included, so the window
    /// spans N + 1 calendar months up to the current one.
    #[arg(short, long, default_value_t = DEFAULT_MONTHS, allow_negative_numbers = true)]
    pub months: i64,

    /// Rating list to read
    #[arg(short, long, value_enum, default_value_t = RatingKind::Standard)]
    pub kind: RatingKind,

    /// Report to produce
    ///
    /// `calculations` requests one page per month of the window, cutoff
    /// included: N + 1 requests for `--months N` (13 with the default).
    #[arg(short, long, value_enum, default_value_t = ReportKind::History)]
    pub report: ReportKind,

    /// Directory for <PLAYER_ID>.<ext>
    #[arg(short, long = "out-dir", value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Ratings site root
    #[arg(long, env = "FIDE_BASE_URL", default_value = BASE_URL, hide = true)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Validate and map flags into run options.
    pub fn into_options(self) -> Result<AppOptions> {
        let mut scrape = ScrapeOptions::new(&self.id, self.months)?;
        scrape.kind = self.kind;
        scrape.report = self.report;
        scrape.base_url = self.base_url;
        scrape.timeout = Duration::from_secs(self.timeout);

        Ok(AppOptions {
            scrape,
            export: ExportOptions { dir: self.out_dir, format: self.format },
        })
    }
}

pub fn run(args: Args) -> Result<RunSummary> {
    crate::log::init(args.verbose, args.quiet);

    let opts = args.into_options()?;
    let fetcher = HttpFetcher::new(opts.scrape.timeout)?;
    let mut progress = LogProgress::default();
    let summary = runner::run(&opts, &fetcher, Local::now().date_naive(), Some(&mut progress))?;

    println!("Wrote {} ({} rows)", summary.path.display(), summary.rows);
    Ok(summary)
}
