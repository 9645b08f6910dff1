// src/runner.rs
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::info;

use crate::{
    config::options::{AppOptions, ReportKind},
    core::Fetch,
    error::Result,
    file::write_report,
    period::Window,
    progress::Progress,
    report, scrape,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub player: String,
    pub path: PathBuf,
    pub rows: usize,
}

/// Top-level runner: resolve the player, build the selected report for the
/// window ending at `today`, write it.
///
/// Nothing is written until every request has succeeded, so a failed run
/// leaves an existing output file untouched.
pub fn run(
    opts: &AppOptions,
    fetch: &dyn Fetch,
    today: NaiveDate,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let scrape_opts = &opts.scrape;
    let window = Window::trailing(today, scrape_opts.months);
    info!(
        player_id = %scrape_opts.player_id,
        from = %window.start,
        to = %window.end,
        kind = ?scrape_opts.kind,
        "scraping"
    );

    let history = scrape::fetch_history(fetch, scrape_opts)?;
    let path = opts.export.out_path(&scrape_opts.player_id);

    let rows = match scrape_opts.report {
        ReportKind::History => {
            let rows = report::history_rows(history.series(scrape_opts.kind), &window);
            write_report(&path, &rows, opts.export.format)?
        }
        ReportKind::Calculations => {
            let rows = scrape::collect_calculations(fetch, scrape_opts, &window, progress)?;
            write_report(&path, &rows, opts.export.format)?
        }
    };

    Ok(RunSummary { player: history.name, path, rows })
}
