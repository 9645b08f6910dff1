// src/scrape.rs
//! Fetch + parse. Ties a [`Fetch`] implementation to the page specs and maps
//! parser failures onto [`ScrapeError`].

use std::thread;

use tracing::{debug, info, warn};

use crate::{
    config::options::ScrapeOptions,
    core::{Fetch, Fetched},
    error::{Result, ScrapeError},
    period::Window,
    progress::Progress,
    report::TournamentRow,
    specs::{calculations, history::{self, PlayerHistory}},
};

/// Resolve the player and read the full published history (one request).
pub fn fetch_history(fetch: &dyn Fetch, opts: &ScrapeOptions) -> Result<PlayerHistory> {
    let url = history::url(opts.base(), &opts.player_id);
    let not_found = || ScrapeError::NotFound { player_id: opts.player_id.clone() };

    let doc = match fetch.get(&url)? {
        Fetched::Page(doc) => doc,
        Fetched::Missing => return Err(not_found()),
    };

    match history::parse(&doc) {
        Ok(Some(h)) => {
            info!(
                player = %h.name,
                periods = h.series(opts.kind).len(),
                "history loaded"
            );
            Ok(h)
        }
        Ok(None) => Err(not_found()),
        Err(e) => Err(ScrapeError::retrieval(&url, e)),
    }
}

/// Tournaments of every period in `window`, oldest period first, one request
/// per period with `opts.pause` between requests.
pub fn collect_calculations(
    fetch: &dyn Fetch,
    opts: &ScrapeOptions,
    window: &Window,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<TournamentRow>> {
    let periods: Vec<_> = window.periods().collect();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(periods.len());
    }

    let mut rows = Vec::new();
    for (i, period) in periods.into_iter().enumerate() {
        if i > 0 && !opts.pause.is_zero() {
            thread::sleep(opts.pause); // be polite
        }

        let url = calculations::url(opts.base(), &opts.player_id, period, opts.kind);
        let records = match fetch.get(&url)? {
            Fetched::Page(doc) => calculations::parse(&doc).map_err(|e| ScrapeError::retrieval(&url, e))?,
            Fetched::Missing => {
                warn!(%period, url = %url, "calculations page missing, treating as no records");
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("{period}: calculations page missing, counted as no records"));
                }
                Vec::new()
            }
        };
        debug!(%period, tournaments = records.len(), "period parsed");

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(period, records.len());
        }
        rows.extend(records.into_iter().map(|t| TournamentRow::new(period, t)));
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(rows)
}
