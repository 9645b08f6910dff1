// src/progress.rs
use tracing::info;

use crate::period::Period;

/// Lightweight progress reporting for multi-request scrapes.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of periods to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one period has been fetched and parsed.
    fn item_done(&mut self, _period: Period, _rows: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Reports through `tracing` at info level: `[3/13] 2026-01: 2 tournaments`.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
    done: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        info!("{msg}");
    }

    fn item_done(&mut self, period: Period, rows: usize) {
        self.done += 1;
        if rows == 0 {
            info!("[{}/{}] {period}: no records", self.done, self.total);
        } else {
            info!("[{}/{}] {period}: {rows} tournaments", self.done, self.total);
        }
    }
}
