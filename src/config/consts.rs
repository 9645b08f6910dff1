// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://ratings.fide.com";
pub const USER_AGENT: &str = concat!("fide_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 20;

// Scrape
pub const DEFAULT_MONTHS: i64 = 12;
pub const REQUEST_PAUSE_MS: u64 = 1000; // be polite

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
