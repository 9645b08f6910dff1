// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use fide_scrape::config::options::{AppOptions, ExportOptions, ScrapeOptions};
use fide_scrape::core::{Fetch, Fetched};
use fide_scrape::{Result, ScrapeError};

pub const BASE: &str = "https://ratings.test";
pub const PLAYER: &str = "2400777";

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("fide_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub fn options(dir: &PathBuf, months: i64) -> AppOptions {
    let mut scrape = ScrapeOptions::new(PLAYER, months).unwrap();
    scrape.base_url = BASE.to_string();
    scrape.pause = std::time::Duration::ZERO;
    AppOptions {
        scrape,
        export: ExportOptions { dir: dir.clone(), ..ExportOptions::default() },
    }
}

/// Serves canned pages by exact URL and records every request.
/// Unknown URLs fail like a refused connection.
#[derive(Default)]
pub struct FixtureFetch {
    pages: HashMap<String, Fetched>,
    pub requests: RefCell<Vec<String>>,
}

impl FixtureFetch {
    pub fn with(mut self, url: impl Into<String>, page: Fetched) -> Self {
        self.pages.insert(url.into(), page);
        self
    }

    pub fn profile(self, file: &str) -> Self {
        let url = format!("{BASE}/profile/{PLAYER}/chart");
        self.with(url, Fetched::Page(fixture(file)))
    }
}

impl Fetch for FixtureFetch {
    fn get(&self, url: &str) -> Result<Fetched> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::retrieval(url, "connection refused"))
    }
}
