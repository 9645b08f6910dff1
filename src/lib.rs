// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod log;
pub mod performance;
pub mod period;
pub mod progress;
pub mod report;
pub mod runner;
pub mod scrape;
pub mod specs;

pub use error::{Result, ScrapeError};
