// src/specs/mod.rs
//! # Page specs
//!
//! One module per FIDE page. Each spec knows *where the data lives in the
//! HTML* and turns a fetched document into typed records. Specs never touch
//! the network or the filesystem, so they are tested offline against inline
//! snippets and the captured pages under `tests/fixtures/`.
//!
//! - `history`: the profile chart page (`/profile/{id}/chart`), one row per
//!   rating period for standard, rapid and blitz.
//! - `calculations`: the individual calculations page for one period, one
//!   record per rated tournament.
//!
//! Parsers tolerate markup noise (attribute case, whitespace, `&nbsp;`) and
//! skip single malformed rows; a document whose overall shape is wrong is a
//! [`ParseError`].

pub mod calculations;
pub mod history;

/// The document did not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ParseError(pub String);

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}
