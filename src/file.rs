// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::config::options::ExportFormat;
use crate::error::{Result, ScrapeError};
use crate::report::ReportRow;

/// Create/truncate `path`, write the header row and every row. The header is
/// written even when `rows` is empty. Returns the number of data rows.
pub fn write_report<R: ReportRow>(path: &Path, rows: &[R], format: ExportFormat) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(|e| ScrapeError::write(parent, e))?;
        }
    }

    let file = File::create(path).map_err(|e| ScrapeError::write(path, e))?; // truncate/overwrite
    let mut out = csv::WriterBuilder::new()
        .delimiter(format.delim())
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    out.write_record(R::HEADERS).map_err(|e| ScrapeError::write(path, e))?;
    for row in rows {
        out.serialize(row).map_err(|e| ScrapeError::write(path, e))?;
    }
    out.flush().map_err(|e| ScrapeError::write(path, e))?;

    debug!(path = %path.display(), rows = rows.len(), "report written");
    Ok(rows.len())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!("path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
