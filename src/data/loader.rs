use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::filter::{keep_valid, parse_row, RowError};
use super::model::{Series, DEFAULT_LABEL_NAME, DEFAULT_VALUE_NAME};

// ---------------------------------------------------------------------------
// Extraction options
// ---------------------------------------------------------------------------

/// Which columns to extract, and how strict to be about the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Zero-based index of the label (timestamp) column.
    pub label_column: usize,
    /// Zero-based index of the measurement column.
    pub value_column: usize,
    /// When set, an empty file or a header row too short to name both
    /// columns yields an empty series with the default names instead of
    /// reading any data rows. When unset the header row is only skipped.
    pub require_headers: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            label_column: 0,
            value_column: 2,
            require_headers: false,
        }
    }
}

impl ExtractOptions {
    /// Highest column index a header row must reach to name both columns.
    fn widest_column(&self) -> usize {
        self.label_column.max(self.value_column)
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Open `path` and extract the configured columns.
///
/// Failing to open the file is fatal; failing to parse a row is not.
pub fn load_series(path: &Path, options: &ExtractOptions) -> Result<Series> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let series = read_series(file, options)
        .with_context(|| format!("reading {}", path.display()))?;

    log::info!(
        "Extracted {} values of '{}' from {}",
        series.len(),
        series.value_name(),
        path.display()
    );
    Ok(series)
}

/// CSV layout: comma-delimited, first row is the header.
///
/// Every later row contributes `(row[label_column], row[value_column])` when
/// the value parses as a float; any other row is dropped.
pub fn read_series<R: Read>(source: R, options: &ExtractOptions) -> Result<Series> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);
    let mut records = reader.records();

    // An unreadable header counts as a missing one.
    let header = match records.next() {
        Some(Ok(record)) => Some(record),
        Some(Err(e)) if e.is_io_error() => {
            return Err(e).context("reading CSV header row");
        }
        Some(Err(e)) => {
            log::debug!("ignoring unreadable header row: {e}");
            None
        }
        None => None,
    };

    let header_complete = header
        .as_ref()
        .is_some_and(|h| h.len() > options.widest_column());
    if options.require_headers && !header_complete {
        log::debug!("header row missing or without column {}", options.widest_column());
        return Ok(Series::with_default_names());
    }

    let name = |index: usize, fallback: &str| {
        header
            .as_ref()
            .and_then(|h| h.get(index))
            .unwrap_or(fallback)
            .to_string()
    };
    let mut series = Series::new(
        name(options.label_column, DEFAULT_LABEL_NAME),
        name(options.value_column, DEFAULT_VALUE_NAME),
    );

    // Rows stream straight into the series; an I/O error ends the pass.
    let mut io_error = None;
    let rows = records.enumerate().map_while(|(i, result)| match result {
        Ok(record) => Some(parse_row(&record, options.label_column, options.value_column)),
        Err(e) if e.is_io_error() => {
            // 1-based, the header is line 1
            io_error = Some((i + 2, e));
            None
        }
        Err(e) => Some(Err(RowError::Unreadable {
            reason: e.to_string(),
        })),
    });
    series.extend(keep_valid(rows));

    match io_error {
        Some((line, e)) => Err(e).with_context(|| format!("reading CSV row {line}")),
        None => Ok(series),
    }
}
