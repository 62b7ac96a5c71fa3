use csv::StringRecord;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Row-local parse policy
// ---------------------------------------------------------------------------

/// Why a data row did not produce an observation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("row has {len} fields, column {index} is missing")]
    MissingColumn { index: usize, len: usize },
    #[error("'{value}' is not a number")]
    NotANumber { value: String },
    #[error("unreadable record: {reason}")]
    Unreadable { reason: String },
}

/// Read the label verbatim and the value as `f64` from one data row.
pub fn parse_row(
    record: &StringRecord,
    label_column: usize,
    value_column: usize,
) -> Result<(String, f64), RowError> {
    let label = field(record, label_column)?;
    let raw = field(record, value_column)?;
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| RowError::NotANumber {
            value: raw.to_string(),
        })?;

    Ok((label.to_string(), value))
}

fn field(record: &StringRecord, index: usize) -> Result<&str, RowError> {
    record.get(index).ok_or(RowError::MissingColumn {
        index,
        len: record.len(),
    })
}

/// Keep the rows that parsed, in order, and drop the rest.
///
/// Skipped rows leave no trace: nothing is counted, logged or reported.
pub fn keep_valid<I>(rows: I) -> impl Iterator<Item = (String, f64)>
where
    I: IntoIterator<Item = Result<(String, f64), RowError>>,
{
    rows.into_iter().filter_map(Result::ok)
}
