//! Row cleaning: sentinel filtering and numeric conversion.
//!
//! The upstream metric computation writes a textual sentinel in place of a
//! number when a statistic is undefined for a sample plot (degenerate empty
//! plots). A row carrying the sentinel in any column is unusable as a whole,
//! so it is removed from all columns jointly before conversion.

use thiserror::Error;

use crate::core::loaders::{MetricTable, RawMetricTable};

/// Token the metric computation emits for an undefined value.
pub const INVALID_VALUE_SENTINEL: &str = "-nan(ind)";

/// Errors that can occur during cleaning operations.
#[derive(Debug, Error)]
pub enum CleaningError {
    #[error("Non-numeric field '{value}' at row {row}, column {column} in {path}")]
    NonNumericField {
        path: String,
        row: usize,
        column: usize,
        value: String,
    },
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, CleaningError>;

fn source_name(table: &RawMetricTable) -> String {
    table
        .source_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<memory>".to_string())
}

/// Remove every row that carries the invalid-value sentinel in any column.
///
/// Row identity is positional: dropping row `r` removes the `r`-th entry
/// from all 25 columns, so the surviving rows stay aligned and all columns
/// keep equal length. The operation is pure and idempotent.
pub fn drop_invalid_rows(table: &RawMetricTable) -> RawMetricTable {
    let rows = table.num_rows();
    let mut keep = Vec::with_capacity(rows);

    for row in 0..rows {
        let valid = table
            .columns
            .iter()
            .all(|col| col[row] != INVALID_VALUE_SENTINEL);
        if valid {
            keep.push(row);
        }
    }

    let mut cleaned = RawMetricTable::with_capacity(keep.len());
    cleaned.source_path = table.source_path.clone();

    for (dst, src) in cleaned.columns.iter_mut().zip(table.columns.iter()) {
        for &row in &keep {
            dst.push(src[row].clone());
        }
    }

    cleaned
}

/// Convert every field of a raw table to `f64`.
///
/// Expects sentinel rows to have been dropped already; any remaining value
/// that does not parse to a finite number (including a leftover sentinel,
/// `nan` or `inf` spellings) is an error naming the offending field.
pub fn to_numeric(table: &RawMetricTable) -> Result<MetricTable> {
    let mut numeric = MetricTable::with_capacity(table.num_rows());
    numeric.source_path = table.source_path.clone();

    for (column, (dst, src)) in numeric
        .columns
        .iter_mut()
        .zip(table.columns.iter())
        .enumerate()
    {
        for (row, value) in src.iter().enumerate() {
            let parsed: f64 = value.parse().map_err(|_| CleaningError::NonNumericField {
                path: source_name(table),
                row,
                column,
                value: value.clone(),
            })?;

            if !parsed.is_finite() {
                return Err(CleaningError::NonNumericField {
                    path: source_name(table),
                    row,
                    column,
                    value: value.clone(),
                });
            }

            dst.push(parsed);
        }
    }

    Ok(numeric)
}

/// Full cleaning pass: sentinel row removal followed by numeric conversion.
pub fn clean_table(table: &RawMetricTable) -> Result<MetricTable> {
    to_numeric(&drop_invalid_rows(table))
}
