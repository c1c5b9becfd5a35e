//! Loader for whitespace-delimited vegetation metric tables.
//!
//! Each input file carries one sample plot per line with 25 metric fields
//! separated by runs of whitespace. Fields are kept as strings at this stage;
//! sentinel filtering and numeric conversion happen in
//! [`crate::processors::cleaning`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Number of metric fields expected on every line.
pub const METRIC_COLUMN_COUNT: usize = 25;

/// Errors that can occur during file loading.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Empty file: {0}")]
    EmptyFile(PathBuf),

    #[error("Malformed record in {path} at line {line}: expected {expected} fields, found {found}")]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Result type for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Columnar container for one file's raw (string-valued) metric table.
///
/// Column `i` holds the `i`-th whitespace-delimited field of every line in
/// file order. All columns have equal length; row `r` across the columns
/// reassembles the `r`-th retained source line.
#[derive(Debug, Clone)]
pub struct RawMetricTable {
    /// One vector of field strings per metric column.
    pub columns: Vec<Vec<String>>,
    /// Source file path.
    pub source_path: Option<PathBuf>,
}

impl RawMetricTable {
    /// Creates a new empty table with all metric columns present.
    pub fn new() -> Self {
        Self {
            columns: vec![Vec::new(); METRIC_COLUMN_COUNT],
            source_path: None,
        }
    }

    /// Creates a new table with per-column row capacity pre-allocated.
    pub fn with_capacity(rows: usize) -> Self {
        Self {
            columns: (0..METRIC_COLUMN_COUNT)
                .map(|_| Vec::with_capacity(rows))
                .collect(),
            source_path: None,
        }
    }

    /// Returns the number of rows (sample plots) in the table.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |col| col.len())
    }

    /// Returns true if the table holds no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    /// Returns one metric column by positional index.
    #[inline]
    pub fn column(&self, index: usize) -> &[String] {
        &self.columns[index]
    }

    /// Appends one row, taking the first [`METRIC_COLUMN_COUNT`] fields.
    pub fn push_row(&mut self, fields: &[&str]) {
        debug_assert!(
            fields.len() >= METRIC_COLUMN_COUNT,
            "push_row requires at least {} fields",
            METRIC_COLUMN_COUNT
        );
        for (col, field) in self.columns.iter_mut().zip(fields.iter()) {
            col.push((*field).to_string());
        }
    }
}

impl Default for RawMetricTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Columnar container for one file's cleaned, numeric metric table.
///
/// Produced by [`crate::processors::cleaning::clean_table`]; every value is a
/// finite `f64` and all columns have equal length.
#[derive(Debug, Clone)]
pub struct MetricTable {
    /// One vector of metric values per metric column.
    pub columns: Vec<Vec<f64>>,
    /// Source file path.
    pub source_path: Option<PathBuf>,
}

impl MetricTable {
    /// Creates a new empty table with all metric columns present.
    pub fn new() -> Self {
        Self {
            columns: vec![Vec::new(); METRIC_COLUMN_COUNT],
            source_path: None,
        }
    }

    /// Creates a new table with per-column row capacity pre-allocated.
    pub fn with_capacity(rows: usize) -> Self {
        Self {
            columns: (0..METRIC_COLUMN_COUNT)
                .map(|_| Vec::with_capacity(rows))
                .collect(),
            source_path: None,
        }
    }

    /// Returns the number of rows (sample plots) in the table.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |col| col.len())
    }

    /// Returns true if the table holds no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    /// Returns one metric series by positional column index.
    #[inline]
    pub fn column(&self, index: usize) -> &[f64] {
        &self.columns[index]
    }
}

impl Default for MetricTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a metric table from a whitespace-delimited text file.
///
/// Every non-blank line must split into at least [`METRIC_COLUMN_COUNT`]
/// whitespace-separated fields; the first 25 are kept and any trailing
/// fields are ignored. Values are stored as strings, so sentinel tokens
/// survive loading and are handled by the cleaning stage.
///
/// # Arguments
///
/// * `path` - Path to the metric table file
///
/// # Returns
///
/// A `RawMetricTable` with 25 equal-length string columns.
///
/// # Errors
///
/// Returns an error if the file cannot be read, contains no records, or has
/// a line with fewer than 25 fields.
pub fn load_metric_table<P: AsRef<Path>>(path: P) -> Result<RawMetricTable> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut table = RawMetricTable::with_capacity(1024);

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.is_empty() {
            continue;
        }

        if fields.len() < METRIC_COLUMN_COUNT {
            return Err(LoaderError::MalformedRecord {
                path: path.to_path_buf(),
                line: index + 1,
                expected: METRIC_COLUMN_COUNT,
                found: fields.len(),
            });
        }

        table.push_row(&fields);
    }

    if table.is_empty() {
        return Err(LoaderError::EmptyFile(path.to_path_buf()));
    }

    table.source_path = Some(path.to_path_buf());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn row_of(prefix: f64) -> String {
        (0..METRIC_COLUMN_COUNT)
            .map(|c| format!("{:.2}", prefix + c as f64))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_raw_table_operations() {
        let mut table = RawMetricTable::new();
        assert!(table.is_empty());
        assert_eq!(table.columns.len(), METRIC_COLUMN_COUNT);

        let fields: Vec<String> = (0..METRIC_COLUMN_COUNT).map(|c| c.to_string()).collect();
        let refs: Vec<&str> = fields.iter().map(|s| s.as_str()).collect();
        table.push_row(&refs);

        assert_eq!(table.num_rows(), 1);
        assert_eq!(table.column(0), ["0".to_string()]);
        assert_eq!(table.column(24), ["24".to_string()]);
    }

    #[test]
    fn test_load_metric_table() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", row_of(100.0)).unwrap();
        writeln!(file, "{}", row_of(200.0)).unwrap();
        file.flush().unwrap();

        let table = load_metric_table(file.path())?;
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.column(0)[0], "100.00");
        assert_eq!(table.column(24)[1], "224.00");
        assert_eq!(table.source_path.as_deref(), Some(file.path()));

        Ok(())
    }

    #[test]
    fn test_load_skips_blank_lines() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", row_of(1.0)).unwrap();
        writeln!(file).unwrap();
        writeln!(file, "{}", row_of(2.0)).unwrap();
        file.flush().unwrap();

        let table = load_metric_table(file.path())?;
        assert_eq!(table.num_rows(), 2);

        Ok(())
    }

    #[test]
    fn test_load_keeps_sentinel_tokens() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        let mut fields: Vec<String> =
            (0..METRIC_COLUMN_COUNT).map(|c| c.to_string()).collect();
        fields[7] = "-nan(ind)".to_string();
        writeln!(file, "{}", fields.join(" ")).unwrap();
        file.flush().unwrap();

        let table = load_metric_table(file.path())?;
        assert_eq!(table.column(7)[0], "-nan(ind)");

        Ok(())
    }

    #[test]
    fn test_load_ignores_extra_fields() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{} 999.0 888.0", row_of(0.0)).unwrap();
        file.flush().unwrap();

        let table = load_metric_table(file.path())?;
        assert_eq!(table.num_rows(), 1);
        assert_eq!(table.column(24)[0], "24.00");

        Ok(())
    }

    #[test]
    fn test_load_short_line_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", row_of(1.0)).unwrap();
        writeln!(file, "1.0 2.0 3.0").unwrap();
        file.flush().unwrap();

        let err = load_metric_table(file.path()).unwrap_err();
        match err {
            LoaderError::MalformedRecord { line, expected, found, .. } => {
                assert_eq!(line, 2);
                assert_eq!(expected, METRIC_COLUMN_COUNT);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_empty_file_is_error() {
        let file = NamedTempFile::new().unwrap();
        let err = load_metric_table(file.path()).unwrap_err();
        assert!(matches!(err, LoaderError::EmptyFile(_)));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = load_metric_table("no/such/metrics.txt").unwrap_err();
        assert!(matches!(err, LoaderError::Io(_)));
    }
}
