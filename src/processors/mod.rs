//! Data processing modules.

pub mod cleaning;
pub mod stats;

// Re-export key operations for convenience
pub use cleaning::{
    clean_table, drop_invalid_rows, to_numeric, CleaningError, INVALID_VALUE_SENTINEL,
};
pub use stats::{box_stats, percentile, BoxStats};
