//! Box-plot statistics: percentiles, quartiles, whiskers and fliers.
//!
//! Whiskers sit at configurable percentiles of the data (5th/95th by
//! default) rather than at a multiple of the interquartile range, trading
//! outlier suppression for sensitivity to spread.

/// Five-number summary of one metric series plus its outliers.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub whisker_low: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_high: f64,
    /// Observations strictly outside the whisker interval.
    pub fliers: Vec<f64>,
}

/// Percentile of an ascending-sorted slice, interpolating linearly between
/// the two closest ranks.
///
/// `pct` is clamped to `[0, 100]`. The slice must not be empty.
pub fn percentile(sorted: &[f64], pct: f64) -> f64 {
    debug_assert!(!sorted.is_empty(), "percentile of empty series");
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = pct.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let below = rank.floor() as usize;
    let above = rank.ceil() as usize;
    let fraction = rank - below as f64;

    sorted[below] + (sorted[above] - sorted[below]) * fraction
}

/// Compute the box summary for one metric series.
///
/// # Arguments
///
/// * `values` - The series; order does not matter
/// * `whisker_percentiles` - Lower and upper whisker positions as percentiles
///
/// # Returns
///
/// `None` for an empty series. A constant series yields a degenerate
/// zero-height box with both whiskers at the constant and no fliers.
pub fn box_stats(values: &[f64], whisker_percentiles: [f64; 2]) -> Option<BoxStats> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let whisker_low = percentile(&sorted, whisker_percentiles[0]);
    let whisker_high = percentile(&sorted, whisker_percentiles[1]);

    let fliers = sorted
        .iter()
        .copied()
        .filter(|v| *v < whisker_low || *v > whisker_high)
        .collect();

    Some(BoxStats {
        whisker_low,
        q1: percentile(&sorted, 25.0),
        median: percentile(&sorted, 50.0),
        q3: percentile(&sorted, 75.0),
        whisker_high,
        fliers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn one_to_hundred() -> Vec<f64> {
        (1..=100).map(|v| v as f64).collect()
    }

    #[test]
    fn test_percentile_interpolates() {
        let series = one_to_hundred();
        assert!((percentile(&series, 0.0) - 1.0).abs() < EPS);
        assert!((percentile(&series, 100.0) - 100.0).abs() < EPS);
        assert!((percentile(&series, 50.0) - 50.5).abs() < EPS);
        assert!((percentile(&series, 5.0) - 5.95).abs() < EPS);
        assert!((percentile(&series, 95.0) - 95.05).abs() < EPS);
    }

    #[test]
    fn test_percentile_single_value() {
        assert_eq!(percentile(&[7.5], 5.0), 7.5);
        assert_eq!(percentile(&[7.5], 95.0), 7.5);
    }

    #[test]
    fn test_whiskers_sit_at_configured_percentiles() {
        let stats = box_stats(&one_to_hundred(), [5.0, 95.0]).unwrap();
        assert!((stats.whisker_low - 5.95).abs() < EPS);
        assert!((stats.whisker_high - 95.05).abs() < EPS);
        assert!((stats.q1 - 25.75).abs() < EPS);
        assert!((stats.median - 50.5).abs() < EPS);
        assert!((stats.q3 - 75.25).abs() < EPS);
    }

    #[test]
    fn test_fliers_lie_outside_whiskers() {
        let stats = box_stats(&one_to_hundred(), [5.0, 95.0]).unwrap();
        // 1..=5 fall below 5.95, 96..=100 above 95.05
        assert_eq!(stats.fliers.len(), 10);
        assert!(stats
            .fliers
            .iter()
            .all(|v| *v < stats.whisker_low || *v > stats.whisker_high));
    }

    #[test]
    fn test_unsorted_input() {
        let stats = box_stats(&[30.0, 10.0, 20.0], [5.0, 95.0]).unwrap();
        assert_eq!(stats.median, 20.0);
    }

    #[test]
    fn test_constant_series_is_degenerate() {
        let stats = box_stats(&[4.2; 50], [5.0, 95.0]).unwrap();
        assert_eq!(stats.whisker_low, 4.2);
        assert_eq!(stats.q1, 4.2);
        assert_eq!(stats.median, 4.2);
        assert_eq!(stats.q3, 4.2);
        assert_eq!(stats.whisker_high, 4.2);
        assert!(stats.fliers.is_empty());
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(box_stats(&[], [5.0, 95.0]), None);
    }

    #[test]
    fn test_full_range_whiskers_have_no_fliers() {
        let stats = box_stats(&one_to_hundred(), [0.0, 100.0]).unwrap();
        assert_eq!(stats.whisker_low, 1.0);
        assert_eq!(stats.whisker_high, 100.0);
        assert!(stats.fliers.is_empty());
    }
}
