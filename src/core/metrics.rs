//! Positional column-to-metric catalog.
//!
//! The input files carry no header; which metric a column holds is fixed by
//! position. This table makes the mapping explicit: entry `i` describes
//! column `i` and drives the title, y-axis unit and fill color of panel `i`
//! in the rendered grid.

/// Semantic grouping of the metrics, used to pick the box fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricGroup {
    /// Canopy height statistics and height percentiles
    Height,
    /// Penetration and per-height-bin density ratios
    Ratio,
    /// Shape and dispersion statistics of the height distribution
    Variability,
}

/// One metric panel: short name, y-axis unit, and color group.
#[derive(Debug, Clone, Copy)]
pub struct MetricDef {
    pub name: &'static str,
    pub unit: &'static str,
    pub group: MetricGroup,
}

const fn metric(name: &'static str, unit: &'static str, group: MetricGroup) -> MetricDef {
    MetricDef { name, unit, group }
}

/// The 25 metric columns in file order. Positions must not be reordered;
/// they mirror the layout the upstream metric computation writes.
///
/// Sigma_z (21) and Hstd (23) both label a standard deviation of the height
/// distribution; the upstream tool emits both, so both are kept as panels.
pub const METRIC_PANELS: [MetricDef; 25] = [
    metric("Hmax", "Meter", MetricGroup::Height),
    metric("Hmean", "Meter", MetricGroup::Height),
    metric("Hmedian", "Meter", MetricGroup::Height),
    // Height percentiles
    metric("Hp25", "Meter", MetricGroup::Height),
    metric("Hp50", "Meter", MetricGroup::Height),
    metric("Hp75", "Meter", MetricGroup::Height),
    metric("Hp95", "Meter", MetricGroup::Height),
    // Pulse penetration ratio and point density above the mean height
    metric("PPR", "Ratio", MetricGroup::Ratio),
    metric("Density_above_mean_z", "Number of points", MetricGroup::Ratio),
    // Density ratios over the nine fixed height bins
    metric("BR_below_1", "Ratio", MetricGroup::Ratio),
    metric("BR_1_2", "Ratio", MetricGroup::Ratio),
    metric("BR_2_3", "Ratio", MetricGroup::Ratio),
    metric("BR_above_3", "Ratio", MetricGroup::Ratio),
    metric("BR_3_4", "Ratio", MetricGroup::Ratio),
    metric("BR_4_5", "Ratio", MetricGroup::Ratio),
    metric("BR_below_5", "Ratio", MetricGroup::Ratio),
    metric("BR_5_20", "Ratio", MetricGroup::Ratio),
    metric("BR_above_20", "Ratio", MetricGroup::Ratio),
    // Dispersion and shape statistics
    metric("Coeff_var", "Values", MetricGroup::Variability),
    metric("Entropy_z", "Nat", MetricGroup::Variability),
    metric("Hkurt", "Values", MetricGroup::Variability),
    metric("Sigma_z", "Meter", MetricGroup::Variability),
    metric("Hskew", "Values", MetricGroup::Variability),
    metric("Hstd", "Meter", MetricGroup::Variability),
    metric("Hvar", "Meter^2", MetricGroup::Variability),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loaders::METRIC_COLUMN_COUNT;

    #[test]
    fn test_catalog_covers_every_column() {
        assert_eq!(METRIC_PANELS.len(), METRIC_COLUMN_COUNT);
    }

    #[test]
    fn test_group_boundaries() {
        assert!(METRIC_PANELS[..7]
            .iter()
            .all(|m| m.group == MetricGroup::Height));
        assert!(METRIC_PANELS[7..18]
            .iter()
            .all(|m| m.group == MetricGroup::Ratio));
        assert!(METRIC_PANELS[18..]
            .iter()
            .all(|m| m.group == MetricGroup::Variability));
    }

    #[test]
    fn test_fixed_positions() {
        assert_eq!(METRIC_PANELS[0].name, "Hmax");
        assert_eq!(METRIC_PANELS[7].name, "PPR");
        assert_eq!(METRIC_PANELS[21].name, "Sigma_z");
        assert_eq!(METRIC_PANELS[23].name, "Hstd");
        assert_eq!(METRIC_PANELS[24].unit, "Meter^2");
    }
}
