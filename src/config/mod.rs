//! Configuration types for the metric plotting job.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::metrics::MetricGroup;

/// Errors raised by configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No input files configured")]
    NoInputs,

    #[error("Tick label count {labels} does not match input file count {inputs}")]
    LabelCountMismatch { inputs: usize, labels: usize },
}

/// Figure geometry and overall title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureConfig {
    /// Output image width in pixels
    #[serde(default = "default_width_px")]
    pub width_px: u32,

    /// Output image height in pixels
    #[serde(default = "default_height_px")]
    pub height_px: u32,

    /// Title drawn across the top of the figure
    #[serde(default = "default_figure_title")]
    pub title: String,
}

fn default_width_px() -> u32 {
    1500
}

fn default_height_px() -> u32 {
    1500
}

fn default_figure_title() -> String {
    "LiDAR-derived vegetation metrics of dunes at different pulse densities".to_string()
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width_px: default_width_px(),
            height_px: default_height_px(),
            title: default_figure_title(),
        }
    }
}

/// Box styling: group fill colors, line colors, flier markers, whisker range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Fill color for height metrics
    #[serde(default = "default_height_fill")]
    pub height_fill: [u8; 3],

    /// Fill color for ratio metrics
    #[serde(default = "default_ratio_fill")]
    pub ratio_fill: [u8; 3],

    /// Fill color for variability metrics
    #[serde(default = "default_variability_fill")]
    pub variability_fill: [u8; 3],

    /// Box outline color
    #[serde(default = "default_box_border")]
    pub box_border: [u8; 3],

    /// Median line color
    #[serde(default = "default_median_color")]
    pub median_color: [u8; 3],

    /// Whisker stem color
    #[serde(default = "default_whisker_color")]
    pub whisker_color: [u8; 3],

    /// Whisker cap color
    #[serde(default = "default_cap_color")]
    pub cap_color: [u8; 3],

    /// Outlier marker color
    #[serde(default = "default_flier_color")]
    pub flier_color: [u8; 3],

    /// Outlier marker radius in pixels
    #[serde(default = "default_flier_radius")]
    pub flier_radius: u32,

    /// Lower and upper whisker positions as percentiles of the data
    #[serde(default = "default_whisker_percentiles")]
    pub whisker_percentiles: [f64; 2],
}

fn default_height_fill() -> [u8; 3] {
    [135, 206, 235] // sky blue
}

fn default_ratio_fill() -> [u8; 3] {
    [144, 238, 144] // light green
}

fn default_variability_fill() -> [u8; 3] {
    [255, 165, 0] // orange
}

fn default_box_border() -> [u8; 3] {
    [0, 0, 0]
}

fn default_median_color() -> [u8; 3] {
    [255, 0, 0] // red
}

fn default_whisker_color() -> [u8; 3] {
    [0, 128, 0] // green
}

fn default_cap_color() -> [u8; 3] {
    [128, 128, 128] // gray
}

fn default_flier_color() -> [u8; 3] {
    [0, 0, 0]
}

fn default_flier_radius() -> u32 {
    2
}

fn default_whisker_percentiles() -> [f64; 2] {
    [5.0, 95.0]
}

impl StyleConfig {
    /// Fill color for a metric group.
    pub fn fill_for(&self, group: MetricGroup) -> [u8; 3] {
        match group {
            MetricGroup::Height => self.height_fill,
            MetricGroup::Ratio => self.ratio_fill,
            MetricGroup::Variability => self.variability_fill,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            height_fill: default_height_fill(),
            ratio_fill: default_ratio_fill(),
            variability_fill: default_variability_fill(),
            box_border: default_box_border(),
            median_color: default_median_color(),
            whisker_color: default_whisker_color(),
            cap_color: default_cap_color(),
            flier_color: default_flier_color(),
            flier_radius: default_flier_radius(),
            whisker_percentiles: default_whisker_percentiles(),
        }
    }
}

/// Full plotting job configuration.
///
/// One entry in `tick_labels` per entry in `inputs`: the label is the pulse
/// density of the corresponding file and becomes its x-axis tick in every
/// panel, in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotJobConfig {
    /// Metric table files to compare, in plotting order
    #[serde(default = "default_inputs")]
    pub inputs: Vec<PathBuf>,

    /// Pulse-density axis labels, one per input file
    #[serde(default = "default_tick_labels")]
    pub tick_labels: Vec<String>,

    /// Destination for the rendered figure
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    #[serde(default)]
    pub figure: FigureConfig,

    #[serde(default)]
    pub style: StyleConfig,
}

fn default_inputs() -> Vec<PathBuf> {
    [
        "data/downsample_to_ahn2_1_metrics_dunes.txt",
        "data/downsample_to_ahn2_metrics_dunes.txt",
        "data/downsample_to_ahn3_metrics_dunes.txt",
        "data/first_return_ahn4_metrics_dunes.txt",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

fn default_tick_labels() -> Vec<String> {
    ["4", "8", "16", "26"].iter().map(|s| s.to_string()).collect()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output/dunes_10m.png")
}

impl Default for PlotJobConfig {
    fn default() -> Self {
        Self {
            inputs: default_inputs(),
            tick_labels: default_tick_labels(),
            output_path: default_output_path(),
            figure: FigureConfig::default(),
            style: StyleConfig::default(),
        }
    }
}

impl PlotJobConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: PlotJobConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a YAML file.
    pub fn to_yaml<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check the inputs/tick-labels arity once up front.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inputs.is_empty() {
            return Err(ConfigError::NoInputs);
        }
        if self.tick_labels.len() != self.inputs.len() {
            return Err(ConfigError::LabelCountMismatch {
                inputs: self.inputs.len(),
                labels: self.tick_labels.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_config() {
        let style = StyleConfig::default();
        assert_eq!(style.whisker_percentiles, [5.0, 95.0]);
        assert_eq!(style.fill_for(MetricGroup::Height), [135, 206, 235]);
        assert_eq!(style.fill_for(MetricGroup::Variability), [255, 165, 0]);
    }

    #[test]
    fn test_default_job_config_is_valid() {
        let config = PlotJobConfig::default();
        assert_eq!(config.inputs.len(), 4);
        assert_eq!(config.tick_labels.len(), 4);
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_label_mismatch() {
        let config = PlotJobConfig {
            tick_labels: vec!["4".to_string()],
            ..PlotJobConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::LabelCountMismatch { inputs: 4, labels: 1 })
        ));
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("job.yaml");

        let config = PlotJobConfig::default();
        config.to_yaml(&path).unwrap();

        let loaded = PlotJobConfig::from_yaml(&path).unwrap();
        assert_eq!(loaded.inputs, config.inputs);
        assert_eq!(loaded.tick_labels, config.tick_labels);
        assert_eq!(loaded.style.whisker_percentiles, [5.0, 95.0]);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("partial.yaml");
        std::fs::write(&path, "output_path: figures/heath.png\n").unwrap();

        let config = PlotJobConfig::from_yaml(&path).unwrap();
        assert_eq!(config.output_path, PathBuf::from("figures/heath.png"));
        assert_eq!(config.inputs.len(), 4);
        assert_eq!(config.figure.width_px, 1500);
    }
}
