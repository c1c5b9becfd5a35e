//! Fixed-function driver for the vegetation metric comparison figure.
//!
//! Loads the configured metric tables, drops rows carrying the invalid-value
//! sentinel, converts the rest to floats, and renders the 5x5 box-plot grid
//! to the configured PNG path. The job takes no arguments; everything is
//! driven by [`PlotJobConfig`].

use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};

use veg_metrics_plot::config::PlotJobConfig;
use veg_metrics_plot::core::loaders::{load_metric_table, MetricTable};
use veg_metrics_plot::core::metrics::METRIC_PANELS;
use veg_metrics_plot::processors::cleaning::clean_table;
use veg_metrics_plot::visualization::render_metric_grid;

/// Per-file row accounting for the completion summary.
struct FileCounts {
    kept: usize,
    dropped: usize,
}

/// Create a spinner for indeterminate operations
fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Print a summary box
fn print_summary(title: &str, items: &[(&str, String)]) {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║ {:<62} ║", title);
    println!("╠══════════════════════════════════════════════════════════════╣");
    for (key, value) in items {
        let display_value = if value.len() > 39 {
            format!("{}...", &value[..36])
        } else {
            value.clone()
        };
        println!("║ {:<20}: {:<39} ║", key, display_value);
    }
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
}

fn load_and_render(config: &PlotJobConfig, spinner: &ProgressBar) -> anyhow::Result<Vec<FileCounts>> {
    let mut tables: Vec<MetricTable> = Vec::with_capacity(config.inputs.len());
    let mut counts = Vec::with_capacity(config.inputs.len());

    for path in &config.inputs {
        spinner.set_message(format!("Loading {}", path.display()));

        let raw = load_metric_table(path)?;
        let cleaned = clean_table(&raw)?;
        let dropped = raw.num_rows() - cleaned.num_rows();

        info!(
            "{}: kept {} rows, dropped {} with invalid values",
            path.display(),
            cleaned.num_rows(),
            dropped
        );

        counts.push(FileCounts {
            kept: cleaned.num_rows(),
            dropped,
        });
        tables.push(cleaned);
    }

    spinner.set_message("Rendering box-plot grid...");

    render_metric_grid(
        &config.output_path,
        &tables,
        &config.tick_labels,
        &config.figure,
        &config.style,
    )?;

    Ok(counts)
}

fn run(config: &PlotJobConfig) -> anyhow::Result<Vec<FileCounts>> {
    config.validate()?;

    let spinner = create_spinner("Loading metric tables...");
    let result = load_and_render(config, &spinner);
    spinner.finish_and_clear();

    result
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let config = PlotJobConfig::default();
    let start = Instant::now();

    match run(&config) {
        Ok(counts) => {
            let kept: usize = counts.iter().map(|c| c.kept).sum();
            let dropped: usize = counts.iter().map(|c| c.dropped).sum();

            print_summary(
                "Box-Plot Render Complete",
                &[
                    ("Input files", config.inputs.len().to_string()),
                    ("Rows plotted", kept.to_string()),
                    ("Rows dropped", dropped.to_string()),
                    ("Metric panels", METRIC_PANELS.len().to_string()),
                    ("Output PNG", config.output_path.display().to_string()),
                    ("Duration", format!("{:.2?}", start.elapsed())),
                ],
            );
        }
        Err(e) => {
            error!("Rendering pipeline failed: {:#}", e);
            std::process::exit(1);
        }
    }
}
