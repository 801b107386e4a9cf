use crate::flow_analyzer::metrics_aggregator::MetricSample;
use crate::global_variables::{WAIT_SECONDS_MAX, WAIT_SECONDS_MIN};
use crate::monitoring::alerts::{Alert, AlertCategory};
use log::info;
use plotters::prelude::*;
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

pub const METRICS_CSV: &str = "metrics_history.csv";
pub const ALERTS_CSV: &str = "alerts.csv";
pub const WAIT_CHART_PNG: &str = "average_wait.png";

/// Files produced by [`generate_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFiles {
    pub metrics_csv: PathBuf,
    pub alerts_csv: PathBuf,
    pub wait_chart: Option<PathBuf>,
}

// Writes all records to a fresh CSV file with a header row.
fn write_csv<T: Serialize>(path: &Path, records: &[T]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(path)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Alerts flattened for CSV output.
#[derive(Debug, Serialize)]
struct AlertRecord<'a> {
    id: &'a str,
    category: AlertCategory,
    message: &'a str,
    location: &'a str,
    created_at: u64,
}

impl<'a> From<&'a Alert> for AlertRecord<'a> {
    fn from(alert: &'a Alert) -> Self {
        Self {
            id: &alert.id,
            category: alert.category,
            message: &alert.message,
            location: &alert.location,
            created_at: alert.created_at,
        }
    }
}

pub fn write_metrics_csv(path: &Path, samples: &[MetricSample]) -> Result<(), Box<dyn Error>> {
    write_csv(path, samples)
}

pub fn write_alerts_csv(path: &Path, alerts: &[Alert]) -> Result<(), Box<dyn Error>> {
    let records: Vec<AlertRecord> = alerts.iter().map(AlertRecord::from).collect();
    write_csv(path, &records)
}

/// Draws the average wait time history as a line chart.
pub fn plot_average_wait(path: &Path, samples: &[MetricSample]) -> Result<(), Box<dyn Error>> {
    if samples.is_empty() {
        return Err("no metric samples to plot".into());
    }

    let backend = BitMapBackend::new(path, (800, 600));
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Wait Time", ("sans-serif", 20))
        .margin(40)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(0..samples.len(), WAIT_SECONDS_MIN..WAIT_SECONDS_MAX)?;

    chart
        .configure_mesh()
        .x_desc("Metrics tick")
        .y_desc("Seconds")
        .draw()?;
    chart.draw_series(LineSeries::new(
        samples
            .iter()
            .enumerate()
            .map(|(i, s)| (i, s.average_wait_seconds)),
        &BLUE,
    ))?;

    root.present()?;
    Ok(())
}

/// Writes the metric history and alert list as CSV into `dir`, plus a wait-time chart.
///
/// The chart is best effort: a plotting failure (e.g. no fonts available) is
/// logged and the CSV files are still returned.
pub fn generate_report(
    dir: &Path,
    samples: &[MetricSample],
    alerts: &[Alert],
) -> Result<ReportFiles, Box<dyn Error>> {
    fs::create_dir_all(dir)?;

    let metrics_csv = dir.join(METRICS_CSV);
    write_metrics_csv(&metrics_csv, samples)?;
    let alerts_csv = dir.join(ALERTS_CSV);
    write_alerts_csv(&alerts_csv, alerts)?;

    let chart_path = dir.join(WAIT_CHART_PNG);
    let wait_chart = match plot_average_wait(&chart_path, samples) {
        Ok(()) => Some(chart_path),
        Err(e) => {
            info!("Skipping wait-time chart: {}", e);
            None
        }
    };

    info!("Report written to {}", dir.display());
    Ok(ReportFiles {
        metrics_csv,
        alerts_csv,
        wait_chart,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow_analyzer::metrics_aggregator::SystemMetrics;
    use crate::monitoring::alerts::AlertFeed;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "network_dashboard_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn metrics_csv_has_header_and_one_row_per_sample() {
        let dir = scratch_dir("metrics_csv");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(METRICS_CSV);
        let samples = vec![
            MetricSample::new(1, &SystemMetrics::default()),
            MetricSample::new(2, &SystemMetrics::default()),
        ];

        write_metrics_csv(&path, &samples).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(&headers[0], "timestamp");
        let rows: Vec<MetricSample> = rdr.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows, samples);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn report_writes_both_csv_files() {
        let dir = scratch_dir("report");
        let samples = vec![MetricSample::new(1, &SystemMetrics::default())];
        let alerts = AlertFeed::seeded(10).list_alerts();

        let files = generate_report(&dir, &samples, &alerts).unwrap();

        assert!(files.metrics_csv.exists());
        let alerts_text = fs::read_to_string(&files.alerts_csv).unwrap();
        assert!(alerts_text.contains("Central Blvd"));
        let mut rdr = csv::Reader::from_path(&files.alerts_csv).unwrap();
        let categories: Vec<String> = rdr
            .records()
            .map(|r| r.unwrap()[1].to_string())
            .collect();
        assert_eq!(categories[0], "emergency");
        assert!(categories.iter().all(|c| c.chars().all(|ch| ch.is_ascii_lowercase())));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn plotting_nothing_is_an_error() {
        let dir = scratch_dir("empty_plot");
        assert!(plot_average_wait(&dir.join(WAIT_CHART_PNG), &[]).is_err());
    }
}
