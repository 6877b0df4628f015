use crate::config::PlotConfig;
use crate::error::{CliError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A single line series plus the labels needed to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub points: Vec<(f64, f64)>,
    pub x_label: String,
    pub y_label: String,
    pub title: String,
    pub legend: String,
    /// Stem used for the output file name.
    pub name: String,
}

pub trait ChartRenderer {
    /// Draws `chart` and returns where it was written.
    fn render(&mut self, chart: &Chart) -> Result<PathBuf>;
}

pub struct SvgChartRenderer {
    config: PlotConfig,
}

impl SvgChartRenderer {
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }

    fn output_path(&self, chart: &Chart) -> PathBuf {
        self.config
            .output_dir
            .join(format!("rayleigh-{}.svg", chart.name))
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn render(&mut self, chart: &Chart) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.config.output_dir)?;
        let path = self.output_path(chart);
        debug!("Rendering {} points to {:?}", chart.points.len(), path);

        {
            let backend = SVGBackend::new(&path, (self.config.width, self.config.height));
            let root = backend.into_drawing_area();
            draw_line_chart(&root, chart).map_err(|e| render_error(&path, e))?;
            root.present().map_err(|e| render_error(&path, e))?;
        }

        info!("Chart written to {:?}", path);
        Ok(path)
    }
}

fn render_error(path: &Path, e: impl std::fmt::Display) -> CliError {
    CliError::Render {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

fn axis_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn draw_line_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &Chart,
) -> std::result::Result<(), Box<dyn std::error::Error>>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let (x_min, x_max) = axis_range(chart.points.iter().map(|&(x, _)| x)).unwrap_or((0.0, 1.0));
    let (_, y_max) = axis_range(chart.points.iter().map(|&(_, y)| y)).unwrap_or((0.0, 1.0));
    let y_top = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let mut plot = ChartBuilder::on(root)
        .caption(&chart.title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, 0.0..y_top)?;

    plot.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .y_label_formatter(&|v| format!("{:.1e}", v))
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    plot.draw_series(LineSeries::new(chart.points.iter().copied(), &BLUE))?
        .label(chart.legend.as_str())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    plot.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}
