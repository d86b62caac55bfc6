use std::fmt::Display;
use std::path::{Path, PathBuf};

use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::core::error::SimError;
use crate::core::form::{PlotState, SERIES_LABEL};

pub const DEFAULT_PLOT_SIZE: (u32, u32) = (900, 600);

const CURVE_COLOR: RGBColor = RGBColor(31, 119, 180);

fn plot_err<E: Display>(err: E) -> SimError {
    SimError::Plot(err.to_string())
}

/// `trajectory_<YYYYmmdd_HHMMSS>.<extension>` in the working directory.
pub fn timestamped_path(extension: &str) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("trajectory_{stamp}.{extension}"))
}

// plotters cannot lay out ticks on an infinite range.
fn ensure_drawable(plot: &PlotState) -> Result<(), SimError> {
    let bounds = plot.bounds();
    if bounds.is_finite() {
        Ok(())
    } else {
        Err(SimError::Plot(format!("axis range is not finite: {bounds:?}")))
    }
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    plot: &PlotState,
) -> Result<(), SimError> {
    root.fill(&WHITE).map_err(plot_err)?;

    let bounds = plot.bounds();
    let mut chart = ChartBuilder::on(root)
        .caption(plot.title(), ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(44)
        .y_label_area_size(56)
        .build_cartesian_2d(bounds.x_min..bounds.x_max, bounds.y_min..bounds.y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(plot.x_label())
        .y_desc(plot.y_label())
        .draw()
        .map_err(plot_err)?;

    if let Some(curve) = plot.curve() {
        chart
            .draw_series(LineSeries::new(
                curve.iter().map(|s| (s.x_m, s.y_m)),
                CURVE_COLOR.stroke_width(2),
            ))
            .map_err(plot_err)?
            .label(SERIES_LABEL)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CURVE_COLOR));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)
}

pub fn render_png(path: &Path, plot: &PlotState, size: (u32, u32)) -> Result<(), SimError> {
    ensure_drawable(plot)?;
    let root = BitMapBackend::new(path, size).into_drawing_area();
    draw_chart(&root, plot)?;
    info!("wrote PNG plot to {}", path.display());
    Ok(())
}

pub fn render_svg(path: &Path, plot: &PlotState, size: (u32, u32)) -> Result<(), SimError> {
    ensure_drawable(plot)?;
    let root = SVGBackend::new(path, size).into_drawing_area();
    draw_chart(&root, plot)?;
    info!("wrote SVG plot to {}", path.display());
    Ok(())
}
