//! Two-panel chart rendering for the oscillator and the price averages

use crate::error::{Result, TrendError};
use crate::oscillator::OscillatorSeries;
use chrono::{Duration, NaiveDate};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

const CHART_SIZE: (u32, u32) = (1024, 768);
const TITLE: &str = "Closing Stock Price Analysis";
const X_LABEL: &str = "Date (years, months)";
const Y_LABEL: &str = "Closing price (dollars)";

/// Render the two-panel chart to `path`.
///
/// A `.svg` extension selects the SVG backend; any other extension goes
/// through the bitmap backend, which infers the image format from the
/// extension.
pub fn render_to_file<P: AsRef<Path>>(
    path: P,
    dates: &[NaiveDate],
    prices: &[f64],
    series: &OscillatorSeries,
) -> Result<()> {
    let path = path.as_ref();
    let is_svg = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if is_svg {
        let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
        draw_panels(&root, dates, prices, series)?;
    } else {
        let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
        draw_panels(&root, dates, prices, series)?;
    }

    debug!(path = %path.display(), "chart written");
    Ok(())
}

/// Render the chart to a temporary PNG and open it with the platform image
/// viewer.
///
/// The file is persisted rather than deleted on exit so a lazily loading
/// viewer never races the cleanup.
pub fn show(dates: &[NaiveDate], prices: &[f64], series: &OscillatorSeries) -> Result<()> {
    let file = tempfile::Builder::new()
        .prefix("stock_trend-")
        .suffix(".png")
        .tempfile()?;
    let temp_path = file.into_temp_path();

    render_to_file(&temp_path, dates, prices, series)?;

    let path = temp_path.keep().map_err(|e| TrendError::Io(e.error))?;
    debug!(path = %path.display(), "opening chart in image viewer");
    open::that(&path)?;
    Ok(())
}

fn draw_panels<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    dates: &[NaiveDate],
    prices: &[f64],
    series: &OscillatorSeries,
) -> Result<()> {
    if dates.is_empty() {
        return Err(TrendError::Chart("no data points to plot".to_string()));
    }
    if prices.len() != dates.len() || series.len() != dates.len() {
        return Err(TrendError::Chart(format!(
            "series lengths do not match the {} dates",
            dates.len()
        )));
    }

    root.fill(&WHITE).map_err(to_chart_error)?;
    let (_, height) = root.dim_in_pixel();
    let (upper, lower) = root.split_vertically((height / 2) as i32);

    draw_panel(
        &upper,
        Some(TITLE),
        dates,
        &[
            ("diff", series.diff.as_slice(), BLUE),
            ("diff_av", series.diff_av.as_slice(), RED),
            ("residual", series.residual.as_slice(), GREEN),
        ],
        SeriesLabelPosition::LowerLeft,
    )?;
    draw_panel(
        &lower,
        None,
        dates,
        &[
            ("Closing", prices, BLACK),
            ("lt_av", series.lt_av.as_slice(), BLUE),
            ("st_av", series.st_av.as_slice(), RED),
        ],
        SeriesLabelPosition::UpperLeft,
    )?;

    root.present().map_err(to_chart_error)?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    caption: Option<&str>,
    dates: &[NaiveDate],
    curves: &[(&str, &[f64], RGBColor)],
    legend: SeriesLabelPosition,
) -> Result<()> {
    let (first, last) = match (dates.first(), dates.last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => return Err(TrendError::Chart("no data points to plot".to_string())),
    };
    // A single trading day still needs a non-degenerate axis
    let last = if last > first {
        last
    } else {
        first + Duration::days(1)
    };

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for (_, values, _) in curves {
        for &v in *values {
            y_min = y_min.min(v);
            y_max = y_max.max(v);
        }
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        return Err(TrendError::Chart(
            "series contain no finite values".to_string(),
        ));
    }
    let pad = ((y_max - y_min) * 0.05).max(1e-6);

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55);
    if let Some(caption) = caption {
        builder.caption(caption, ("sans-serif", 18));
    }
    let mut chart = builder
        .build_cartesian_2d(first..last, (y_min - pad)..(y_max + pad))
        .map_err(to_chart_error)?;

    chart
        .configure_mesh()
        .x_labels(8)
        .x_label_formatter(&|d: &NaiveDate| d.format("%Y-%m").to_string())
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .draw()
        .map_err(to_chart_error)?;

    for &(label, values, color) in curves {
        chart
            .draw_series(LineSeries::new(
                dates.iter().copied().zip(values.iter().copied()),
                color,
            ))
            .map_err(to_chart_error)?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], color));
    }

    chart
        .configure_series_labels()
        .position(legend)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(to_chart_error)?;

    Ok(())
}

fn to_chart_error<E: std::error::Error>(err: E) -> TrendError {
    TrendError::Chart(err.to_string())
}
