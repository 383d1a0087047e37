//! Two-panel chart rendering for the analysis results
//!
//! Left panel: the observed revenue series. Right panel: the observed
//! points overlaid with the fitted linear trend and the refit seasonal
//! curve. Rendered to a PNG file via the plotters bitmap backend.

use crate::analysis::AnalysisReport;
use crate::data::RevenueSeries;
use crate::error::{ForecastError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

/// Render the two-panel revenue chart to `path` as a 1200x500 PNG.
///
/// Called only after the analysis succeeded; a failing fit never
/// produces a chart file.
pub fn render_chart<P: AsRef<Path>>(
    series: &RevenueSeries,
    report: &AnalysisReport,
    path: P,
) -> Result<()> {
    let root = BitMapBackend::new(path.as_ref(), (1200, 500)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ForecastError::PlotError(e.to_string()))?;

    let panels = root.split_evenly((1, 2));
    draw_series_panel(&panels[0], series)?;
    draw_trends_panel(&panels[1], series, report)?;

    root.present()
        .map_err(|e| ForecastError::PlotError(e.to_string()))?;

    Ok(())
}

/// Left panel: observed data joined by a line
fn draw_series_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    series: &RevenueSeries,
) -> Result<()> {
    let (x_range, y_range) = axis_ranges(series.months(), series.revenue().iter().copied());

    let mut chart = ChartBuilder::on(area)
        .caption("Revenue time series", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| ForecastError::PlotError(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Month")
        .y_desc("Revenue, mln RUB")
        .draw()
        .map_err(|e| ForecastError::PlotError(e.to_string()))?;

    let observed: Vec<(f64, f64)> = series
        .months()
        .iter()
        .zip(series.revenue().iter())
        .map(|(&x, &y)| (x, y))
        .collect();

    chart
        .draw_series(LineSeries::new(observed.iter().copied(), &BLUE))
        .map_err(|e| ForecastError::PlotError(e.to_string()))?
        .label("Actual data")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(
            observed
                .iter()
                .map(|&point| Circle::new(point, 3, BLUE.filled())),
        )
        .map_err(|e| ForecastError::PlotError(e.to_string()))?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| ForecastError::PlotError(e.to_string()))?;

    Ok(())
}

/// Right panel: observed points, linear trend line, seasonal curve
fn draw_trends_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    series: &RevenueSeries,
    report: &AnalysisReport,
) -> Result<()> {
    let values = series
        .revenue()
        .iter()
        .chain(report.linear_trend.iter())
        .chain(report.seasonal_curve.iter())
        .copied();
    let (x_range, y_range) = axis_ranges(&report.extended_months, values);

    let mut chart = ChartBuilder::on(area)
        .caption("Trends: linear and seasonal", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| ForecastError::PlotError(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Month")
        .y_desc("Revenue, mln RUB")
        .draw()
        .map_err(|e| ForecastError::PlotError(e.to_string()))?;

    chart
        .draw_series(
            series
                .months()
                .iter()
                .zip(series.revenue().iter())
                .map(|(&x, &y)| Circle::new((x, y), 3, BLUE.filled())),
        )
        .map_err(|e| ForecastError::PlotError(e.to_string()))?
        .label("Actual data")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, BLUE.filled()));

    chart
        .draw_series(LineSeries::new(
            series
                .months()
                .iter()
                .zip(report.linear_trend.iter())
                .map(|(&x, &y)| (x, y)),
            &RED,
        ))
        .map_err(|e| ForecastError::PlotError(e.to_string()))?
        .label("Linear trend")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .draw_series(DashedLineSeries::new(
            report
                .extended_months
                .iter()
                .zip(report.seasonal_curve.iter())
                .map(|(&x, &y)| (x, y)),
            6,
            4,
            GREEN.stroke_width(1),
        ))
        .map_err(|e| ForecastError::PlotError(e.to_string()))?
        .label("Seasonal trend (sine)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| ForecastError::PlotError(e.to_string()))?;

    Ok(())
}

/// Padded axis ranges covering the plotted months and values
fn axis_ranges(
    months: &[f64],
    values: impl Iterator<Item = f64>,
) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let x_max = months.iter().copied().fold(f64::MIN, f64::max);
    let (y_min, y_max) = values.fold((f64::MAX, f64::MIN), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    let y_pad = ((y_max - y_min) * 0.1).max(1.0);
    (0.0..x_max + 1.0, y_min - y_pad..y_max + y_pad)
}
