//! Runs the trend analysis on the builtin monthly revenue dataset,
//! prints both forecasts and renders the chart.

use revenue_forecast::analysis::run_analysis;
use revenue_forecast::data::monthly_revenue;
use revenue_forecast::error::Result;
use revenue_forecast::plot::render_chart;

const CHART_PATH: &str = "revenue_forecast.png";

fn main() -> Result<()> {
    let series = monthly_revenue();

    let report = run_analysis(&series)?;
    println!("{}", report.summary());

    render_chart(&series, &report, CHART_PATH)?;
    println!("Chart written to {}", CHART_PATH);

    Ok(())
}
