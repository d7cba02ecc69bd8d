//! Visualization utilities for benchmark results

use crate::fit::QuadraticFit;
use anyhow::Result;
use plotters::prelude::*;

/// Plots measured mean times against stock size with the fitted curve overlaid
pub fn plot_time_vs_size(
    sizes: &[usize],
    times: &[f64],
    fit: &QuadraticFit,
    out_path: &str,
) -> Result<()> {
    let root = BitMapBackend::new(out_path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let pts: Vec<(f64, f64)> = sizes.iter().map(|&n| n as f64).zip(times.iter().copied()).collect();
    let x_max = pts.iter().map(|(x, _)| *x).fold(0.0, f64::max).max(1.0);
    let curve: Vec<(f64, f64)> = (0..=200)
        .map(|k| {
            let x = x_max * k as f64 / 200.0;
            (x, fit.eval(x))
        })
        .collect();
    let y_max = pts
        .iter()
        .chain(curve.iter())
        .map(|(_, y)| *y)
        .fold(0.0, f64::max)
        .max(1e-12);
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Mean Solve Time vs Stock Size", ("sans-serif", 28))
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0..x_max, 0.0..(y_max * 1.05))?;
    chart
        .configure_mesh()
        .x_desc("stock size n")
        .y_desc("seconds")
        .draw()?;
    chart.draw_series(LineSeries::new(curve, &RED))?;
    chart.draw_series(pts.iter().map(|&p| Circle::new(p, 4, BLACK.filled())))?;
    root.present()?;
    Ok(())
}
