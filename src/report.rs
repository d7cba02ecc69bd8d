//! Human-readable and tabular output

use crate::batch::Solution;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::io;
use std::time::Duration;

/// Renders the sold batches of `sol` followed by its total revenue
pub fn format_solution(sol: &Solution) -> String {
    let mut out = String::from("Best selling plan:\n");
    for b in sol.sold() {
        let _ = writeln!(out, "stock of {} batches sold for {}", b.size, b.price);
    }
    let _ = write!(out, "Total amount of money: {}", sol.value);
    out
}

/// Renders `(n, t)` coordinate pairs separated by spaces
pub fn format_pairs(sizes: &[usize], times: &[f64]) -> String {
    sizes
        .iter()
        .zip(times)
        .map(|(n, t)| format!("({}, {})", n, t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Mean time in seconds, rounded to the nanosecond
pub fn secs(d: Duration) -> f64 { (d.as_secs_f64() * 1e9).round() / 1e9 }

/// One row of the timing table
#[derive(Debug, Serialize, Deserialize)]
pub struct TimingRow {
    /// Stock size
    pub size: usize,
    /// Mean solve time in seconds
    pub mean_secs: f64,
    /// Value of the fitted model at `size`
    pub fitted_secs: f64,
}

/// Writes `rows` as CSV with a single header line
pub fn write_timings_csv<W: io::Write>(w: W, rows: &[TimingRow]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}
