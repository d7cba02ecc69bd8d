//! Consistency and optimality checks for solver output

use crate::batch::{validate_table, Batch, Solution};
use crate::error::{Error, Result};

/// Largest stock size checked against exhaustive enumeration
pub const BRUTE_FORCE_LIMIT: usize = 20;

/// Verification report for one solution
#[derive(Debug)]
pub struct Report {
    /// Stock size of the instance
    pub n: usize,
    /// Sum of the plan's batch sizes
    pub size_sum: usize,
    /// Sum of the plan's batch prices
    pub price_sum: f64,
    /// Best revenue found by enumeration, when `n` is small enough
    pub brute_force_value: Option<f64>,
    /// Whether the reported value matches every available check
    pub optimal_ok: bool,
}

/// Best revenue over all partitions of `n`, by enumeration.
///
/// Parts are taken in non-increasing order so each partition is visited once.
pub fn brute_force_value(prices: &[Batch], n: usize) -> f64 {
    fn best(prices: &[Batch], rest: usize, max_part: usize) -> f64 {
        if rest == 0 {
            return 0.0;
        }
        (1..=max_part.min(rest))
            .map(|f| prices[f].price + best(prices, rest - f, f))
            .fold(f64::NEG_INFINITY, f64::max)
    }
    best(prices, n, n)
}

/// Checks that `sol` covers the whole stock of `prices`, that its value is
/// the sum of its prices and, for small stocks, that nothing beats it.
pub fn verify_solution(prices: &[Batch], sol: &Solution) -> Result<Report> {
    validate_table(prices)?;
    let n = prices.len() - 1;

    for b in &sol.plan {
        match prices.get(b.size) {
            Some(p) if p.price == b.price => {}
            _ => {
                return Err(Error::InvalidInput(format!(
                    "plan batch {:?} is not in the price table",
                    b
                )))
            }
        }
    }

    let size_sum = sol.total_size();
    let price_sum: f64 = sol.plan.iter().map(|b| b.price).sum();
    let tol = 1e-9 * price_sum.abs().max(1.0);
    let mut optimal_ok = size_sum == n && (price_sum - sol.value).abs() <= tol;

    let brute = (n <= BRUTE_FORCE_LIMIT).then(|| brute_force_value(prices, n));
    if let Some(v) = brute {
        optimal_ok &= (v - sol.value).abs() <= tol;
    }

    Ok(Report {
        n,
        size_sum,
        price_sum,
        brute_force_value: brute,
        optimal_ok,
    })
}
