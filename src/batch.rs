//! Batches, price tables and selling plans

use crate::error::{Error, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A stock of `size` units sold together for `price`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Number of units in the batch
    pub size: usize,
    /// Revenue obtained by selling the whole batch at once
    pub price: f64,
}
impl Batch {
    /// The empty batch at index 0 of every price table
    pub const ZERO: Batch = Batch { size: 0, price: 0.0 };

    /// Creates a batch of `size` units priced at `price`
    pub fn new(size: usize, price: f64) -> Self { Self { size, price } }
    /// True for the empty batch that closes every plan
    pub fn is_empty(&self) -> bool { self.size == 0 }
}
impl From<(usize, f64)> for Batch {
    fn from((size, price): (usize, f64)) -> Self { Self { size, price } }
}

/// Builds a dense price table from the prices of sizes 1..=n.
///
/// Index 0 is filled with [`Batch::ZERO`].
pub fn price_table(prices: &[f64]) -> Vec<Batch> {
    std::iter::once(Batch::ZERO)
        .chain(prices.iter().enumerate().map(|(i, &p)| Batch::new(i + 1, p)))
        .collect()
}

/// Checks the table is non-empty, densely indexed from zero and priced with
/// finite non-negative numbers.
pub fn validate_table(table: &[Batch]) -> Result<()> {
    let first = table
        .first()
        .ok_or_else(|| Error::InvalidInput("price table is empty".into()))?;
    if first.price != 0.0 {
        return Err(Error::InvalidInput(format!(
            "batch 0 must be the zero batch (got price {})",
            first.price
        )));
    }
    for (i, b) in table.iter().enumerate() {
        if b.size != i {
            return Err(Error::InvalidInput(format!(
                "entry {} has size {}; table must be densely indexed from 0",
                i, b.size
            )));
        }
        if !b.price.is_finite() || b.price < 0.0 {
            return Err(Error::InvalidInput(format!(
                "entry {} has price {}; prices must be finite and ≥ 0",
                i, b.price
            )));
        }
    }
    Ok(())
}

/// A selling plan together with its total revenue
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Batches in cut order, always terminated by the zero batch
    pub plan: Vec<Batch>,
    /// Sum of the plan's prices
    pub value: f64,
}
impl Solution {
    /// Total number of units covered by the plan
    pub fn total_size(&self) -> usize { self.plan.iter().map(|b| b.size).sum() }
    /// The batches actually sold, skipping the terminating zero batch
    pub fn sold(&self) -> impl Iterator<Item = &Batch> + '_ {
        self.plan.iter().filter(|b| !b.is_empty())
    }
}

/// Inclusive range the per-unit rate of a generated instance is drawn from
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RateRange {
    /// Lowest per-unit rate
    pub min: u32,
    /// Highest per-unit rate
    pub max: u32,
}
impl Default for RateRange {
    fn default() -> Self { Self { min: 4, max: 8 } }
}
impl RateRange {
    /// Creates a range, rejecting `min > max`
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidInput(format!(
                "rate range is empty: min {} > max {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }
}

/// Generates a random price table for a stock of `n` units.
///
/// Batch i is priced `i * rate` with `rate` drawn independently per batch.
pub fn generate<R: Rng>(n: usize, rates: &RateRange, rng: &mut R) -> Vec<Batch> {
    (0..=n)
        .map(|i| {
            let rate = rng.gen_range(rates.min..=rates.max);
            Batch::new(i, (i as f64) * f64::from(rate))
        })
        .collect()
}
