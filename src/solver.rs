//! Bottom-up dynamic program for the optimal selling plan
//!
//! For every stock size `M` the table keeps the best first cut `f` and the
//! revenue `price(f) + value(M - f)`. The plan for `M` is the batch `f`
//! followed by the plan for `M - f`, so only the cut needs to be stored.

use crate::batch::{validate_table, Batch, Solution};
use crate::error::Result;

/// Best first cut and revenue for one stock size
#[derive(Clone, Copy, Debug)]
struct Entry {
    cut: usize,
    value: f64,
}

/// Solution table indexed by stock size, filled in increasing order
struct Table {
    entries: Vec<Entry>,
}
impl Table {
    fn with_base(zero: &Batch, n: usize) -> Self {
        let mut entries = Vec::with_capacity(n + 1);
        entries.push(Entry { cut: 0, value: zero.price });
        Self { entries }
    }

    fn value(&self, size: usize) -> f64 { self.entries[size].value }

    fn push(&mut self, e: Entry) { self.entries.push(e); }

    /// Walks the stored cuts from `n` down to the zero batch.
    fn plan(&self, prices: &[Batch], n: usize) -> Vec<Batch> {
        let mut plan = Vec::new();
        let mut m = n;
        while m > 0 {
            let cut = self.entries[m].cut;
            plan.push(prices[cut]);
            m -= cut;
        }
        plan.push(prices[0]);
        plan
    }
}

/// Computes the revenue-maximizing partition of the stock described by
/// `prices`, where `prices[i]` is the price of a single batch of `i` units.
///
/// Among plans of equal revenue the one with the larger first cut wins: a
/// candidate replaces the running best when it is greater than *or equal*
/// to it.
///
/// ```
/// use dynsell::batch::{price_table, Batch};
/// use dynsell::solver::solve;
///
/// let sol = solve(&price_table(&[5.0, 9.0, 18.0, 21.0])).unwrap();
/// assert_eq!(sol.value, 23.0);
/// assert_eq!(sol.plan, vec![Batch::new(3, 18.0), Batch::new(1, 5.0), Batch::ZERO]);
/// ```
pub fn solve(prices: &[Batch]) -> Result<Solution> {
    validate_table(prices)?;
    let n = prices.len() - 1;
    let mut table = Table::with_base(&prices[0], n);

    for m in 1..=n {
        let mut best = Entry { cut: 0, value: 0.0 };
        for f in 1..=m {
            let candidate = prices[f].price + table.value(m - f);
            if candidate >= best.value {
                best = Entry { cut: f, value: candidate };
            }
        }
        tracing::trace!(size = m, cut = best.cut, value = best.value, "table entry");
        table.push(best);
    }

    let solution = Solution {
        plan: table.plan(prices, n),
        value: table.value(n),
    };
    tracing::trace!(n, value = solution.value, batches = solution.plan.len(), "solved");
    Ok(solution)
}
