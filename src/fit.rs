//! Least-squares fit of the quadratic model `t = a·n² + b`

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Fitted coefficients of `t = a·n² + b`
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct QuadraticFit {
    /// Coefficient of the squared size
    pub a: f64,
    /// Constant offset
    pub b: f64,
    /// Estimated covariance of `(a, b)`; `None` with only two samples,
    /// where the residual variance is undefined.
    pub covariance: Option<[[f64; 2]; 2]>,
}
impl QuadraticFit {
    /// Evaluates the model at `size`
    pub fn eval(&self, size: f64) -> f64 { self.a * size * size + self.b }
    /// Standard errors of `(a, b)` when the covariance is known
    pub fn std_errors(&self) -> Option<(f64, f64)> {
        self.covariance.map(|c| (c[0][0].sqrt(), c[1][1].sqrt()))
    }
}

/// Fits `times ≈ a·sizes² + b` by ordinary least squares.
///
/// The model is linear in `a` and `b`, so this is a simple regression of
/// `times` on `sizes²`.
pub fn fit_quadratic(sizes: &[f64], times: &[f64]) -> Result<QuadraticFit> {
    if sizes.len() != times.len() {
        return Err(Error::DegenerateFit(format!(
            "{} sizes but {} times",
            sizes.len(),
            times.len()
        )));
    }
    let n = sizes.len();
    if n < 2 {
        return Err(Error::DegenerateFit(format!("need ≥ 2 samples (got {})", n)));
    }
    let xs: Vec<f64> = sizes.iter().map(|s| s * s).collect();
    let nf = n as f64;
    let x_mean = xs.iter().sum::<f64>() / nf;
    let y_mean = times.iter().sum::<f64>() / nf;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in xs.iter().zip(times) {
        sxx += (x - x_mean) * (x - x_mean);
        sxy += (x - x_mean) * (y - y_mean);
    }
    if sxx <= 0.0 || !sxx.is_finite() {
        return Err(Error::DegenerateFit("all sizes are equal".into()));
    }
    let a = sxy / sxx;
    let b = y_mean - a * x_mean;

    let covariance = if n > 2 {
        let rss: f64 = xs
            .iter()
            .zip(times)
            .map(|(x, y)| {
                let r = y - (a * x + b);
                r * r
            })
            .sum();
        let s2 = rss / (nf - 2.0);
        // (XᵀX)⁻¹ for the design [x, 1]; det = n·Sxx
        let sum_x2: f64 = xs.iter().map(|x| x * x).sum();
        let det = nf * sxx;
        Some([
            [s2 * nf / det, -s2 * nf * x_mean / det],
            [-s2 * nf * x_mean / det, s2 * sum_x2 / det],
        ])
    } else {
        None
    };

    Ok(QuadraticFit { a, b, covariance })
}
