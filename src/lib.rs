#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(missing_docs)]
//! Library entry for dynsell.
//!
//! Given the price of selling `i` units as a single batch for every `i` up to
//! `n`, this crate finds the partition of an `n`-unit stock that maximizes
//! total revenue, and provides the tooling to benchmark the solver and fit
//! its empirical running time.
//!
//! # Modules
//! - [`batch`]: Batches, price tables, plans and the instance generator
//! - [`solver`]: Bottom-up dynamic program
//! - [`verifier`]: Plan consistency and brute-force optimality checks
//! - [`timing`]: Timer accumulator and benchmark harness
//! - [`fit`]: Quadratic least-squares fit of timings
//! - [`report`]: Text and CSV rendering
//! - [`plot`]: Visualization (optional in binaries)

/// Batches, price tables, selling plans and random instances
pub mod batch;

/// Library error type
pub mod error;

/// Dynamic-programming solver
pub mod solver;

/// Verification tools for solver output
pub mod verifier;

/// Timing harness and timer accumulator
pub mod timing;

/// Curve fitting for running-time samples
pub mod fit;

/// Text and CSV rendering of solutions and timings
pub mod report;

/// Visualization utilities for generating charts
pub mod plot;

pub use crate::batch::{Batch, Solution};
pub use crate::error::{Error, Result};
pub use crate::solver::solve;
