//! Piecewise-linear resampling of irregularly-sampled time series,
//! no-std and no-alloc compatible.
//!
//! A [`TimeSeries`] borrows a strictly increasing vector of sample times and a
//! row-major matrix of sampled values, one column per signal, and evaluates
//! every column at a new set of observation times. Observation points outside
//! the sampled range hold the nearest boundary row (flat extrapolation) rather
//! than extending the trend.
//!
//! Two evaluation paths are provided:
//!
//! | Method                             | Observation order | Cost            |
//! |------------------------------------|-------------------|-----------------|
//! | [`TimeSeries::resample`]           | arbitrary         | O(ny·log2(nx))  |
//! | [`TimeSeries::resample_monotonic`] | non-decreasing    | O(nx + ny)      |
//!
//! The bisection path is the general-purpose default; the merge-style scan is
//! cheaper when the observation times are already sorted, which is the common
//! case when resampling one recorded timeline onto another.
//!
//! # Example
//! ```rust
//! use interpts::TimeSeries;
//!
//! // Two signals sampled at three irregular times
//! let times = [0.0_f64, 1.0, 4.0];
//! let vals = [
//!     10.0, -1.0, // t = 0
//!     20.0, -2.0, // t = 1
//!     50.0, -5.0, // t = 4
//! ];
//!
//! let series = TimeSeries::new(&times, &vals, 2).unwrap();
//!
//! let query = [-1.0, 0.5, 2.5, 9.0];
//! let mut out = [0.0; 8];
//! series.resample(&query, &mut out).unwrap();
//!
//! assert_eq!(&out[..2], &[10.0, -1.0]); // held at the first row
//! assert_eq!(&out[2..4], &[15.0, -1.5]);
//! assert_eq!(&out[4..6], &[35.0, -3.5]);
//! assert_eq!(&out[6..], &[50.0, -5.0]); // held at the last row
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

pub mod series;
pub use series::{resample, resample_monotonic, Regime, TimeSeries};

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;

#[cfg(feature = "python")]
pub mod python;
