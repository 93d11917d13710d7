//! Linear resampling of column signals that share one irregularly spaced
//! time vector.
//!
//! The sampled data is viewed as an `nx × ncolumns` matrix: row `i` holds the
//! value of every signal at `times[i]`. Evaluating at an observation time
//! means finding the bracketing interval in the time vector, then blending
//! the two bracketing rows with convex weights. Observations outside the
//! sampled range take the nearest boundary row unchanged.

pub mod scan;
pub mod search;

pub use scan::resample_monotonic;
pub use search::resample;

use num_traits::Float;

/// Position of an observation time relative to the sampled range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Regime {
    /// Inside `[times[0], times[nx - 1]]`
    Inside,
    /// Before the first sampled time; the output holds the first row
    Before,
    /// After the last sampled time; the output holds the last row
    After,
}

/// A borrowed view of `ncolumns` signals sampled at shared times.
///
/// `times` must be strictly increasing. That is a caller contract, checked
/// only by the opt-in [`TimeSeries::check_times`]; evaluation with a
/// non-monotonic time vector produces nonsense values, not an error.
///
/// Values are row-major: `vals[i * ncolumns + c]` is signal `c` at
/// `times[i]`.
#[derive(Clone, Copy)]
pub struct TimeSeries<'a, T: Float> {
    times: &'a [T],
    vals: &'a [T],
    ncolumns: usize,
}

impl<'a, T: Float> TimeSeries<'a, T> {
    /// Build a new resampler over borrowed data.
    ///
    /// Requires at least two sample times, since a single sample leaves the
    /// bracketing interval undefined, and a value buffer of exactly
    /// `times.len() * ncolumns` entries.
    pub fn new(times: &'a [T], vals: &'a [T], ncolumns: usize) -> Result<Self, &'static str> {
        if times.len() < 2 {
            return Err("Too few sample times");
        }
        if ncolumns == 0 || vals.len() != times.len() * ncolumns {
            return Err("Dimension mismatch");
        }

        Ok(Self {
            times,
            vals,
            ncolumns,
        })
    }

    /// Number of signal columns.
    pub fn ncolumns(&self) -> usize {
        self.ncolumns
    }

    /// Number of sample times (matrix rows).
    pub fn ntimes(&self) -> usize {
        self.times.len()
    }

    /// Opt-in check that the sample times are strictly increasing.
    ///
    /// Evaluation never runs this implicitly; call it once at the boundary
    /// when the time vector comes from an untrusted source.
    pub fn check_times(&self) -> Result<(), &'static str> {
        match self.times.windows(2).all(|w| w[0] < w[1]) {
            true => Ok(()),
            false => Err("Sample times must be strictly increasing"),
        }
    }

    /// Flag observation times that fall outside the sampled range by at
    /// least `atol`, writing one flag per observation.
    ///
    /// Out-of-range observations clamp silently during evaluation; this is
    /// the way to find out which ones did.
    pub fn check_bounds(&self, query: &[T], atol: T, out: &mut [bool]) -> Result<(), &'static str> {
        if out.len() != query.len() {
            return Err("Dimension mismatch");
        }

        let lo = self.times[0];
        let hi = self.times[self.times.len() - 1];
        for (flag, &t) in out.iter_mut().zip(query) {
            *flag = (t - lo) <= -atol || (t - hi) >= atol;
        }

        Ok(())
    }

    /// Get the index of the lower end of the bracketing interval for an
    /// observation time, clipped to a valid interval start, along with which
    /// side of the sampled range the observation falls on.
    #[inline]
    pub fn bracket(&self, t: T) -> (usize, Regime) {
        // Bisection returns 0 for observations outside-low and nx for
        // outside-high, so the raw index needs a brief signed representation
        let ix = ((self.times.partition_point(|v| *v < t) as isize - 1).max(0) as usize)
            .min(self.times.len() - 2);

        let regime = match t {
            x if x < self.times[0] => Regime::Before,
            x if x > self.times[self.times.len() - 1] => Regime::After,
            _ => Regime::Inside,
        };

        (ix, regime)
    }

    /// Convex blend weights for the interval starting at `ix`, saturating to
    /// (1, 0) or (0, 1) when the observation is outside the interval's reach.
    #[inline]
    pub(crate) fn weights(&self, ix: usize, t: T) -> (T, T) {
        let (t0, t1) = (self.times[ix], self.times[ix + 1]);

        if t < t0 {
            (T::one(), T::zero())
        } else if t1 < t {
            (T::zero(), T::one())
        } else {
            let p1 = (t - t0) / (t1 - t0);
            (T::one() - p1, p1)
        }
    }

    /// Blend rows `ix` and `ix + 1` into one output row.
    #[inline]
    pub(crate) fn blend_row(&self, ix: usize, p0: T, p1: T, out: &mut [T]) {
        let lo = ix * self.ncolumns;
        let hi = lo + self.ncolumns;

        for c in 0..self.ncolumns {
            out[c] = p0 * self.vals[lo + c] + p1 * self.vals[hi + c];
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Regime, TimeSeries};

    #[test]
    fn test_new_rejects_bad_shapes() {
        // One sample is not enough to form an interval
        assert!(TimeSeries::new(&[0.0_f64], &[1.0], 1).is_err());

        let empty: &[f64] = &[];
        assert!(TimeSeries::new(empty, empty, 1).is_err());

        // Zero columns
        assert!(TimeSeries::new(&[0.0_f64, 1.0], &[][..], 0).is_err());

        // Value count must be ntimes * ncolumns
        assert!(TimeSeries::new(&[0.0_f64, 1.0], &[1.0, 2.0, 3.0], 2).is_err());

        let series = TimeSeries::new(&[0.0_f64, 1.0], &[1.0, 2.0, 3.0, 4.0], 2).unwrap();
        assert_eq!(series.ntimes(), 2);
        assert_eq!(series.ncolumns(), 2);
    }

    #[test]
    fn test_check_times() {
        let vals = [0.0_f64; 3];

        let good = TimeSeries::new(&[0.0_f64, 0.5, 3.0], &vals, 1).unwrap();
        assert!(good.check_times().is_ok());

        let decreasing = TimeSeries::new(&[0.0_f64, 2.0, 1.0], &vals, 1).unwrap();
        assert!(decreasing.check_times().is_err());

        // Repeated times are also rejected; they would put a zero-width
        // interval in the divisor
        let repeated = TimeSeries::new(&[0.0_f64, 1.0, 1.0], &vals, 1).unwrap();
        assert!(repeated.check_times().is_err());
    }

    #[test]
    fn test_bracket_regimes() {
        let times = [0.0_f64, 1.0, 4.0];
        let vals = [0.0_f64; 3];
        let series = TimeSeries::new(&times, &vals, 1).unwrap();

        assert_eq!(series.bracket(-1.0), (0, Regime::Before));
        assert_eq!(series.bracket(0.0), (0, Regime::Inside));
        assert_eq!(series.bracket(0.5), (0, Regime::Inside));
        assert_eq!(series.bracket(1.0), (0, Regime::Inside));
        assert_eq!(series.bracket(2.0), (1, Regime::Inside));
        assert_eq!(series.bracket(4.0), (1, Regime::Inside));
        assert_eq!(series.bracket(5.0), (1, Regime::After));
    }

    #[test]
    fn test_check_bounds() {
        let times = [0.0_f64, 1.0, 4.0];
        let vals = [0.0_f64; 3];
        let series = TimeSeries::new(&times, &vals, 1).unwrap();

        let query = [-0.5, 0.0, 2.0, 4.0, 4.5];
        let mut flags = [false; 5];
        series.check_bounds(&query, 1e-12, &mut flags).unwrap();
        assert_eq!(flags, [true, false, false, false, true]);

        // A loose tolerance admits nearby outside points
        series.check_bounds(&query, 1.0, &mut flags).unwrap();
        assert_eq!(flags, [false, false, false, false, false]);

        let mut short = [false; 2];
        assert!(series.check_bounds(&query, 1e-12, &mut short).is_err());
    }
}
