//! Merge-style evaluation for observation times that are already sorted.
//!
//! One cursor advances monotonically through the sample times while the
//! observations are consumed in order, so a full pass costs O(nx + ny) no
//! matter how the two time vectors interleave. The cursor never moves
//! backwards, which is why the observation order is a hard precondition.

use num_traits::Float;

use super::TimeSeries;

impl<'a, T: Float> TimeSeries<'a, T> {
    /// Resample every column at non-decreasing observation times, writing
    /// one row of `ncolumns` values per observation.
    ///
    /// The observation order is checked up front and rejected if any entry
    /// decreases. A cursor that has already advanced past an out-of-order
    /// observation would blend from an interval too far right without any
    /// indication; for arbitrary order use [`TimeSeries::resample`].
    ///
    /// For sorted input the results are identical to
    /// [`TimeSeries::resample`], including flat extrapolation at both
    /// boundaries.
    pub fn resample_monotonic(&self, query: &[T], out: &mut [T]) -> Result<(), &'static str> {
        if out.len() != query.len() * self.ncolumns {
            return Err("Dimension mismatch");
        }
        if query.windows(2).any(|w| w[1] < w[0]) {
            return Err("Observation times must be non-decreasing");
        }

        let nx = self.times.len();

        let mut ix = 0;
        for (row, &t) in out.chunks_exact_mut(self.ncolumns).zip(query) {
            // Advance to the last interval that starts below the observation,
            // stopping at the final interval so that outside-high
            // observations saturate the blend weights instead of the index
            while ix < nx - 2 && self.times[ix + 1] < t {
                ix += 1;
            }

            let (p0, p1) = self.weights(ix, t);
            self.blend_row(ix, p0, p1, row);
        }

        Ok(())
    }
}

/// Resample `ncolumns` signals sampled at `times` onto non-decreasing
/// observation times `query`, using a single merge-style pass.
///
/// This is a convenience function; to evaluate several observation sets
/// against one sampled series, build a [`TimeSeries`] once and reuse it.
#[inline]
pub fn resample_monotonic<T: Float>(
    times: &[T],
    vals: &[T],
    ncolumns: usize,
    query: &[T],
    out: &mut [T],
) -> Result<(), &'static str> {
    TimeSeries::new(times, vals, ncolumns)?.resample_monotonic(query, out)
}
