//! Order-insensitive evaluation, one bisection search per observation point.
//!
//! Each observation resolves its own bracket, so the observation times may
//! arrive in any order at O(log2(nx)) per point. This is the safe default;
//! see [`scan`](super::scan) for the cheaper path when the observations are
//! known to be sorted.

use num_traits::Float;

use super::TimeSeries;

impl<'a, T: Float> TimeSeries<'a, T> {
    /// Resample every column at the given observation times, writing one
    /// row of `ncolumns` values per observation.
    ///
    /// Observation times may be in any order and may fall outside the
    /// sampled range, in which case the nearest boundary row is held.
    #[inline]
    pub fn resample(&self, query: &[T], out: &mut [T]) -> Result<(), &'static str> {
        if out.len() != query.len() * self.ncolumns {
            return Err("Dimension mismatch");
        }

        for (row, &t) in out.chunks_exact_mut(self.ncolumns).zip(query) {
            let (ix, _) = self.bracket(t);
            let (p0, p1) = self.weights(ix, t);
            self.blend_row(ix, p0, p1, row);
        }

        Ok(())
    }

    /// Resample every column at a single observation time.
    #[inline]
    pub fn resample_one(&self, t: T, out: &mut [T]) -> Result<(), &'static str> {
        if out.len() != self.ncolumns {
            return Err("Dimension mismatch");
        }

        let (ix, _) = self.bracket(t);
        let (p0, p1) = self.weights(ix, t);
        self.blend_row(ix, p0, p1, out);

        Ok(())
    }

    /// Resample at the given observation times, allocating the output
    /// matrix for convenience.
    #[cfg(feature = "std")]
    pub fn resample_alloc(&self, query: &[T]) -> Result<Vec<T>, &'static str> {
        let mut out = vec![T::zero(); query.len() * self.ncolumns];
        self.resample(query, &mut out)?;
        Ok(out)
    }
}

/// Resample `ncolumns` signals sampled at `times` onto `query`, using one
/// bisection search per observation point.
///
/// This is a convenience function; to evaluate several observation sets
/// against one sampled series, build a [`TimeSeries`] once and reuse it.
#[inline]
pub fn resample<T: Float>(
    times: &[T],
    vals: &[T],
    ncolumns: usize,
    query: &[T],
    out: &mut [T],
) -> Result<(), &'static str> {
    TimeSeries::new(times, vals, ncolumns)?.resample(query, out)
}
