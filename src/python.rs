//! Python bindings for select functions from `interpts`.
//!
//! Shape policing for the host environment lives here: the core never sees
//! an output buffer that doesn't match `len(query) * ncolumns`.

use numpy::{PyArray1, PyArrayMethods};
use pyo3::exceptions;
use pyo3::prelude::*;

use crate::series;

#[pymodule]
#[pyo3(name = "interpts")]
fn interpts<'py>(_py: Python, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(resample_f64, m)?)?;
    m.add_function(wrap_pyfunction!(resample_f32, m)?)?;
    m.add_function(wrap_pyfunction!(resample_monotonic_f64, m)?)?;
    m.add_function(wrap_pyfunction!(resample_monotonic_f32, m)?)?;
    m.add_function(wrap_pyfunction!(check_bounds_f64, m)?)?;
    m.add_function(wrap_pyfunction!(check_bounds_f32, m)?)?;
    Ok(())
}

macro_rules! resample_impl {
    ($funcname:ident, $method:ident, $T:ty) => {
        #[pyfunction]
        fn $funcname<'py>(
            times: Bound<'py, PyArray1<$T>>,
            vals: Bound<'py, PyArray1<$T>>,
            ncolumns: usize,
            query: Bound<'py, PyArray1<$T>>,
            out: Bound<'py, PyArray1<$T>>,
        ) -> PyResult<()> {
            // PyArray readonly references are very lightweight,
            // but have to be kept alive while the slices are in use
            let times_ro = times.readonly();
            let vals_ro = vals.readonly();
            let query_ro = query.readonly();
            let mut out_rw = out.try_readwrite()?;

            // Evaluate
            match series::$method(
                times_ro.as_slice()?,
                vals_ro.as_slice()?,
                ncolumns,
                query_ro.as_slice()?,
                out_rw.as_slice_mut()?,
            ) {
                Ok(()) => Ok(()),
                Err(msg) => Err(exceptions::PyAssertionError::new_err(msg)),
            }
        }
    };
}

resample_impl!(resample_f64, resample, f64);
resample_impl!(resample_f32, resample, f32);
resample_impl!(resample_monotonic_f64, resample_monotonic, f64);
resample_impl!(resample_monotonic_f32, resample_monotonic, f32);

macro_rules! check_bounds_impl {
    ($funcname:ident, $T:ty) => {
        #[pyfunction]
        fn $funcname<'py>(
            times: Bound<'py, PyArray1<$T>>,
            vals: Bound<'py, PyArray1<$T>>,
            ncolumns: usize,
            query: Bound<'py, PyArray1<$T>>,
            atol: $T,
            out: Bound<'py, PyArray1<bool>>,
        ) -> PyResult<()> {
            let times_ro = times.readonly();
            let vals_ro = vals.readonly();
            let query_ro = query.readonly();
            let mut out_rw = out.try_readwrite()?;

            let times_s = times_ro.as_slice()?;
            let vals_s = vals_ro.as_slice()?;
            let query_s = query_ro.as_slice()?;
            let out_s = out_rw.as_slice_mut()?;

            // Evaluate
            let res = series::TimeSeries::new(times_s, vals_s, ncolumns)
                .and_then(|s| s.check_bounds(query_s, atol, out_s));

            match res {
                Ok(()) => Ok(()),
                Err(msg) => Err(exceptions::PyAssertionError::new_err(msg)),
            }
        }
    };
}

check_bounds_impl!(check_bounds_f64, f64);
check_bounds_impl!(check_bounds_f32, f32);
