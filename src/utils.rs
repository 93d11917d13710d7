//! Convenience methods for constructing time vectors in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    let dx: T = (stop - start) / T::from(n - 1).unwrap();
    (0..n).map(|i| start + T::from(i).unwrap() * dx).collect()
}

#[cfg(test)]
mod test {
    use super::linspace;

    #[test]
    fn test_linspace() {
        let x = linspace(0.0_f64, 1.0, 5);
        assert_eq!(x, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(x.len(), 5);
    }
}
