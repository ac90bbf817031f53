//! Convenience methods for constructing observation grids in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
use num_traits::{Float, NumCast};

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    if n < 2 {
        return vec![start; n];
    }
    let dx: T = (stop - start) / <T as NumCast>::from(n - 1).unwrap();
    (0..n).map(|i| start + <T as NumCast>::from(i).unwrap() * dx).collect()
}

/// Generates `n` evenly spaced values from start toward stop,
/// excluding the endpoint, with spacing `(stop - start) / n`.
pub fn linspace_open<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    if n == 0 {
        return Vec::new();
    }
    let dx: T = (stop - start) / <T as NumCast>::from(n).unwrap();
    (0..n).map(|i| start + <T as NumCast>::from(i).unwrap() * dx).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(2.0_f32, 3.0, 1), vec![2.0]);
        assert!(linspace(2.0_f64, 3.0, 0).is_empty());
    }

    #[test]
    fn test_linspace_open() {
        let x = linspace_open(0.0, 10.0, 100);
        assert_eq!(x.len(), 100);
        assert_eq!(x[0], 0.0);
        assert!((x[99] - 9.9).abs() < 1e-12);
        assert_eq!(linspace_open(0.0, 1.0, 4), vec![0.0, 0.25, 0.5, 0.75]);
    }
}
