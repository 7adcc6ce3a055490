//! # Evenly spaced samples and symmetric jitter fans
//!
//! Two small numeric helpers used by the jitter engine:
//!
//! * [`linspace`] – `num` evenly spaced samples over a closed interval.
//! * [`jitter`] – `n` offsets centred on zero, one per trajectory sharing a coordinate.
//!
//! Conventions
//! -----------------
//! * `linspace` never fails: a non-positive `num` yields an empty vector and a
//!   degenerate interval (`start == stop`) yields a constant vector.
//! * For `num ≥ 2` the first sample is exactly `start` and the last one exactly `stop`,
//!   so a fan produced by [`jitter`] is symmetric to the last bit.
//! * With `space == 0.0` every offset is exactly `0.0`.
use crate::constants::Value;
use crate::jitter_errors::JitterError;

/// Return `num` evenly spaced samples from `start` to `stop`, both included.
///
/// Arguments
/// -----------------
/// * `start` – First sample.
/// * `stop` – Last sample (only reached when `num ≥ 2`).
/// * `num` – Number of samples; zero or negative values give an empty vector.
///
/// Return
/// ----------
/// * `[]` when `num ≤ 0`, `[start]` when `num == 1`, otherwise
///   `start + i·(stop-start)/(num-1)` for `i ∈ 0..num` with the last entry pinned to `stop`.
///
/// Example
/// -----------------
/// ```rust
/// use reedfrost_jitter::spacing::linspace;
///
/// assert_eq!(linspace(0.0, 10.0, 5), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
/// assert_eq!(linspace(1.0, 1.0, 3), vec![1.0, 1.0, 1.0]);
/// assert!(linspace(0.0, 10.0, -1).is_empty());
/// ```
pub fn linspace(start: f64, stop: f64, num: isize) -> Vec<f64> {
    match num {
        n if n <= 0 => Vec::new(),
        1 => vec![start],
        n => {
            let last = (n - 1) as usize;
            let step = (stop - start) / last as f64;
            (0..=last)
                .map(|i| if i == last { stop } else { start + i as f64 * step })
                .collect()
        }
    }
}

/// Offsets spreading `n` coincident points into a symmetric fan.
///
/// The offsets are sorted ascending, centred on zero, and consecutive offsets are
/// `space` apart, so the total span is `space·(n-1)`.
///
/// Arguments
/// -----------------
/// * `n` – Number of points sharing one coordinate.
/// * `space` – Gap between two neighbouring offsets; must be finite and non-negative.
///
/// Return
/// ----------
/// * `Ok([])` for `n == 0`, `Ok([0.0])` for `n == 1`,
///   `Ok(linspace(-half, half, n))` with `half = space·(n-1)/2` otherwise.
/// * `Err(JitterError::InvalidArgument)` if `space` is negative, NaN or infinite.
///
/// Example
/// -----------------
/// ```rust
/// use reedfrost_jitter::spacing::jitter;
///
/// let fan = jitter(3, 0.5).unwrap();
/// assert_eq!(fan, vec![-0.5, 0.0, 0.5]);
/// ```
pub fn jitter(n: usize, space: f64) -> Result<Vec<Value>, JitterError> {
    if !(space.is_finite() && space >= 0.0) {
        return Err(JitterError::InvalidArgument(format!(
            "jitter spacing must be finite and non-negative, got {space}"
        )));
    }

    let half = space * n.saturating_sub(1) as f64 / 2.0;
    Ok(match n {
        0 => Vec::new(),
        1 => vec![0.0],
        n => linspace(-half, half, n as isize),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_linspace_reference_cases() {
        assert_eq!(linspace(0.0, 10.0, 5), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
        assert_eq!(linspace(1.0, 1.0, 3), vec![1.0, 1.0, 1.0]);
        assert_eq!(linspace(0.0, 0.0, 0), Vec::<f64>::new());
        assert_eq!(linspace(0.0, 10.0, -1), Vec::<f64>::new());
    }

    #[test]
    fn test_linspace_single_sample_is_start() {
        assert_eq!(linspace(3.5, 100.0, 1), vec![3.5]);
    }

    #[test]
    fn test_linspace_descending_interval() {
        let v = linspace(1.0, -1.0, 3);
        assert_eq!(v, vec![1.0, 0.0, -1.0]);
    }

    #[test]
    fn test_linspace_endpoints_are_exact() {
        let v = linspace(0.1, 0.7, 7);
        assert_eq!(v.len(), 7);
        assert_eq!(v[0], 0.1);
        assert_eq!(v[6], 0.7);
    }

    #[test]
    fn test_jitter_small_counts() {
        assert_eq!(jitter(0, 0.3).unwrap(), Vec::<f64>::new());
        assert_eq!(jitter(1, 0.3).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_jitter_five_points() {
        let expected = [-0.2, -0.1, 0.0, 0.1, 0.2];
        let fan = jitter(5, 0.1).unwrap();
        assert_eq!(fan.len(), expected.len());
        for (a, b) in fan.iter().zip(expected) {
            assert_abs_diff_eq!(*a, b, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_jitter_is_sorted_symmetric_with_expected_span() {
        for n in 2..20 {
            let space = 0.037;
            let fan = jitter(n, space).unwrap();

            assert!(fan.windows(2).all(|w| w[0] <= w[1]));
            assert_eq!(fan[0], -fan[n - 1]);
            assert_abs_diff_eq!(
                fan[n - 1] - fan[0],
                space * (n - 1) as f64,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_jitter_zero_space_is_exact_zero() {
        assert!(jitter(7, 0.0).unwrap().iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_jitter_rejects_bad_space() {
        assert!(matches!(
            jitter(3, -0.1),
            Err(JitterError::InvalidArgument(_))
        ));
        assert!(matches!(
            jitter(3, f64::NAN),
            Err(JitterError::InvalidArgument(_))
        ));
        assert!(matches!(
            jitter(0, f64::INFINITY),
            Err(JitterError::InvalidArgument(_))
        ));
    }
}
