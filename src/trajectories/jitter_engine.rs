//! # Jitter engine: de-overlap a batch of trajectories
//!
//! Many runs of a stochastic outbreak model pass through exactly the same
//! `(time, value)` points, and superimposed line segments cannot be told apart.
//! [`jitter_trajectories`] spreads every group of coincident points into a small
//! symmetric fan while keeping each trajectory's length, time axis, and position
//! in the batch.
//!
//! Pipeline
//! -----------------
//! 1. [`pivot_trajectories`] groups the batch by coordinate.
//! 2. `space = jitter_range / max_count`, where `max_count` is the size of the most
//!    crowded coordinate (at least 1). The widest fan therefore spans strictly less
//!    than `jitter_range`, and thinner groups get proportionally tighter fans.
//! 3. At each coordinate the trajectory indices are sorted ascending and paired with
//!    [`jitter`]`(k, space)`: the lowest `iter` gets the lowest offset.
//! 4. [`unpivot_trajectories`] rebuilds the batch and validates the record set.
//!
//! Guarantees
//! -----------------
//! * `jitter_range == 0.0` returns the input value for value (all offsets are exactly `0.0`).
//! * A batch without coincident points is returned unchanged for any range.
//! * Same number of trajectories, same length for each one, empty trajectories included.
use itertools::Itertools;
use tracing::{debug, trace};

use crate::constants::{Batch, Iter, Trajectory, Value};
use crate::jitter_errors::JitterError;
use crate::spacing::jitter;
use crate::trajectories::pivot::{max_count, pivot_trajectories};
use crate::trajectories::unpivot::{unpivot_trajectories, CoordinateRecord};

/// Spread coincident points of a batch into symmetric fans.
///
/// Arguments
/// -----------------
/// * `batch` – Trajectories indexed by position; lengths may differ.
/// * `jitter_range` – Value-axis budget for the most crowded coordinate; must be
///   finite and non-negative.
///
/// Return
/// ----------
/// * `Ok(batch')` with the same shape as `batch`.
/// * `Err(JitterError::InvalidArgument)` if `jitter_range` is negative, NaN or infinite.
/// * `Err(JitterError::MalformedData)` if the rebuilt record set is inconsistent
///   (an internal invariant violation, never repaired).
///
/// Example
/// -----------------
/// ```rust
/// use reedfrost_jitter::trajectories::jitter_engine::jitter_trajectories;
///
/// let batch = vec![vec![1.0, 2.0], vec![1.0, 3.0]];
/// let out = jitter_trajectories(&batch, 0.5).unwrap();
///
/// // two runs share (0, 1.0): max_count = 2, space = 0.25
/// assert_eq!(out, vec![vec![0.875, 2.0], vec![1.125, 3.0]]);
/// ```
///
/// See also
/// ------------
/// * [`jitter`] – Offsets for one coordinate.
/// * [`pivot_trajectories`] / [`unpivot_trajectories`] – The two halves of the round trip.
pub fn jitter_trajectories<T: AsRef<[Value]>>(
    batch: &[T],
    jitter_range: f64,
) -> Result<Batch, JitterError> {
    if !(jitter_range.is_finite() && jitter_range >= 0.0) {
        return Err(JitterError::InvalidArgument(format!(
            "jitter_range must be finite and non-negative, got {jitter_range}"
        )));
    }

    // Empty trajectories have no records; work on the others under dense indices.
    let occupied: Vec<Iter> = batch
        .iter()
        .positions(|trajectory| !trajectory.as_ref().is_empty())
        .collect();
    let dense: Vec<&[Value]> = occupied.iter().map(|&i| batch[i].as_ref()).collect();

    let pivot = pivot_trajectories(&dense);
    let max_count = max_count(&pivot);
    let space = jitter_range / max_count as f64;
    debug!(
        trajectories = batch.len(),
        coordinates = pivot.len(),
        max_count,
        space,
        "jittering trajectory batch"
    );

    let n_records: usize = dense.iter().map(|t| t.len()).sum();
    let mut records = Vec::with_capacity(n_records);
    for (coord, iters) in &pivot {
        let mut iters = iters.clone();
        iters.sort_unstable();
        let offsets = jitter(iters.len(), space)?;
        let value = coord.value.into_inner();
        if iters.len() > 1 {
            trace!(time = coord.time, value, k = iters.len(), "fan");
        }

        records.extend(
            iters
                .iter()
                .zip_eq(offsets)
                .map(|(&iter, offset)| CoordinateRecord {
                    iter,
                    time: coord.time,
                    value: value + offset,
                }),
        );
    }

    let jittered = unpivot_trajectories(records)?;

    let mut out: Batch = vec![Trajectory::new(); batch.len()];
    for (iter, trajectory) in occupied.into_iter().zip_eq(jittered) {
        out[iter] = trajectory;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_jitter_trajectories_with_no_overlap() {
        let trajectories = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0], vec![6.0]];
        assert_eq!(jitter_trajectories(&trajectories, 0.1).unwrap(), trajectories);
    }

    #[test]
    fn test_zero_range_is_identity() {
        let trajectories = vec![vec![1.0, 2.0, 2.0], vec![1.0, 2.0], vec![1.0, 3.0, 3.0]];
        assert_eq!(jitter_trajectories(&trajectories, 0.0).unwrap(), trajectories);
    }

    #[test]
    fn test_fan_follows_iter_order() {
        // three runs share (0, 1.0), two share (1, 2.0)
        let trajectories = vec![vec![1.0, 2.0], vec![1.0, 2.0], vec![1.0, 5.0]];
        let out = jitter_trajectories(&trajectories, 0.3).unwrap();

        // max_count = 3, space = 0.1
        assert_abs_diff_eq!(out[0][0], 0.9, epsilon = 1e-12);
        assert_abs_diff_eq!(out[1][0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out[2][0], 1.1, epsilon = 1e-12);

        assert_abs_diff_eq!(out[0][1], 1.95, epsilon = 1e-12);
        assert_abs_diff_eq!(out[1][1], 2.05, epsilon = 1e-12);
        assert_eq!(out[2][1], 5.0);
    }

    #[test]
    fn test_empty_trajectories_keep_their_slot() {
        let trajectories = vec![vec![], vec![1.0, 2.0], vec![], vec![1.0], vec![]];
        let out = jitter_trajectories(&trajectories, 0.2).unwrap();

        let lengths: Vec<_> = out.iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![0, 2, 0, 1, 0]);
        // max_count = 2, space = 0.1
        assert_abs_diff_eq!(out[1][0], 0.95, epsilon = 1e-12);
        assert_abs_diff_eq!(out[3][0], 1.05, epsilon = 1e-12);
        assert_eq!(out[1][1], 2.0);
    }

    #[test]
    fn test_empty_batch() {
        let empty: Vec<Vec<f64>> = vec![];
        assert!(jitter_trajectories(&empty, 0.25).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_bad_range() {
        let trajectories = vec![vec![1.0]];
        for bad in [-0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                jitter_trajectories(&trajectories, bad),
                Err(JitterError::InvalidArgument(_))
            ));
        }
    }
}
