//! # Unpivot: rebuild a batch from coordinate records
//!
//! The jitter engine works on a flat, unordered set of [`CoordinateRecord`]s
//! `(iter, time, value)`. This module turns such a set back into a batch and checks,
//! on the way, that it describes one and only one value for every `(iter, time)`
//! position of a gap-free batch.
//!
//! Record contract
//! -----------------
//! * For each `iter`, the `time`s are exactly `0..T_iter`, without gaps or duplicates.
//! * The `iter`s are exactly `0..N`, without gaps.
//!
//! Any violation is reported as [`JitterError::MalformedData`] carrying the offending
//! record position and the position expected at that point. Nothing is repaired.
//!
//! See also
//! ------------
//! * [`pivot_to_records`](crate::trajectories::pivot::pivot_to_records) – Records from a pivot map.
//! * [`batch_to_records`] – Records straight from a batch.
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{Batch, Iter, Time, Trajectory, Value};
use crate::jitter_errors::JitterError;

/// One value of one trajectory at one time step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRecord {
    pub iter: Iter,
    pub time: Time,
    pub value: Value,
}

/// Flatten a batch into records, ordered by `(iter, time)`.
pub fn batch_to_records<T: AsRef<[Value]>>(batch: &[T]) -> Vec<CoordinateRecord> {
    batch
        .iter()
        .enumerate()
        .flat_map(|(iter, trajectory)| {
            trajectory
                .as_ref()
                .iter()
                .enumerate()
                .map(move |(time, &value)| CoordinateRecord { iter, time, value })
        })
        .collect()
}

/// Reassemble a batch from an unordered set of coordinate records.
///
/// The records are sorted by `(iter, time)` and walked once, extending the trajectory
/// currently being built or opening the next one.
///
/// Arguments
/// -----------------
/// * `records` – Coordinate records in any order.
///
/// Return
/// ----------
/// * `Ok(batch)` ordered by ascending `iter`, each trajectory ordered by ascending `time`.
///   An empty record set gives an empty batch.
/// * `Err(JitterError::MalformedData)` on a missing or duplicated time step, on a
///   skipped `iter`, or when the first record is not `(iter=0, time=0)`.
///
/// Example
/// -----------------
/// ```rust
/// use reedfrost_jitter::trajectories::unpivot::{unpivot_trajectories, CoordinateRecord};
///
/// let records = vec![
///     CoordinateRecord { iter: 1, time: 0, value: 4.0 },
///     CoordinateRecord { iter: 0, time: 1, value: 2.0 },
///     CoordinateRecord { iter: 0, time: 0, value: 1.0 },
/// ];
/// assert_eq!(unpivot_trajectories(records).unwrap(), vec![vec![1.0, 2.0], vec![4.0]]);
/// ```
pub fn unpivot_trajectories(mut records: Vec<CoordinateRecord>) -> Result<Batch, JitterError> {
    if records.is_empty() {
        return Ok(Batch::new());
    }
    records.sort_unstable_by_key(|r| (r.iter, r.time));

    let mut batch = Batch::new();
    let mut current = Trajectory::new();
    let mut this_iter: Iter = 0;
    let mut this_time: Time = 0;

    for record in records {
        if record.iter == this_iter && record.time == this_time {
            current.push(record.value);
            this_time += 1;
        } else if record.iter == this_iter + 1 && record.time == 0 && this_time > 0 {
            batch.push(std::mem::take(&mut current));
            current.push(record.value);
            this_iter = record.iter;
            this_time = 1;
        } else {
            warn!(
                iter = record.iter,
                time = record.time,
                expected_iter = this_iter,
                expected_time = this_time,
                "rejecting coordinate records"
            );
            return Err(JitterError::MalformedData {
                iter: record.iter,
                time: record.time,
                expected_iter: this_iter,
                expected_time: this_time,
            });
        }
    }
    batch.push(current);

    Ok(batch)
}
