//! # Pivot: group a batch by `(time, value)` coordinate
//!
//! A batch of trajectories is inverted into a [`PivotMap`], which lists, for every
//! distinct [`Coordinate`], the indices of the trajectories passing through it.
//! Coordinates shared by more than one trajectory are the points that would be drawn
//! on top of each other, and are the points the jitter engine spreads apart.
//!
//! Keys
//! -----------------
//! * [`Coordinate`] is a structural key `(time, value)`, hashed through
//!   [`OrderedFloat`] so that equality is **exact** on the value.
//! * `0.0` and `-0.0` are the same coordinate.
//!
//! Values
//! -----------------
//! * A `SmallVec` of [`Iter`] in insertion order, which is ascending `iter` because
//!   the batch is walked trajectory by trajectory.
//!
//! See also
//! ------------
//! * [`unpivot_trajectories`](crate::trajectories::unpivot::unpivot_trajectories) – Inverse direction.
//! * [`jitter_trajectories`](crate::trajectories::jitter_engine::jitter_trajectories) – Main consumer.
use std::collections::HashMap;

use ahash::RandomState;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::constants::{Iter, Time, Value};
use crate::trajectories::unpivot::CoordinateRecord;

/// A point of the `(time, value)` plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub time: Time,
    pub value: OrderedFloat<Value>,
}

impl Coordinate {
    pub fn new(time: Time, value: Value) -> Self {
        Coordinate {
            time,
            value: OrderedFloat(value),
        }
    }
}

/// Trajectory indices sharing one coordinate, most coordinates hold only a few.
pub type IterList = SmallVec<[Iter; 4]>;

/// Mapping from each distinct coordinate to the trajectories passing through it.
pub type PivotMap = HashMap<Coordinate, IterList, RandomState>;

/// Invert a batch into a [`PivotMap`].
///
/// Every `(iter, time)` position of the batch contributes its `iter` to the list stored
/// under `Coordinate { time, value }`. Empty batches and empty trajectories are valid and
/// simply contribute nothing.
///
/// Arguments
/// -----------------
/// * `batch` – Trajectories indexed by position; any slice of `AsRef<[Value]>` works.
///
/// Return
/// ----------
/// * The pivot map; each list is in ascending `iter` order.
///
/// Example
/// -----------------
/// ```rust
/// use reedfrost_jitter::trajectories::pivot::{pivot_trajectories, Coordinate};
///
/// let pivot = pivot_trajectories(&[vec![0.0, 1.0], vec![0.0, 3.0]]);
/// assert_eq!(pivot[&Coordinate::new(0, 0.0)].as_slice(), &[0, 1]);
/// assert_eq!(pivot[&Coordinate::new(1, 3.0)].as_slice(), &[1]);
/// ```
pub fn pivot_trajectories<T: AsRef<[Value]>>(batch: &[T]) -> PivotMap {
    let mut pivot = PivotMap::default();
    for (iter, trajectory) in batch.iter().enumerate() {
        for (time, &value) in trajectory.as_ref().iter().enumerate() {
            pivot
                .entry(Coordinate::new(time, value))
                .or_default()
                .push(iter);
        }
    }
    pivot
}

/// Largest number of trajectories sharing a single coordinate, at least `1`.
pub fn max_count(pivot: &PivotMap) -> usize {
    pivot.values().map(|iters| iters.len()).max().unwrap_or(1).max(1)
}

/// Expand a pivot map back into one [`CoordinateRecord`] per `(iter, coordinate)` pair.
///
/// The records come out in map order; [`unpivot_trajectories`](crate::trajectories::unpivot::unpivot_trajectories)
/// sorts them, so `unpivot_trajectories(pivot_to_records(&pivot_trajectories(b)))` rebuilds `b`
/// whenever `b` has no empty trajectory.
pub fn pivot_to_records(pivot: &PivotMap) -> Vec<CoordinateRecord> {
    pivot
        .iter()
        .flat_map(|(coord, iters)| {
            iters.iter().map(move |&iter| CoordinateRecord {
                iter,
                time: coord.time,
                value: coord.value.into_inner(),
            })
        })
        .collect()
}
