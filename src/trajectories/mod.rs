//! # Trajectories: pivot, jitter, and reconstruction
//!
//! Facilities to turn a batch of simulated outbreak trajectories into a batch that can be
//! drawn without coincident line segments hiding each other.
//!
//! Modules
//! -----------------
//! * [`pivot`](crate::trajectories::pivot) – Group a batch by exact `(time, value)` coordinate.
//! * [`unpivot`](crate::trajectories::unpivot) – Rebuild and validate a batch from `(iter, time, value)` records.
//! * [`jitter_engine`](crate::trajectories::jitter_engine) – Spread coincident points into symmetric fans.
//! * [`sampling`](crate::trajectories::sampling) – Draw runs from an external simulator, accumulate, jitter,
//!   and map displayed runs back to their raw final size.
//! * [`records_csv`](crate::trajectories::records_csv) – CSV exchange of coordinate records.
//!
//! Data Model
//! -----------------
//! * **Trajectory:** `Vec<f64>`, the cumulative count at time steps `0, 1, …, T-1`.
//! * **Batch:** `Vec<Trajectory>`; the position of a trajectory is its `iter`.
//! * **Coordinate record:** `(iter, time, value)`, one per position of the batch.
//!
//! Shape
//! -----------------
//! Every transformation here keeps the number of trajectories and the length of each of
//! them. Only values move; time indices never do.
//!
//! Quick-Start
//! -----------------
//! ```rust
//! use reedfrost_jitter::trajectories::jitter_engine::jitter_trajectories;
//!
//! let batch = vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0], vec![1.0]];
//! let shown = jitter_trajectories(&batch, 0.25).unwrap();
//!
//! assert_eq!(shown.len(), 3);
//! assert_eq!(shown[0].len(), 3);
//! assert_eq!(shown[0][2], 3.0); // nobody else passes through (2, 3.0)
//! ```
pub mod jitter_engine;
pub mod pivot;
pub mod records_csv;
pub mod sampling;
pub mod unpivot;
