//! # Sampling outbreak runs for display
//!
//! Glue between an external outbreak simulator and the jitter engine. A
//! [`TrajectorySource`] returns the per-generation **new infections** of one run; this
//! module draws a batch of runs with explicit, deterministic seeds, accumulates each
//! run into a cumulative trajectory, jitters the batch, and keeps the raw and the
//! jittered version side by side.
//!
//! Highlighting
//! -----------------
//! A companion final-size chart is keyed by the **raw** terminal value of a run.
//! [`SampledTrajectory::is_highlighted`] and [`highlighted_indices`] match on that raw
//! value, so selection keeps working after the displayed values have been shifted.
//!
//! Seeds
//! -----------------
//! Run `k` of a batch is simulated with [`seed_for`]`(base_seed, k) = base_seed + 1 + k`.
//! No global counter is involved: the same parameters always produce the same batch.
//!
//! Example
//! -----------------
//! ```rust
//! use reedfrost_jitter::params::{OutbreakParams, SamplingParams};
//! use reedfrost_jitter::trajectories::sampling::{highlighted_indices, sample_trajectories};
//!
//! // A toy source: every run infects `i0` people once, then stops.
//! let source = |p: &OutbreakParams, _seed: u64| vec![p.i0, p.i0, 0];
//!
//! let outbreak = OutbreakParams::builder().s0(10).i0(1).prob(0.2).build().unwrap();
//! let sampling = SamplingParams::builder().n_trajectories(3).build().unwrap();
//!
//! let samples = sample_trajectories(&source, &outbreak, &sampling).unwrap();
//! assert_eq!(samples[0].raw_data, vec![1.0, 2.0, 2.0]);
//! assert_eq!(highlighted_indices(&samples, Some(2.0)), vec![0, 1, 2]);
//! ```
use std::collections::BTreeMap;

use itertools::Itertools;
use ordered_float::OrderedFloat;
use tracing::debug;

use crate::constants::{Batch, Iter, Trajectory, Value};
use crate::jitter_errors::JitterError;
use crate::params::{OutbreakParams, SamplingParams};
use crate::trajectories::jitter_engine::jitter_trajectories;

/// Supplier of simulated outbreak runs.
///
/// `increments` returns the number of new infections per generation for one run,
/// starting with the initially infected. Any closure
/// `Fn(&OutbreakParams, u64) -> Vec<u64>` is a source.
pub trait TrajectorySource {
    fn increments(&self, params: &OutbreakParams, seed: u64) -> Vec<u64>;
}

impl<F> TrajectorySource for F
where
    F: Fn(&OutbreakParams, u64) -> Vec<u64>,
{
    fn increments(&self, params: &OutbreakParams, seed: u64) -> Vec<u64> {
        self(params, seed)
    }
}

/// A run as simulated (`raw_data`) and as displayed (`data`).
#[derive(Debug, Clone, PartialEq)]
pub struct SampledTrajectory {
    pub raw_data: Trajectory,
    pub data: Trajectory,
}

impl SampledTrajectory {
    /// Raw terminal value of the run, `None` for an empty run.
    pub fn final_size(&self) -> Option<Value> {
        self.raw_data.last().copied()
    }

    /// Whether the run ends exactly on `highlight`; `None` never highlights.
    pub fn is_highlighted(&self, highlight: Option<Value>) -> bool {
        match (highlight, self.final_size()) {
            (Some(h), Some(last)) => h == last,
            _ => false,
        }
    }
}

/// Seed used for run `k` of a batch.
#[inline]
pub fn seed_for(base_seed: u64, k: usize) -> u64 {
    base_seed.wrapping_add(1).wrapping_add(k as u64)
}

/// Running sum of per-generation increments.
///
/// Example
/// -----------------
/// ```rust
/// use reedfrost_jitter::trajectories::sampling::cumulative;
///
/// assert_eq!(cumulative(&[2, 3, 0, 1]), vec![2.0, 5.0, 5.0, 6.0]);
/// ```
pub fn cumulative(increments: &[u64]) -> Trajectory {
    increments
        .iter()
        .scan(0u64, |acc, &x| {
            *acc += x;
            Some(*acc as Value)
        })
        .collect()
}

/// Draw, accumulate, and jitter a batch of runs.
///
/// Arguments
/// -----------------
/// * `source` – External simulator.
/// * `outbreak` – Parameters forwarded to every run.
/// * `sampling` – Number of runs, base seed, and jitter range.
///
/// Return
/// ----------
/// * `Ok(samples)` with one [`SampledTrajectory`] per run, in run order.
/// * `Err(JitterError::InvalidArgument)` if `sampling.jitter_range` is invalid
///   (only reachable when the struct was built by hand, not through its builder).
///
/// See also
/// ------------
/// * [`jitter_trajectories`] – Applied once over the whole batch.
pub fn sample_trajectories<S: TrajectorySource + ?Sized>(
    source: &S,
    outbreak: &OutbreakParams,
    sampling: &SamplingParams,
) -> Result<Vec<SampledTrajectory>, JitterError> {
    let raw: Batch = (0..sampling.n_trajectories)
        .map(|k| cumulative(&source.increments(outbreak, seed_for(sampling.base_seed, k))))
        .collect();
    debug!(
        outbreak = %outbreak,
        runs = raw.len(),
        jitter_range = sampling.jitter_range,
        "sampled outbreak runs"
    );

    let jittered = jitter_trajectories(&raw, sampling.jitter_range)?;

    Ok(raw
        .into_iter()
        .zip_eq(jittered)
        .map(|(raw_data, data)| SampledTrajectory { raw_data, data })
        .collect())
}

/// Indices of the runs whose raw terminal value equals `highlight`.
pub fn highlighted_indices(samples: &[SampledTrajectory], highlight: Option<Value>) -> Vec<Iter> {
    samples
        .iter()
        .positions(|s| s.is_highlighted(highlight))
        .collect()
}

/// Empirical distribution of raw final sizes, keyed like the final-size chart.
pub fn final_size_counts(samples: &[SampledTrajectory]) -> BTreeMap<OrderedFloat<Value>, usize> {
    samples
        .iter()
        .filter_map(SampledTrajectory::final_size)
        .map(OrderedFloat)
        .counts()
        .into_iter()
        .collect()
}
