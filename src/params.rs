//! # Outbreak and sampling parameters
//!
//! This module defines the two configuration objects consumed by
//! [`sample_trajectories`](crate::trajectories::sampling::sample_trajectories):
//!
//! * [`OutbreakParams`] – what is simulated: initial susceptibles `s0`, initial
//!   infected `i0`, and the per-contact transmission probability `prob`.
//! * [`SamplingParams`] – how many runs are drawn, from which base seed, and how
//!   widely coincident points are spread afterwards.
//!
//! Both come with a fluent builder whose `build()` validates the values and returns
//! [`JitterError::InvalidArgument`] on the first violated rule.
//!
//! ## Example
//!
//! ```rust
//! use reedfrost_jitter::params::{OutbreakParams, SamplingParams};
//!
//! let outbreak = OutbreakParams::builder().s0(20).i0(2).prob(0.1).build().unwrap();
//! let sampling = SamplingParams::builder()
//!     .n_trajectories(50)
//!     .base_seed(7)
//!     .jitter_range(0.5)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(outbreak.s0, 20);
//! assert_eq!(sampling.n_trajectories, 50);
//! ```
use std::cmp::Ordering::{Equal, Greater, Less};
use std::fmt;

use crate::constants::{DEFAULT_BASE_SEED, DEFAULT_JITTER_RANGE, DEFAULT_N_TRAJECTORIES};
use crate::jitter_errors::JitterError;

/// Return true iff x >= 0.0 and comparable (i.e., not NaN).
#[inline]
fn ge0(x: f64) -> bool {
    matches!(x.partial_cmp(&0.0), Some(Greater) | Some(Equal))
}

/// Return true iff x <= 1.0 and comparable (i.e., not NaN).
#[inline]
fn le1(x: f64) -> bool {
    matches!(x.partial_cmp(&1.0), Some(Less) | Some(Equal))
}

/// Parameters of one Reed–Frost outbreak.
///
/// Fields
/// -----------------
/// * `s0` – Initial number of susceptibles (≥ 1).
/// * `i0` – Initial number of infected (≥ 1).
/// * `prob` – Per-contact transmission probability, in `[0, 1]`.
///
/// Defaults
/// -----------------
/// `s0 = 10`, `i0 = 1`, `prob = 0.1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutbreakParams {
    pub s0: u64,
    pub i0: u64,
    pub prob: f64,
}

impl OutbreakParams {
    pub fn builder() -> OutbreakParamsBuilder {
        OutbreakParamsBuilder::new()
    }
}

impl Default for OutbreakParams {
    fn default() -> Self {
        OutbreakParams {
            s0: 10,
            i0: 1,
            prob: 0.1,
        }
    }
}

/// Builder for [`OutbreakParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct OutbreakParamsBuilder {
    params: OutbreakParams,
}

impl OutbreakParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn s0(mut self, v: u64) -> Self {
        self.params.s0 = v;
        self
    }
    pub fn i0(mut self, v: u64) -> Self {
        self.params.i0 = v;
        self
    }
    pub fn prob(mut self, v: f64) -> Self {
        self.params.prob = v;
        self
    }

    /// Validate and produce the [`OutbreakParams`].
    ///
    /// Validation rules
    /// -----------------
    /// * `s0 >= 1`, `i0 >= 1`.
    /// * `0.0 <= prob <= 1.0` (NaN is rejected).
    pub fn build(self) -> Result<OutbreakParams, JitterError> {
        let p = &self.params;
        if p.s0 == 0 {
            return Err(JitterError::InvalidArgument("s0 must be >= 1".into()));
        }
        if p.i0 == 0 {
            return Err(JitterError::InvalidArgument("i0 must be >= 1".into()));
        }
        if !(ge0(p.prob) && le1(p.prob)) {
            return Err(JitterError::InvalidArgument(
                "prob must lie in [0, 1]".into(),
            ));
        }
        Ok(self.params)
    }
}

impl fmt::Display for OutbreakParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Outbreak Parameters")?;
            writeln!(f, "-------------------")?;
            writeln!(f, "  s0   = {:<10} # Initial susceptibles", self.s0)?;
            writeln!(f, "  i0   = {:<10} # Initial infected", self.i0)?;
            write!(f, "  prob = {:<10.4} # Per-contact transmission probability", self.prob)
        } else {
            write!(f, "s0={}, i0={}, prob={:.4}", self.s0, self.i0, self.prob)
        }
    }
}

/// How a batch of runs is drawn and de-overlapped.
///
/// Fields
/// -----------------
/// * `n_trajectories` – Number of runs; `0` gives an empty batch.
/// * `base_seed` – Run `k` is simulated with seed `base_seed + 1 + k` (wrapping).
/// * `jitter_range` – Forwarded to
///   [`jitter_trajectories`](crate::trajectories::jitter_engine::jitter_trajectories);
///   finite and non-negative.
///
/// Defaults
/// -----------------
/// `n_trajectories = 100`, `base_seed = 44`, `jitter_range = 0.25`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub n_trajectories: usize,
    pub base_seed: u64,
    pub jitter_range: f64,
}

impl SamplingParams {
    pub fn builder() -> SamplingParamsBuilder {
        SamplingParamsBuilder::new()
    }
}

impl Default for SamplingParams {
    fn default() -> Self {
        SamplingParams {
            n_trajectories: DEFAULT_N_TRAJECTORIES,
            base_seed: DEFAULT_BASE_SEED,
            jitter_range: DEFAULT_JITTER_RANGE,
        }
    }
}

/// Builder for [`SamplingParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct SamplingParamsBuilder {
    params: SamplingParams,
}

impl SamplingParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn n_trajectories(mut self, v: usize) -> Self {
        self.params.n_trajectories = v;
        self
    }
    pub fn base_seed(mut self, v: u64) -> Self {
        self.params.base_seed = v;
        self
    }
    pub fn jitter_range(mut self, v: f64) -> Self {
        self.params.jitter_range = v;
        self
    }

    /// Validate and produce the [`SamplingParams`].
    ///
    /// Validation rules
    /// -----------------
    /// * `jitter_range` finite and `>= 0.0`.
    pub fn build(self) -> Result<SamplingParams, JitterError> {
        let p = &self.params;
        if !(ge0(p.jitter_range) && p.jitter_range.is_finite()) {
            return Err(JitterError::InvalidArgument(
                "jitter_range must be finite and non-negative".into(),
            ));
        }
        Ok(self.params)
    }
}

impl fmt::Display for SamplingParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Sampling Parameters")?;
            writeln!(f, "-------------------")?;
            writeln!(f, "  n_trajectories = {:<8} # Simulated runs", self.n_trajectories)?;
            writeln!(f, "  base_seed      = {:<8} # Run k uses base_seed + 1 + k", self.base_seed)?;
            write!(f, "  jitter_range   = {:<8.3} # Spread at the most crowded point", self.jitter_range)
        } else {
            write!(
                f,
                "n_trajectories={}, base_seed={}, jitter_range={:.3}",
                self.n_trajectories, self.base_seed, self.jitter_range
            )
        }
    }
}
