//! # Constants and type definitions
//!
//! This module centralizes the **default parameters** and the **common type definitions**
//! shared by the pivot, spreading, and reconstruction stages of the jitter pipeline.
//!
//! ## Overview
//!
//! - Defaults used by the sampling layer (number of runs, base seed, jitter range)
//! - Core type aliases naming the axes of a trajectory (`Iter`, `Time`, `Value`)
//! - Container aliases for a single trajectory and for a batch of trajectories
//!
//! These definitions are used by every module of the crate.

// -------------------------------------------------------------------------------------------------
// Defaults
// -------------------------------------------------------------------------------------------------

/// Number of simulated runs drawn per sampling call
pub const DEFAULT_N_TRAJECTORIES: usize = 100;

/// Base seed; run `k` uses `DEFAULT_BASE_SEED + 1 + k`
pub const DEFAULT_BASE_SEED: u64 = 44;

/// Maximum value-axis spread at the most crowded coordinate
pub const DEFAULT_JITTER_RANGE: f64 = 0.25;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Index of a trajectory inside a batch
pub type Iter = usize;

/// Discrete time step (generation) inside a trajectory
pub type Time = usize;

/// Cumulative count sampled at one time step
pub type Value = f64;

/// Values of one trajectory, ordered by time step.
pub type Trajectory = Vec<Value>;

/// Ordered set of trajectories; position in the vector is the [`Iter`].
pub type Batch = Vec<Trajectory>;
