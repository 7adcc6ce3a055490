pub mod constants;
pub mod jitter_errors;
pub mod params;
pub mod spacing;
pub mod trajectories;

pub use constants::{Batch, Iter, Time, Trajectory, Value};
pub use jitter_errors::JitterError;
pub use params::{OutbreakParams, SamplingParams};
pub use spacing::{jitter, linspace};
pub use trajectories::jitter_engine::jitter_trajectories;
pub use trajectories::pivot::{pivot_trajectories, Coordinate, PivotMap};
pub use trajectories::sampling::{sample_trajectories, SampledTrajectory, TrajectorySource};
pub use trajectories::unpivot::{unpivot_trajectories, CoordinateRecord};
