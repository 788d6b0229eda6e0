//! # scurve_velocity
//!
//! Closed-form, jerk-limited velocity profiles for one motion axis.
//!
//! Given the start and target velocity/acceleration of an axis and its
//! acceleration and jerk limits, [`VelocityStep1`] computes the minimum-time
//! seven-phase profile and a [`Block`] describing which longer durations the
//! axis can still realize. Multi-axis synchronization picks a common duration
//! from these blocks.
//!
//! This library provides the following modules:
//! - `kinematics` for the boundary states of a segment.
//! - `limits` for acceleration/jerk limits and their directed (mirrored) form.
//! - `candidates` for the closed-form profile shapes.
//! - `validator` for checking candidates by forward integration.
//! - `profile` for the seven-phase profile and its evaluation.
//! - `motion_polynomial` for a single constant-jerk phase.
//! - `block` for reducing valid profiles to feasible durations.
//! - `step1` for the solver driving all of the above.
//!
//! ```
//! use scurve_velocity::{BoundaryState, LimitSet, ReachedLimits, VelocityStep1};
//!
//! let start = BoundaryState::new(0.0, 0.0);
//! let end = BoundaryState::new(50.0, 0.0);
//! let block = VelocityStep1::new(start, end, LimitSet::symmetric(10.0, 100.0))
//!     .get_profile()
//!     .unwrap();
//!
//! assert_eq!(block.selected_profile.limits, ReachedLimits::Acc0);
//! assert!((block.t_min - 5.1).abs() < 1e-12);
//! ```

pub mod block;
pub mod candidates;
pub mod error;
pub mod kinematics;
pub mod limits;
pub mod motion_polynomial;
pub mod profile;
mod stack_buffer;
pub mod step1;
pub mod validator;

// Re-export main structs for convenience:
pub use block::*;
pub use candidates::*;
pub use error::*;
pub use kinematics::*;
pub use limits::*;
pub use motion_polynomial::*;
pub use profile::*;
pub use step1::*;
pub use validator::*;
