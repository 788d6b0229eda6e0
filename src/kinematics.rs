#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Velocity and acceleration of one axis at a segment boundary.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundaryState {
    pub velocity: f64,
    pub acceleration: f64,
}

impl BoundaryState {
    /// Creates a new BoundaryState.
    pub fn new(velocity: f64, acceleration: f64) -> Self {
        Self {
            velocity,
            acceleration,
        }
    }

    /// State of the reflected problem (velocity and acceleration negated).
    pub fn negated(&self) -> Self {
        Self::new(-self.velocity, -self.acceleration)
    }
}

/// Start and end state of a velocity-interface segment.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct BoundaryKinematics {
    pub start: BoundaryState,
    pub end: BoundaryState,
}

impl BoundaryKinematics {
    pub fn new(start: BoundaryState, end: BoundaryState) -> Self {
        Self { start, end }
    }

    /// Required velocity change `vf - v0`.
    pub fn delta_velocity(&self) -> f64 {
        self.end.velocity - self.start.velocity
    }

    /// Both boundaries reflected through zero.
    pub fn negated(&self) -> Self {
        Self::new(self.start.negated(), self.end.negated())
    }
}
