use crate::kinematics::BoundaryKinematics;
use crate::limits::ControlSigns;
use crate::motion_polynomial::MotionPolynomial;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which acceleration limit a profile holds as a plateau.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReachedLimits {
    /// No plateau: the acceleration turns around before touching a limit.
    #[default]
    None,
    /// The first acceleration limit in the jerk direction is held in phase 1.
    Acc0,
}

/// A seven-phase, piecewise-constant-jerk velocity profile.
///
/// Phases are: jerk, constant acceleration, jerk, constant velocity, jerk,
/// constant acceleration, jerk. Unused phases have zero duration. `a`, `v`
/// and `p` hold the state at the eight phase boundaries, with `p` measured
/// from the start of the profile.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Profile {
    pub t: [f64; 7],
    pub t_sum: [f64; 7],
    pub j: [f64; 7],
    pub a: [f64; 8],
    pub v: [f64; 8],
    pub p: [f64; 8],

    /// Target end acceleration.
    pub af: f64,
    /// Target end velocity.
    pub vf: f64,

    pub limits: ReachedLimits,
    pub control_signs: ControlSigns,
}

impl Profile {
    // Tolerances of the boundary match and limit check
    pub const V_PRECISION: f64 = 1e-8;
    pub const A_PRECISION: f64 = 1e-10;
    pub const A_EPS: f64 = 1e-12;

    // Upper bound on a profile duration to keep the integration finite
    pub const T_MAX: f64 = 1e12;

    /// Creates an empty profile anchored at the given boundary states.
    pub fn new(kinematics: &BoundaryKinematics) -> Self {
        let mut profile = Self::default();
        profile.set_boundary(kinematics);
        profile
    }

    pub fn set_boundary(&mut self, kinematics: &BoundaryKinematics) {
        self.a[0] = kinematics.start.acceleration;
        self.v[0] = kinematics.start.velocity;
        self.p[0] = 0.0;
        self.af = kinematics.end.acceleration;
        self.vf = kinematics.end.velocity;
    }

    /// Total duration of all seven phases.
    pub fn duration(&self) -> f64 {
        self.t_sum[6]
    }

    /// The constant-jerk polynomial of each phase.
    pub fn phases(&self) -> [MotionPolynomial; 7] {
        let mut phases = [MotionPolynomial::default(); 7];
        let mut start = 0.0;
        for (i, phase) in phases.iter_mut().enumerate() {
            *phase = MotionPolynomial::new(start, self.p[i], self.v[i], self.a[i], self.j[i]);
            start += self.t[i];
        }
        phases
    }

    /// Kinematic state at `time`, clamped to `[0, duration]`.
    ///
    /// After the last phase the jerk is reported as zero.
    pub fn state_at(&self, time: f64) -> MotionPolynomial {
        let time = time.clamp(0.0, self.duration());
        let phases = self.phases();
        for (i, phase) in phases.iter().enumerate() {
            if time < self.t_sum[i] {
                return phase.advance(time - phase.time);
            }
        }
        MotionPolynomial::new(self.duration(), self.p[7], self.v[7], self.a[7], 0.0)
    }
}
