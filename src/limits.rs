use crate::error::LimitError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Acceleration and jerk limits of one axis.
///
/// `a_min <= 0 <= a_max` and `j_max >= 0` are the caller's responsibility.
/// [`LimitSet::new`] only checks them in debug builds; use
/// [`LimitSet::try_new`] for limits that come from configuration.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LimitSet {
    pub a_max: f64,
    pub a_min: f64,
    pub j_max: f64,
}

impl LimitSet {
    /// Creates a new LimitSet without runtime validation.
    pub fn new(a_max: f64, a_min: f64, j_max: f64) -> Self {
        debug_assert!(a_min <= 0.0 && 0.0 <= a_max, "acceleration limits must bracket zero");
        debug_assert!(j_max >= 0.0, "jerk limit must be non-negative");
        Self {
            a_max,
            a_min,
            j_max,
        }
    }

    /// Symmetric limits `[-a_lim, a_lim]`.
    pub fn symmetric(a_lim: f64, j_max: f64) -> Self {
        Self::new(a_lim.abs(), -a_lim.abs(), j_max)
    }

    /// Creates a new LimitSet, rejecting values that break the sign contract.
    pub fn try_new(a_max: f64, a_min: f64, j_max: f64) -> Result<Self, LimitError> {
        let limits = Self {
            a_max,
            a_min,
            j_max,
        };
        limits.validate()?;
        Ok(limits)
    }

    /// Checks the sign contract, e.g. after deserializing from a config file.
    pub fn validate(&self) -> Result<(), LimitError> {
        if !(self.a_max.is_finite() && self.a_min.is_finite() && self.j_max.is_finite()) {
            return Err(LimitError::NonFinite);
        }
        if self.a_max < 0.0 {
            return Err(LimitError::NegativeMaxAcceleration(self.a_max));
        }
        if self.a_min > 0.0 {
            return Err(LimitError::PositiveMinAcceleration(self.a_min));
        }
        if self.j_max < 0.0 {
            return Err(LimitError::NegativeJerk(self.j_max));
        }
        Ok(())
    }

    /// Limits of the reflected problem: bounds negated and swapped.
    pub fn mirrored(&self) -> Self {
        Self {
            a_max: -self.a_min,
            a_min: -self.a_max,
            j_max: self.j_max,
        }
    }
}

/// Order of the jerk signs in a profile.
///
/// `Uddu` starts by raising the acceleration (jerk up, down, down, up);
/// `Duud` is its mirror and starts by lowering it.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ControlSigns {
    #[default]
    Uddu,
    Duud,
}

/// Limits bound to one jerk direction.
///
/// For the downward direction the acceleration bounds trade places and the
/// jerk is negative, so the closed-form shapes can be written once for the
/// upward case.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectedLimits {
    pub a_max: f64,
    pub a_min: f64,
    pub j_max: f64,
}

impl DirectedLimits {
    pub fn up(limits: &LimitSet) -> Self {
        Self {
            a_max: limits.a_max,
            a_min: limits.a_min,
            j_max: limits.j_max,
        }
    }

    pub fn down(limits: &LimitSet) -> Self {
        Self {
            a_max: limits.a_min,
            a_min: limits.a_max,
            j_max: -limits.j_max,
        }
    }

    /// `up` for a non-negative velocity change, `down` otherwise.
    pub fn toward(limits: &LimitSet, delta_velocity: f64) -> Self {
        if delta_velocity >= 0.0 {
            Self::up(limits)
        } else {
            Self::down(limits)
        }
    }

    /// The opposite direction on the same limits.
    pub fn flipped(&self) -> Self {
        Self {
            a_max: self.a_min,
            a_min: self.a_max,
            j_max: -self.j_max,
        }
    }

    pub fn sign(&self) -> ControlSigns {
        if self.j_max < 0.0 || (self.j_max == 0.0 && self.a_max < self.a_min) {
            ControlSigns::Duud
        } else {
            ControlSigns::Uddu
        }
    }

    /// Physical upper acceleration bound, independent of direction.
    pub fn upper_acceleration(&self) -> f64 {
        self.a_max.max(self.a_min)
    }

    /// Physical lower acceleration bound, independent of direction.
    pub fn lower_acceleration(&self) -> f64 {
        self.a_min.min(self.a_max)
    }
}
