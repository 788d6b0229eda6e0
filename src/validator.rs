use crate::limits::{ControlSigns, DirectedLimits};
use crate::motion_polynomial::MotionPolynomial;
use crate::profile::{Profile, ReachedLimits};

/// Accepts or rejects candidate profiles for one jerk direction.
///
/// A candidate passes when all phase durations are non-negative, the forward
/// integration lands on the target velocity and acceleration, and no phase
/// boundary leaves the acceleration limits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileValidator {
    jerk: f64,
    a_upp_lim: f64,
    a_low_lim: f64,
    control_signs: ControlSigns,
}

impl ProfileValidator {
    pub fn new(limits: &DirectedLimits) -> Self {
        Self {
            jerk: limits.j_max,
            a_upp_lim: limits.upper_acceleration() + Profile::A_EPS,
            a_low_lim: limits.lower_acceleration() - Profile::A_EPS,
            control_signs: limits.sign(),
        }
    }

    /// Integrates `profile.t` in place and tags the profile on success.
    pub fn check(&self, profile: &mut Profile, limits: ReachedLimits) -> bool {
        // Written as a negated comparison so that NaN durations are rejected
        if !(profile.t[0] >= 0.0) {
            return false;
        }
        profile.t_sum[0] = profile.t[0];
        for i in 0..6 {
            if !(profile.t[i + 1] >= 0.0) {
                return false;
            }
            profile.t_sum[i + 1] = profile.t_sum[i] + profile.t[i + 1];
        }

        if limits == ReachedLimits::Acc0 && profile.t[1] < f64::EPSILON {
            return false;
        }

        if profile.duration() > Profile::T_MAX {
            return false;
        }

        let jf = self.jerk;
        profile.j = [
            if profile.t[0] > 0.0 { jf } else { 0.0 },
            0.0,
            if profile.t[2] > 0.0 { -jf } else { 0.0 },
            0.0,
            if profile.t[4] > 0.0 { -jf } else { 0.0 },
            0.0,
            if profile.t[6] > 0.0 { jf } else { 0.0 },
        ];

        // The running state starts each phase at the previous phase's end time
        let mut state = MotionPolynomial::new(0.0, profile.p[0], profile.v[0], profile.a[0], 0.0);
        for i in 0..7 {
            state.jrk = profile.j[i];
            state = state.advance(profile.t[i]);
            profile.a[i + 1] = state.acc;
            profile.v[i + 1] = state.vel;
            profile.p[i + 1] = state.pos;
        }

        profile.limits = limits;
        profile.control_signs = self.control_signs;

        (profile.a[7] - profile.af).abs() < Profile::A_PRECISION
            && (profile.v[7] - profile.vf).abs() < Profile::V_PRECISION
            && profile.a[1..7]
                .iter()
                .all(|&a| a >= self.a_low_lim && a <= self.a_upp_lim)
    }
}
