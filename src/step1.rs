use crate::block::{Block, Interval, ValidProfiles};
use crate::candidates::{ProfileCandidateGenerator, Shape};
use crate::error::ProfileError;
use crate::kinematics::{BoundaryKinematics, BoundaryState};
use crate::limits::{DirectedLimits, LimitSet};
use crate::profile::Profile;
use crate::validator::ProfileValidator;

/// Time-optimal velocity-interface solver for one axis ("step 1").
///
/// Finds the fastest jerk-limited profile from the start state to the target
/// velocity and acceleration, together with the durations the axis can not
/// be stretched to. The solve runs a fixed decision tree over shapes and jerk
/// directions and does not allocate.
///
/// # Detailed explanation of the logic:
///
/// 1. **Zero jerk**. Without jerk the acceleration is frozen, so only the
///    single-step shape can apply. A non-zero plateau acceleration cannot be
///    slowed down either, which blocks every longer duration.
///
/// 2. **Zero end acceleration**. Solutions for the two jerk directions do not
///    overlap, so the direction matching the velocity change is tried first
///    and the search stops at the first valid profile.
///
/// 3. **General case**. Every shape in both directions is validated and the
///    accepted profiles are reduced by [`Block::calculate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityStep1 {
    kinematics: BoundaryKinematics,
    limits: LimitSet,
}

impl VelocityStep1 {
    pub fn new(start: BoundaryState, end: BoundaryState, limits: LimitSet) -> Self {
        Self {
            kinematics: BoundaryKinematics::new(start, end),
            limits,
        }
    }

    pub fn kinematics(&self) -> &BoundaryKinematics {
        &self.kinematics
    }

    pub fn limits(&self) -> &LimitSet {
        &self.limits
    }

    /// Solves for the minimum-time profile and the duration block.
    pub fn get_profile(&self) -> Result<Block, ProfileError> {
        let vd = self.kinematics.delta_velocity();
        let generator = ProfileCandidateGenerator::new(&self.kinematics);

        // 1) No jerk available
        if self.limits.j_max == 0.0 {
            return self.single_step(&generator);
        }

        let mut valid = ValidProfiles::default();

        if self.kinematics.end.acceleration.abs() < f64::EPSILON {
            // 2) Stop at the first valid profile, preferred direction first
            let preferred = DirectedLimits::toward(&self.limits, vd);
            for limits in [preferred, preferred.flipped()] {
                if self.collect(&generator, limits, &mut valid, true) {
                    break;
                }
            }
        } else {
            // 3) Exhaustive search over both directions
            for limits in [DirectedLimits::up(&self.limits), DirectedLimits::down(&self.limits)] {
                self.collect(&generator, limits, &mut valid, false);
            }
        }

        if valid.is_empty() {
            tracing::debug!(
                vd,
                a0 = self.kinematics.start.acceleration,
                af = self.kinematics.end.acceleration,
                "no valid velocity profile"
            );
            return Err(ProfileError::NoFeasibleProfile { delta_velocity: vd });
        }

        Block::calculate(valid.as_slice()).inspect_err(|err| {
            tracing::debug!(count = valid.len(), %err, "velocity profiles do not form a block");
        })
    }

    /// Validates the candidates of one direction into `valid`.
    ///
    /// Returns true once a profile was accepted and `first_only` is set.
    fn collect(
        &self,
        generator: &ProfileCandidateGenerator,
        limits: DirectedLimits,
        valid: &mut ValidProfiles,
        first_only: bool,
    ) -> bool {
        let validator = ProfileValidator::new(&limits);
        for candidate in generator.candidates(limits) {
            let mut profile = Profile::new(&self.kinematics);
            profile.t = candidate.t;
            if !validator.check(&mut profile, candidate.shape.reached_limits()) {
                continue;
            }

            tracing::trace!(
                shape = ?candidate.shape,
                signs = ?profile.control_signs,
                duration = profile.duration(),
                "accepted velocity profile"
            );
            let pushed = valid.push(profile);
            debug_assert!(pushed, "more than three valid profiles per direction");
            if first_only {
                return true;
            }
        }
        false
    }

    fn single_step(&self, generator: &ProfileCandidateGenerator) -> Result<Block, ProfileError> {
        let limits = DirectedLimits::up(&self.limits);
        let accepted = generator.solve(Shape::SingleStep, &limits).and_then(|candidate| {
            let mut profile = Profile::new(&self.kinematics);
            profile.t = candidate.t;
            ProfileValidator::new(&limits)
                .check(&mut profile, candidate.shape.reached_limits())
                .then_some(profile)
        });

        let Some(profile) = accepted else {
            tracing::debug!(
                vd = self.kinematics.delta_velocity(),
                "velocity change unreachable without jerk"
            );
            return Err(ProfileError::NoFeasibleProfile {
                delta_velocity: self.kinematics.delta_velocity(),
            });
        };

        let mut block = Block::from_profile(profile);
        if self.kinematics.start.acceleration.abs() > f64::EPSILON {
            block.extra_intervals[0] = Some(Interval::new(block.t_min, f64::INFINITY));
        }
        Ok(block)
    }
}
