use crate::kinematics::BoundaryKinematics;
use crate::limits::DirectedLimits;
use crate::profile::ReachedLimits;

/// Closed-form profile shapes of the velocity interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Ramp to the acceleration limit, hold it, ramp to the end acceleration.
    LimitReached,
    /// Ramp to a peak below the limit and back; the peak is `-sqrt(h1)`.
    NoLimitLower,
    /// Same as `NoLimitLower` with the peak at `+sqrt(h1)`.
    NoLimitUpper,
    /// Zero jerk: hold the (equal) boundary acceleration.
    SingleStep,
}

impl Shape {
    /// The general shapes, in the order they are tried for one direction.
    pub const GENERAL: [Shape; 3] = [Shape::LimitReached, Shape::NoLimitLower, Shape::NoLimitUpper];

    pub fn reached_limits(&self) -> ReachedLimits {
        match self {
            Shape::LimitReached => ReachedLimits::Acc0,
            Shape::NoLimitLower | Shape::NoLimitUpper | Shape::SingleStep => ReachedLimits::None,
        }
    }
}

/// Phase durations of one shape, not yet validated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub shape: Shape,
    pub t: [f64; 7],
}

/// Derives candidate phase durations from the boundary states.
///
/// All shapes are algebraic in `(a0, af, a_max, j_max, vd)`. A shape that does
/// not apply (zero divisor, negative discriminant) yields no candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileCandidateGenerator {
    a0: f64,
    af: f64,
    vd: f64,
}

impl ProfileCandidateGenerator {
    pub fn new(kinematics: &BoundaryKinematics) -> Self {
        Self {
            a0: kinematics.start.acceleration,
            af: kinematics.end.acceleration,
            vd: kinematics.delta_velocity(),
        }
    }

    /// Lazily yields the general shapes for one direction.
    pub fn candidates(&self, limits: DirectedLimits) -> Candidates {
        Candidates {
            generator: *self,
            limits,
            next: 0,
        }
    }

    /// Phase durations for `shape`, if the shape applies.
    pub fn solve(&self, shape: Shape, limits: &DirectedLimits) -> Option<Candidate> {
        let t = match shape {
            Shape::LimitReached => self.time_acc0(limits.a_max, limits.j_max)?,
            Shape::NoLimitLower => self.time_none(limits.j_max, -1.0)?,
            Shape::NoLimitUpper => self.time_none(limits.j_max, 1.0)?,
            Shape::SingleStep => self.time_single_step()?,
        };
        Some(Candidate { shape, t })
    }

    fn time_acc0(&self, a_max: f64, j_max: f64) -> Option<[f64; 7]> {
        if a_max == 0.0 || j_max == 0.0 {
            return None;
        }
        let (a0, af, vd) = (self.a0, self.af, self.vd);

        let mut t = [0.0; 7];
        t[0] = (-a0 + a_max) / j_max;
        t[1] = (a0 * a0 + af * af) / (2.0 * a_max * j_max) - a_max / j_max + vd / a_max;
        t[2] = (-af + a_max) / j_max;
        Some(t)
    }

    fn time_none(&self, j_max: f64, root: f64) -> Option<[f64; 7]> {
        if j_max == 0.0 {
            return None;
        }
        let (a0, af, vd) = (self.a0, self.af, self.vd);

        let h1 = (a0 * a0 + af * af) / 2.0 + j_max * vd;
        if h1 < 0.0 {
            return None;
        }
        let h1 = root * h1.sqrt();

        let mut t = [0.0; 7];
        t[0] = (h1 - a0) / j_max;
        t[2] = (h1 - af) / j_max;
        Some(t)
    }

    fn time_single_step(&self) -> Option<[f64; 7]> {
        let (a0, af, vd) = (self.a0, self.af, self.vd);
        if (af - a0).abs() > f64::EPSILON {
            return None;
        }

        let mut t = [0.0; 7];
        if a0.abs() > f64::EPSILON {
            t[3] = vd / a0;
            Some(t)
        } else if vd.abs() < f64::EPSILON {
            Some(t)
        } else {
            None
        }
    }
}

/// Iterator over the general candidates of one direction.
///
/// Shapes are solved on demand, so stopping after the first valid profile
/// skips the remaining square roots.
#[derive(Clone, Debug)]
pub struct Candidates {
    generator: ProfileCandidateGenerator,
    limits: DirectedLimits,
    next: usize,
}

impl Iterator for Candidates {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&shape) = Shape::GENERAL.get(self.next) {
            self.next += 1;
            if let Some(candidate) = self.generator.solve(shape, &self.limits) {
                return Some(candidate);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(Shape::GENERAL.len().saturating_sub(self.next)))
    }
}

impl std::iter::FusedIterator for Candidates {}
