use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scurve_velocity::{
    BoundaryKinematics, BoundaryState, DirectedLimits, LimitSet, MotionPolynomial, Profile,
    ProfileCandidateGenerator, ProfileError, ProfileValidator, VelocityStep1,
};

const SAMPLES: usize = 2000;

struct Problem {
    start: BoundaryState,
    end: BoundaryState,
    limits: LimitSet,
}

impl Problem {
    fn random(rng: &mut StdRng, zero_end_acceleration: bool) -> Self {
        let limits = LimitSet::new(
            rng.gen_range(0.5..10.0),
            rng.gen_range(-10.0..-0.5),
            rng.gen_range(1.0..200.0),
        );
        let a0 = rng.gen_range(limits.a_min..limits.a_max);
        let start = BoundaryState::new(rng.gen_range(-20.0..20.0), a0);
        let af = if zero_end_acceleration {
            0.0
        } else {
            rng.gen_range(limits.a_min..limits.a_max)
        };
        let end = BoundaryState::new(rng.gen_range(-20.0..20.0), af);
        Self { start, end, limits }
    }

    fn solve(&self) -> Result<scurve_velocity::Block, ProfileError> {
        VelocityStep1::new(self.start, self.end, self.limits).get_profile()
    }

    fn mirrored(&self) -> Self {
        Self {
            start: self.start.negated(),
            end: self.end.negated(),
            limits: self.limits.mirrored(),
        }
    }

    /// Shortest duration over every candidate that validates, found without
    /// the solver's early exits.
    fn brute_force_min(&self) -> Option<f64> {
        let kinematics = BoundaryKinematics::new(self.start, self.end);
        let generator = ProfileCandidateGenerator::new(&kinematics);
        [DirectedLimits::up(&self.limits), DirectedLimits::down(&self.limits)]
            .into_iter()
            .flat_map(|limits| {
                let validator = ProfileValidator::new(&limits);
                generator.candidates(limits).filter_map(move |candidate| {
                    let mut profile = Profile::new(&kinematics);
                    profile.t = candidate.t;
                    validator
                        .check(&mut profile, candidate.shape.reached_limits())
                        .then(|| profile.duration())
                })
            })
            .fold(None, |best: Option<f64>, t| Some(best.map_or(t, |b| b.min(t))))
    }
}

fn integrate(start: BoundaryState, profile: &Profile) -> MotionPolynomial {
    let mut state = MotionPolynomial::new(0.0, 0.0, start.velocity, start.acceleration, 0.0);
    for (t, j) in profile.t.iter().zip(profile.j.iter()) {
        state.jrk = *j;
        state = state.advance(*t);
    }
    state
}

#[test]
fn solutions_reach_the_target_within_limits() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut solved = 0;

    for i in 0..SAMPLES {
        let problem = Problem::random(&mut rng, i % 2 == 0);
        let Ok(block) = problem.solve() else { continue };
        solved += 1;
        let profile = block.selected_profile;

        let end = integrate(problem.start, &profile);
        assert_relative_eq!(end.vel, problem.end.velocity, epsilon = Profile::V_PRECISION);
        assert_relative_eq!(end.acc, problem.end.acceleration, epsilon = Profile::A_PRECISION);

        for &a in &profile.a[1..] {
            assert!(a <= problem.limits.a_max + Profile::A_EPS);
            assert!(a >= problem.limits.a_min - Profile::A_EPS);
        }
        for &j in &profile.j {
            assert!(j == 0.0 || (j.abs() - problem.limits.j_max).abs() < 1e-12);
        }

        let sampled = profile.state_at(block.t_min);
        assert_relative_eq!(sampled.vel, problem.end.velocity, epsilon = Profile::V_PRECISION);
    }

    assert!(solved * 100 >= SAMPLES * 95, "only {solved} of {SAMPLES} problems solved");
}

#[test]
fn t_min_matches_brute_force_enumeration() {
    let mut rng = StdRng::seed_from_u64(42);

    for i in 0..SAMPLES {
        let problem = Problem::random(&mut rng, i % 3 == 0);
        let brute = problem.brute_force_min();

        match problem.solve() {
            Ok(block) => {
                let brute = brute.expect("solver found a profile the enumeration missed");
                assert_relative_eq!(block.t_min, brute, epsilon = 1e-9, max_relative = 1e-9);
            }
            Err(ProfileError::NoFeasibleProfile { .. }) => assert_eq!(brute, None),
            Err(ProfileError::AmbiguousBlock { .. }) => {}
            Err(e @ ProfileError::EmptyProfileSet) => panic!("unexpected error: {e}"),
        }
    }
}

#[test]
fn repeated_solves_are_bit_identical() {
    let mut rng = StdRng::seed_from_u64(7);

    for i in 0..200 {
        let problem = Problem::random(&mut rng, i % 2 == 0);
        let first = problem.solve();
        let second = problem.solve();
        match (first, second) {
            (Ok(a), Ok(b)) => {
                assert_eq!(a.t_min.to_bits(), b.t_min.to_bits());
                assert_eq!(a, b);
            }
            (a, b) => assert_eq!(a, b),
        }
    }
}

#[test]
fn mirrored_problem_has_mirrored_solution() {
    let mut rng = StdRng::seed_from_u64(1234);

    for i in 0..SAMPLES {
        let zero_end_acceleration = i % 2 == 0;
        let problem = Problem::random(&mut rng, zero_end_acceleration);
        let original = problem.solve();
        let mirrored = problem.mirrored().solve();

        assert_eq!(original.is_ok(), mirrored.is_ok());
        let (Ok(original), Ok(mirrored)) = (original, mirrored) else { continue };

        assert_relative_eq!(original.t_min, mirrored.t_min, epsilon = 1e-12, max_relative = 1e-12);

        if zero_end_acceleration {
            let (p, q) = (original.selected_profile, mirrored.selected_profile);
            assert_ne!(p.control_signs, q.control_signs);
            for k in 0..8 {
                assert_relative_eq!(p.a[k], -q.a[k], epsilon = 1e-9);
                assert_relative_eq!(p.v[k], -q.v[k], epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn feasible_durations_start_at_t_min() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..500 {
        let problem = Problem::random(&mut rng, false);
        let Ok(block) = problem.solve() else { continue };

        assert!(block.is_blocked(block.t_min * 0.5 - 1e-3));
        assert!(!block.is_blocked(block.t_min));
        let mut last_left = f64::NEG_INFINITY;
        for interval in block.extra_intervals() {
            assert!(interval.left >= block.t_min);
            assert!(interval.left <= interval.right);
            assert!(interval.left >= last_left);
            last_left = interval.left;
            if let Some(profile) = interval.profile {
                assert_relative_eq!(profile.duration(), interval.right);
                assert_eq!(block.profile_for(interval.right).duration(), profile.duration());
            }
        }
    }
}

#[test]
fn equal_negative_accelerations_block_the_middle_durations() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..500 {
        // a0 = af = -a and a small loss of velocity: two profiles with
        // positive jerk first and a faster one with negative jerk first
        let a = rng.gen_range(0.5..2.0);
        let j = rng.gen_range(1.0..50.0);
        let loss = rng.gen_range(0.05..0.95) * a * a / j;
        let limits = LimitSet::symmetric(2.0 * a, j);
        let start = BoundaryState::new(rng.gen_range(-5.0..5.0), -a);
        let end = BoundaryState::new(start.velocity - loss, -a);

        let block = VelocityStep1::new(start, end, limits).get_profile().unwrap();

        let low = (a * a - j * loss).sqrt();
        let high = (a * a + j * loss).sqrt();
        let fastest = 2.0 * (high - a) / j;
        assert_relative_eq!(block.t_min, fastest, epsilon = 1e-9, max_relative = 1e-9);

        let intervals: Vec<_> = block.extra_intervals().collect();
        assert_eq!(intervals.len(), 1);
        let (left, right) = (2.0 * (a - low) / j, 2.0 * (a + low) / j);
        assert_relative_eq!(intervals[0].left, left, epsilon = 1e-9, max_relative = 1e-9);
        assert_relative_eq!(intervals[0].right, right, epsilon = 1e-9, max_relative = 1e-9);

        assert!(block.is_blocked(0.5 * (left + right)));
        assert!(!block.is_blocked(0.5 * (block.t_min + left)));
        let slow = block.profile_for(intervals[0].right);
        assert_relative_eq!(slow.duration(), right, epsilon = 1e-9, max_relative = 1e-9);
        assert_relative_eq!(slow.state_at(right).vel, end.velocity, epsilon = 1e-8);
    }
}
