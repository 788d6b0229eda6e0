use crate::error::ProfileError;
use crate::profile::Profile;
use crate::stack_buffer::StackBuffer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// One limit-reached and two no-limit roots per direction
pub(crate) const MAX_PROFILES: usize = 6;

pub(crate) type ValidProfiles = StackBuffer<Profile, MAX_PROFILES>;

/// A range of total durations `left < t < right` that no profile realizes.
///
/// Both ends are realizable: `left` by the next faster alternative and
/// `right` by `profile`. An open-ended interval has `right = inf` and no
/// profile.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval {
    pub left: f64,
    pub right: f64,
    pub profile: Option<Profile>,
}

impl Interval {
    /// Interval between two durations without a profile at its right end.
    pub fn new(left: f64, right: f64) -> Self {
        Self {
            left,
            right,
            profile: None,
        }
    }

    /// Interval spanned by two alternatives; the slower one is kept.
    pub fn from_profiles(first: &Profile, second: &Profile) -> Self {
        let (fast, slow) = if first.duration() <= second.duration() {
            (first, second)
        } else {
            (second, first)
        };
        Self {
            left: fast.duration(),
            right: slow.duration(),
            profile: Some(*slow),
        }
    }

    /// Whether `t` lies strictly inside the interval.
    pub fn contains(&self, t: f64) -> bool {
        self.left < t && t < self.right
    }
}

/// Feasible durations of one axis.
///
/// Every duration `t >= t_min` can be reached unless it falls inside one of
/// the extra intervals. The synchronizer picks a common duration across axes
/// from these blocks.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Block {
    pub t_min: f64,
    pub selected_profile: Profile,
    /// Ordered by `left`; `extra_intervals[1]` is only set together with `[0]`.
    pub extra_intervals: [Option<Interval>; 2],
}

impl Block {
    // Relative duration tolerance for duplicate profiles
    const DUPLICATE_EPS: f64 = 256.0 * f64::EPSILON;

    /// Block with a single feasible profile and no gaps.
    pub fn from_profile(profile: Profile) -> Self {
        Self {
            t_min: profile.duration(),
            selected_profile: profile,
            extra_intervals: [None, None],
        }
    }

    /// Reduces all accepted profiles of one solve to a block.
    ///
    /// Profiles come in pairs of opposite jerk direction plus the fastest
    /// profile, so an even count means two entries describe the same motion.
    /// One such duplicate is dropped before the reduction; if none is found
    /// the set is inconsistent and no block is returned. An empty slice is a
    /// caller error and yields [`ProfileError::EmptyProfileSet`].
    pub fn calculate(profiles: &[Profile]) -> Result<Self, ProfileError> {
        match profiles.len() {
            0 => Err(ProfileError::EmptyProfileSet),
            1 => Ok(Self::from_profile(profiles[0])),
            2 => {
                let (first, second) = (&profiles[0], &profiles[1]);
                if (first.duration() - second.duration()).abs() < 8.0 * f64::EPSILON {
                    return Ok(Self::from_profile(*first));
                }
                let fastest = if first.duration() < second.duration() { first } else { second };
                let mut block = Self::from_profile(*fastest);
                block.extra_intervals[0] = Some(Interval::from_profiles(first, second));
                Ok(block)
            }
            3 => Ok(Self::reduce_odd(profiles[0], profiles[1], profiles[2], None)),
            4 | 6 => {
                let Some(duplicate) = Self::find_duplicate(profiles) else {
                    return Err(ProfileError::AmbiguousBlock {
                        count: profiles.len(),
                    });
                };
                let mut rest = ValidProfiles::default();
                for profile in profiles {
                    rest.push(*profile);
                }
                rest.remove(duplicate);
                Self::calculate(rest.as_slice())
            }
            5 => Ok(Self::reduce_odd(
                profiles[0],
                profiles[1],
                profiles[2],
                Some((profiles[3], profiles[4])),
            )),
            count => Err(ProfileError::AmbiguousBlock { count }),
        }
    }

    fn find_duplicate(profiles: &[Profile]) -> Option<usize> {
        for (i, first) in profiles.iter().enumerate() {
            for (k, second) in profiles.iter().enumerate().skip(i + 1) {
                let scale = first.duration().abs().max(1.0);
                if (first.duration() - second.duration()).abs() < Self::DUPLICATE_EPS * scale
                    && first.control_signs != second.control_signs
                {
                    return Some(k);
                }
            }
        }
        None
    }

    fn reduce_odd(p0: Profile, p1: Profile, p2: Profile, tail: Option<(Profile, Profile)>) -> Self {
        let mut all = [p0, p1, p2, Profile::default(), Profile::default()];
        let count = if let Some((p3, p4)) = tail {
            all[3] = p3;
            all[4] = p4;
            5
        } else {
            3
        };

        let mut idx_min = 0;
        for i in 1..count {
            if all[i].duration() < all[idx_min].duration() {
                idx_min = i;
            }
        }
        let mut block = Self::from_profile(all[idx_min]);
        let other = |offset: usize| &all[(idx_min + offset) % count];

        if count == 3 {
            block.extra_intervals[0] = Some(Interval::from_profiles(other(1), other(2)));
        } else {
            let (first, second) = if other(1).control_signs == other(2).control_signs {
                (
                    Interval::from_profiles(other(1), other(2)),
                    Interval::from_profiles(other(3), other(4)),
                )
            } else {
                (
                    Interval::from_profiles(other(1), other(4)),
                    Interval::from_profiles(other(2), other(3)),
                )
            };
            block.extra_intervals = if first.left <= second.left {
                [Some(first), Some(second)]
            } else {
                [Some(second), Some(first)]
            };
        }
        block
    }

    /// The present extra intervals, in order.
    pub fn extra_intervals(&self) -> impl Iterator<Item = &Interval> {
        self.extra_intervals.iter().flatten()
    }

    /// Whether duration `t` cannot be realized by this axis.
    pub fn is_blocked(&self, t: f64) -> bool {
        t < self.t_min || self.extra_intervals().any(|interval| interval.contains(t))
    }

    /// Profile whose duration is the largest feasible one not above `t`.
    pub fn profile_for(&self, t: f64) -> &Profile {
        self.extra_intervals()
            .filter(|interval| t >= interval.right)
            .filter_map(|interval| interval.profile.as_ref())
            .max_by(|a, b| a.duration().total_cmp(&b.duration()))
            .unwrap_or(&self.selected_profile)
    }
}
