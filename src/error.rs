use thiserror::Error;

/// Reasons a velocity-interface solve produces no block.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProfileError {
    /// Every shape, direction and root failed validation.
    #[error("no jerk-limited profile reaches a velocity change of {delta_velocity}")]
    NoFeasibleProfile { delta_velocity: f64 },

    /// A block was requested for an empty set of profiles.
    #[error("no profiles to reduce to a duration block")]
    EmptyProfileSet,

    /// The accepted profiles could not be reduced to a consistent block.
    #[error("{count} valid profiles could not be reduced to a duration block")]
    AmbiguousBlock { count: usize },
}

/// Rejected limit values from the checked `LimitSet` constructor.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LimitError {
    #[error("limit values must be finite")]
    NonFinite,

    #[error("maximum acceleration {0} is negative")]
    NegativeMaxAcceleration(f64),

    #[error("minimum acceleration {0} is positive")]
    PositiveMinAcceleration(f64),

    #[error("maximum jerk {0} is negative")]
    NegativeJerk(f64),
}
