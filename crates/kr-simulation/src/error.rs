use kr_mechanics::MechError;

/// Convenience result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur while configuring or running a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// Troop totals, pool sizes or trial count are out of bounds.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Some trials ended in a state that is not a victory for either side.
    #[error(
        "{count} simulation(s) ended in an invalid state; \
         every trial must end with the defender wiped out or the attacker down to one troop"
    )]
    InvariantViolation {
        /// Number of affected trials.
        count: usize,
    },

    /// A configuration file could not be read or parsed.
    #[error("could not load config: {0}")]
    Config(String),

    /// A dice or round error from the mechanics engine.
    #[error(transparent)]
    Mechanics(#[from] MechError),
}
