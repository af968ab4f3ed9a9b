//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// A die could not be built or parsed.
    #[error("invalid die: {0}")]
    InvalidDie(String),

    /// A dice pool configuration is invalid.
    #[error("invalid pool: {0}")]
    InvalidPool(String),

    /// A round was requested in which one side cannot roll any dice.
    #[error(
        "degenerate round: attacker may roll {attacker_dice} dice, defender {defender_dice}"
    )]
    DegenerateRound {
        /// Dice the attacker is entitled to.
        attacker_dice: usize,
        /// Dice the defender is entitled to.
        defender_dice: usize,
    },
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
