//! Battle round resolution.
//!
//! One round: both sides decide how many dice they may roll given their
//! troop counts, roll them, and compare the sorted results highest to
//! highest. Every compared pair costs exactly one troop, attacker or
//! defender. Ties go to the defender.

pub mod round;

pub use round::{RoundReport, compare_rolls, resolve_round, resolve_round_detailed};

use serde::{Deserialize, Serialize};

/// Most dice an attacker may roll in one round.
pub const MAX_ATTACKER_DICE: usize = 3;

/// Most dice a defender may roll in one round.
pub const MAX_DEFENDER_DICE: usize = 2;

/// Dice the attacker rolls with `troops` on the field and `available`
/// configured dice. One troop always stays behind.
pub fn attacker_dice_count(troops: u32, available: usize) -> usize {
    let usable = usize::try_from(troops.saturating_sub(1)).unwrap_or(usize::MAX);
    usable.min(MAX_ATTACKER_DICE).min(available)
}

/// Dice the defender rolls with `troops` on the field and `available`
/// configured dice.
pub fn defender_dice_count(troops: u32, available: usize) -> usize {
    let usable = usize::try_from(troops).unwrap_or(usize::MAX);
    usable.min(MAX_DEFENDER_DICE).min(available)
}

/// Troop losses on both sides after one round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Troops the attacker lost.
    pub attacker_losses: u32,
    /// Troops the defender lost.
    pub defender_losses: u32,
}

impl RoundOutcome {
    /// Number of dice pairs that were compared.
    pub fn compared(&self) -> u32 {
        self.attacker_losses + self.defender_losses
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "attacker -{}, defender -{}",
            self.attacker_losses, self.defender_losses
        )
    }
}
