//! Rolling and comparing one round of battle.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{RoundOutcome, attacker_dice_count, defender_dice_count};
use crate::dice::{DicePool, RollResult};
use crate::error::{MechError, MechResult};

/// Everything that happened in one round: both rolls and the losses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// The attacker's roll, highest first.
    pub attacker: RollResult,
    /// The defender's roll, highest first.
    pub defender: RollResult,
    /// Losses on both sides.
    pub outcome: RoundOutcome,
}

/// Compare two sorted rolls pair by pair.
///
/// Only the first `min(attacker, defender)` dice are compared; extra dice
/// on either side are ignored.
pub fn compare_rolls(attacker: &RollResult, defender: &RollResult) -> RoundOutcome {
    let mut outcome = RoundOutcome::default();
    for (a, d) in attacker.dice.iter().zip(&defender.dice) {
        if a.value > d.value {
            outcome.defender_losses += 1;
        } else {
            outcome.attacker_losses += 1;
        }
    }
    outcome
}

/// Resolve one round and keep both rolls.
///
/// Fails with [`MechError::DegenerateRound`] if either side is not entitled
/// to any dice, e.g. an attacker with a single troop.
pub fn resolve_round_detailed<R: Rng + ?Sized>(
    attacker_pool: &DicePool,
    defender_pool: &DicePool,
    attacker_troops: u32,
    defender_troops: u32,
    rng: &mut R,
) -> MechResult<RoundReport> {
    let attacker_dice = attacker_dice_count(attacker_troops, attacker_pool.count());
    let defender_dice = defender_dice_count(defender_troops, defender_pool.count());
    if attacker_dice == 0 || defender_dice == 0 {
        return Err(MechError::DegenerateRound {
            attacker_dice,
            defender_dice,
        });
    }

    let attacker = attacker_pool.roll_first(attacker_dice, rng);
    let defender = defender_pool.roll_first(defender_dice, rng);
    let outcome = compare_rolls(&attacker, &defender);

    tracing::trace!(%attacker, %defender, %outcome, "round resolved");

    Ok(RoundReport {
        attacker,
        defender,
        outcome,
    })
}

/// Resolve one round and return only the losses.
pub fn resolve_round<R: Rng + ?Sized>(
    attacker_pool: &DicePool,
    defender_pool: &DicePool,
    attacker_troops: u32,
    defender_troops: u32,
    rng: &mut R,
) -> MechResult<RoundOutcome> {
    resolve_round_detailed(
        attacker_pool,
        defender_pool,
        attacker_troops,
        defender_troops,
        rng,
    )
    .map(|report| report.outcome)
}
