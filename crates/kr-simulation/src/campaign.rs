use kr_mechanics::{DicePool, resolve_round};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::validate_battle;
use crate::error::SimResult;

/// Final troop counts of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialResult {
    /// Attacking troops left, including the one that stays behind.
    pub attacker_remaining: u32,
    /// Defending troops left.
    pub defender_remaining: u32,
    /// Rounds it took to reach the end.
    pub rounds: u32,
}

impl TrialResult {
    /// The defender was wiped out.
    pub fn attacker_won(&self) -> bool {
        self.defender_remaining == 0
    }

    /// The attacker can no longer attack.
    pub fn defender_won(&self) -> bool {
        self.attacker_remaining <= 1
    }
}

/// Play one battle from the given totals to its end.
///
/// The attacker keeps rolling while it has more than one troop and the
/// defender has any left. Every round costs at least one troop, so the
/// battle ends within `attacker_total + defender_total` rounds.
pub fn run_trial<R: Rng + ?Sized>(
    attacker_dice: &DicePool,
    defender_dice: &DicePool,
    attacker_total: u32,
    defender_total: u32,
    rng: &mut R,
) -> SimResult<TrialResult> {
    validate_battle(attacker_dice, defender_dice, attacker_total, defender_total)?;
    play_out(
        attacker_dice,
        defender_dice,
        attacker_total,
        defender_total,
        rng,
    )
}

/// The round loop of [`run_trial`], without input validation.
pub(crate) fn play_out<R: Rng + ?Sized>(
    attacker_dice: &DicePool,
    defender_dice: &DicePool,
    attacker_total: u32,
    defender_total: u32,
    rng: &mut R,
) -> SimResult<TrialResult> {
    let mut attackers = attacker_total;
    let mut defenders = defender_total;
    let mut rounds: u32 = 0;

    while attackers > 1 && defenders > 0 {
        let outcome = resolve_round(attacker_dice, defender_dice, attackers, defenders, rng)?;
        attackers = attackers.saturating_sub(outcome.attacker_losses);
        defenders = defenders.saturating_sub(outcome.defender_losses);
        rounds = rounds.saturating_add(1);
    }

    Ok(TrialResult {
        attacker_remaining: attackers,
        defender_remaining: defenders,
        rounds,
    })
}
