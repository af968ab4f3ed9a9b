//! Dice and battle mechanics for Kampfrechner.
//!
//! Provides dice with per-die bonuses, dice pools whose bonuses are handed
//! out by rank of the rolled value, and resolution of a single battle round
//! between an attacking and a defending army.

pub mod battle;
pub mod dice;
pub mod error;

pub use battle::{
    MAX_ATTACKER_DICE, MAX_DEFENDER_DICE, RoundOutcome, RoundReport, attacker_dice_count,
    compare_rolls, defender_dice_count, resolve_round, resolve_round_detailed,
};
pub use dice::{DicePool, Die, DieResult, RollResult, apply_ranked_bonuses, roll};
pub use error::{MechError, MechResult};
