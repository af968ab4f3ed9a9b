//! Rolling dice and handing out bonuses by rank.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Die;

/// The result of one die after bonuses have been assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// Number of sides of the die that produced the base roll.
    pub sides: u32,
    /// The raw value rolled (1 to sides).
    pub base: u32,
    /// The bonus assigned to this roll by rank.
    pub bonus: i32,
    /// Base roll plus bonus.
    pub value: i64,
}

/// The result of rolling a list of dice, highest value first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die results in descending order of value.
    pub dice: Vec<DieResult>,
}

impl RollResult {
    /// Final values in descending order.
    pub fn values(&self) -> Vec<i64> {
        self.dice.iter().map(|d| d.value).collect()
    }

    /// Base rolls in descending order.
    pub fn base_rolls(&self) -> Vec<u32> {
        self.dice.iter().map(|d| d.base).collect()
    }

    /// The highest final value, or `None` if nothing was rolled.
    pub fn highest(&self) -> Option<i64> {
        self.dice.first().map(|d| d.value)
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if no dice were rolled.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        write!(f, "[{}]", values.join(", "))
    }
}

/// Combine base rolls with the bonuses of `dice`, best bonus to best roll.
///
/// `base_rolls[i]` is the raw roll of `dice[i]`. Base rolls and bonuses are
/// sorted descending independently and summed index by index, so the
/// returned values are descending as well.
pub fn apply_ranked_bonuses(dice: &[Die], base_rolls: &[u32]) -> RollResult {
    debug_assert_eq!(dice.len(), base_rolls.len());

    let mut ranked: Vec<(u32, u32)> = dice
        .iter()
        .zip(base_rolls)
        .map(|(die, &base)| (die.sides(), base))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut bonuses: Vec<i32> = dice.iter().map(|d| d.bonus()).collect();
    bonuses.sort_by(|a, b| b.cmp(a));

    let dice = ranked
        .into_iter()
        .zip(bonuses)
        .map(|((sides, base), bonus)| DieResult {
            sides,
            base,
            bonus,
            value: i64::from(base) + i64::from(bonus),
        })
        .collect();
    RollResult { dice }
}

/// Roll every die in `dice` once and assign bonuses by rank.
pub fn roll<R: Rng + ?Sized>(dice: &[Die], rng: &mut R) -> RollResult {
    let base_rolls: Vec<u32> = dice
        .iter()
        .map(|die| rng.random_range(1..=die.sides()))
        .collect();
    apply_ranked_bonuses(dice, &base_rolls)
}
