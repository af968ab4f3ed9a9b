//! Dice pool construction and rolling.

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Die;
use super::roll::{RollResult, roll};
use crate::error::{MechError, MechResult};

/// The dice configured for one side of a battle.
///
/// Slot order is configuration order, not roll order: when the pool is
/// rolled, bonuses are reassigned by rank of the rolled values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DicePool {
    /// The configured dice, by slot.
    pub dice: Vec<Die>,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self { dice: Vec::new() }
    }

    /// The standard attacker pool: three plain d6.
    pub fn attacker_default() -> Self {
        Self::new().add(Die::D6, 3)
    }

    /// The standard defender pool: two plain d6.
    pub fn defender_default() -> Self {
        Self::new().add(Die::D6, 2)
    }

    /// Add `count` copies of a die.
    pub fn add(mut self, die: Die, count: u32) -> Self {
        for _ in 0..count {
            self.dice.push(die);
        }
        self
    }

    /// Returns how many dice are in the pool.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// The first `n` slots of the pool (fewer if the pool is smaller).
    pub fn first(&self, n: usize) -> &[Die] {
        &self.dice[..n.min(self.dice.len())]
    }

    /// Roll the first `n` slots of the pool.
    pub fn roll_first<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> RollResult {
        roll(self.first(n), rng)
    }
}

impl From<Vec<Die>> for DicePool {
    fn from(dice: Vec<Die>) -> Self {
        Self { dice }
    }
}

impl FromStr for DicePool {
    type Err = MechError;

    /// Parse a comma-separated list such as `d6,d6+1,d8`.
    fn from_str(s: &str) -> MechResult<Self> {
        if s.trim().is_empty() {
            return Err(MechError::InvalidPool("no dice given".to_string()));
        }
        let dice = s
            .split(',')
            .map(str::parse)
            .collect::<MechResult<Vec<Die>>>()?;
        Ok(Self { dice })
    }
}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dice: Vec<String> = self.dice.iter().map(Die::to_string).collect();
        write!(f, "{}", dice.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_pool() {
        let pool = DicePool::new();
        assert_eq!(pool.count(), 0);
        assert!(pool.is_empty());
        assert!(pool.first(3).is_empty());
    }

    #[test]
    fn default_pools() {
        assert_eq!(DicePool::attacker_default().count(), 3);
        assert_eq!(DicePool::defender_default().count(), 2);
        assert!(DicePool::attacker_default().dice.iter().all(|d| *d == Die::D6));
    }

    #[test]
    fn first_clamps_to_pool_size() {
        let pool = DicePool::new().add(Die::D8, 1).add(Die::D6, 1);
        assert_eq!(pool.first(1), &[Die::D8]);
        assert_eq!(pool.first(5).len(), 2);
    }

    #[test]
    fn parse_and_display() {
        let pool: DicePool = "d6+2, d6,d8".parse().unwrap();
        assert_eq!(pool.count(), 3);
        assert_eq!(pool.dice[0], Die::D6.with_bonus(2));
        assert_eq!(pool.to_string(), "d6+2,d6,d8");
        assert!("".parse::<DicePool>().is_err());
        assert!("d6,,d6".parse::<DicePool>().is_err());
    }

    #[test]
    fn roll_first_uses_selected_slots() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = DicePool::new().add(Die::D6.with_bonus(100), 1).add(Die::D6, 2);
        let result = pool.roll_first(1, &mut rng);
        assert_eq!(result.count(), 1);
        assert!(result.dice[0].value > 100);
    }

    #[test]
    fn serde_round_trip() {
        let pool = DicePool::attacker_default();
        let json = serde_json::to_string(&pool).unwrap();
        assert_eq!(json, r#"["d6","d6","d6"]"#);
        let back: DicePool = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pool);
    }
}
