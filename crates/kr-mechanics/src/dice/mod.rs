//! Dice types, pools, and rolling.
//!
//! A [`Die`] is a face count plus a flat bonus. Dice are grouped into a
//! [`DicePool`], one per side of a battle. When a pool is rolled the
//! bonuses do not stay with the die they were configured on: they are
//! sorted and handed to the highest base rolls, best bonus to best roll.

pub mod pool;
pub mod roll;

pub use pool::DicePool;
pub use roll::{DieResult, RollResult, apply_ranked_bonuses, roll};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// A single configured die: a face count and a bonus.
///
/// The textual form is `dN`, `dN+B` or `dN-B`, e.g. `d6`, `d8+1`, `d6-2`.
/// The same form is used when a die is (de)serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Die {
    sides: u32,
    bonus: i32,
}

impl Die {
    /// A plain six-sided die.
    pub const D6: Self = Self { sides: 6, bonus: 0 };
    /// A plain eight-sided die.
    pub const D8: Self = Self { sides: 8, bonus: 0 };

    /// Create a die with the given number of sides and bonus.
    ///
    /// Fails if the die has fewer than two sides.
    pub fn new(sides: u32, bonus: i32) -> MechResult<Self> {
        if sides < 2 {
            return Err(MechError::InvalidDie(format!(
                "a die needs at least 2 sides, got {sides}"
            )));
        }
        Ok(Self { sides, bonus })
    }

    /// Returns the same die with a different bonus.
    pub fn with_bonus(self, bonus: i32) -> Self {
        Self { bonus, ..self }
    }

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        self.sides
    }

    /// Returns the configured bonus.
    pub fn bonus(self) -> i32 {
        self.bonus
    }
}

impl FromStr for Die {
    type Err = MechError;

    fn from_str(s: &str) -> MechResult<Self> {
        let text = s.trim().to_lowercase();
        let rest = text
            .strip_prefix('d')
            .ok_or_else(|| MechError::InvalidDie(format!("'{s}' must start with 'd'")))?;

        let (sides_text, bonus) = match rest.find(['+', '-']) {
            Some(idx) => {
                let (sides_text, bonus_text) = rest.split_at(idx);
                let bonus = bonus_text
                    .parse::<i32>()
                    .map_err(|_| MechError::InvalidDie(format!("bad bonus in '{s}'")))?;
                (sides_text, bonus)
            }
            None => (rest, 0),
        };

        let sides = sides_text
            .parse::<u32>()
            .map_err(|_| MechError::InvalidDie(format!("bad side count in '{s}'")))?;
        Self::new(sides, bonus)
    }
}

impl TryFrom<String> for Die {
    type Error = MechError;

    fn try_from(value: String) -> MechResult<Self> {
        value.parse()
    }
}

impl From<Die> for String {
    fn from(die: Die) -> Self {
        die.to_string()
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.bonus {
            0 => write!(f, "d{}", self.sides),
            b if b > 0 => write!(f, "d{}+{b}", self.sides),
            b => write!(f, "d{}{b}", self.sides),
        }
    }
}
