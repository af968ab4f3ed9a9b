use std::path::Path;

use kr_mechanics::DicePool;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Number of dice slots every attacker pool must configure.
pub const ATTACKER_POOL_SIZE: usize = 3;
/// Number of dice slots every defender pool must configure.
pub const DEFENDER_POOL_SIZE: usize = 2;
/// Trials per batch when nothing else is configured.
pub const DEFAULT_TRIALS: usize = 5000;

/// Configuration for a simulation run.
///
/// Every field has a default, so a JSON config file only needs to name the
/// values it changes:
///
/// ```json
/// { "attacker_total": 12, "attacker_dice": ["d8+1", "d6", "d6"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Number of independent trials to run.
    pub trials: usize,
    /// RNG seed for a reproducible batch. `None` draws a fresh seed.
    pub seed: Option<u64>,
    /// Attacking troops on the field, including the one that stays behind.
    pub attacker_total: u32,
    /// Defending troops.
    pub defender_total: u32,
    /// The attacker's three dice slots.
    pub attacker_dice: DicePool,
    /// The defender's two dice slots.
    pub defender_dice: DicePool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            attacker_total: 10,
            defender_total: 6,
            attacker_dice: DicePool::attacker_default(),
            defender_dice: DicePool::defender_default(),
        }
    }
}

impl SimConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file(path: &Path) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> SimResult<Self> {
        serde_json::from_str(text).map_err(|e| SimError::Config(e.to_string()))
    }

    /// Set the RNG seed for a reproducible batch.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of trials.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Set both troop totals.
    pub fn with_troops(mut self, attacker_total: u32, defender_total: u32) -> Self {
        self.attacker_total = attacker_total;
        self.defender_total = defender_total;
        self
    }

    /// Set the attacker's dice.
    pub fn with_attacker_dice(mut self, dice: DicePool) -> Self {
        self.attacker_dice = dice;
        self
    }

    /// Set the defender's dice.
    pub fn with_defender_dice(mut self, dice: DicePool) -> Self {
        self.defender_dice = dice;
        self
    }

    /// Check every constraint a run depends on.
    pub fn validate(&self) -> SimResult<()> {
        if self.trials == 0 {
            return Err(SimError::InvalidConfiguration(
                "at least one trial is required".to_string(),
            ));
        }
        validate_battle(
            &self.attacker_dice,
            &self.defender_dice,
            self.attacker_total,
            self.defender_total,
        )
    }
}

/// Check the armies and dice of a single battle.
///
/// Face counts need no check here: a [`kr_mechanics::Die`] cannot be built
/// with fewer than two sides.
pub fn validate_battle(
    attacker_dice: &DicePool,
    defender_dice: &DicePool,
    attacker_total: u32,
    defender_total: u32,
) -> SimResult<()> {
    if attacker_dice.count() != ATTACKER_POOL_SIZE {
        return Err(SimError::InvalidConfiguration(format!(
            "attacker needs exactly {ATTACKER_POOL_SIZE} dice, got {}",
            attacker_dice.count()
        )));
    }
    if defender_dice.count() != DEFENDER_POOL_SIZE {
        return Err(SimError::InvalidConfiguration(format!(
            "defender needs exactly {DEFENDER_POOL_SIZE} dice, got {}",
            defender_dice.count()
        )));
    }
    if attacker_total < 2 {
        return Err(SimError::InvalidConfiguration(format!(
            "attacker needs at least 2 troops to attack, got {attacker_total}"
        )));
    }
    if defender_total < 1 {
        return Err(SimError::InvalidConfiguration(
            "defender needs at least 1 troop".to_string(),
        ));
    }
    Ok(())
}
