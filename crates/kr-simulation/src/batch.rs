use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::campaign::{TrialResult, play_out};
use crate::config::SimConfig;
use crate::error::SimResult;

/// Final troop counts of every trial in a batch, as parallel sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationBatch {
    /// The seed trial RNGs were derived from.
    pub seed: u64,
    /// Attacking troops left after each trial.
    pub attacker_remaining: Vec<u32>,
    /// Defending troops left after each trial.
    pub defender_remaining: Vec<u32>,
    /// Rounds played in each trial.
    pub rounds: Vec<u32>,
}

impl SimulationBatch {
    /// Build a batch from individual trial results.
    pub fn from_trials(seed: u64, trials: &[TrialResult]) -> Self {
        Self {
            seed,
            attacker_remaining: trials.iter().map(|t| t.attacker_remaining).collect(),
            defender_remaining: trials.iter().map(|t| t.defender_remaining).collect(),
            rounds: trials.iter().map(|t| t.rounds).collect(),
        }
    }

    /// Number of trials in the batch.
    pub fn len(&self) -> usize {
        self.attacker_remaining.len()
    }

    /// Returns true if the batch holds no trials.
    pub fn is_empty(&self) -> bool {
        self.attacker_remaining.is_empty()
    }

    /// Iterate over the trials in order.
    pub fn trials(&self) -> impl Iterator<Item = TrialResult> + '_ {
        self.attacker_remaining
            .iter()
            .zip(&self.defender_remaining)
            .zip(&self.rounds)
            .map(|((&a, &d), &rounds)| TrialResult {
                attacker_remaining: a,
                defender_remaining: d,
                rounds,
            })
    }
}

/// Run every trial of `config` in parallel.
///
/// Trial `i` owns an RNG seeded with `seed + i`, so a fixed seed gives the
/// same batch no matter how the work is scheduled. Without a seed one is
/// drawn from the thread RNG and recorded in the batch.
pub fn run_batch(config: &SimConfig) -> SimResult<SimulationBatch> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(
        trials = config.trials,
        seed,
        attackers = config.attacker_total,
        defenders = config.defender_total,
        "starting batch"
    );
    let start = Instant::now();

    let trials = (0..config.trials)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            play_out(
                &config.attacker_dice,
                &config.defender_dice,
                config.attacker_total,
                config.defender_total,
                &mut rng,
            )
        })
        .collect::<SimResult<Vec<_>>>()?;

    tracing::debug!(elapsed_ms = start.elapsed().as_millis(), "batch finished");
    Ok(SimulationBatch::from_trials(seed, &trials))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn batch_has_one_entry_per_trial() {
        let config = SimConfig::default().with_trials(300).with_seed(1);
        let batch = run_batch(&config).unwrap();
        assert_eq!(batch.len(), 300);
        assert_eq!(batch.defender_remaining.len(), 300);
        assert_eq!(batch.rounds.len(), 300);
        assert_eq!(batch.seed, 1);
        assert_eq!(batch.trials().count(), 300);
    }

    #[test]
    fn seeded_batch_is_reproducible() {
        let config = SimConfig::default().with_trials(1000).with_seed(77);
        assert_eq!(run_batch(&config).unwrap(), run_batch(&config).unwrap());
    }

    #[test]
    fn different_seeds_differ() {
        let a = run_batch(&SimConfig::default().with_trials(1000).with_seed(1)).unwrap();
        let b = run_batch(&SimConfig::default().with_trials(1000).with_seed(2)).unwrap();
        assert_ne!(a.attacker_remaining, b.attacker_remaining);
    }

    #[test]
    fn unseeded_batch_records_its_seed() {
        let config = SimConfig::default().with_trials(200);
        let batch = run_batch(&config).unwrap();
        let replay = run_batch(&config.clone().with_seed(batch.seed)).unwrap();
        assert_eq!(batch, replay);
    }

    #[test]
    fn invalid_config_runs_nothing() {
        let config = SimConfig::default().with_troops(1, 4);
        assert!(matches!(
            run_batch(&config),
            Err(SimError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn every_trial_respects_the_round_bound() {
        let config = SimConfig::default().with_trials(2000).with_seed(5);
        let batch = run_batch(&config).unwrap();
        assert!(batch.rounds.iter().all(|&r| (1..=16).contains(&r)));
    }
}
