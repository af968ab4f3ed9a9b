use serde::{Deserialize, Serialize};

use crate::batch::SimulationBatch;
use crate::error::{SimError, SimResult};

/// Per-trial mask: `true` where the defender was wiped out.
pub fn attacker_win_mask(batch: &SimulationBatch) -> Vec<bool> {
    batch.defender_remaining.iter().map(|&d| d == 0).collect()
}

/// Per-trial mask: `true` where the attacker was reduced to one troop.
pub fn defender_win_mask(batch: &SimulationBatch) -> Vec<bool> {
    batch.attacker_remaining.iter().map(|&a| a <= 1).collect()
}

/// Statistics for one side over the trials it won.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SideStats {
    /// Trials this side won.
    pub wins: usize,
    /// Share of all trials won, in percent.
    pub win_rate: f64,
    /// Mean troops left in the trials this side won (0 if none).
    pub mean_remaining: f64,
    /// Population standard deviation of troops left in those trials.
    pub std_remaining: f64,
}

impl SideStats {
    fn from_wins(remaining: &[u32], mask: &[bool], trials: usize) -> Self {
        let won: Vec<f64> = remaining
            .iter()
            .zip(mask)
            .filter(|(_, won)| **won)
            .map(|(&r, _)| f64::from(r))
            .collect();
        let (mean_remaining, std_remaining) = mean_and_std(&won);
        Self {
            wins: won.len(),
            win_rate: percent(won.len(), trials),
            mean_remaining,
            std_remaining,
        }
    }
}

/// Which side the batch favours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The attacker wins more often.
    Attacker,
    /// The defender wins more often.
    Defender,
    /// Both sides win equally often.
    Even,
}

/// Aggregated results of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Number of trials aggregated.
    pub trials: usize,
    /// Attacker wins and remaining attackers in those wins.
    pub attacker: SideStats,
    /// Defender wins and remaining defenders in those wins.
    pub defender: SideStats,
    /// Mean rounds per trial.
    pub mean_rounds: f64,
}

impl BatchStats {
    /// Aggregate a batch.
    ///
    /// Every trial must be won by exactly one side. Trials that are won by
    /// neither or both mean the round loop stopped in the wrong place; they
    /// are counted and reported as [`SimError::InvariantViolation`].
    pub fn from_batch(batch: &SimulationBatch) -> SimResult<Self> {
        let attacker_wins = attacker_win_mask(batch);
        let defender_wins = defender_win_mask(batch);

        let invalid = attacker_wins
            .iter()
            .zip(&defender_wins)
            .filter(|(a, d)| a == d)
            .count();
        if invalid > 0 {
            tracing::error!(invalid, trials = batch.len(), "trials ended in an invalid state");
            return Err(SimError::InvariantViolation { count: invalid });
        }

        let trials = batch.len();
        let rounds: Vec<f64> = batch.rounds.iter().map(|&r| f64::from(r)).collect();
        Ok(Self {
            trials,
            attacker: SideStats::from_wins(&batch.attacker_remaining, &attacker_wins, trials),
            defender: SideStats::from_wins(&batch.defender_remaining, &defender_wins, trials),
            mean_rounds: mean_and_std(&rounds).0,
        })
    }

    /// The side with the higher win rate.
    pub fn verdict(&self) -> Verdict {
        match self.attacker.wins.cmp(&self.defender.wins) {
            std::cmp::Ordering::Greater => Verdict::Attacker,
            std::cmp::Ordering::Less => Verdict::Defender,
            std::cmp::Ordering::Equal => Verdict::Even,
        }
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn mean_and_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::run_batch;
    use crate::config::SimConfig;

    fn batch(attackers: &[u32], defenders: &[u32]) -> SimulationBatch {
        SimulationBatch {
            seed: 0,
            attacker_remaining: attackers.to_vec(),
            defender_remaining: defenders.to_vec(),
            rounds: vec![3; attackers.len()],
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn win_masks() {
        let b = batch(&[5, 1, 3, 1], &[0, 2, 0, 4]);
        assert_eq!(attacker_win_mask(&b), vec![true, false, true, false]);
        assert_eq!(defender_win_mask(&b), vec![false, true, false, true]);
    }

    #[test]
    fn conditional_mean_and_std() {
        let b = batch(&[5, 1, 3, 1], &[0, 2, 0, 4]);
        let stats = BatchStats::from_batch(&b).unwrap();
        assert_eq!(stats.trials, 4);
        assert_eq!(stats.attacker.wins, 2);
        assert!(approx(stats.attacker.win_rate, 50.0));
        assert!(approx(stats.attacker.mean_remaining, 4.0));
        assert!(approx(stats.attacker.std_remaining, 1.0));
        assert!(approx(stats.defender.mean_remaining, 3.0));
        assert!(approx(stats.defender.std_remaining, 1.0));
        assert!(approx(stats.mean_rounds, 3.0));
        assert_eq!(stats.verdict(), Verdict::Even);
    }

    #[test]
    fn empty_category_yields_zero() {
        let b = batch(&[4, 2, 7], &[0, 0, 0]);
        let stats = BatchStats::from_batch(&b).unwrap();
        assert!(approx(stats.attacker.win_rate, 100.0));
        assert_eq!(stats.defender.wins, 0);
        assert!(approx(stats.defender.win_rate, 0.0));
        assert!(approx(stats.defender.mean_remaining, 0.0));
        assert!(approx(stats.defender.std_remaining, 0.0));
        assert_eq!(stats.verdict(), Verdict::Attacker);
    }

    #[test]
    fn empty_batch_does_not_divide_by_zero() {
        let stats = BatchStats::from_batch(&SimulationBatch::default()).unwrap();
        assert_eq!(stats.trials, 0);
        assert!(approx(stats.attacker.win_rate, 0.0));
        assert!(approx(stats.mean_rounds, 0.0));
    }

    #[test]
    fn unfinished_trials_are_an_invariant_violation() {
        let b = batch(&[5, 3, 1, 4], &[0, 2, 3, 1]);
        match BatchStats::from_batch(&b) {
            Err(SimError::InvariantViolation { count }) => assert_eq!(count, 2),
            other => panic!("expected invariant violation, got {other:?}"),
        }
    }

    #[test]
    fn double_win_is_an_invariant_violation() {
        let b = batch(&[1], &[0]);
        assert!(matches!(
            BatchStats::from_batch(&b),
            Err(SimError::InvariantViolation { count: 1 })
        ));
    }

    #[test]
    fn ten_thousand_trials_each_have_one_winner() {
        let config = SimConfig::default().with_trials(10_000).with_seed(42);
        let b = run_batch(&config).unwrap();
        let attacker = attacker_win_mask(&b);
        let defender = defender_win_mask(&b);
        assert!(attacker.iter().zip(&defender).all(|(a, d)| a != d));

        let stats = BatchStats::from_batch(&b).unwrap();
        assert_eq!(stats.attacker.wins + stats.defender.wins, 10_000);
        assert!(approx(stats.attacker.win_rate + stats.defender.win_rate, 100.0));
    }

    #[test]
    fn stronger_attacker_is_favoured() {
        let config = SimConfig::default()
            .with_trials(4000)
            .with_seed(3)
            .with_troops(30, 5);
        let stats = BatchStats::from_batch(&run_batch(&config).unwrap()).unwrap();
        assert_eq!(stats.verdict(), Verdict::Attacker);
        assert!(stats.attacker.win_rate > 90.0);
    }
}
