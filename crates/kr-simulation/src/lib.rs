//! Monte Carlo battle simulation for Kampfrechner.
//!
//! Plays whole battles ("trials") round by round until the defender is
//! wiped out or the attacker is down to its last troop, repeats that for a
//! batch of independent trials, and aggregates the final troop counts into
//! win rates and remaining-troop statistics.

/// Batches of independent trials, run in parallel.
pub mod batch;
/// A single battle played out to its end.
pub mod campaign;
/// Validated configuration for a simulation run.
pub mod config;
/// Error types for the simulation crate.
pub mod error;
/// Aggregated statistics over a batch.
pub mod stats;

/// Re-exports of [`batch::SimulationBatch`] and [`batch::run_batch`].
pub use batch::{SimulationBatch, run_batch};
/// Re-exports of [`campaign::TrialResult`] and [`campaign::run_trial`].
pub use campaign::{TrialResult, run_trial};
/// Re-export of [`config::SimConfig`].
pub use config::SimConfig;
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-exports of [`stats::BatchStats`], [`stats::SideStats`], and [`stats::Verdict`].
pub use stats::{BatchStats, SideStats, Verdict};
