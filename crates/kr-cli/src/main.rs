//! CLI frontend for the Kampfrechner battle calculator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use kr_mechanics::{DicePool, Die};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "kr",
    about = "Kampfrechner: Monte Carlo odds for conquest board game battles",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate many battles and report win rates
    Simulate {
        /// Attacking troops on the field, including the one left behind
        #[arg(short, long)]
        attackers: Option<u32>,

        /// Defending troops
        #[arg(short, long)]
        defenders: Option<u32>,

        /// Number of battles to simulate (default: 5000)
        #[arg(short = 'n', long)]
        trials: Option<usize>,

        /// RNG seed for reproducible results
        #[arg(short, long)]
        seed: Option<u64>,

        /// Attacker dice, best slot first (e.g. d8+1,d6,d6)
        #[arg(long)]
        attacker_dice: Option<DicePool>,

        /// Defender dice, best slot first (e.g. d6+1,d6)
        #[arg(long)]
        defender_dice: Option<DicePool>,

        /// JSON config file; flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Roll a list of dice once, bonuses going to the highest rolls
    Roll {
        /// Dice to roll (e.g. d6+2 d6 d8)
        #[arg(required = true)]
        dice: Vec<Die>,

        /// RNG seed
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Resolve a single battle round
    Round {
        /// Attacking troops on the field
        #[arg(short, long, default_value = "4")]
        attackers: u32,

        /// Defending troops
        #[arg(short, long, default_value = "2")]
        defenders: u32,

        /// Attacker dice (default: d6,d6,d6)
        #[arg(long)]
        attacker_dice: Option<DicePool>,

        /// Defender dice (default: d6,d6)
        #[arg(long)]
        defender_dice: Option<DicePool>,

        /// RNG seed
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Simulate {
            attackers,
            defenders,
            trials,
            seed,
            attacker_dice,
            defender_dice,
            config,
            json,
        } => commands::simulate::run(commands::simulate::SimulateOptions {
            attackers,
            defenders,
            trials,
            seed,
            attacker_dice,
            defender_dice,
            config,
            json,
        }),
        Commands::Roll { dice, seed } => commands::roll::run(&dice, seed),
        Commands::Round {
            attackers,
            defenders,
            attacker_dice,
            defender_dice,
            seed,
        } => commands::round::run(
            attackers,
            defenders,
            attacker_dice.unwrap_or_else(DicePool::attacker_default),
            defender_dice.unwrap_or_else(DicePool::defender_default),
            seed,
        ),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
