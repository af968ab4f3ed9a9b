use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use kr_mechanics::DicePool;
use kr_simulation::{BatchStats, SideStats, SimConfig, Verdict, run_batch};

/// Flags of the `simulate` command. Unset flags fall back to the config
/// file, then to the built-in defaults.
pub struct SimulateOptions {
    pub attackers: Option<u32>,
    pub defenders: Option<u32>,
    pub trials: Option<usize>,
    pub seed: Option<u64>,
    pub attacker_dice: Option<DicePool>,
    pub defender_dice: Option<DicePool>,
    pub config: Option<PathBuf>,
    pub json: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    config: &'a SimConfig,
    stats: &'a BatchStats,
}

pub fn run(options: SimulateOptions) -> Result<(), String> {
    let mut config = build_config(&options)?;
    let batch = run_batch(&config).map_err(|e| e.to_string())?;
    let stats = BatchStats::from_batch(&batch).map_err(|e| e.to_string())?;
    config.seed = Some(batch.seed);

    if options.json {
        let report = JsonReport {
            config: &config,
            stats: &stats,
        };
        let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    print_report(&config, &stats);
    Ok(())
}

fn build_config(options: &SimulateOptions) -> Result<SimConfig, String> {
    let mut config = match &options.config {
        Some(path) => SimConfig::from_file(path).map_err(|e| e.to_string())?,
        None => SimConfig::default(),
    };

    if let Some(attackers) = options.attackers {
        config.attacker_total = attackers;
    }
    if let Some(defenders) = options.defenders {
        config.defender_total = defenders;
    }
    if let Some(trials) = options.trials {
        config.trials = trials;
    }
    if let Some(seed) = options.seed {
        config.seed = Some(seed);
    }
    if let Some(dice) = &options.attacker_dice {
        config.attacker_dice = dice.clone();
    }
    if let Some(dice) = &options.defender_dice {
        config.defender_dice = dice.clone();
    }
    Ok(config)
}

fn print_report(config: &SimConfig, stats: &BatchStats) {
    let seed = config.seed.unwrap_or_default();
    println!(
        "  {} {} attackers vs {} defenders {}",
        "Battle".bold(),
        config.attacker_total,
        config.defender_total,
        format!("({} trials, seed={seed})", stats.trials).dimmed()
    );
    println!(
        "  Attacker dice: {}   Defender dice: {}",
        config.attacker_dice, config.defender_dice
    );
    println!("  Average battle length: {:.1} rounds", stats.mean_rounds);
    println!();

    println!("  {}", "Result".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Side",
        "Wins",
        "Win rate",
        "Troops left (avg)",
        "Std. dev.",
    ]);
    table.add_row(side_row("Attacker", &stats.attacker));
    table.add_row(side_row("Defender", &stats.defender));
    println!("{table}");
    println!();

    match stats.verdict() {
        Verdict::Attacker => println!(
            "  {}",
            format!(
                "The attacker wins {:.1}% of battles and keeps {:.2} troops on average.",
                stats.attacker.win_rate, stats.attacker.mean_remaining
            )
            .green()
            .bold()
        ),
        Verdict::Defender => println!(
            "  {}",
            format!(
                "The defender wins {:.1}% of battles and keeps {:.2} troops on average.",
                stats.defender.win_rate, stats.defender.mean_remaining
            )
            .red()
            .bold()
        ),
        Verdict::Even => println!(
            "  {}",
            "Both sides have roughly equal chances.".yellow().bold()
        ),
    }
    println!(
        "  {}",
        format!(
            "Typical spread: ±{:.2} troops for the attacker, ±{:.2} for the defender",
            stats.attacker.std_remaining, stats.defender.std_remaining
        )
        .dimmed()
    );
}

fn side_row(name: &str, side: &SideStats) -> Vec<String> {
    vec![
        name.to_string(),
        side.wins.to_string(),
        format!("{:.1}%", side.win_rate),
        format!("{:.2}", side.mean_remaining),
        format!("{:.2}", side.std_remaining),
    ]
}
