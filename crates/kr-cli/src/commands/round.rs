use colored::Colorize;

use kr_mechanics::{DicePool, resolve_round_detailed};

pub fn run(
    attackers: u32,
    defenders: u32,
    attacker_dice: DicePool,
    defender_dice: DicePool,
    seed: Option<u64>,
) -> Result<(), String> {
    let (mut rng, seed) = super::command_rng(seed);
    let report = resolve_round_detailed(
        &attacker_dice,
        &defender_dice,
        attackers,
        defenders,
        &mut rng,
    )
    .map_err(|e| e.to_string())?;

    println!(
        "  {} {attackers} attackers vs {defenders} defenders {}",
        "Round".bold(),
        format!("(seed={seed})").dimmed()
    );
    println!();

    println!("  {} {attacker_dice}", "Attacker".bold().underline());
    println!("{}", super::roll_table(&report.attacker));
    println!();
    println!("  {} {defender_dice}", "Defender".bold().underline());
    println!("{}", super::roll_table(&report.defender));
    println!();

    let outcome = report.outcome;
    println!(
        "  Attacker loses {}, defender loses {}",
        outcome.attacker_losses.to_string().red().bold(),
        outcome.defender_losses.to_string().green().bold()
    );
    println!(
        "  Left: {} attackers, {} defenders",
        attackers.saturating_sub(outcome.attacker_losses),
        defenders.saturating_sub(outcome.defender_losses)
    );
    Ok(())
}
