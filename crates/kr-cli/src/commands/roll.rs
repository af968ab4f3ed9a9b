use colored::Colorize;

use kr_mechanics::{Die, roll};

pub fn run(dice: &[Die], seed: Option<u64>) -> Result<(), String> {
    let (mut rng, seed) = super::command_rng(seed);
    let result = roll(dice, &mut rng);

    let listed: Vec<String> = dice.iter().map(Die::to_string).collect();
    println!(
        "  {} {} {}",
        "Roll".bold(),
        listed.join(" "),
        format!("(seed={seed})").dimmed()
    );
    println!();
    println!("{}", super::roll_table(&result));
    println!();
    println!("  Result: {}", result.to_string().bold());
    Ok(())
}
