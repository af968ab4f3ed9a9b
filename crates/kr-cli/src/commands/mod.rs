pub mod roll;
pub mod round;
pub mod simulate;

use comfy_table::{ContentArrangement, Table};
use kr_mechanics::RollResult;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeded RNG for one command; draws a seed when none is given.
fn command_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "rng seeded");
    (StdRng::seed_from_u64(seed), seed)
}

/// Table of one side's roll: rank, die, base roll, bonus, final value.
fn roll_table(result: &RollResult) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Rank", "Die", "Roll", "Bonus", "Value"]);
    for (rank, die) in result.dice.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            format!("d{}", die.sides),
            die.base.to_string(),
            format!("{:+}", die.bonus),
            die.value.to_string(),
        ]);
    }
    table
}
