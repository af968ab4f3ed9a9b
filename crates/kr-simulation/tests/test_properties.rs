//! Property-based tests for whole battles and batches.

use kr_mechanics::{DicePool, Die};
use kr_simulation::{BatchStats, SimConfig, run_batch, run_trial};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Strategy: a pool of `n` dice with 2-12 sides and a bonus in -3..=3.
fn pool_strategy(n: usize) -> impl Strategy<Value = DicePool> {
    prop::collection::vec((2u32..=12, -3i32..=3), n).prop_map(|dice| {
        DicePool::from(
            dice.into_iter()
                .map(|(sides, bonus)| Die::new(sides, bonus).unwrap())
                .collect::<Vec<_>>(),
        )
    })
}

proptest! {
    // 1. Every trial ends with exactly one winner within a + d rounds
    #[test]
    fn trial_terminates_with_one_winner(
        a in 2u32..=40,
        d in 1u32..=40,
        att in pool_strategy(3),
        def in pool_strategy(2),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = run_trial(&att, &def, a, d, &mut rng).unwrap();
        prop_assert!(result.attacker_won() != result.defender_won(), "{result:?}");
        prop_assert!(result.rounds <= a + d);
        prop_assert!(result.attacker_remaining <= a && result.defender_remaining <= d);
    }

    // 2. A trial is a pure function of its seed
    #[test]
    fn trial_deterministic(a in 2u32..=30, d in 1u32..=30, seed in any::<u64>()) {
        let att = DicePool::attacker_default();
        let def = DicePool::defender_default();
        let r1 = run_trial(&att, &def, a, d, &mut StdRng::seed_from_u64(seed)).unwrap();
        let r2 = run_trial(&att, &def, a, d, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(r1, r2);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    // 3. Aggregated win rates always add up to 100%
    #[test]
    fn win_rates_sum_to_hundred(a in 2u32..=20, d in 1u32..=20, seed in any::<u64>()) {
        let config = SimConfig::default().with_troops(a, d).with_trials(200).with_seed(seed);
        let stats = BatchStats::from_batch(&run_batch(&config).unwrap()).unwrap();
        prop_assert_eq!(stats.attacker.wins + stats.defender.wins, 200);
        prop_assert!((stats.attacker.win_rate + stats.defender.win_rate - 100.0).abs() < 1e-9);
    }
}
