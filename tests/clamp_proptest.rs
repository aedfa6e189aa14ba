//! Property tests: whatever the starting state, elapsed time and command,
//! every stat stays within range and waste stays under its cap.

use critter::command::Command;
use critter::core::caretaker::Caretaker;
use critter::core::clock::ManualClock;
use critter::core::params::SimParams;
use critter::creature::types::{Creature, Illness, Trick};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const T0: i64 = 1_700_000_000;

fn command_for(index: u8) -> Command {
    match index % 12 {
        0 => Command::Feed("meal".to_string()),
        1 => Command::Feed("candy".to_string()),
        2 => Command::Play(None),
        3 => Command::Play(Some("guess".to_string())),
        4 => Command::Sleep,
        5 => Command::Wake(None),
        6 => Command::Clean,
        7 => Command::Medicine,
        8 => Command::Scold,
        9 => Command::Train(None),
        10 => Command::Perform(Trick::Sit),
        _ => Command::Pet,
    }
}

fn illness_for(index: u8) -> Option<Illness> {
    match index % 4 {
        0 => Some(Illness::Cold),
        1 => Some(Illness::Stomachache),
        2 => Some(Illness::Infection),
        _ => None,
    }
}

fn assert_in_range(creature: &Creature, params: &SimParams) -> Result<(), TestCaseError> {
    for stat in [
        creature.hunger,
        creature.happiness,
        creature.energy,
        creature.health,
        creature.discipline,
    ] {
        prop_assert!((0.0..=100.0).contains(&stat), "stat out of range: {}", stat);
    }
    prop_assert!(creature.waste_count <= params.waste_cap());
    prop_assert!(creature.weight > 0.0);
    Ok(())
}

proptest! {
    #[test]
    fn stats_stay_clamped(
        hunger in 0.0_f64..=100.0,
        happiness in 0.0_f64..=100.0,
        energy in 0.0_f64..=100.0,
        health in 0.0_f64..=100.0,
        discipline in 0.0_f64..=100.0,
        waste in 0_u32..=7,
        awake in any::<bool>(),
        illness in any::<u8>(),
        age_days in 0_i64..70,
        commands in proptest::collection::vec((any::<u8>(), 0_i64..20_000), 1..12),
        seed in any::<u64>(),
    ) {
        let params = SimParams::default();
        let clock = ManualClock::new(T0);
        let mut caretaker = Caretaker::new(params.clone(), &clock, ChaCha8Rng::seed_from_u64(seed));

        let mut creature = Creature::new("Prop", T0);
        creature.created_at = T0 - age_days * 86_400;
        creature.hunger = hunger;
        creature.happiness = happiness;
        creature.energy = energy;
        creature.health = health;
        creature.discipline = discipline;
        creature.waste_count = waste;
        creature.awake = awake;
        creature.illness = illness_for(illness);
        creature.tricks_known.insert(Trick::Sit);

        for (index, wait) in commands {
            clock.advance(wait);
            let was_alive = creature.alive;
            caretaker.execute(&mut creature, command_for(index));
            assert_in_range(&creature, &params)?;
            prop_assert!(was_alive || !creature.alive, "a dead creature came back");
        }
    }

    #[test]
    fn replay_twice_is_replay_once(seed in any::<u64>(), gap in 0_i64..(3 * 86_400)) {
        let params = SimParams::default();
        let mut creature = Creature::new("Prop", T0);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        critter::core::tick::replay_ticks(&mut creature, &params, T0 + gap, &mut rng);
        let once = creature.clone();
        let report = critter::core::tick::replay_ticks(&mut creature, &params, T0 + gap, &mut rng);
        prop_assert!(report.is_empty());
        prop_assert_eq!(creature, once);
    }
}
