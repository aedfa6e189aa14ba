//! End-to-end tests through the Caretaker command surface with a manual clock.

use critter::command::Command;
use critter::core::caretaker::Caretaker;
use critter::core::clock::ManualClock;
use critter::core::death::kill;
use critter::core::params::SimParams;
use critter::creature::status::Mood;
use critter::creature::types::{Creature, DeathCause, LifeStage, Trick};
use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const T0: i64 = 1_700_000_000;
const DAY: i64 = 86_400;

fn quiet_caretaker(clock: &ManualClock) -> Caretaker<&ManualClock, StepRng> {
    Caretaker::new(SimParams::default(), clock, StepRng::new(u64::MAX, 0))
}

#[test]
fn test_new_creature_starts_at_defaults() {
    let clock = ManualClock::new(T0);
    let mut caretaker = quiet_caretaker(&clock);
    let mut creature = caretaker.adopt("  Mochi  ");

    assert_eq!(creature.name, "Mochi");
    assert_eq!(creature.hunger, 50.0);
    assert_eq!(creature.happiness, 50.0);
    assert_eq!(creature.energy, 100.0);
    assert_eq!(creature.health, 100.0);
    assert_eq!(creature.discipline, 50.0);
    assert_eq!(creature.weight, 5.0);
    assert_eq!(creature.waste_count, 0);
    assert!(creature.alive && creature.awake);
    assert_eq!(creature.created_at, T0);
    assert_eq!(creature.last_tick_at, T0);

    let snapshot = caretaker.status(&mut creature);
    assert_eq!(snapshot.life_stage, LifeStage::Baby);
    assert_eq!(snapshot.mood, Mood::Neutral);
    assert_eq!(snapshot.age_days, 0);
}

#[test]
fn test_feeding_restores_exactly_and_gains_weight() {
    let clock = ManualClock::new(T0);
    let mut caretaker = quiet_caretaker(&clock);
    let mut creature = caretaker.adopt("Mochi");
    let snack = *caretaker.params().food("snack").unwrap();

    let outcome = caretaker.feed(&mut creature, "SNACK");
    assert!(outcome.success, "{}", outcome.message);
    assert_eq!(creature.hunger, 50.0 - snack.hunger_restore);
    assert_eq!(creature.weight, 5.0 + snack.weight_gain);
    assert_eq!(creature.last_fed_at, T0);
}

#[test]
fn test_feeding_while_asleep_is_rejected() {
    let clock = ManualClock::new(T0);
    let mut caretaker = quiet_caretaker(&clock);
    let mut creature = caretaker.adopt("Mochi");

    assert!(caretaker.sleep(&mut creature).success);
    let before = creature.clone();
    let outcome = caretaker.feed(&mut creature, "meal");
    assert!(!outcome.success);
    assert!(outcome.message.contains("sleeping"));
    assert_eq!(creature, before);
}

#[test]
fn test_every_command_is_a_no_op_after_death() {
    let clock = ManualClock::new(T0);
    let mut caretaker = quiet_caretaker(&clock);
    let mut creature = caretaker.adopt("Mochi");
    creature.tricks_known.insert(Trick::Sit);
    creature.illness = Some(critter::creature::types::Illness::Cold);
    creature.waste_count = 2;
    kill(&mut creature, DeathCause::OldAge, T0, caretaker.params());

    clock.advance(10 * DAY);
    let frozen = creature.clone();
    let commands = [
        Command::Feed("meal".to_string()),
        Command::Play(None),
        Command::Sleep,
        Command::Wake(None),
        Command::Clean,
        Command::Medicine,
        Command::Scold,
        Command::Train(None),
        Command::Perform(Trick::Sit),
        Command::Pet,
    ];
    for command in commands {
        let reply = caretaker.execute(&mut creature, command.clone());
        assert!(!reply.outcome.success, "{:?} succeeded after death", command);
        assert!(reply.report.is_empty());
        assert_eq!(creature, frozen, "{:?} mutated a dead creature", command);
    }

    let reply = caretaker.execute(&mut creature, Command::Status);
    assert!(reply.outcome.message.contains("Dead"));
    assert_eq!(creature, frozen);
}

#[test]
fn test_sleep_through_the_night() {
    let clock = ManualClock::new(T0);
    let mut caretaker = quiet_caretaker(&clock);
    let mut creature = caretaker.adopt("Mochi");
    creature.energy = 30.0;

    assert!(caretaker.sleep(&mut creature).success);
    clock.advance(6 * 600);
    let outcome = caretaker.wake(&mut creature, Some("breakfast"));
    assert!(outcome.success, "{}", outcome.message);
    assert!(outcome.message.contains("breakfast"));
    assert_eq!(creature.energy, 90.0);
    assert_eq!(creature.hunger, 50.0);
    assert!(creature.awake);
}

#[test]
fn test_hourly_care_reaches_adulthood() {
    let clock = ManualClock::new(T0);
    let mut caretaker = quiet_caretaker(&clock);
    let mut creature = caretaker.adopt("Mochi");

    // Check in every hour for eight days.
    for _ in 0..(8 * 24) {
        clock.advance(3_600);
        caretaker.replay(&mut creature);
        if !creature.alive {
            break;
        }
        if creature.illness.is_some() {
            caretaker.give_medicine(&mut creature);
        }
        if creature.waste_count > 0 {
            caretaker.clean(&mut creature);
        }
        if !creature.awake {
            caretaker.wake(&mut creature, None);
        }
        while creature.hunger > 20.0 && caretaker.feed(&mut creature, "fruit").success {}
        for _ in 0..3 {
            caretaker.pet_affection(&mut creature);
        }
        if creature.discipline < 60.0 {
            caretaker.scold(&mut creature);
        }
    }

    assert!(creature.alive, "died of {:?}", creature.cause_of_death);
    let snapshot = caretaker.status(&mut creature);
    assert_eq!(snapshot.life_stage, LifeStage::Adult);
    assert_eq!(snapshot.age_days, 8);
    assert!(creature.weight > 5.0);
}

#[test]
fn test_seeded_session_is_reproducible() {
    let run = || {
        let clock = ManualClock::new(T0);
        let mut caretaker =
            Caretaker::new(SimParams::default(), &clock, ChaCha8Rng::seed_from_u64(3));
        let mut creature = caretaker.adopt("Mochi");
        let mut messages = Vec::new();
        for line in ["feed meal", "play guess", "pet", "tick", "scold", "sleep"] {
            clock.advance(1_800);
            let command = Command::parse(line).unwrap();
            messages.push(caretaker.execute(&mut creature, command).outcome.message);
        }
        (creature, messages)
    };
    assert_eq!(run(), run());
}

#[test]
fn test_reset_after_death_starts_fresh() {
    let clock = ManualClock::new(T0);
    let caretaker = quiet_caretaker(&clock);
    let mut old = caretaker.adopt("Mochi");
    kill(&mut old, DeathCause::Despair, T0, caretaker.params());

    clock.advance(DAY);
    let fresh: Creature = caretaker.adopt("Mochi II");
    assert!(fresh.alive);
    assert_eq!(fresh.created_at, T0 + DAY);
    assert_eq!(fresh.event_log.len(), 1);
}
