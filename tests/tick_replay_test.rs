//! Integration tests for tick replay: idempotence, determinism, exact tick
//! accounting and sustained-critical death.
//!
//! Uses seeded ChaCha8Rng for deterministic behavior and StepRng to pin every
//! random roll high when randomness should stay out of the way.

use critter::core::params::SimParams;
use critter::core::tick::{replay_ticks, TickEvent};
use critter::creature::actions;
use critter::creature::types::{Creature, DeathCause};
use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const T0: i64 = 1_700_000_000;
const TICK: i64 = 600;

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

/// Every roll just under 1.0: no waste, no illness, no refusals.
fn never() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

/// Hunger is the only thing that can kill the creature.
fn starvation_only_params() -> SimParams {
    SimParams {
        happiness_per_tick: 0.0,
        happiness_hunger_penalty: 0.0,
        happiness_energy_penalty: 0.0,
        starving_health_penalty: 0.0,
        ..SimParams::default()
    }
}

#[test]
fn test_replay_is_idempotent_without_clock_advance() {
    let params = SimParams::default();
    let mut rng = test_rng();
    let mut creature = Creature::new("Pip", T0);
    let now = T0 + 5 * TICK + 17;

    let first = replay_ticks(&mut creature, &params, now, &mut rng);
    assert_eq!(first.ticks, 5);
    let after_first = creature.clone();

    let second = replay_ticks(&mut creature, &params, now, &mut rng);
    assert!(second.is_empty());
    assert_eq!(creature, after_first);
}

#[test]
fn test_same_seed_same_outcome() {
    let params = SimParams::default();
    let now = T0 + 3 * 86_400;

    let mut a = Creature::new("Pip", T0);
    let mut b = Creature::new("Pip", T0);
    let report_a = replay_ticks(&mut a, &params, now, &mut ChaCha8Rng::seed_from_u64(7));
    let report_b = replay_ticks(&mut b, &params, now, &mut ChaCha8Rng::seed_from_u64(7));

    assert_eq!(a, b);
    assert_eq!(report_a, report_b);
}

#[test]
fn test_one_long_gap_equals_many_short_ones() {
    let params = SimParams::default();
    let mut whole = Creature::new("Pip", T0);
    let mut pieces = whole.clone();

    let mut rng_whole = test_rng();
    replay_ticks(&mut whole, &params, T0 + 40 * TICK, &mut rng_whole);

    let mut rng_pieces = test_rng();
    for step in [3, 10, 11, 25, 40] {
        replay_ticks(&mut pieces, &params, T0 + step * TICK + 99, &mut rng_pieces);
    }
    assert_eq!(whole.hunger, pieces.hunger);
    assert_eq!(whole.happiness, pieces.happiness);
    assert_eq!(whole.health, pieces.health);
    assert_eq!(whole.waste_count, pieces.waste_count);
    assert_eq!(whole.last_tick_at, pieces.last_tick_at);
}

#[test]
fn test_last_tick_advances_in_exact_multiples() {
    let params = SimParams::default();
    let mut rng = never();
    let mut creature = Creature::new("Pip", T0);

    let mut previous = creature.last_tick_at;
    for now in [T0 + 10, T0 + TICK - 1, T0 + TICK, T0 + 7 * TICK + 123, T0 + 7 * TICK + 599] {
        replay_ticks(&mut creature, &params, now, &mut rng);
        assert!(creature.last_tick_at >= previous);
        assert_eq!((creature.last_tick_at - T0) % TICK, 0);
        assert!(creature.last_tick_at <= now);
        assert!(now - creature.last_tick_at < TICK);
        previous = creature.last_tick_at;
    }
    assert_eq!(creature.last_tick_at, T0 + 7 * TICK);
}

#[test]
fn test_clock_moving_backwards_changes_nothing() {
    let params = SimParams::default();
    let mut creature = Creature::new("Pip", T0);
    let before = creature.clone();
    let report = replay_ticks(&mut creature, &params, T0 - 86_400, &mut never());
    assert!(report.is_empty());
    assert_eq!(creature, before);
}

#[test]
fn test_sustained_starvation_kills() {
    let params = starvation_only_params();
    let mut rng = never();
    let mut creature = Creature::new("Pip", T0);
    creature.hunger = 100.0;

    // Critical from the end of the first tick; the limit is 12 hours later.
    replay_ticks(&mut creature, &params, T0 + 73 * TICK, &mut rng);
    assert!(creature.alive);
    assert_eq!(creature.hunger_critical_since, Some(T0 + TICK));

    let report = replay_ticks(&mut creature, &params, T0 + 74 * TICK + 1, &mut rng);
    assert!(!creature.alive);
    assert_eq!(creature.cause_of_death, Some(DeathCause::Starvation));
    assert_eq!(report.death, Some(DeathCause::Starvation));
    assert!(report
        .events
        .iter()
        .any(|e| matches!(e, TickEvent::Died { cause: DeathCause::Starvation, .. })));
}

#[test]
fn test_feeding_below_critical_resets_the_clock() {
    let params = starvation_only_params();
    let mut rng = never();
    let mut creature = Creature::new("Pip", T0);

    replay_ticks(&mut creature, &params, T0 + 50 * TICK, &mut rng);
    assert_eq!(creature.hunger, 100.0);
    assert!(creature.hunger_critical_since.is_some());

    let outcome = actions::feed(&mut creature, &params, "meal", T0 + 50 * TICK, &mut rng);
    assert!(outcome.success, "{}", outcome.message);
    assert_eq!(creature.hunger_critical_since, None);

    replay_ticks(&mut creature, &params, T0 + 80 * TICK, &mut rng);
    assert!(creature.alive);
    assert_eq!(creature.hunger_critical_since, Some(T0 + 55 * TICK));
}

#[test]
fn test_dead_creature_is_frozen() {
    let params = SimParams::default();
    let mut creature = Creature::new("Pip", T0);
    creature.health = 0.0;
    replay_ticks(&mut creature, &params, T0 + TICK, &mut never());
    assert!(!creature.alive);

    let frozen = creature.clone();
    let report = replay_ticks(&mut creature, &params, T0 + 100 * TICK, &mut test_rng());
    assert!(report.is_empty());
    assert_eq!(creature, frozen);
}

#[test]
fn test_stats_stay_in_range_over_a_long_absence() {
    let params = SimParams::default();
    for seed in 0..20 {
        let mut creature = Creature::new("Pip", T0);
        replay_ticks(
            &mut creature,
            &params,
            T0 + 90 * 86_400,
            &mut ChaCha8Rng::seed_from_u64(seed),
        );
        for stat in [
            creature.hunger,
            creature.happiness,
            creature.energy,
            creature.health,
            creature.discipline,
        ] {
            assert!((0.0..=100.0).contains(&stat), "seed {} stat {}", seed, stat);
        }
        assert!(creature.waste_count <= params.waste_cap());
        assert!(!creature.alive, "nobody survives 90 days of neglect");
    }
}
