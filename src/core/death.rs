//! Death conditions and the critical-duration trackers they depend on.

use super::constants::{STAT_MAX, STAT_MIN};
use super::params::SimParams;
use crate::creature::types::{Creature, DeathCause};
use rand::Rng;

/// Chance of dying of old age at `age_days`; grows linearly past the maximum.
pub fn old_age_chance(age_days: f64, params: &SimParams) -> f64 {
    if age_days <= params.max_age_days {
        return 0.0;
    }
    ((age_days - params.max_age_days) * params.old_age_chance_per_day).clamp(0.0, 1.0)
}

/// Checks the death conditions in priority order, first match wins.
///
/// The old-age check is stochastic and only rolled when `roll_old_age` is
/// set, so a re-check at the end of a replay never draws extra randomness.
pub fn check_death<R: Rng>(
    creature: &Creature,
    at: i64,
    params: &SimParams,
    roll_old_age: bool,
    rng: &mut R,
) -> Option<DeathCause> {
    if !creature.alive {
        return None;
    }

    if creature.health <= STAT_MIN {
        return Some(DeathCause::PoorHealth);
    }

    if roll_old_age {
        let chance = old_age_chance(creature.age_days_at(at), params);
        if chance > 0.0 && rng.gen::<f64>() < chance {
            return Some(DeathCause::OldAge);
        }
    }

    let sustained = |since: Option<i64>| {
        since.is_some_and(|since| {
            at.saturating_sub(since) > params.critical_duration_seconds
        })
    };
    if sustained(creature.hunger_critical_since) {
        return Some(DeathCause::Starvation);
    }
    if sustained(creature.happiness_critical_since) {
        return Some(DeathCause::Despair);
    }

    None
}

/// Starts or clears the critical-since timestamps for the state as of `at`.
pub fn refresh_critical_trackers(creature: &mut Creature, at: i64) {
    if creature.hunger >= STAT_MAX {
        creature.hunger_critical_since.get_or_insert(at);
    } else {
        creature.hunger_critical_since = None;
    }

    if creature.happiness <= STAT_MIN {
        creature.happiness_critical_since.get_or_insert(at);
    } else {
        creature.happiness_critical_since = None;
    }
}

/// Marks the creature dead. Terminal.
pub fn kill(creature: &mut Creature, cause: DeathCause, at: i64, params: &SimParams) {
    if !creature.alive {
        return;
    }
    creature.alive = false;
    creature.awake = false;
    creature.cause_of_death = Some(cause);
    let text = format!("{} has passed away from {}.", creature.name, cause.reason());
    tracing::info!(name = %creature.name, cause = %cause, "creature died");
    creature.log_event(at, text, params.event_log_capacity);
}
