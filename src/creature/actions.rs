//! Guarded state transitions for everything the owner can do.
//!
//! Every handler checks, in order: alive, preconditions, the temperament
//! (refusal) roll where it applies, and only then mutates. A rejected action
//! leaves the creature untouched and returns `success: false` with a message
//! saying why.

use super::types::{clamp_stat, Creature, LifeStage, Trick};
use crate::core::constants::STAT_MAX;
use crate::core::death::refresh_critical_trackers;
use crate::core::params::SimParams;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub message: String,
    pub success: bool,
}

impl ActionOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

/// Chance the creature ignores an otherwise valid request.
pub fn refusal_chance(creature: &Creature, params: &SimParams) -> f64 {
    let unruly = (STAT_MAX - creature.discipline) / STAT_MAX;
    let grumpy = ((STAT_MAX - creature.happiness) + (STAT_MAX - creature.energy)) / (2.0 * STAT_MAX);
    (params.refusal_discipline_weight * unruly + params.refusal_mood_weight * grumpy)
        .clamp(0.0, params.refusal_max_chance)
}

fn refuses<R: Rng>(creature: &Creature, params: &SimParams, rng: &mut R) -> bool {
    let chance = refusal_chance(creature, params);
    chance > 0.0 && rng.gen::<f64>() < chance
}

/// Chance a training session teaches the trick.
pub fn training_chance(creature: &Creature, params: &SimParams) -> f64 {
    (params.train_base_chance
        + params.train_discipline_weight * creature.discipline / STAT_MAX
        + params.train_happiness_weight * creature.happiness / STAT_MAX)
        .clamp(0.0, params.train_max_chance)
}

fn dead(creature: &Creature) -> Option<ActionOutcome> {
    if creature.alive {
        return None;
    }
    Some(ActionOutcome::rejected(format!(
        "{} has passed away.",
        creature.name
    )))
}

fn asleep(creature: &Creature, doing: &str) -> Option<ActionOutcome> {
    if creature.awake {
        return None;
    }
    Some(ActionOutcome::rejected(format!(
        "{} is sleeping and cannot {}.",
        creature.name, doing
    )))
}

/// Bookkeeping shared by every successful action.
fn finish(creature: &mut Creature, params: &SimParams, now: i64, message: String) -> ActionOutcome {
    refresh_critical_trackers(creature, now);
    creature.log_event(now, message.clone(), params.event_log_capacity);
    ActionOutcome::success(message)
}

pub fn feed<R: Rng>(
    creature: &mut Creature,
    params: &SimParams,
    food: &str,
    now: i64,
    rng: &mut R,
) -> ActionOutcome {
    if let Some(outcome) = dead(creature).or_else(|| asleep(creature, "eat")) {
        return outcome;
    }
    let Some(effect) = params.food(food).copied() else {
        let menu: Vec<&str> = params.foods.keys().map(String::as_str).collect();
        return ActionOutcome::rejected(format!(
            "Unknown food '{}'. Try: {}.",
            food.trim(),
            menu.join(", ")
        ));
    };
    if creature.hunger <= 0.0 {
        return ActionOutcome::rejected(format!("{} isn't hungry.", creature.name));
    }
    if refuses(creature, params, rng) {
        return ActionOutcome::rejected(format!(
            "{} turns up its nose at the food.",
            creature.name
        ));
    }

    let factor = if creature.health <= params.health_low {
        params.low_health_food_factor
    } else {
        1.0
    };
    let hunger_before = creature.hunger;
    creature.hunger = clamp_stat(creature.hunger - effect.hunger_restore * factor);
    creature.happiness = clamp_stat(creature.happiness + effect.happiness * factor);
    creature.health = clamp_stat(creature.health + effect.health * factor);
    creature.weight += effect.weight_gain;
    creature.last_fed_at = now;

    let food = food.trim().to_lowercase();
    let mut message = format!(
        "{} eats the {}. Hunger -{:.0}.",
        creature.name,
        food,
        hunger_before - creature.hunger
    );
    if factor < 1.0 {
        message.push_str(" It only picks at it.");
    }
    finish(creature, params, now, message)
}

pub fn play<R: Rng>(
    creature: &mut Creature,
    params: &SimParams,
    game: Option<&str>,
    now: i64,
    rng: &mut R,
) -> ActionOutcome {
    if let Some(outcome) = dead(creature).or_else(|| asleep(creature, "play")) {
        return outcome;
    }
    let game = game
        .map(|g| g.trim().to_lowercase())
        .unwrap_or_else(|| params.default_game.clone());
    let Some(effect) = params.game(&game).copied() else {
        let games: Vec<&str> = params.games.keys().map(String::as_str).collect();
        return ActionOutcome::rejected(format!(
            "Unknown game '{}'. Try: {}.",
            game,
            games.join(", ")
        ));
    };
    if creature.is_ill() {
        return ActionOutcome::rejected(format!("{} is too sick to play.", creature.name));
    }
    if creature.hunger > params.play_hunger_limit {
        return ActionOutcome::rejected(format!("{} is too hungry to play.", creature.name));
    }
    if creature.waste_count > params.max_waste / 2 {
        return ActionOutcome::rejected(format!(
            "{} doesn't want to play in this mess.",
            creature.name
        ));
    }
    if creature.energy < effect.energy_cost {
        return ActionOutcome::rejected(format!("{} is too tired to play.", creature.name));
    }
    if refuses(creature, params, rng) {
        return ActionOutcome::rejected(format!(
            "{} would rather not play right now.",
            creature.name
        ));
    }

    let mut joy = effect.happiness;
    let won = effect.win_chance > 0.0 && rng.gen::<f64>() < effect.win_chance;
    if won {
        joy += effect.win_bonus;
    }
    creature.happiness = clamp_stat(creature.happiness + joy);
    creature.hunger = clamp_stat(creature.hunger + effect.hunger_cost);
    creature.energy = clamp_stat(creature.energy - effect.energy_cost);

    let message = if won {
        format!("{} plays {} and wins! Happiness +{:.0}.", creature.name, game, joy)
    } else {
        format!("{} plays {}. Happiness +{:.0}.", creature.name, game, joy)
    };
    finish(creature, params, now, message)
}

pub fn sleep<R: Rng>(
    creature: &mut Creature,
    params: &SimParams,
    now: i64,
    rng: &mut R,
) -> ActionOutcome {
    if let Some(outcome) = dead(creature) {
        return outcome;
    }
    if !creature.awake {
        return ActionOutcome::rejected(format!("{} is already sleeping.", creature.name));
    }
    if creature.hunger > params.sleep_hunger_limit {
        return ActionOutcome::rejected(format!(
            "{} is too hungry to fall asleep.",
            creature.name
        ));
    }
    if creature.health < params.sleep_min_health {
        return ActionOutcome::rejected(format!(
            "{} feels too unwell to sleep.",
            creature.name
        ));
    }
    if refuses(creature, params, rng) {
        return ActionOutcome::rejected(format!("{} won't go to bed.", creature.name));
    }

    creature.awake = false;
    let message = format!("{} goes to sleep.", creature.name);
    finish(creature, params, now, message)
}

/// Wakes the creature. Time spent asleep must already have been replayed.
pub fn wake(
    creature: &mut Creature,
    params: &SimParams,
    reason: Option<&str>,
    now: i64,
) -> ActionOutcome {
    if let Some(outcome) = dead(creature) {
        return outcome;
    }
    if creature.awake {
        return ActionOutcome::rejected(format!("{} is already awake.", creature.name));
    }

    creature.awake = true;
    let mut message = match reason.map(str::trim).filter(|r| !r.is_empty()) {
        Some(reason) => format!("{} wakes up ({}).", creature.name, reason),
        None => format!("{} wakes up!", creature.name),
    };
    if creature.energy < params.grumpy_wake_energy {
        creature.happiness = clamp_stat(creature.happiness - params.grumpy_wake_penalty);
        message.push_str(" It's grumpy about it.");
    }
    finish(creature, params, now, message)
}

pub fn clean(creature: &mut Creature, params: &SimParams, now: i64) -> ActionOutcome {
    if let Some(outcome) = dead(creature) {
        return outcome;
    }
    if creature.waste_count == 0 {
        return ActionOutcome::rejected("Nothing to clean!");
    }

    let cleaned = creature.waste_count;
    creature.waste_count = 0;
    let joy = (cleaned as f64 * params.clean_happiness_per_waste).min(params.clean_happiness_cap);
    creature.happiness = clamp_stat(creature.happiness + joy);
    let message = format!("Cleaned up {} mess(es). Happiness +{:.0}.", cleaned, joy);
    finish(creature, params, now, message)
}

pub fn give_medicine<R: Rng>(
    creature: &mut Creature,
    params: &SimParams,
    now: i64,
    rng: &mut R,
) -> ActionOutcome {
    if let Some(outcome) = dead(creature) {
        return outcome;
    }
    let Some(illness) = creature.illness else {
        return ActionOutcome::rejected(format!("{} isn't sick.", creature.name));
    };
    if refuses(creature, params, rng) {
        return ActionOutcome::rejected(format!(
            "{} spits out the medicine.",
            creature.name
        ));
    }

    creature.illness = None;
    creature.happiness = clamp_stat(creature.happiness - params.medicine_happiness_cost);
    creature.health = clamp_stat(creature.health + params.medicine_health_boost);
    let message = format!(
        "{} took the medicine and got over {}. It tastes awful!",
        creature.name,
        illness.name()
    );
    finish(creature, params, now, message)
}

pub fn scold(creature: &mut Creature, params: &SimParams, now: i64) -> ActionOutcome {
    if let Some(outcome) = dead(creature).or_else(|| asleep(creature, "be scolded")) {
        return outcome;
    }
    if creature.discipline >= STAT_MAX {
        return ActionOutcome::rejected(format!(
            "{} is already perfectly behaved.",
            creature.name
        ));
    }

    creature.discipline = clamp_stat(creature.discipline + params.scold_discipline);
    creature.happiness = clamp_stat(creature.happiness - params.scold_happiness_cost);
    let message = format!("You scold {}. It looks sheepish.", creature.name);
    finish(creature, params, now, message)
}

/// Runs a training session, picking a random unlearned trick when none is
/// requested.
///
/// An attempted lesson counts as a successful action whether or not the
/// trick sticks; the message says which.
pub fn train<R: Rng>(
    creature: &mut Creature,
    params: &SimParams,
    trick: Option<Trick>,
    now: i64,
    rng: &mut R,
) -> ActionOutcome {
    if let Some(outcome) = dead(creature).or_else(|| asleep(creature, "train")) {
        return outcome;
    }
    if LifeStage::from_age_days(creature.age_days_at(now), params) == LifeStage::Baby {
        return ActionOutcome::rejected(format!(
            "{} is too young to learn tricks.",
            creature.name
        ));
    }
    let unlearned: Vec<Trick> = Trick::all()
        .into_iter()
        .filter(|t| !creature.tricks_known.contains(t))
        .collect();
    if unlearned.is_empty() {
        return ActionOutcome::rejected(format!("{} already knows every trick.", creature.name));
    }
    if let Some(requested) = trick {
        if creature.tricks_known.contains(&requested) {
            return ActionOutcome::rejected(format!(
                "{} already knows how to {}.",
                creature.name, requested
            ));
        }
    }
    if creature.energy < params.train_energy_cost {
        return ActionOutcome::rejected(format!("{} is too tired to train.", creature.name));
    }
    if creature.happiness < params.train_min_happiness {
        return ActionOutcome::rejected(format!(
            "{} is too unhappy to concentrate.",
            creature.name
        ));
    }
    if creature.health < params.train_min_health {
        return ActionOutcome::rejected(format!("{} is too unwell to train.", creature.name));
    }
    if refuses(creature, params, rng) {
        return ActionOutcome::rejected(format!(
            "{} wanders off instead of training.",
            creature.name
        ));
    }

    let trick = trick.unwrap_or_else(|| unlearned[rng.gen_range(0..unlearned.len())]);
    let learned = rng.gen::<f64>() < training_chance(creature, params);
    creature.energy = clamp_stat(creature.energy - params.train_energy_cost);

    let message = if learned {
        creature.tricks_known.insert(trick);
        creature.happiness = clamp_stat(creature.happiness + params.train_success_happiness);
        creature.discipline = clamp_stat(creature.discipline + params.train_success_discipline);
        format!("{} learned to {}!", creature.name, trick)
    } else {
        creature.happiness = clamp_stat(creature.happiness - params.train_failure_happiness);
        creature.discipline = clamp_stat(creature.discipline + params.train_failure_discipline);
        format!("{} tried to {} but didn't get it yet.", creature.name, trick)
    };
    finish(creature, params, now, message)
}

pub fn perform_trick<R: Rng>(
    creature: &mut Creature,
    params: &SimParams,
    trick: Trick,
    now: i64,
    rng: &mut R,
) -> ActionOutcome {
    if let Some(outcome) = dead(creature).or_else(|| asleep(creature, "perform")) {
        return outcome;
    }
    if !creature.tricks_known.contains(&trick) {
        return ActionOutcome::rejected(format!(
            "{} doesn't know how to {} yet.",
            creature.name, trick
        ));
    }
    if creature.energy < params.perform_energy_cost {
        return ActionOutcome::rejected(format!("{} is too tired to perform.", creature.name));
    }
    if refuses(creature, params, rng) {
        return ActionOutcome::rejected(format!(
            "{} pretends not to hear you.",
            creature.name
        ));
    }

    creature.happiness = clamp_stat(creature.happiness + params.perform_happiness);
    creature.discipline = clamp_stat(creature.discipline + params.perform_discipline);
    creature.energy = clamp_stat(creature.energy - params.perform_energy_cost);
    let message = format!("{} performs '{}'. Good job!", creature.name, trick);
    finish(creature, params, now, message)
}

pub fn pet_affection(creature: &mut Creature, params: &SimParams, now: i64) -> ActionOutcome {
    if let Some(outcome) = dead(creature).or_else(|| asleep(creature, "be petted")) {
        return outcome;
    }

    creature.happiness = clamp_stat(creature.happiness + params.pet_happiness);
    let message = format!("You pet {}. It purrs happily.", creature.name);
    finish(creature, params, now, message)
}
