//! Tick replay: catching the creature up with the wall clock.
//!
//! The simulation advances in fixed ticks of `tick_seconds`. Whenever the
//! caller asks, [`replay_ticks`] works out how many whole ticks have passed
//! since `last_tick_at` and replays them one at a time, so every random event
//! is rolled against the state at its own simulated instant. It returns a
//! [`TickReport`] describing what happened so the presentation layer can show
//! it without the simulation depending on any UI types.

use super::death::{check_death, kill, refresh_critical_trackers};
use super::params::SimParams;
use crate::creature::types::{clamp_stat, Creature, DeathCause, Illness, LifeStage};
use rand::Rng;

/// A single event produced while replaying ticks.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// The creature left a mess.
    WasteProduced { at: i64, total: u32, message: String },

    /// The creature came down with something.
    FellIll {
        at: i64,
        illness: Illness,
        message: String,
    },

    /// Health went down during a tick.
    HealthDeclined { at: i64, amount: f64, message: String },

    /// The creature woke up by itself after a full night's sleep.
    WokeUp { at: i64, message: String },

    /// The creature died. Always the last event of a report.
    Died {
        at: i64,
        cause: DeathCause,
        message: String,
    },
}

impl TickEvent {
    pub fn message(&self) -> &str {
        match self {
            TickEvent::WasteProduced { message, .. }
            | TickEvent::FellIll { message, .. }
            | TickEvent::HealthDeclined { message, .. }
            | TickEvent::WokeUp { message, .. }
            | TickEvent::Died { message, .. } => message,
        }
    }
}

/// Result of one call to [`replay_ticks`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Whole ticks actually simulated (fewer than elapsed if the creature died).
    pub ticks: u64,
    /// Events in chronological order.
    pub events: Vec<TickEvent>,
    /// Set if the creature died during this replay.
    pub death: Option<DeathCause>,
}

impl TickReport {
    pub fn is_empty(&self) -> bool {
        self.ticks == 0 && self.events.is_empty() && self.death.is_none()
    }

    /// One-line summary for the presentation layer.
    pub fn summary(&self, params: &SimParams) -> String {
        if let Some(cause) = self.death {
            return format!("Passed away from {}.", cause.reason());
        }
        if self.ticks == 0 {
            return "No time has passed.".to_string();
        }
        let minutes = self.ticks as i64 * params.tick_seconds / 60;
        let span = if minutes >= 120 {
            format!("{} hours", minutes / 60)
        } else {
            format!("{} minutes", minutes)
        };
        match self.events.len() {
            0 => format!("{} passed uneventfully.", span),
            1 => format!("{} passed. {}", span, self.events[0].message()),
            n => format!("{} passed with {} events.", span, n),
        }
    }
}

/// Number of whole ticks between `last_tick_at` and `now`.
pub fn ticks_due(creature: &Creature, now: i64, params: &SimParams) -> i64 {
    if params.tick_seconds <= 0 {
        return 0;
    }
    (now - creature.last_tick_at).div_euclid(params.tick_seconds)
}

/// Replays every whole tick that has elapsed up to `now`.
///
/// `last_tick_at` moves forward by exactly `tick_seconds` per simulated tick,
/// never to `now`, so a partial tick carries over to the next call. Calling
/// again before another whole tick has passed is a no-op.
///
/// # Arguments
/// - `creature`: The pet to update in place.
/// - `params`: Tuning values.
/// - `now`: Current time, unix seconds.
/// - `rng`: Random source. Pass `&mut rand::thread_rng()` in production, or a
///   seeded `rand_chacha::ChaCha8Rng` in tests for deterministic behavior.
pub fn replay_ticks<R: Rng>(
    creature: &mut Creature,
    params: &SimParams,
    now: i64,
    rng: &mut R,
) -> TickReport {
    let mut report = TickReport::default();
    if !creature.alive {
        return report;
    }

    let due = ticks_due(creature, now, params);
    if due <= 0 {
        return report;
    }

    for _ in 0..due {
        let tick_start = creature.last_tick_at;

        // ── 1. Death as of the start of this tick ───────────────────
        if let Some(cause) = check_death(creature, tick_start, params, true, rng) {
            record_death(creature, cause, tick_start, params, &mut report);
            break;
        }

        // ── 2-6. Needs, waste, health, illness ──────────────────────
        apply_tick(creature, params, tick_start, rng, &mut report);

        // ── 7. Advance by exactly one tick ──────────────────────────
        creature.last_tick_at += params.tick_seconds;
        refresh_critical_trackers(creature, creature.last_tick_at);
        report.ticks += 1;
    }

    // Sustained-critical conditions measured against the real current time.
    if creature.alive {
        if let Some(cause) = check_death(creature, now, params, false, rng) {
            record_death(creature, cause, now, params, &mut report);
        }
    }

    tracing::debug!(
        name = %creature.name,
        due,
        simulated = report.ticks,
        events = report.events.len(),
        "replayed ticks"
    );

    report
}

fn record_death(
    creature: &mut Creature,
    cause: DeathCause,
    at: i64,
    params: &SimParams,
    report: &mut TickReport,
) {
    kill(creature, cause, at, params);
    report.death = Some(cause);
    report.events.push(TickEvent::Died {
        at,
        cause,
        message: format!("{} has passed away from {}.", creature.name, cause.reason()),
    });
}

/// Applies one tick of needs to a living creature, stamped at `at`.
fn apply_tick<R: Rng>(
    creature: &mut Creature,
    params: &SimParams,
    at: i64,
    rng: &mut R,
    report: &mut TickReport,
) {
    let capacity = params.event_log_capacity;

    // Discipline slips faster for teenagers
    let stage = LifeStage::from_age_days(creature.age_days_at(at), params);
    creature.discipline = clamp_stat(
        creature.discipline - params.discipline_per_tick * stage.discipline_factor(params),
    );

    if creature.awake {
        creature.hunger = clamp_stat(creature.hunger + params.hunger_per_tick);
        creature.energy = clamp_stat(creature.energy - params.energy_per_tick);

        let mut drain = params.happiness_per_tick;
        if creature.hunger >= params.hunger_high {
            drain += params.happiness_hunger_penalty;
        }
        if creature.energy <= params.energy_low {
            drain += params.happiness_energy_penalty;
        }
        if creature.health <= params.health_low {
            drain += params.happiness_health_penalty;
        }
        if creature.is_ill() {
            drain += params.happiness_illness_penalty;
        }
        drain += creature.waste_count as f64 * params.happiness_per_waste;
        creature.happiness = clamp_stat(creature.happiness - drain);

        let waste_chance = if at - creature.last_fed_at < params.post_meal_window_seconds {
            params.waste_chance_after_meal
        } else {
            params.waste_chance
        };
        if rng.gen::<f64>() < waste_chance && creature.waste_count < params.waste_cap() {
            creature.waste_count += 1;
            let message = format!("{} made a mess.", creature.name);
            creature.log_event(at, message.clone(), capacity);
            report.events.push(TickEvent::WasteProduced {
                at,
                total: creature.waste_count,
                message,
            });
        }
    } else {
        creature.energy = clamp_stat(creature.energy + params.sleep_energy_regen);
        if creature.health > params.health_critical && !creature.is_ill() {
            creature.happiness = clamp_stat(creature.happiness + params.sleep_happiness_regen);
        }
    }

    let mut health_delta = 0.0;
    if creature.waste_count >= params.max_waste {
        health_delta -= params.waste_health_penalty;
    }
    if creature.hunger >= params.hunger_critical {
        health_delta -= params.starving_health_penalty;
    }
    if let Some(illness) = creature.illness {
        health_delta -= illness.health_penalty(params);
    }
    if creature.waste_count == 0
        && creature.hunger < params.hunger_low
        && creature.energy >= params.energy_adequate
        && creature.awake
        && !creature.is_ill()
    {
        health_delta += params.health_regen;
    }
    let health_before = creature.health;
    creature.health = clamp_stat(creature.health + health_delta);
    let lost = health_before - creature.health;

    if !creature.is_ill() {
        if let Some(illness) = roll_illness(creature, params, rng) {
            creature.illness = Some(illness);
            let message = format!("{} caught {}!", creature.name, illness.name());
            tracing::info!(name = %creature.name, ?illness, "illness onset");
            creature.log_event(at, message.clone(), capacity);
            report.events.push(TickEvent::FellIll {
                at,
                illness,
                message,
            });
        }
    }

    // Reported only, never written to the event log
    if lost > 0.0 {
        report.events.push(TickEvent::HealthDeclined {
            at,
            amount: lost,
            message: format!("{} lost {:.0} health.", creature.name, lost),
        });
    }

    if !creature.awake && creature.energy >= params.auto_wake_energy {
        creature.awake = true;
        let message = format!("{} woke up fully rested.", creature.name);
        creature.log_event(at, message.clone(), capacity);
        report.events.push(TickEvent::WokeUp { at, message });
    }
}

/// Independent onset checks, each rolled only when its condition holds.
fn roll_illness<R: Rng>(creature: &Creature, params: &SimParams, rng: &mut R) -> Option<Illness> {
    if creature.health <= params.low_health_illness_threshold
        && rng.gen::<f64>() < params.low_health_illness_chance
    {
        return Some(Illness::Cold);
    }
    if creature.hunger >= params.hunger_critical && rng.gen::<f64>() < params.hunger_illness_chance
    {
        return Some(Illness::Stomachache);
    }
    if creature.waste_count >= params.max_waste && rng.gen::<f64>() < params.waste_illness_chance
    {
        return Some(Illness::Infection);
    }
    None
}
