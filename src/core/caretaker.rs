//! The command surface: owns params, clock and randomness, and brings the
//! creature up to date before every action.

use super::clock::Clock;
use super::params::SimParams;
use super::tick::{replay_ticks, TickReport};
use crate::command::{Command, HELP_TEXT};
use crate::creature::actions::{self, ActionOutcome};
use crate::creature::status::StatusSnapshot;
use crate::creature::types::{Creature, Trick};
use rand::Rng;

pub struct Caretaker<C: Clock, R: Rng> {
    params: SimParams,
    clock: C,
    rng: R,
}

/// Result of an `execute` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Catch-up that ran before the command
    pub report: TickReport,
    pub outcome: ActionOutcome,
    /// Set by `quit`
    pub quit: bool,
}

impl<C: Clock, R: Rng> Caretaker<C, R> {
    pub fn new(params: SimParams, clock: C, rng: R) -> Self {
        Self { params, clock, rng }
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn now(&self) -> i64 {
        self.clock.now()
    }

    /// A brand-new creature born now.
    pub fn adopt(&self, name: &str) -> Creature {
        let now = self.clock.now();
        let mut creature = Creature::new(name, now);
        let text = format!("{} was born!", creature.name);
        creature.log_event(now, text, self.params.event_log_capacity);
        tracing::info!(name = %creature.name, "creature adopted");
        creature
    }

    /// Replays elapsed time up to now.
    pub fn replay(&mut self, creature: &mut Creature) -> TickReport {
        let now = self.clock.now();
        replay_ticks(creature, &self.params, now, &mut self.rng)
    }

    /// Replays, then captures the status at now.
    pub fn status(&mut self, creature: &mut Creature) -> StatusSnapshot {
        self.replay(creature);
        StatusSnapshot::capture(creature, self.clock.now(), &self.params)
    }

    pub fn feed(&mut self, creature: &mut Creature, food: &str) -> ActionOutcome {
        self.replay(creature);
        actions::feed(creature, &self.params, food, self.clock.now(), &mut self.rng)
    }

    pub fn play(&mut self, creature: &mut Creature, game: Option<&str>) -> ActionOutcome {
        self.replay(creature);
        actions::play(creature, &self.params, game, self.clock.now(), &mut self.rng)
    }

    pub fn sleep(&mut self, creature: &mut Creature) -> ActionOutcome {
        self.replay(creature);
        actions::sleep(creature, &self.params, self.clock.now(), &mut self.rng)
    }

    /// The sleep period is replayed as asleep before the creature wakes.
    pub fn wake(&mut self, creature: &mut Creature, reason: Option<&str>) -> ActionOutcome {
        self.replay(creature);
        actions::wake(creature, &self.params, reason, self.clock.now())
    }

    pub fn clean(&mut self, creature: &mut Creature) -> ActionOutcome {
        self.replay(creature);
        actions::clean(creature, &self.params, self.clock.now())
    }

    pub fn give_medicine(&mut self, creature: &mut Creature) -> ActionOutcome {
        self.replay(creature);
        actions::give_medicine(creature, &self.params, self.clock.now(), &mut self.rng)
    }

    pub fn scold(&mut self, creature: &mut Creature) -> ActionOutcome {
        self.replay(creature);
        actions::scold(creature, &self.params, self.clock.now())
    }

    pub fn train(&mut self, creature: &mut Creature, trick: Option<Trick>) -> ActionOutcome {
        self.replay(creature);
        actions::train(creature, &self.params, trick, self.clock.now(), &mut self.rng)
    }

    pub fn perform_trick(&mut self, creature: &mut Creature, trick: Trick) -> ActionOutcome {
        self.replay(creature);
        actions::perform_trick(creature, &self.params, trick, self.clock.now(), &mut self.rng)
    }

    pub fn pet_affection(&mut self, creature: &mut Creature) -> ActionOutcome {
        self.replay(creature);
        actions::pet_affection(creature, &self.params, self.clock.now())
    }

    /// Runs one parsed command.
    pub fn execute(&mut self, creature: &mut Creature, command: Command) -> Reply {
        let report = self.replay(creature);
        let now = self.clock.now();
        let params = &self.params;
        let rng = &mut self.rng;

        let mut quit = false;
        let outcome = match command {
            Command::Feed(food) => actions::feed(creature, params, &food, now, rng),
            Command::Play(game) => actions::play(creature, params, game.as_deref(), now, rng),
            Command::Sleep => actions::sleep(creature, params, now, rng),
            Command::Wake(reason) => actions::wake(creature, params, reason.as_deref(), now),
            Command::Clean => actions::clean(creature, params, now),
            Command::Medicine => actions::give_medicine(creature, params, now, rng),
            Command::Scold => actions::scold(creature, params, now),
            Command::Train(trick) => actions::train(creature, params, trick, now, rng),
            Command::Perform(trick) => actions::perform_trick(creature, params, trick, now, rng),
            Command::Pet => actions::pet_affection(creature, params, now),
            Command::Tick => ActionOutcome::success(report.summary(params)),
            Command::Status => {
                let snapshot = StatusSnapshot::capture(creature, now, params);
                ActionOutcome::success(format!(
                    "{}: {} ({}).",
                    snapshot.name,
                    snapshot.mood.name(),
                    snapshot.condition()
                ))
            }
            Command::Help => ActionOutcome::success(HELP_TEXT),
            Command::Quit => {
                quit = true;
                ActionOutcome::success("Goodbye!")
            }
        };

        tracing::debug!(success = outcome.success, message = %outcome.message, "command");
        Reply {
            report,
            outcome,
            quit,
        }
    }
}
