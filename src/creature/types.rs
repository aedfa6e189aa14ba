//! The creature record and its closed vocabularies.

use crate::core::constants::*;
use crate::core::params::SimParams;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::str::FromStr;

/// Clamps a stat into [0, 100].
pub fn clamp_stat(value: f64) -> f64 {
    if value.is_nan() {
        return STAT_MIN;
    }
    value.clamp(STAT_MIN, STAT_MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Illness {
    /// Caught when health runs low
    Cold,
    /// Caught when starving
    Stomachache,
    /// Caught from a dirty habitat
    Infection,
}

impl Illness {
    pub fn name(&self) -> &'static str {
        match self {
            Illness::Cold => "a cold",
            Illness::Stomachache => "a stomachache",
            Illness::Infection => "an infection",
        }
    }

    /// Health lost per tick while this illness lasts.
    pub fn health_penalty(&self, params: &SimParams) -> f64 {
        match self {
            Illness::Cold => params.cold_health_penalty,
            Illness::Stomachache => params.stomachache_health_penalty,
            Illness::Infection => params.infection_health_penalty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Trick {
    Sit,
    Spin,
    RollOver,
    Dance,
    PlayDead,
    HighFive,
}

impl Trick {
    pub fn all() -> [Trick; 6] {
        [
            Trick::Sit,
            Trick::Spin,
            Trick::RollOver,
            Trick::Dance,
            Trick::PlayDead,
            Trick::HighFive,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Trick::Sit => "sit",
            Trick::Spin => "spin",
            Trick::RollOver => "roll over",
            Trick::Dance => "dance",
            Trick::PlayDead => "play dead",
            Trick::HighFive => "high five",
        }
    }
}

impl fmt::Display for Trick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a trick name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTrick(pub String);

impl FromStr for Trick {
    type Err = UnknownTrick;

    /// Accepts "roll over", "roll-over", "rollover", "RollOver" and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        Trick::all()
            .into_iter()
            .find(|trick| {
                trick
                    .name()
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .collect::<String>()
                    == key
            })
            .ok_or_else(|| UnknownTrick(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LifeStage {
    Baby,
    Child,
    Teen,
    Adult,
    Senior,
}

impl LifeStage {
    pub fn from_age_days(age_days: f64, params: &SimParams) -> Self {
        if age_days >= params.senior_from_days {
            LifeStage::Senior
        } else if age_days >= params.adult_from_days {
            LifeStage::Adult
        } else if age_days >= params.teen_from_days {
            LifeStage::Teen
        } else if age_days >= params.child_from_days {
            LifeStage::Child
        } else {
            LifeStage::Baby
        }
    }

    pub fn discipline_factor(&self, params: &SimParams) -> f64 {
        let f = &params.stage_discipline_factors;
        match self {
            LifeStage::Baby => f.baby,
            LifeStage::Child => f.child,
            LifeStage::Teen => f.teen,
            LifeStage::Adult => f.adult,
            LifeStage::Senior => f.senior,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LifeStage::Baby => "Baby",
            LifeStage::Child => "Child",
            LifeStage::Teen => "Teen",
            LifeStage::Adult => "Adult",
            LifeStage::Senior => "Senior",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    PoorHealth,
    OldAge,
    Starvation,
    Despair,
}

impl DeathCause {
    pub fn reason(&self) -> &'static str {
        match self {
            DeathCause::PoorHealth => "poor health",
            DeathCause::OldAge => "old age",
            DeathCause::Starvation => "starvation",
            DeathCause::Despair => "despair",
        }
    }
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub at: i64,
    pub text: String,
}

/// The pet. One instance per save file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Creature {
    pub name: String,
    /// 0 = full, 100 = starving
    pub hunger: f64,
    pub happiness: f64,
    pub energy: f64,
    pub health: f64,
    pub discipline: f64,
    pub weight: f64,
    pub awake: bool,
    pub alive: bool,
    pub cause_of_death: Option<DeathCause>,
    pub illness: Option<Illness>,
    pub waste_count: u32,
    /// Birth time, unix seconds. Zero means unset.
    pub created_at: i64,
    /// Start of the next unreplayed tick. Zero means unset.
    pub last_tick_at: i64,
    pub last_fed_at: i64,
    pub hunger_critical_since: Option<i64>,
    pub happiness_critical_since: Option<i64>,
    pub tricks_known: BTreeSet<Trick>,
    pub event_log: VecDeque<LogEntry>,
}

impl Default for Creature {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            hunger: STARTING_HUNGER,
            happiness: STARTING_HAPPINESS,
            energy: STARTING_ENERGY,
            health: STARTING_HEALTH,
            discipline: STARTING_DISCIPLINE,
            weight: STARTING_WEIGHT,
            awake: true,
            alive: true,
            cause_of_death: None,
            illness: None,
            waste_count: 0,
            created_at: 0,
            last_tick_at: 0,
            last_fed_at: 0,
            hunger_critical_since: None,
            happiness_critical_since: None,
            tricks_known: BTreeSet::new(),
            event_log: VecDeque::new(),
        }
    }
}

impl Creature {
    /// A newborn, all timestamps set to `now`.
    pub fn new(name: &str, now: i64) -> Self {
        let name = name.trim();
        let name = if name.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            name.chars().take(MAX_NAME_LENGTH).collect()
        };
        Self {
            name,
            created_at: now,
            last_tick_at: now,
            last_fed_at: now,
            ..Self::default()
        }
    }

    /// Age in fractional days at `at`.
    pub fn age_days_at(&self, at: i64) -> f64 {
        (at - self.created_at).max(0) as f64 / SECONDS_PER_DAY as f64
    }

    pub fn is_ill(&self) -> bool {
        self.illness.is_some()
    }

    /// Appends to the event log, evicting the oldest entries past `capacity`.
    pub fn log_event(&mut self, at: i64, text: impl Into<String>, capacity: usize) {
        self.event_log.push_back(LogEntry {
            at,
            text: text.into(),
        });
        while self.event_log.len() > capacity.max(1) {
            self.event_log.pop_front();
        }
    }

    /// Brings a freshly deserialized record back within its invariants.
    ///
    /// Unset timestamps are filled in (birth falls back to the last tick so an
    /// old record does not suddenly age), stats are clamped, waste is capped,
    /// stale critical trackers are cleared and the event log trimmed.
    pub fn repair(&mut self, now: i64, params: &SimParams) {
        if self.name.trim().is_empty() {
            self.name = DEFAULT_NAME.to_string();
        }
        if self.last_tick_at <= 0 {
            self.last_tick_at = if self.created_at > 0 {
                self.created_at
            } else {
                now
            };
        }
        if self.created_at <= 0 {
            self.created_at = self.last_tick_at;
        }
        if self.last_fed_at <= 0 {
            self.last_fed_at = self.created_at;
        }

        self.hunger = clamp_stat(self.hunger);
        self.happiness = clamp_stat(self.happiness);
        self.energy = clamp_stat(self.energy);
        self.health = clamp_stat(self.health);
        self.discipline = clamp_stat(self.discipline);
        if !(self.weight.is_finite() && self.weight > 0.0) {
            self.weight = STARTING_WEIGHT;
        }
        self.waste_count = self.waste_count.min(params.waste_cap());

        // A tracker only runs while its stat sits at the extreme, and never
        // starts before birth or after now.
        let born = self.created_at;
        let window = move |since: i64| since.max(born).min(now);
        self.hunger_critical_since = self
            .hunger_critical_since
            .filter(|_| self.hunger >= STAT_MAX)
            .map(window);
        self.happiness_critical_since = self
            .happiness_critical_since
            .filter(|_| self.happiness <= STAT_MIN)
            .map(window);

        if !self.alive {
            self.awake = false;
            if self.cause_of_death.is_none() {
                self.cause_of_death = Some(DeathCause::PoorHealth);
            }
        }

        while self.event_log.len() > params.event_log_capacity.max(1) {
            self.event_log.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creature_defaults() {
        let creature = Creature::new("Mochi", 1_000);
        assert_eq!(creature.name, "Mochi");
        assert_eq!(creature.hunger, 50.0);
        assert_eq!(creature.happiness, 50.0);
        assert_eq!(creature.energy, 100.0);
        assert_eq!(creature.health, 100.0);
        assert!(creature.alive);
        assert!(creature.awake);
        assert_eq!(creature.created_at, 1_000);
        assert_eq!(creature.last_tick_at, 1_000);
        assert_eq!(creature.last_fed_at, 1_000);
        assert!(creature.tricks_known.is_empty());
    }

    #[test]
    fn test_blank_name_becomes_default() {
        assert_eq!(Creature::new("   ", 0).name, DEFAULT_NAME);
    }

    #[test]
    fn test_long_name_is_truncated() {
        let creature = Creature::new("Bartholomew the Magnificent", 0);
        assert_eq!(creature.name.chars().count(), MAX_NAME_LENGTH);
    }

    #[test]
    fn test_clamp_stat() {
        assert_eq!(clamp_stat(-4.0), 0.0);
        assert_eq!(clamp_stat(140.0), 100.0);
        assert_eq!(clamp_stat(42.5), 42.5);
        assert_eq!(clamp_stat(f64::NAN), 0.0);
    }

    #[test]
    fn test_event_log_evicts_oldest() {
        let mut creature = Creature::new("Log", 0);
        for i in 0..5 {
            creature.log_event(i, format!("event {}", i), 3);
        }
        let texts: Vec<_> = creature.event_log.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["event 2", "event 3", "event 4"]);
    }

    #[test]
    fn test_trick_parsing() {
        assert_eq!("sit".parse::<Trick>(), Ok(Trick::Sit));
        assert_eq!("Roll Over".parse::<Trick>(), Ok(Trick::RollOver));
        assert_eq!("roll-over".parse::<Trick>(), Ok(Trick::RollOver));
        assert_eq!("playdead".parse::<Trick>(), Ok(Trick::PlayDead));
        assert_eq!(
            "backflip".parse::<Trick>(),
            Err(UnknownTrick("backflip".to_string()))
        );
    }

    #[test]
    fn test_life_stage_thresholds() {
        let params = SimParams::default();
        assert_eq!(LifeStage::from_age_days(0.5, &params), LifeStage::Baby);
        assert_eq!(LifeStage::from_age_days(1.0, &params), LifeStage::Child);
        assert_eq!(LifeStage::from_age_days(4.0, &params), LifeStage::Teen);
        assert_eq!(LifeStage::from_age_days(10.0, &params), LifeStage::Adult);
        assert_eq!(LifeStage::from_age_days(45.0, &params), LifeStage::Senior);
    }

    #[test]
    fn test_repair_fills_timestamps_and_clamps() {
        let params = SimParams::default();
        let mut creature = Creature {
            hunger: 130.0,
            happiness: -5.0,
            waste_count: 99,
            weight: -1.0,
            ..Creature::default()
        };
        creature.repair(5_000, &params);
        assert_eq!(creature.last_tick_at, 5_000);
        assert_eq!(creature.created_at, 5_000);
        assert_eq!(creature.last_fed_at, 5_000);
        assert_eq!(creature.hunger, 100.0);
        assert_eq!(creature.happiness, 0.0);
        assert_eq!(creature.waste_count, params.waste_cap());
        assert_eq!(creature.weight, STARTING_WEIGHT);
    }

    #[test]
    fn test_repair_uses_last_tick_for_missing_birth() {
        let params = SimParams::default();
        let mut creature = Creature {
            last_tick_at: 777,
            ..Creature::default()
        };
        creature.repair(10_000, &params);
        assert_eq!(creature.created_at, 777);
        assert_eq!(creature.last_tick_at, 777);
    }

    #[test]
    fn test_repair_keeps_dead_creature_asleep() {
        let params = SimParams::default();
        let mut creature = Creature::new("Ghost", 10);
        creature.alive = false;
        creature.repair(20, &params);
        assert!(!creature.awake);
        assert_eq!(creature.cause_of_death, Some(DeathCause::PoorHealth));
    }
}
