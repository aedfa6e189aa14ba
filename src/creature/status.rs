//! Read-only views derived from the creature record.

use super::types::{Creature, DeathCause, Illness, LifeStage, LogEntry, Trick};
use crate::core::params::SimParams;

/// Whole days since birth, as shown to the owner.
pub fn age_in_days(creature: &Creature, now: i64) -> u64 {
    creature.age_days_at(now).floor() as u64
}

pub fn life_stage(creature: &Creature, now: i64, params: &SimParams) -> LifeStage {
    LifeStage::from_age_days(creature.age_days_at(now), params)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Dead,
    Sick,
    Sleeping,
    Happy,
    Sad,
    Neutral,
}

impl Mood {
    pub fn of(creature: &Creature, params: &SimParams) -> Self {
        if !creature.alive {
            Mood::Dead
        } else if creature.is_ill() {
            Mood::Sick
        } else if !creature.awake {
            Mood::Sleeping
        } else if creature.happiness > params.happiness_high && creature.hunger < params.hunger_low {
            Mood::Happy
        } else if creature.happiness < params.happiness_low
            || creature.hunger > params.hunger_high
            || creature.waste_count > params.max_waste / 2
        {
            Mood::Sad
        } else {
            Mood::Neutral
        }
    }

    pub fn art(&self) -> &'static str {
        match self {
            Mood::Dead => "(x_x)  R.I.P.",
            Mood::Sick => "(X_x)",
            Mood::Sleeping => "(-_-) Zzz...",
            Mood::Happy => "(^_^)/",
            Mood::Sad => "(T_T)",
            Mood::Neutral => "(._.)",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mood::Dead => "Dead",
            Mood::Sick => "Sick",
            Mood::Sleeping => "Sleeping",
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Neutral => "Neutral",
        }
    }
}

/// Something the owner should probably deal with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    Hungry,
    Starving,
    Unhappy,
    Tired,
    LowHealth,
    Sick,
    Messy,
    Unruly,
}

impl Alert {
    pub fn message(&self) -> &'static str {
        match self {
            Alert::Hungry => "Hungry",
            Alert::Starving => "Starving!",
            Alert::Unhappy => "Unhappy",
            Alert::Tired => "Tired",
            Alert::LowHealth => "Low health",
            Alert::Sick => "Sick, needs medicine",
            Alert::Messy => "Needs cleaning",
            Alert::Unruly => "Unruly",
        }
    }

    /// Needs immediate attention.
    pub fn is_urgent(&self) -> bool {
        matches!(self, Alert::Starving | Alert::LowHealth | Alert::Sick)
    }
}

/// Current alerts, most pressing first. A dead creature has none.
pub fn alerts(creature: &Creature, params: &SimParams) -> Vec<Alert> {
    let mut out = Vec::new();
    if !creature.alive {
        return out;
    }

    if creature.hunger >= params.hunger_critical {
        out.push(Alert::Starving);
    } else if creature.hunger >= params.hunger_high {
        out.push(Alert::Hungry);
    }
    if creature.health <= params.health_low {
        out.push(Alert::LowHealth);
    }
    if creature.is_ill() {
        out.push(Alert::Sick);
    }
    if creature.waste_count > params.max_waste / 2 {
        out.push(Alert::Messy);
    }
    if creature.happiness <= params.happiness_low {
        out.push(Alert::Unhappy);
    }
    if creature.awake && creature.energy <= params.energy_low {
        out.push(Alert::Tired);
    }
    if creature.discipline <= params.discipline_low {
        out.push(Alert::Unruly);
    }
    out
}

/// Everything the UI shows, computed at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub name: String,
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
    pub age_days: u64,
    pub life_stage: LifeStage,
    pub mood: Mood,
    pub alerts: Vec<Alert>,
    pub tricks_known: Vec<Trick>,
    pub recent_events: Vec<LogEntry>,
}

impl StatusSnapshot {
    pub fn capture(creature: &Creature, now: i64, params: &SimParams) -> Self {
        Self {
            name: creature.name.clone(),
            hunger: creature.hunger,
            happiness: creature.happiness,
            energy: creature.energy,
            health: creature.health,
            discipline: creature.discipline,
            weight: creature.weight,
            awake: creature.awake,
            alive: creature.alive,
            cause_of_death: creature.cause_of_death,
            illness: creature.illness,
            waste_count: creature.waste_count,
            age_days: age_in_days(creature, now),
            life_stage: life_stage(creature, now, params),
            mood: Mood::of(creature, params),
            alerts: alerts(creature, params),
            tricks_known: creature.tricks_known.iter().copied().collect(),
            recent_events: creature.event_log.iter().cloned().collect(),
        }
    }

    /// One-line state summary such as "Awake | Sick".
    pub fn condition(&self) -> String {
        if !self.alive {
            return match self.cause_of_death {
                Some(cause) => format!("Died of {}", cause),
                None => "Dead".to_string(),
            };
        }
        let mut parts = vec![if self.awake { "Awake" } else { "Sleeping" }.to_string()];
        if let Some(illness) = self.illness {
            parts.push(format!("Has {}", illness.name()));
        }
        parts.join(" | ")
    }

    /// Plain-text rendering for non-interactive output.
    pub fn to_plain_text(&self) -> String {
        let mut out = format!(
            "{} the {} ({} days old)\n{}\n{}\n\n",
            self.name,
            self.life_stage.name(),
            self.age_days,
            self.mood.art(),
            self.condition()
        );
        for (label, value) in [
            ("Hunger", self.hunger),
            ("Happiness", self.happiness),
            ("Energy", self.energy),
            ("Health", self.health),
            ("Discipline", self.discipline),
        ] {
            out.push_str(&format!("{:<11}{:>5.0}\n", label, value));
        }
        out.push_str(&format!("{:<11}{:>5.1}\n", "Weight", self.weight));
        out.push_str(&format!("{:<11}{:>5}\n", "Waste", self.waste_count));

        if !self.tricks_known.is_empty() {
            let tricks: Vec<&str> = self.tricks_known.iter().map(|t| t.name()).collect();
            out.push_str(&format!("Tricks: {}\n", tricks.join(", ")));
        }
        if !self.alerts.is_empty() {
            let alerts: Vec<&str> = self.alerts.iter().map(|a| a.message()).collect();
            out.push_str(&format!("Alerts: {}\n", alerts.join(", ")));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::SECONDS_PER_DAY;

    #[test]
    fn test_age_is_whole_days() {
        let creature = Creature::new("Pip", 0);
        assert_eq!(age_in_days(&creature, SECONDS_PER_DAY - 1), 0);
        assert_eq!(age_in_days(&creature, 3 * SECONDS_PER_DAY + 5), 3);
    }

    #[test]
    fn test_mood_priority() {
        let params = SimParams::default();
        let mut creature = Creature::new("Pip", 0);
        assert_eq!(Mood::of(&creature, &params), Mood::Neutral);

        creature.happiness = 80.0;
        creature.hunger = 10.0;
        assert_eq!(Mood::of(&creature, &params), Mood::Happy);

        creature.awake = false;
        assert_eq!(Mood::of(&creature, &params), Mood::Sleeping);

        creature.illness = Some(Illness::Cold);
        assert_eq!(Mood::of(&creature, &params), Mood::Sick);

        creature.alive = false;
        assert_eq!(Mood::of(&creature, &params), Mood::Dead);
    }

    #[test]
    fn test_mess_makes_creature_sad() {
        let params = SimParams::default();
        let mut creature = Creature::new("Pip", 0);
        creature.waste_count = params.max_waste / 2 + 1;
        assert_eq!(Mood::of(&creature, &params), Mood::Sad);
    }

    #[test]
    fn test_alerts() {
        let params = SimParams::default();
        let mut creature = Creature::new("Pip", 0);
        assert!(alerts(&creature, &params).is_empty());

        creature.hunger = 95.0;
        creature.energy = 5.0;
        creature.discipline = 10.0;
        let found = alerts(&creature, &params);
        assert!(found.contains(&Alert::Starving));
        assert!(!found.contains(&Alert::Hungry));
        assert!(found.contains(&Alert::Tired));
        assert!(found.contains(&Alert::Unruly));
        assert!(found[0].is_urgent());
    }

    #[test]
    fn test_dead_creature_has_no_alerts() {
        let params = SimParams::default();
        let mut creature = Creature::new("Pip", 0);
        creature.hunger = 100.0;
        creature.alive = false;
        assert!(alerts(&creature, &params).is_empty());
    }

    #[test]
    fn test_snapshot_plain_text() {
        let params = SimParams::default();
        let mut creature = Creature::new("Pip", 0);
        creature.tricks_known.insert(Trick::RollOver);
        let snapshot = StatusSnapshot::capture(&creature, 2 * SECONDS_PER_DAY, &params);
        assert_eq!(snapshot.life_stage, LifeStage::Child);
        assert_eq!(snapshot.condition(), "Awake");

        let text = snapshot.to_plain_text();
        assert!(text.contains("Pip the Child (2 days old)"));
        assert!(text.contains("roll over"));
    }

    #[test]
    fn test_condition_after_death() {
        let params = SimParams::default();
        let mut creature = Creature::new("Pip", 0);
        creature.alive = false;
        creature.cause_of_death = Some(DeathCause::Starvation);
        let snapshot = StatusSnapshot::capture(&creature, 0, &params);
        assert_eq!(snapshot.condition(), "Died of starvation");
    }
}
