//! Tunable simulation parameters.
//!
//! Every number the tick replay, death checks and action handlers use lives in
//! [`SimParams`]. Defaults come from [`super::constants`]; a JSON config file
//! can override any subset of keys. Overrides are applied one key at a time so
//! a single bad value falls back to its default without discarding the rest.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// What one serving of a food does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodEffect {
    /// Hunger removed (hunger is 0 = full, 100 = starving)
    pub hunger_restore: f64,
    pub happiness: f64,
    pub health: f64,
    pub weight_gain: f64,
}

/// What one round of a game does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameEffect {
    pub happiness: f64,
    pub energy_cost: f64,
    pub hunger_cost: f64,
    /// Chance the pet wins the round, 0.0 disables the bonus roll
    pub win_chance: f64,
    pub win_bonus: f64,
}

/// Discipline decay multiplier per life stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageFactors {
    pub baby: f64,
    pub child: f64,
    pub teen: f64,
    pub adult: f64,
    pub senior: f64,
}

impl Default for StageFactors {
    fn default() -> Self {
        Self {
            baby: 0.5,
            child: 1.0,
            teen: 1.5,
            adult: 1.0,
            senior: 0.5,
        }
    }
}

fn default_foods() -> BTreeMap<String, FoodEffect> {
    let mut foods = BTreeMap::new();
    foods.insert(
        "meal".to_string(),
        FoodEffect {
            hunger_restore: 25.0,
            happiness: 5.0,
            health: 2.0,
            weight_gain: 1.0,
        },
    );
    foods.insert(
        "snack".to_string(),
        FoodEffect {
            hunger_restore: 10.0,
            happiness: 10.0,
            health: -1.0,
            weight_gain: 0.5,
        },
    );
    foods.insert(
        "fruit".to_string(),
        FoodEffect {
            hunger_restore: 15.0,
            happiness: 3.0,
            health: 4.0,
            weight_gain: 0.3,
        },
    );
    foods.insert(
        "candy".to_string(),
        FoodEffect {
            hunger_restore: 5.0,
            happiness: 15.0,
            health: -3.0,
            weight_gain: 0.8,
        },
    );
    foods
}

fn default_games() -> BTreeMap<String, GameEffect> {
    let mut games = BTreeMap::new();
    games.insert(
        "ball".to_string(),
        GameEffect {
            happiness: 15.0,
            energy_cost: 10.0,
            hunger_cost: 5.0,
            win_chance: 0.0,
            win_bonus: 0.0,
        },
    );
    games.insert(
        "fetch".to_string(),
        GameEffect {
            happiness: 20.0,
            energy_cost: 15.0,
            hunger_cost: 8.0,
            win_chance: 0.0,
            win_bonus: 0.0,
        },
    );
    games.insert(
        "guess".to_string(),
        GameEffect {
            happiness: 8.0,
            energy_cost: 5.0,
            hunger_cost: 3.0,
            win_chance: 0.5,
            win_bonus: 10.0,
        },
    );
    games
}

/// All tunable numbers of the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    pub tick_seconds: i64,
    pub post_meal_window_seconds: i64,
    pub critical_duration_seconds: i64,

    pub hunger_per_tick: f64,
    pub energy_per_tick: f64,
    pub discipline_per_tick: f64,
    pub happiness_per_tick: f64,
    pub stage_discipline_factors: StageFactors,

    pub happiness_hunger_penalty: f64,
    pub happiness_energy_penalty: f64,
    pub happiness_health_penalty: f64,
    pub happiness_illness_penalty: f64,
    pub happiness_per_waste: f64,

    pub hunger_low: f64,
    pub hunger_high: f64,
    pub hunger_critical: f64,
    pub energy_low: f64,
    pub energy_adequate: f64,
    pub health_low: f64,
    pub health_critical: f64,
    pub happiness_low: f64,
    pub happiness_high: f64,
    pub discipline_low: f64,

    pub max_waste: u32,
    pub waste_buffer: u32,
    pub waste_chance: f64,
    pub waste_chance_after_meal: f64,

    pub sleep_energy_regen: f64,
    pub sleep_happiness_regen: f64,
    pub auto_wake_energy: f64,

    pub waste_health_penalty: f64,
    pub starving_health_penalty: f64,
    pub cold_health_penalty: f64,
    pub stomachache_health_penalty: f64,
    pub infection_health_penalty: f64,
    pub health_regen: f64,

    pub low_health_illness_threshold: f64,
    pub low_health_illness_chance: f64,
    pub hunger_illness_chance: f64,
    pub waste_illness_chance: f64,

    pub max_age_days: f64,
    pub old_age_chance_per_day: f64,

    pub refusal_discipline_weight: f64,
    pub refusal_mood_weight: f64,
    pub refusal_max_chance: f64,

    pub foods: BTreeMap<String, FoodEffect>,
    pub low_health_food_factor: f64,

    pub games: BTreeMap<String, GameEffect>,
    pub default_game: String,
    pub play_hunger_limit: f64,

    pub sleep_hunger_limit: f64,
    pub sleep_min_health: f64,
    pub grumpy_wake_energy: f64,
    pub grumpy_wake_penalty: f64,

    pub clean_happiness_per_waste: f64,
    pub clean_happiness_cap: f64,

    pub medicine_happiness_cost: f64,
    pub medicine_health_boost: f64,

    pub scold_discipline: f64,
    pub scold_happiness_cost: f64,

    pub train_energy_cost: f64,
    pub train_min_happiness: f64,
    pub train_min_health: f64,
    pub train_base_chance: f64,
    pub train_discipline_weight: f64,
    pub train_happiness_weight: f64,
    pub train_max_chance: f64,
    pub train_success_happiness: f64,
    pub train_success_discipline: f64,
    pub train_failure_happiness: f64,
    pub train_failure_discipline: f64,

    pub perform_energy_cost: f64,
    pub perform_happiness: f64,
    pub perform_discipline: f64,

    pub pet_happiness: f64,

    pub child_from_days: f64,
    pub teen_from_days: f64,
    pub adult_from_days: f64,
    pub senior_from_days: f64,

    pub event_log_capacity: usize,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            tick_seconds: TICK_SECONDS,
            post_meal_window_seconds: POST_MEAL_WINDOW_SECONDS,
            critical_duration_seconds: CRITICAL_DURATION_SECONDS,

            hunger_per_tick: HUNGER_PER_TICK,
            energy_per_tick: ENERGY_PER_TICK,
            discipline_per_tick: DISCIPLINE_PER_TICK,
            happiness_per_tick: HAPPINESS_PER_TICK,
            stage_discipline_factors: StageFactors::default(),

            happiness_hunger_penalty: HAPPINESS_HUNGER_PENALTY,
            happiness_energy_penalty: HAPPINESS_ENERGY_PENALTY,
            happiness_health_penalty: HAPPINESS_HEALTH_PENALTY,
            happiness_illness_penalty: HAPPINESS_ILLNESS_PENALTY,
            happiness_per_waste: HAPPINESS_PER_WASTE,

            hunger_low: HUNGER_LOW,
            hunger_high: HUNGER_HIGH,
            hunger_critical: HUNGER_CRITICAL,
            energy_low: ENERGY_LOW,
            energy_adequate: ENERGY_ADEQUATE,
            health_low: HEALTH_LOW,
            health_critical: HEALTH_CRITICAL,
            happiness_low: HAPPINESS_LOW,
            happiness_high: HAPPINESS_HIGH,
            discipline_low: DISCIPLINE_LOW,

            max_waste: MAX_WASTE,
            waste_buffer: WASTE_BUFFER,
            waste_chance: WASTE_CHANCE,
            waste_chance_after_meal: WASTE_CHANCE_AFTER_MEAL,

            sleep_energy_regen: SLEEP_ENERGY_REGEN,
            sleep_happiness_regen: SLEEP_HAPPINESS_REGEN,
            auto_wake_energy: AUTO_WAKE_ENERGY,

            waste_health_penalty: WASTE_HEALTH_PENALTY,
            starving_health_penalty: STARVING_HEALTH_PENALTY,
            cold_health_penalty: COLD_HEALTH_PENALTY,
            stomachache_health_penalty: STOMACHACHE_HEALTH_PENALTY,
            infection_health_penalty: INFECTION_HEALTH_PENALTY,
            health_regen: HEALTH_REGEN,

            low_health_illness_threshold: LOW_HEALTH_ILLNESS_THRESHOLD,
            low_health_illness_chance: LOW_HEALTH_ILLNESS_CHANCE,
            hunger_illness_chance: HUNGER_ILLNESS_CHANCE,
            waste_illness_chance: WASTE_ILLNESS_CHANCE,

            max_age_days: MAX_AGE_DAYS,
            old_age_chance_per_day: OLD_AGE_CHANCE_PER_DAY,

            refusal_discipline_weight: REFUSAL_DISCIPLINE_WEIGHT,
            refusal_mood_weight: REFUSAL_MOOD_WEIGHT,
            refusal_max_chance: REFUSAL_MAX_CHANCE,

            foods: default_foods(),
            low_health_food_factor: LOW_HEALTH_FOOD_FACTOR,

            games: default_games(),
            default_game: DEFAULT_GAME.to_string(),
            play_hunger_limit: PLAY_HUNGER_LIMIT,

            sleep_hunger_limit: SLEEP_HUNGER_LIMIT,
            sleep_min_health: SLEEP_MIN_HEALTH,
            grumpy_wake_energy: GRUMPY_WAKE_ENERGY,
            grumpy_wake_penalty: GRUMPY_WAKE_PENALTY,

            clean_happiness_per_waste: CLEAN_HAPPINESS_PER_WASTE,
            clean_happiness_cap: CLEAN_HAPPINESS_CAP,

            medicine_happiness_cost: MEDICINE_HAPPINESS_COST,
            medicine_health_boost: MEDICINE_HEALTH_BOOST,

            scold_discipline: SCOLD_DISCIPLINE,
            scold_happiness_cost: SCOLD_HAPPINESS_COST,

            train_energy_cost: TRAIN_ENERGY_COST,
            train_min_happiness: TRAIN_MIN_HAPPINESS,
            train_min_health: TRAIN_MIN_HEALTH,
            train_base_chance: TRAIN_BASE_CHANCE,
            train_discipline_weight: TRAIN_DISCIPLINE_WEIGHT,
            train_happiness_weight: TRAIN_HAPPINESS_WEIGHT,
            train_max_chance: TRAIN_MAX_CHANCE,
            train_success_happiness: TRAIN_SUCCESS_HAPPINESS,
            train_success_discipline: TRAIN_SUCCESS_DISCIPLINE,
            train_failure_happiness: TRAIN_FAILURE_HAPPINESS,
            train_failure_discipline: TRAIN_FAILURE_DISCIPLINE,

            perform_energy_cost: PERFORM_ENERGY_COST,
            perform_happiness: PERFORM_HAPPINESS,
            perform_discipline: PERFORM_DISCIPLINE,

            pet_happiness: PET_HAPPINESS,

            child_from_days: CHILD_FROM_DAYS,
            teen_from_days: TEEN_FROM_DAYS,
            adult_from_days: ADULT_FROM_DAYS,
            senior_from_days: SENIOR_FROM_DAYS,

            event_log_capacity: EVENT_LOG_CAPACITY,
        }
    }
}

/// A config problem that was recovered from by keeping a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Offending key, empty when the whole file was rejected
    pub key: String,
    pub message: String,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key.is_empty() {
            write!(f, "config: {}", self.message)
        } else {
            write!(f, "config key '{}': {}", self.key, self.message)
        }
    }
}

fn is_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

fn is_stat(v: f64) -> bool {
    (STAT_MIN..=STAT_MAX).contains(&v)
}

impl SimParams {
    /// Names of fields whose values are out of their valid range.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        let mut bad = Vec::new();

        if self.tick_seconds <= 0 {
            bad.push("tick_seconds");
        }
        if self.post_meal_window_seconds < 0 {
            bad.push("post_meal_window_seconds");
        }
        if self.critical_duration_seconds <= 0 {
            bad.push("critical_duration_seconds");
        }

        let non_negative = [
            ("hunger_per_tick", self.hunger_per_tick),
            ("energy_per_tick", self.energy_per_tick),
            ("discipline_per_tick", self.discipline_per_tick),
            ("happiness_per_tick", self.happiness_per_tick),
            ("happiness_hunger_penalty", self.happiness_hunger_penalty),
            ("happiness_energy_penalty", self.happiness_energy_penalty),
            ("happiness_health_penalty", self.happiness_health_penalty),
            ("happiness_illness_penalty", self.happiness_illness_penalty),
            ("happiness_per_waste", self.happiness_per_waste),
            ("sleep_energy_regen", self.sleep_energy_regen),
            ("sleep_happiness_regen", self.sleep_happiness_regen),
            ("auto_wake_energy", self.auto_wake_energy),
            ("waste_health_penalty", self.waste_health_penalty),
            ("starving_health_penalty", self.starving_health_penalty),
            ("cold_health_penalty", self.cold_health_penalty),
            ("stomachache_health_penalty", self.stomachache_health_penalty),
            ("infection_health_penalty", self.infection_health_penalty),
            ("health_regen", self.health_regen),
            ("max_age_days", self.max_age_days),
            ("old_age_chance_per_day", self.old_age_chance_per_day),
            ("refusal_discipline_weight", self.refusal_discipline_weight),
            ("refusal_mood_weight", self.refusal_mood_weight),
            ("grumpy_wake_penalty", self.grumpy_wake_penalty),
            ("clean_happiness_per_waste", self.clean_happiness_per_waste),
            ("clean_happiness_cap", self.clean_happiness_cap),
            ("medicine_happiness_cost", self.medicine_happiness_cost),
            ("medicine_health_boost", self.medicine_health_boost),
            ("scold_discipline", self.scold_discipline),
            ("scold_happiness_cost", self.scold_happiness_cost),
            ("train_energy_cost", self.train_energy_cost),
            ("train_discipline_weight", self.train_discipline_weight),
            ("train_happiness_weight", self.train_happiness_weight),
            ("train_success_happiness", self.train_success_happiness),
            ("train_success_discipline", self.train_success_discipline),
            ("train_failure_happiness", self.train_failure_happiness),
            ("train_failure_discipline", self.train_failure_discipline),
            ("perform_energy_cost", self.perform_energy_cost),
            ("perform_happiness", self.perform_happiness),
            ("perform_discipline", self.perform_discipline),
            ("pet_happiness", self.pet_happiness),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                bad.push(name);
            }
        }

        let probabilities = [
            ("waste_chance", self.waste_chance),
            ("waste_chance_after_meal", self.waste_chance_after_meal),
            ("low_health_illness_chance", self.low_health_illness_chance),
            ("hunger_illness_chance", self.hunger_illness_chance),
            ("waste_illness_chance", self.waste_illness_chance),
            ("refusal_max_chance", self.refusal_max_chance),
            ("low_health_food_factor", self.low_health_food_factor),
            ("train_base_chance", self.train_base_chance),
            ("train_max_chance", self.train_max_chance),
        ];
        for (name, value) in probabilities {
            if !is_probability(value) {
                bad.push(name);
            }
        }

        let thresholds = [
            ("hunger_low", self.hunger_low),
            ("hunger_high", self.hunger_high),
            ("hunger_critical", self.hunger_critical),
            ("energy_low", self.energy_low),
            ("energy_adequate", self.energy_adequate),
            ("health_low", self.health_low),
            ("health_critical", self.health_critical),
            ("happiness_low", self.happiness_low),
            ("happiness_high", self.happiness_high),
            ("discipline_low", self.discipline_low),
            ("low_health_illness_threshold", self.low_health_illness_threshold),
            ("play_hunger_limit", self.play_hunger_limit),
            ("sleep_hunger_limit", self.sleep_hunger_limit),
            ("sleep_min_health", self.sleep_min_health),
            ("grumpy_wake_energy", self.grumpy_wake_energy),
            ("train_min_happiness", self.train_min_happiness),
            ("train_min_health", self.train_min_health),
        ];
        for (name, value) in thresholds {
            if !is_stat(value) {
                bad.push(name);
            }
        }

        let f = &self.stage_discipline_factors;
        if [f.baby, f.child, f.teen, f.adult, f.senior]
            .iter()
            .any(|v| !(v.is_finite() && *v >= 0.0))
        {
            bad.push("stage_discipline_factors");
        }

        if self.max_waste == 0 {
            bad.push("max_waste");
        }

        if self.foods.is_empty()
            || self.foods.iter().any(|(name, food)| {
                name.trim().is_empty()
                    || name.chars().any(|c| c.is_whitespace() || c.is_uppercase())
                    || !(food.hunger_restore >= 0.0 && food.weight_gain >= 0.0)
                    || !food.happiness.is_finite()
                    || !food.health.is_finite()
            })
        {
            bad.push("foods");
        }

        if self.games.is_empty()
            || self.games.iter().any(|(name, game)| {
                name.trim().is_empty()
                    || name.chars().any(|c| c.is_whitespace() || c.is_uppercase())
                    || !(game.happiness >= 0.0
                        && game.energy_cost >= 0.0
                        && game.hunger_cost >= 0.0
                        && game.win_bonus >= 0.0)
                    || !is_probability(game.win_chance)
            })
        {
            bad.push("games");
        }
        if !self.games.contains_key(&self.default_game) {
            bad.push("default_game");
        }

        if !(0.0 <= self.child_from_days
            && self.child_from_days <= self.teen_from_days
            && self.teen_from_days <= self.adult_from_days
            && self.adult_from_days <= self.senior_from_days)
        {
            bad.push("child_from_days");
            bad.push("teen_from_days");
            bad.push("adult_from_days");
            bad.push("senior_from_days");
        }

        if self.event_log_capacity == 0 {
            bad.push("event_log_capacity");
        }

        bad
    }

    /// Total waste the pet can accumulate.
    pub fn waste_cap(&self) -> u32 {
        self.max_waste.saturating_add(self.waste_buffer)
    }

    pub fn food(&self, name: &str) -> Option<&FoodEffect> {
        self.foods.get(&name.trim().to_lowercase())
    }

    pub fn game(&self, name: &str) -> Option<&GameEffect> {
        self.games.get(&name.trim().to_lowercase())
    }

    /// Builds parameters from a JSON document, keeping defaults for every key
    /// that is missing, unknown or invalid.
    pub fn from_json_str(json: &str) -> (Self, Vec<ConfigWarning>) {
        let defaults = Self::default();
        let mut warnings = Vec::new();

        let user: serde_json::Value = match serde_json::from_str(json) {
            Ok(value) => value,
            Err(e) => {
                warnings.push(ConfigWarning {
                    key: String::new(),
                    message: format!("could not parse file ({}), using defaults", e),
                });
                return (defaults, warnings);
            }
        };
        let serde_json::Value::Object(user) = user else {
            warnings.push(ConfigWarning {
                key: String::new(),
                message: "expected a JSON object, using defaults".to_string(),
            });
            return (defaults, warnings);
        };

        let mut merged = match serde_json::to_value(&defaults) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => return (defaults, warnings),
        };
        let mut params = defaults;

        // Keys that only validate together (a new game table plus its default)
        // are accepted when the whole document is consistent.
        if user.keys().all(|key| merged.contains_key(key)) {
            let mut whole = merged.clone();
            whole.extend(user.clone());
            if let Ok(next) = serde_json::from_value::<SimParams>(serde_json::Value::Object(whole))
            {
                if next.invalid_fields().is_empty() {
                    return (next, warnings);
                }
            }
        }

        for (key, value) in user {
            if !merged.contains_key(&key) {
                warnings.push(ConfigWarning {
                    key,
                    message: "unknown key, ignored".to_string(),
                });
                continue;
            }

            let mut candidate = merged.clone();
            candidate.insert(key.clone(), value);
            let parsed = serde_json::from_value::<SimParams>(serde_json::Value::Object(
                candidate.clone(),
            ));
            match parsed {
                Ok(next) => {
                    let already_bad = params.invalid_fields();
                    let newly_bad: Vec<_> = next
                        .invalid_fields()
                        .into_iter()
                        .filter(|name| !already_bad.contains(name))
                        .collect();
                    if newly_bad.is_empty() {
                        merged = candidate;
                        params = next;
                    } else {
                        warnings.push(ConfigWarning {
                            key,
                            message: format!(
                                "value out of range for {}, using default",
                                newly_bad.join(", ")
                            ),
                        });
                    }
                }
                Err(e) => warnings.push(ConfigWarning {
                    key,
                    message: format!("invalid value ({}), using default", e),
                }),
            }
        }

        (params, warnings)
    }
}

/// Loads parameters from a JSON config file.
///
/// A missing file yields the defaults with no warnings. Any other problem is
/// reported as a warning and recovered from.
pub fn load_params(path: &Path) -> (SimParams, Vec<ConfigWarning>) {
    let (params, warnings) = match fs::read_to_string(path) {
        Ok(json) => SimParams::from_json_str(&json),
        Err(e) if e.kind() == io::ErrorKind::NotFound => (SimParams::default(), Vec::new()),
        Err(e) => (
            SimParams::default(),
            vec![ConfigWarning {
                key: String::new(),
                message: format!("could not read {} ({}), using defaults", path.display(), e),
            }],
        ),
    };
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    (params, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = SimParams::default();
        assert!(
            params.invalid_fields().is_empty(),
            "defaults should validate, got {:?}",
            params.invalid_fields()
        );
    }

    #[test]
    fn test_empty_object_gives_defaults_without_warnings() {
        let (params, warnings) = SimParams::from_json_str("{}");
        assert_eq!(params, SimParams::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_override_is_applied() {
        let (params, warnings) =
            SimParams::from_json_str(r#"{ "tick_seconds": 60, "hunger_per_tick": 2.5 }"#);
        assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
        assert_eq!(params.tick_seconds, 60);
        assert_eq!(params.hunger_per_tick, 2.5);
        assert_eq!(params.energy_per_tick, ENERGY_PER_TICK);
    }

    #[test]
    fn test_wrong_type_falls_back_per_key() {
        let (params, warnings) =
            SimParams::from_json_str(r#"{ "tick_seconds": "soon", "max_waste": 8 }"#);
        assert_eq!(params.tick_seconds, TICK_SECONDS);
        assert_eq!(params.max_waste, 8);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "tick_seconds");
    }

    #[test]
    fn test_out_of_range_value_falls_back() {
        let (params, warnings) = SimParams::from_json_str(
            r#"{ "waste_chance": 1.7, "tick_seconds": 0, "hunger_high": 65 }"#,
        );
        assert_eq!(params.waste_chance, WASTE_CHANCE);
        assert_eq!(params.tick_seconds, TICK_SECONDS);
        assert_eq!(params.hunger_high, 65.0);
        let keys: Vec<_> = warnings.iter().map(|w| w.key.as_str()).collect();
        assert!(keys.contains(&"waste_chance"));
        assert!(keys.contains(&"tick_seconds"));
    }

    #[test]
    fn test_unknown_key_warns() {
        let (params, warnings) = SimParams::from_json_str(r#"{ "laser_eyes": true }"#);
        assert_eq!(params, SimParams::default());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "laser_eyes");
    }

    #[test]
    fn test_unparseable_file_gives_defaults() {
        let (params, warnings) = SimParams::from_json_str("{ not json");
        assert_eq!(params, SimParams::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].key.is_empty());
    }

    #[test]
    fn test_non_object_document_gives_defaults() {
        let (params, warnings) = SimParams::from_json_str("[1, 2, 3]");
        assert_eq!(params, SimParams::default());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_food_table_override_replaces_table() {
        let (params, warnings) = SimParams::from_json_str(
            r#"{ "foods": { "kibble": { "hunger_restore": 30, "happiness": 1, "health": 0, "weight_gain": 2 } } }"#,
        );
        assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
        assert_eq!(params.foods.len(), 1);
        assert_eq!(params.food("Kibble").map(|f| f.hunger_restore), Some(30.0));
        assert!(params.food("meal").is_none());
    }

    #[test]
    fn test_table_keys_must_be_lowercase() {
        let (params, warnings) = SimParams::from_json_str(
            r#"{ "foods": { "Kibble": { "hunger_restore": 30, "happiness": 1, "health": 0, "weight_gain": 2 } } }"#,
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "foods");
        assert!(params.food("meal").is_some());
        assert!(params.food("kibble").is_none());
    }

    #[test]
    fn test_default_game_must_exist() {
        let (params, warnings) = SimParams::from_json_str(r#"{ "default_game": "chess" }"#);
        assert_eq!(params.default_game, DEFAULT_GAME);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "default_game");
    }

    #[test]
    fn test_new_game_table_with_matching_default() {
        let (params, warnings) = SimParams::from_json_str(
            r#"{
                "default_game": "tag",
                "games": { "tag": { "happiness": 12, "energy_cost": 8, "hunger_cost": 4, "win_chance": 0.25, "win_bonus": 5 } }
            }"#,
        );
        assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
        assert_eq!(params.default_game, "tag");
        assert!(params.game("TAG").is_some());
    }

    #[test]
    fn test_stage_thresholds_must_be_ordered() {
        let (params, warnings) = SimParams::from_json_str(r#"{ "teen_from_days": 50 }"#);
        assert_eq!(params.teen_from_days, TEEN_FROM_DAYS);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_load_params_missing_file_is_silent() {
        let path = std::env::temp_dir().join("critter-params-test-missing-file.json");
        let _ = fs::remove_file(&path);
        let (params, warnings) = load_params(&path);
        assert_eq!(params, SimParams::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_waste_cap() {
        let params = SimParams::default();
        assert_eq!(params.waste_cap(), MAX_WASTE + WASTE_BUFFER);
    }
}
