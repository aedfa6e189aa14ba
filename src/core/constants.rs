// Tick and timing
pub const TICK_SECONDS: i64 = 600;
pub const SECONDS_PER_DAY: i64 = 86_400;
pub const POST_MEAL_WINDOW_SECONDS: i64 = 30 * 60;
pub const CRITICAL_DURATION_SECONDS: i64 = 12 * 60 * 60;
pub const REPLAY_CHECK_INTERVAL_MS: u64 = 1000;

// Stat bounds
pub const STAT_MIN: f64 = 0.0;
pub const STAT_MAX: f64 = 100.0;

// New creature
pub const DEFAULT_NAME: &str = "Critter";
pub const STARTING_HUNGER: f64 = 50.0;
pub const STARTING_HAPPINESS: f64 = 50.0;
pub const STARTING_ENERGY: f64 = 100.0;
pub const STARTING_HEALTH: f64 = 100.0;
pub const STARTING_DISCIPLINE: f64 = 50.0;
pub const STARTING_WEIGHT: f64 = 5.0;
pub const MAX_NAME_LENGTH: usize = 16;

// Awake decay per tick
pub const HUNGER_PER_TICK: f64 = 5.0;
pub const ENERGY_PER_TICK: f64 = 4.0;
pub const DISCIPLINE_PER_TICK: f64 = 1.0;
pub const HAPPINESS_PER_TICK: f64 = 5.0;

// Happiness penalties, stacked additively before the clamp
pub const HAPPINESS_HUNGER_PENALTY: f64 = 3.0;
pub const HAPPINESS_ENERGY_PENALTY: f64 = 3.0;
pub const HAPPINESS_HEALTH_PENALTY: f64 = 3.0;
pub const HAPPINESS_ILLNESS_PENALTY: f64 = 5.0;
pub const HAPPINESS_PER_WASTE: f64 = 1.0;

// Thresholds
pub const HUNGER_LOW: f64 = 30.0;
pub const HUNGER_HIGH: f64 = 70.0;
pub const HUNGER_CRITICAL: f64 = 90.0;
pub const ENERGY_LOW: f64 = 20.0;
pub const ENERGY_ADEQUATE: f64 = 40.0;
pub const HEALTH_LOW: f64 = 30.0;
pub const HEALTH_CRITICAL: f64 = 15.0;
pub const HAPPINESS_LOW: f64 = 30.0;
pub const HAPPINESS_HIGH: f64 = 70.0;
pub const DISCIPLINE_LOW: f64 = 25.0;

// Waste
pub const MAX_WASTE: u32 = 5;
pub const WASTE_BUFFER: u32 = 2;
pub const WASTE_CHANCE: f64 = 0.3;
pub const WASTE_CHANCE_AFTER_MEAL: f64 = 0.6;

// Sleep
pub const SLEEP_ENERGY_REGEN: f64 = 10.0;
pub const SLEEP_HAPPINESS_REGEN: f64 = 2.5;
pub const AUTO_WAKE_ENERGY: f64 = 100.0;

// Health per tick
pub const WASTE_HEALTH_PENALTY: f64 = 3.0;
pub const STARVING_HEALTH_PENALTY: f64 = 5.0;
pub const COLD_HEALTH_PENALTY: f64 = 2.0;
pub const STOMACHACHE_HEALTH_PENALTY: f64 = 3.0;
pub const INFECTION_HEALTH_PENALTY: f64 = 4.0;
pub const HEALTH_REGEN: f64 = 1.0;

// Illness onset chances per tick
pub const LOW_HEALTH_ILLNESS_THRESHOLD: f64 = 40.0;
pub const LOW_HEALTH_ILLNESS_CHANCE: f64 = 0.05;
pub const HUNGER_ILLNESS_CHANCE: f64 = 0.08;
pub const WASTE_ILLNESS_CHANCE: f64 = 0.1;

// Death
pub const MAX_AGE_DAYS: f64 = 60.0;
pub const OLD_AGE_CHANCE_PER_DAY: f64 = 0.02;

// Refusal: discipline dominates, mood tips the balance
pub const REFUSAL_DISCIPLINE_WEIGHT: f64 = 0.3;
pub const REFUSAL_MOOD_WEIGHT: f64 = 0.1;
pub const REFUSAL_MAX_CHANCE: f64 = 0.5;

// Feeding
pub const LOW_HEALTH_FOOD_FACTOR: f64 = 0.5;

// Play
pub const PLAY_HUNGER_LIMIT: f64 = 80.0;
pub const DEFAULT_GAME: &str = "ball";

// Sleep / wake
pub const SLEEP_HUNGER_LIMIT: f64 = 80.0;
pub const SLEEP_MIN_HEALTH: f64 = 10.0;
pub const GRUMPY_WAKE_ENERGY: f64 = 50.0;
pub const GRUMPY_WAKE_PENALTY: f64 = 5.0;

// Clean
pub const CLEAN_HAPPINESS_PER_WASTE: f64 = 3.0;
pub const CLEAN_HAPPINESS_CAP: f64 = 15.0;

// Medicine
pub const MEDICINE_HAPPINESS_COST: f64 = 5.0;
pub const MEDICINE_HEALTH_BOOST: f64 = 10.0;

// Scold
pub const SCOLD_DISCIPLINE: f64 = 15.0;
pub const SCOLD_HAPPINESS_COST: f64 = 10.0;

// Training
pub const TRAIN_ENERGY_COST: f64 = 15.0;
pub const TRAIN_MIN_HAPPINESS: f64 = 20.0;
pub const TRAIN_MIN_HEALTH: f64 = 30.0;
pub const TRAIN_BASE_CHANCE: f64 = 0.2;
pub const TRAIN_DISCIPLINE_WEIGHT: f64 = 0.4;
pub const TRAIN_HAPPINESS_WEIGHT: f64 = 0.2;
pub const TRAIN_MAX_CHANCE: f64 = 0.95;
pub const TRAIN_SUCCESS_HAPPINESS: f64 = 10.0;
pub const TRAIN_SUCCESS_DISCIPLINE: f64 = 5.0;
pub const TRAIN_FAILURE_HAPPINESS: f64 = 5.0;
pub const TRAIN_FAILURE_DISCIPLINE: f64 = 2.0;

// Tricks
pub const PERFORM_ENERGY_COST: f64 = 5.0;
pub const PERFORM_HAPPINESS: f64 = 8.0;
pub const PERFORM_DISCIPLINE: f64 = 1.0;

// Affection
pub const PET_HAPPINESS: f64 = 5.0;

// Life stages (age in days at which each stage begins)
pub const CHILD_FROM_DAYS: f64 = 1.0;
pub const TEEN_FROM_DAYS: f64 = 3.0;
pub const ADULT_FROM_DAYS: f64 = 7.0;
pub const SENIOR_FROM_DAYS: f64 = 30.0;

// Event log
pub const EVENT_LOG_CAPACITY: usize = 20;

// Persistence
pub const SAVE_DIR_NAME: &str = ".critter";
pub const SAVE_FILE_NAME: &str = "creature.json";
pub const BACKUP_FILE_NAME: &str = "creature.json.bak";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "critter.log";
