// Scratch level layout
pub const MONSTER_PLACE: (i32, i32) = (20, 20);
pub const PLAYER_PLACE: (i32, i32) = (21, 20);
pub const PLAYER_MAXHP: i32 = 500;

// Sampling
pub const DEFAULT_TRIALS: u32 = 1000;
pub const PROGRESS_INTERVAL: u32 = 250;

/// Spell power per hit die when simulating beams.
pub const POWER_PER_HD: i32 = 12;

/// Armour slots a creature can wear, shield excluded; acid splash corrodes
/// each of them plus two extra rolls.
pub const ARMOUR_SLOTS_NO_SHIELD: i32 = 5;

pub const MAX_ATTACKS: usize = 4;

// Environment
pub const SEED_ENV: &str = "MONSTER_STATS_SEED";
pub const TRIALS_ENV: &str = "MONSTER_STATS_TRIALS";
pub const COLOUR_ENV: &str = "MONSTER_STATS_COLOUR";
pub const FORMAT_ENV: &str = "MONSTER_STATS_FORMAT";
