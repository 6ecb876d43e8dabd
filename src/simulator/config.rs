//! Inspection run configuration.

use tracing::warn;

use crate::colour::ColourMode;
use crate::constants::{COLOUR_ENV, DEFAULT_TRIALS, FORMAT_ENV, SEED_ENV, TRIALS_ENV};

/// How the report line is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<OutputFormat> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Configuration for an inspection run.
#[derive(Debug, Clone)]
pub struct StatsConfig {
    /// Number of trials to sample
    pub trials: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    pub colour: ColourMode,

    pub format: OutputFormat,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            colour: ColourMode::Auto,
            format: OutputFormat::Text,
        }
    }
}

impl StatsConfig {
    /// Reproducible plain-text config, for tests and scripted comparisons.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            colour: ColourMode::Plain,
            ..Default::default()
        }
    }

    pub fn with_trials(self, trials: u32) -> Self {
        Self { trials, ..self }
    }

    /// Defaults overridden by the `MONSTER_STATS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`StatsConfig::from_env`], reading variables through `lookup`.
    /// Values that don't parse are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => warn!(var = SEED_ENV, value = %raw, "ignoring unparseable seed"),
            }
        }

        if let Some(raw) = lookup(TRIALS_ENV) {
            match raw.trim().parse::<u32>() {
                Ok(trials) if trials > 0 => config.trials = trials,
                _ => warn!(
                    var = TRIALS_ENV,
                    value = %raw,
                    "trial count must be a positive integer"
                ),
            }
        }

        if let Some(raw) = lookup(COLOUR_ENV) {
            match ColourMode::parse(&raw) {
                Some(mode) => config.colour = mode,
                None => warn!(var = COLOUR_ENV, value = %raw, "unknown colour mode"),
            }
        }

        if let Some(raw) = lookup(FORMAT_ENV) {
            match OutputFormat::parse(&raw) {
                Some(format) => config.format = format,
                None => warn!(var = FORMAT_ENV, value = %raw, "unknown output format"),
            }
        }

        config
    }
}
