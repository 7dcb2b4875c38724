//! Run settings for the headless runner.
//!
//! Layered configuration: an optional `rugline.toml` in the working
//! directory, overridden by `RUGLINE_*` environment variables (for example
//! `RUGLINE_SEED=42` or `RUGLINE_SEASON_ID=regulator_season`). Every field
//! has a default, so the runner works with no configuration at all.

use serde::Deserialize;

use rugline_types::RunConfig;

use crate::error::CliError;

/// Settings for one autoplay run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    /// Seed for the run's RNG stream. Same seed, same run.
    pub seed: u32,
    /// Chain display name.
    pub chain_name: String,
    /// Founder display name.
    pub founder_name: String,
    /// Token ticker.
    pub ticker: String,
    /// Season id from the content pack.
    pub season_id: String,
    /// Turn budget.
    pub max_turns: u32,
    /// Cap meters at 100 after every transform.
    pub meters_capped: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            seed: 1_337,
            chain_name: String::from("ZooChain"),
            founder_name: String::from("You"),
            ticker: String::from("ZOO"),
            season_id: String::from("meme_summer"),
            max_turns: 20,
            meters_capped: true,
        }
    }
}

impl RunSettings {
    /// Load settings from `rugline.toml` (if present) and the environment.
    pub fn load() -> Result<Self, CliError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("rugline").required(false))
            .add_source(config::Environment::with_prefix("RUGLINE"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// The engine-facing slice of these settings.
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            chain_name: self.chain_name.clone(),
            founder_name: self.founder_name.clone(),
            ticker: self.ticker.clone(),
            season_id: self.season_id.clone(),
            max_turns: self.max_turns,
            meters_capped: self.meters_capped,
        }
    }
}
