// crates/arbor-cli/src/config.rs
//
// Runtime configuration for the arbor CLI.
// Loaded from a TOML file or populated with sensible defaults.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use arbor_core::ArborError;
use arbor_token::{TokenParams, MAX_SUPPLY, MINTING_DECAY_RATE, MINTING_PERIOD};

/// Runtime configuration for the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct ArborConfig {
    /// Path of the JSON state snapshot. `~` expands to the home directory.
    #[serde(default = "default_state_path")]
    pub state_path: String,

    /// Log level: "trace", "debug", "info", "warn", "error".
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Absolute supply ceiling used by `init`. TOML integers are 64-bit, so
    /// the value is widened to `Amount` when building `TokenParams`.
    #[serde(default = "default_max_supply")]
    pub max_supply: u64,

    /// Mint cap decay rate used by `init`.
    #[serde(default = "default_minting_decay_rate")]
    pub minting_decay_rate: u64,

    /// Blocks between mint cap recomputations, used by `init`.
    #[serde(default = "default_minting_period")]
    pub minting_period: u64,
}

fn default_state_path() -> String {
    "~/.arbor/state.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_supply() -> u64 {
    u64::try_from(MAX_SUPPLY).unwrap_or(u64::MAX)
}

fn default_minting_decay_rate() -> u64 {
    u64::try_from(MINTING_DECAY_RATE).unwrap_or(u64::MAX)
}

fn default_minting_period() -> u64 {
    MINTING_PERIOD
}

impl Default for ArborConfig {
    fn default() -> Self {
        Self {
            state_path: default_state_path(),
            log_level: default_log_level(),
            max_supply: default_max_supply(),
            minting_decay_rate: default_minting_decay_rate(),
            minting_period: default_minting_period(),
        }
    }
}

impl ArborConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// A file that does not exist yields `Ok(None)`. A file that exists but
    /// cannot be read or parsed is an error.
    pub fn load_optional(path: &str) -> Result<Option<Self>, ArborError> {
        match fs::read_to_string(expand_tilde(path)) {
            Ok(contents) => Self::from_toml(&contents)
                .map(Some)
                .map_err(|e| ArborError::Config(format!("{}: {}", path, e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ArborError::Config(format!("{}: {}", path, e))),
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ArborError> {
        toml::from_str(contents).map_err(|e| ArborError::Config(e.to_string()))
    }

    /// Token parameters for a fresh deployment, validated.
    pub fn token_params(&self) -> Result<TokenParams, ArborError> {
        let params = TokenParams {
            max_supply: u128::from(self.max_supply),
            minting_decay_rate: u128::from(self.minting_decay_rate),
            minting_period: self.minting_period,
        };
        params.validate()?;
        Ok(params)
    }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
