//! Layered configuration for the simulator.
//!
//! Values resolve in order: built-in defaults, then the TOML file named by
//! `BLACKJACK_CONFIG`, then the `BLACKJACK_*` environment variables.
//! Command-line flags are applied on top by the individual commands.

use blackjack_strategy::{Strategy, catalogue};
use serde::{Deserialize, Serialize};
use std::fs;

pub const ENV_CONFIG: &str = "BLACKJACK_CONFIG";
pub const ENV_ROUNDS: &str = "BLACKJACK_ROUNDS";
pub const ENV_SEED: &str = "BLACKJACK_SEED";
pub const ENV_STRATEGIES: &str = "BLACKJACK_STRATEGIES";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Rounds simulated per strategy
    pub rounds: u64,
    /// Base seed; each round uses `seed + index`
    pub seed: Option<u64>,
    /// Strategy names to simulate; empty means the full catalogue
    pub strategies: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rounds: 10_000,
            seed: None,
            strategies: Vec::new(),
        }
    }
}

impl Config {
    /// Parsed strategies, falling back to the catalogue when none are named.
    pub fn strategy_list(&self) -> Result<Vec<Strategy>, ConfigError> {
        resolve_strategies(&self.strategies)
    }
}

/// Parses strategy names, or returns the full catalogue for an empty list.
pub fn resolve_strategies(names: &[String]) -> Result<Vec<Strategy>, ConfigError> {
    if names.is_empty() {
        return Ok(catalogue());
    }
    names
        .iter()
        .map(|n| {
            n.parse::<Strategy>()
                .map_err(|e| ConfigError::Invalid(e.to_string()))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub rounds: ValueSource,
    pub seed: ValueSource,
    pub strategies: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            rounds: ValueSource::Default,
            seed: ValueSource::Default,
            strategies: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.rounds {
            cfg.rounds = v;
            sources.rounds = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.strategies {
            cfg.strategies = v;
            sources.strategies = ValueSource::File;
        }
    }

    if let Ok(rounds) = std::env::var(ENV_ROUNDS)
        && !rounds.is_empty()
    {
        cfg.rounds = rounds
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid rounds: {}", rounds)))?;
        sources.rounds = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var(ENV_SEED)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(list) = std::env::var(ENV_STRATEGIES)
        && !list.trim().is_empty()
    {
        cfg.strategies = split_list(&list);
        sources.strategies = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    rounds: Option<u64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    strategies: Option<Vec<String>>,
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.rounds == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: rounds must be >=1".into(),
        ));
    }
    cfg.strategy_list()?;
    Ok(())
}
