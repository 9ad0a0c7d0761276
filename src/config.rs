use crate::CACHE_CAPACITY;
use crate::CACHE_TTL_SECONDS;
use crate::Iterations;
use crate::PREFLOP_ITERATIONS;
use crate::SEED_SALT;
use anyhow::Context;
use std::time::Duration;

/// Engine settings, fixed once the engine is built.
///
/// Every field has a default; `from_env` overrides from `PREFLOP_MC`,
/// `CACHE_MAX_SIZE`, `CACHE_TTL_SECONDS` and `RNG_SEED_SALT`, and
/// `from_json` reads any subset of the same fields from a file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub preflop_iterations: Iterations,
    pub cache_capacity: usize,
    pub cache_ttl_seconds: u64,
    pub seed_salt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preflop_iterations: PREFLOP_ITERATIONS,
            cache_capacity: CACHE_CAPACITY,
            cache_ttl_seconds: CACHE_TTL_SECONDS,
            seed_salt: SEED_SALT.to_string(),
        }
    }
}

impl Config {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_json(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    fn from_json_str(text: &str) -> anyhow::Result<Self> {
        let config = serde_json::from_str::<Self>(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.preflop_iterations == 0 {
            anyhow::bail!("preflop_iterations must be positive");
        }
        Ok(())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(n) = lookup("PREFLOP_MC") {
            config.preflop_iterations = n.trim().parse().context("PREFLOP_MC")?;
        }
        if let Some(n) = lookup("CACHE_MAX_SIZE") {
            config.cache_capacity = n.trim().parse().context("CACHE_MAX_SIZE")?;
        }
        if let Some(n) = lookup("CACHE_TTL_SECONDS") {
            config.cache_ttl_seconds = n.trim().parse().context("CACHE_TTL_SECONDS")?;
        }
        if let Some(salt) = lookup("RNG_SEED_SALT") {
            config.seed_salt = salt;
        }
        config.validate().context("PREFLOP_MC")?;
        log::debug!("{:?}", config);
        Ok(config)
    }
}
