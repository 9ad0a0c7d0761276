use super::metrics::Metrics;
use super::metrics::Stats;
use crate::cache::CanonicalKey;
use crate::cache::EquityCache;
use crate::config::Config;
use crate::equity::EquityResult;
use crate::equity::Query;
use crate::equity::solve;
use crate::error::Error;
use crate::oracle::Evaluator;
use crate::oracle::Oracle;
use rayon::prelude::*;

/// Long-lived equity service: oracle, settings, memo and timings in one place.
///
/// Built once per process and shared by reference (or `Arc`). Every answer
/// goes through the cache; a miss runs the solver outside the cache lock and
/// stores the result afterwards.
#[derive(Debug)]
pub struct Engine<O: Oracle = Evaluator> {
    oracle: O,
    config: Config,
    cache: EquityCache,
    metrics: Metrics,
}

impl Engine<Evaluator> {
    pub fn new(config: Config) -> Self {
        Self::with_oracle(Evaluator, config)
    }
}

impl Default for Engine<Evaluator> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<O: Oracle> Engine<O> {
    pub fn with_oracle(oracle: O, config: Config) -> Self {
        let cache = EquityCache::new(config.cache_capacity, config.cache_ttl());
        log::info!(
            "equity engine up: {} preflop trials, cache {} entries / {}s",
            config.preflop_iterations,
            config.cache_capacity,
            config.cache_ttl_seconds,
        );
        Self {
            oracle,
            config,
            cache,
            metrics: Metrics::default(),
        }
    }

    /// Hero's equity for one query, memoized by canonical key.
    pub fn equity(&self, query: &Query) -> Result<EquityResult, Error> {
        self.metrics.timed("equity", || self.lookup(query))
    }

    /// Independent queries answered in parallel, in input order.
    pub fn batch(&self, queries: &[Query]) -> Vec<Result<EquityResult, Error>> {
        queries.par_iter().map(|query| self.equity(query)).collect()
    }

    /// Drops every memoized answer and timing sample.
    pub fn reset(&self) {
        self.cache.clear();
        self.metrics.reset();
        log::info!("equity engine reset");
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn cache(&self) -> &EquityCache {
        &self.cache
    }
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
    pub fn stats(&self) -> Stats {
        self.metrics.stats()
    }

    fn lookup(&self, query: &Query) -> Result<EquityResult, Error> {
        query.validate()?;
        let key = CanonicalKey::from(query);
        if let Some(hit) = self.cache.get(&key) {
            log::debug!("cache hit  {} -> {}", query, hit);
            return Ok(hit);
        }
        let result = solve(
            &self.oracle,
            query,
            self.config.preflop_iterations,
            &self.config.seed_salt,
        )?;
        log::debug!("cache miss {} -> {}", query, result);
        self.cache.set(key, result);
        Ok(result)
    }
}

#[cfg(feature = "server")]
impl<O: Oracle + 'static> Engine<O> {
    /// Answers on tokio's blocking pool so async callers never stall on a
    /// long simulation. Wrap in `tokio::time::timeout` to bound the wait;
    /// the computation itself runs to completion either way.
    pub async fn spawn(self: std::sync::Arc<Self>, query: Query) -> Result<EquityResult, Error> {
        tokio::task::spawn_blocking(move || self.equity(&query))
            .await
            .map_err(|e| Error::Worker(e.to_string()))?
    }
}
