//! Showdown equity engine.
//!
//! Given hero's hole cards, a board of 0/3/4/5 cards, and either a known
//! villain hand or an opponent archetype, computes hero's share of the pot at
//! showdown. Exact enumeration is used wherever the runout is small enough;
//! otherwise a seeded, reproducible Monte Carlo estimate is produced.
//!
//! ## Crate Organization
//!
//! - [`cards`]: Card, card sets, hole cards, boards and deck arithmetic
//! - [`oracle`]: 5-card hand ranking capability and its default evaluator
//! - [`equity`]: Exact and Monte Carlo solvers, queries, results, seeds
//! - [`range`]: Heuristic opponent ranges by archetype and street
//! - [`cache`]: Canonical situation keys and the LRU/TTL memo store
//! - [`engine`]: Long-lived component tying cache, metrics and solvers together
pub mod cache;
pub mod cards;
pub mod config;
pub mod engine;
pub mod equity;
pub mod error;
pub mod oracle;
pub mod range;

pub use config::Config;
pub use engine::Engine;
pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Hero's share of the pot at showdown, 0 through 100.
pub type Percent = f64;
/// Monte Carlo trial budget.
pub type Iterations = usize;
/// Seed for the deterministic sampler.
pub type Seed = u64;

// ============================================================================
// DEFAULT CONFIGURATION
// Fixed at process start; see `Config::from_env` for overrides.
// ============================================================================
/// Monte Carlo trials used whenever a query does not specify its own.
pub const PREFLOP_ITERATIONS: Iterations = 200_000;
/// Maximum number of memoized equity results.
pub const CACHE_CAPACITY: usize = 100_000;
/// Lifetime of a memoized equity result (30 days).
pub const CACHE_TTL_SECONDS: u64 = 30 * 24 * 3600;
/// Mixed into every derived seed.
pub const SEED_SALT: &str = "poker_equity_salt_2024";

// ============================================================================
// MONTE CARLO SAMPLING
// ============================================================================
/// Trials per independently seeded stream. Fixed so that results never
/// depend on how rayon schedules the chunks.
pub const SAMPLING_CHUNK: usize = 4096;

// ============================================================================
// OPPONENT RANGES
// ============================================================================
/// Filtered ranges smaller than this share of all live combos are replaced
/// by the strongest combos by preflop strength.
pub const RANGE_FLOOR: f64 = 0.2;
/// Equity reported when no villain combo survives at all.
pub const DEGENERATE_EQUITY: Percent = 50.0;

// ============================================================================
// METRICS
// ============================================================================
/// Timing samples retained.
pub const METRICS_CAPACITY: usize = 1000;
/// Most recent samples summarized by `Metrics::stats`.
pub const METRICS_WINDOW: usize = 100;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
