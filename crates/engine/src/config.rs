//! Engine configuration from environment variables
//!
//! - `VR_TETRIS_ROWS`: field height (default 20)
//! - `VR_TETRIS_COLUMNS`: field width (default 10)
//! - `VR_TETRIS_TICK_MS`: gravity interval in milliseconds (default 1000)
//! - `VR_TETRIS_SEED`: piece generator seed (default: derived from the clock)
//!
//! Values that fail to parse fall back to the defaults; values that parse but
//! make no sense are reported by [`EngineConfig::validate`].

use std::env;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::core::{Fault, Field, GameSession, PieceGenerator, Result};
use crate::types::{DEFAULT_COLUMNS, DEFAULT_ROWS, TICK_INTERVAL_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub rows: usize,
    pub columns: usize,
    pub tick_interval: Duration,
    pub seed: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        let rows = parsed("VR_TETRIS_ROWS").map_or(defaults.rows, |v| v as usize);
        let columns = parsed("VR_TETRIS_COLUMNS").map_or(defaults.columns, |v| v as usize);
        let tick_interval = parsed("VR_TETRIS_TICK_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_interval);
        let seed = lookup("VR_TETRIS_SEED").and_then(|s| s.trim().parse::<u32>().ok());

        Self {
            rows,
            columns,
            tick_interval,
            seed,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_interval.is_zero() {
            return Err(Fault::ZeroTickInterval);
        }
        Field::check_dimensions(self.rows, self.columns).map(|_| ())
    }

    /// The configured seed, or one taken from the wall clock
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }

    /// Idle session with the configured field and a random generator
    pub fn build_session(&self) -> Result<GameSession> {
        self.validate()?;
        GameSession::new(
            self.rows,
            self.columns,
            PieceGenerator::random(self.seed_or_clock()),
        )
    }
}
