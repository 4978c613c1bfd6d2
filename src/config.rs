//! Runner configuration from environment variables.
//!
//! | Variable              | Meaning                                  | Default        |
//! |-----------------------|------------------------------------------|----------------|
//! | `BLOCKFALL_SEED`      | piece randomizer seed (`u32`)            | system clock   |
//! | `BLOCKFALL_LOG_PATH`  | write `tracing` output to this file      | no logging     |
//! | `BLOCKFALL_AUTOSTART` | `1`/`true` starts without pressing Enter | off            |
//! | `BLOCKFALL_FRAME_MS`  | render frame period in milliseconds      | 16             |
//!
//! Unparseable values fall back to the default.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub const DEFAULT_FRAME_MS: u64 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub log_path: Option<PathBuf>,
    pub autostart: bool,
    pub frame_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var("BLOCKFALL_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = var("BLOCKFALL_LOG_PATH").map(PathBuf::from);

        let autostart = var("BLOCKFALL_AUTOSTART")
            .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let frame_ms = var("BLOCKFALL_FRAME_MS")
            .and_then(|s| s.parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_FRAME_MS);

        Self {
            seed,
            log_path,
            autostart,
            frame_ms,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
