use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

/// Which fetch completions may update the visible list and status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultPolicy {
    /// Completions are applied in the order they finish. A slow "load all"
    /// can overwrite newer search results.
    #[default]
    LastWriteWins,
    /// Only the most recently started fetch may publish anything.
    LatestRequest,
}

/// Search behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Debounce delay for search input in milliseconds (default: 500).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub result_policy: ResultPolicy,
}

/// Sample data source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Simulated latency per request in milliseconds (default: 300).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Number of generated orders when no orders file is set (default: 25).
    #[serde(default = "default_order_count")]
    pub order_count: usize,
    /// Make every request fail.
    #[serde(default)]
    pub fail_requests: bool,
    /// TOML file with `[[orders]]` entries, used instead of generated data.
    #[serde(default)]
    pub orders_file: Option<PathBuf>,
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_latency_ms() -> u64 {
    300
}

fn default_order_count() -> usize {
    25
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            result_policy: ResultPolicy::default(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            order_count: default_order_count(),
            fail_requests: false,
            orders_file: None,
        }
    }
}
