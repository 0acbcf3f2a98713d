//! Printer configuration that callers can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Upper bound for `detail_capacity_hint`.
pub const MAX_DETAIL_CAPACITY: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterConfig {
    /// Initial capacity (bytes) of each node's detail buffer. Buffers still grow past it.
    pub detail_capacity_hint: usize,

    /// Keep measured runtime stats on nodes (`EXPLAIN ANALYZE`).
    pub include_runtime_stats: bool,

    /// Keep optimizer estimates on nodes. Stats and cost lists are dropped together.
    pub include_estimates: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            detail_capacity_hint: 256,
            include_runtime_stats: true,
            include_estimates: true,
        }
    }
}

impl PrinterConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `PLANREP_DETAIL_CAPACITY`: detail buffer capacity hint in bytes
    /// - `PLANREP_INCLUDE_STATS`: `true`/`false`
    /// - `PLANREP_INCLUDE_ESTIMATES`: `true`/`false`
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("PLANREP_DETAIL_CAPACITY") {
            if let Ok(v) = s.parse::<usize>() {
                if (1..=MAX_DETAIL_CAPACITY).contains(&v) {
                    cfg.detail_capacity_hint = v;
                }
            }
        }

        if let Ok(s) = std::env::var("PLANREP_INCLUDE_STATS") {
            if let Ok(v) = s.parse::<bool>() {
                cfg.include_runtime_stats = v;
            }
        }

        if let Ok(s) = std::env::var("PLANREP_INCLUDE_ESTIMATES") {
            if let Ok(v) = s.parse::<bool>() {
                cfg.include_estimates = v;
            }
        }

        cfg
    }

    /// The capacity hint limited to `1..=MAX_DETAIL_CAPACITY`, safe to allocate
    /// even for a config that never went through `validate`.
    pub fn detail_capacity(&self) -> usize {
        self.detail_capacity_hint.clamp(1, MAX_DETAIL_CAPACITY)
    }

    pub fn validate(&self) -> Result<()> {
        if self.detail_capacity_hint == 0 {
            return Err(Error::Config("detail_capacity_hint must be > 0".into()));
        }
        if self.detail_capacity_hint > MAX_DETAIL_CAPACITY {
            return Err(Error::Config(format!(
                "detail_capacity_hint {} exceeds {} bytes",
                self.detail_capacity_hint, MAX_DETAIL_CAPACITY
            )));
        }
        Ok(())
    }
}
