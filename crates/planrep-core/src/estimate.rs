//! Optimizer estimates attached to a plan node.
//!
//! A node may carry several estimates, one per alternative the optimizer
//! considered. Stats and cost lists are paired by position; nothing here picks
//! a winner. NaN marks an unknown component.

use serde::{Deserialize, Serialize};

/// Predicted output of a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsEstimate {
    pub output_row_count: f64,
    pub output_size_bytes: f64,
}

impl StatsEstimate {
    pub fn new(output_row_count: f64, output_size_bytes: f64) -> Self {
        Self {
            output_row_count,
            output_size_bytes,
        }
    }

    pub fn unknown() -> Self {
        Self::new(f64::NAN, f64::NAN)
    }

    pub fn is_output_row_count_unknown(&self) -> bool {
        self.output_row_count.is_nan()
    }
}

/// Predicted resource cost of a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub cpu_cost: f64,
    pub max_memory: f64,
    pub network_cost: f64,
}

impl CostEstimate {
    pub fn new(cpu_cost: f64, max_memory: f64, network_cost: f64) -> Self {
        Self {
            cpu_cost,
            max_memory,
            network_cost,
        }
    }

    pub fn unknown() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN)
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn has_unknown_components(&self) -> bool {
        self.cpu_cost.is_nan() || self.max_memory.is_nan() || self.network_cost.is_nan()
    }

    /// Component-wise sum (for subtree totals). Unknown components stay unknown.
    pub fn add(&self, other: &CostEstimate) -> CostEstimate {
        CostEstimate {
            cpu_cost: self.cpu_cost + other.cpu_cost,
            max_memory: self.max_memory + other.max_memory,
            network_cost: self.network_cost + other.network_cost,
        }
    }
}
