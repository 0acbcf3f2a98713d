//! Convenient re-exports for downstream crates.

pub use crate::config::PrinterConfig;
pub use crate::error::{Error, Result};
pub use crate::estimate::{CostEstimate, StatsEstimate};
pub use crate::hash::Hash256;
pub use crate::id::PlanNodeId;
pub use crate::schema::{DataType, Symbol};
pub use crate::stats::PlanNodeStats;
