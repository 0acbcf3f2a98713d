//! Measured runtime statistics for a plan node.
//!
//! Present only when the query actually ran (or is running). An absent value
//! on a node means "not collected", never "zero".

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::id::PlanNodeId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanNodeStats {
    pub node_id: PlanNodeId,

    /// Wall time the node's operators were scheduled, in milliseconds.
    pub scheduled_ms: u64,
    pub cpu_ms: u64,
    pub blocked_ms: u64,

    pub input_rows: u64,
    pub input_bytes: u64,
    pub output_rows: u64,
    pub output_bytes: u64,

    /// Peak user memory across all operator instances.
    pub peak_memory_bytes: u64,
}

impl PlanNodeStats {
    pub fn new(node_id: impl Into<PlanNodeId>) -> Self {
        Self {
            node_id: node_id.into(),
            scheduled_ms: 0,
            cpu_ms: 0,
            blocked_ms: 0,
            input_rows: 0,
            input_bytes: 0,
            output_rows: 0,
            output_bytes: 0,
            peak_memory_bytes: 0,
        }
    }

    /// Combine stats of two operator instances belonging to the same node.
    ///
    /// Counters and times are summed (saturating); peak memory takes the max.
    pub fn merge(&self, other: &PlanNodeStats) -> Result<PlanNodeStats> {
        if self.node_id != other.node_id {
            return Err(Error::Invariant(format!(
                "cannot merge stats of node {} into node {}",
                other.node_id, self.node_id
            )));
        }
        Ok(PlanNodeStats {
            node_id: self.node_id.clone(),
            scheduled_ms: self.scheduled_ms.saturating_add(other.scheduled_ms),
            cpu_ms: self.cpu_ms.saturating_add(other.cpu_ms),
            blocked_ms: self.blocked_ms.saturating_add(other.blocked_ms),
            input_rows: self.input_rows.saturating_add(other.input_rows),
            input_bytes: self.input_bytes.saturating_add(other.input_bytes),
            output_rows: self.output_rows.saturating_add(other.output_rows),
            output_bytes: self.output_bytes.saturating_add(other.output_bytes),
            peak_memory_bytes: self.peak_memory_bytes.max(other.peak_memory_bytes),
        })
    }

    pub fn average_input_row_bytes(&self) -> Option<f64> {
        if self.input_rows == 0 {
            return None;
        }
        Some(self.input_bytes as f64 / self.input_rows as f64)
    }

    pub fn average_output_row_bytes(&self) -> Option<f64> {
        if self.output_rows == 0 {
            return None;
        }
        Some(self.output_bytes as f64 / self.output_rows as f64)
    }
}
