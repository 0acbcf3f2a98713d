//! Node representations in their two phases.
//!
//! `NodeBuilder` is the building phase: the renderer owns it exclusively and
//! appends details. `finish()` yields a `NodeRepresentation`, which is
//! immutable and can be shared across threads.

use std::fmt;

use planrep_core::config::PrinterConfig;
use planrep_core::estimate::{CostEstimate, StatsEstimate};
use planrep_core::hash::Hash256;
use planrep_core::id::PlanNodeId;
use planrep_core::schema::Symbol;
use planrep_core::stats::PlanNodeStats;
use serde::{Deserialize, Serialize};

use crate::detail::{DetailBuffer, DetailSink};
use crate::error::Result;
use crate::header::NodeHeader;

/// Anything the arena can key by id and link by child ids.
pub trait PlanNode {
    fn id(&self) -> &PlanNodeId;
    fn children(&self) -> &[PlanNodeId];
}

/// A node whose details are still being written.
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    header: NodeHeader,
    details: DetailBuffer,
}

impl NodeBuilder {
    pub fn new(header: NodeHeader) -> Self {
        Self {
            header,
            details: DetailBuffer::new(),
        }
    }

    /// Apply printer settings: buffer sizing, and which optional data to keep.
    pub fn with_config(mut header: NodeHeader, config: &PrinterConfig) -> Self {
        if !config.include_runtime_stats {
            header.drop_stats();
        }
        if !config.include_estimates {
            header.drop_estimates();
        }
        Self {
            header,
            details: DetailBuffer::with_capacity(config.detail_capacity()),
        }
    }

    pub fn header(&self) -> &NodeHeader {
        &self.header
    }

    pub fn id(&self) -> &PlanNodeId {
        self.header.id()
    }

    pub fn node_type(&self) -> &str {
        self.header.node_type()
    }

    pub fn identifier(&self) -> &str {
        self.header.identifier()
    }

    pub fn outputs(&self) -> &[Symbol] {
        self.header.outputs()
    }

    pub fn children(&self) -> &[PlanNodeId] {
        self.header.children()
    }

    pub fn stats(&self) -> Option<&PlanNodeStats> {
        self.header.stats()
    }

    pub fn estimated_stats(&self) -> &[StatsEstimate] {
        self.header.estimated_stats()
    }

    pub fn estimated_cost(&self) -> &[CostEstimate] {
        self.header.estimated_cost()
    }

    /// Details written so far.
    pub fn details(&self) -> &str {
        self.details.as_str()
    }

    pub fn finish(self) -> NodeRepresentation {
        NodeRepresentation {
            header: self.header,
            details: self.details.into_string(),
        }
    }
}

impl DetailSink for NodeBuilder {
    fn append_literal(&mut self, text: &str) {
        self.details.append_literal(text);
    }

    fn append_formatted(&mut self, args: fmt::Arguments<'_>) {
        self.details.append_formatted(args);
    }

    fn append_literal_line(&mut self, text: &str) {
        self.details.append_literal_line(text);
    }

    fn append_formatted_line(&mut self, args: fmt::Arguments<'_>) {
        self.details.append_formatted_line(args);
    }
}

impl PlanNode for NodeBuilder {
    fn id(&self) -> &PlanNodeId {
        self.header.id()
    }

    fn children(&self) -> &[PlanNodeId] {
        self.header.children()
    }
}

/// A finished node, ready for formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRepresentation {
    header: NodeHeader,
    details: String,
}

impl NodeRepresentation {
    pub fn header(&self) -> &NodeHeader {
        &self.header
    }

    pub fn id(&self) -> &PlanNodeId {
        self.header.id()
    }

    pub fn node_type(&self) -> &str {
        self.header.node_type()
    }

    pub fn identifier(&self) -> &str {
        self.header.identifier()
    }

    pub fn outputs(&self) -> &[Symbol] {
        self.header.outputs()
    }

    pub fn children(&self) -> &[PlanNodeId] {
        self.header.children()
    }

    pub fn stats(&self) -> Option<&PlanNodeStats> {
        self.header.stats()
    }

    pub fn estimated_stats(&self) -> &[StatsEstimate] {
        self.header.estimated_stats()
    }

    pub fn estimated_cost(&self) -> &[CostEstimate] {
        self.header.estimated_cost()
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    /// Back to the building phase, keeping the details written so far.
    pub fn reopen(self) -> NodeBuilder {
        NodeBuilder {
            header: self.header,
            details: DetailBuffer::from(self.details),
        }
    }

    pub fn fingerprint(&self) -> Result<Hash256> {
        Ok(Hash256::of_serde(self)?)
    }
}

impl PlanNode for NodeRepresentation {
    fn id(&self) -> &PlanNodeId {
        self.header.id()
    }

    fn children(&self) -> &[PlanNodeId] {
        self.header.children()
    }
}
