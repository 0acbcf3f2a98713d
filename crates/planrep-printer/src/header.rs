//! The immutable part of a node representation.
//!
//! A `NodeHeader` is fixed once constructed: identity, operator label, output
//! columns, child ids, runtime stats and optimizer estimates. The only
//! construction-time check beyond presence is that estimated stats and costs
//! pair up by position.

use planrep_core::estimate::{CostEstimate, StatsEstimate};
use planrep_core::id::PlanNodeId;
use planrep_core::schema::Symbol;
use planrep_core::stats::PlanNodeStats;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NodeHeaderBuilder")]
pub struct NodeHeader {
    id: PlanNodeId,
    #[serde(rename = "type")]
    node_type: String,
    identifier: String,
    outputs: Vec<Symbol>,
    stats: Option<PlanNodeStats>,
    estimated_stats: Vec<StatsEstimate>,
    estimated_cost: Vec<CostEstimate>,
    children: Vec<PlanNodeId>,
}

impl NodeHeader {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PlanNodeId,
        node_type: impl Into<String>,
        identifier: impl Into<String>,
        outputs: Vec<Symbol>,
        stats: Option<PlanNodeStats>,
        estimated_stats: Vec<StatsEstimate>,
        estimated_cost: Vec<CostEstimate>,
        children: Vec<PlanNodeId>,
    ) -> Result<Self> {
        if estimated_cost.len() != estimated_stats.len() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                node = %id,
                cost = estimated_cost.len(),
                stats = estimated_stats.len(),
                "rejected node header"
            );
            return Err(Error::SizeMismatch {
                cost: estimated_cost.len(),
                stats: estimated_stats.len(),
            });
        }
        Ok(Self {
            id,
            node_type: node_type.into(),
            identifier: identifier.into(),
            outputs,
            stats,
            estimated_stats,
            estimated_cost,
            children,
        })
    }

    pub fn builder() -> NodeHeaderBuilder {
        NodeHeaderBuilder::default()
    }

    /// Decode a header handed over as JSON. Missing or `null` required fields
    /// are `InvalidArgument`; `stats` must be present but may be `null`.
    pub fn from_json(json: &str) -> Result<Self> {
        let builder: NodeHeaderBuilder = serde_json::from_str(json)
            .map_err(|e| Error::InvalidArgument(format!("malformed node header: {e}")))?;
        builder.build()
    }

    pub fn id(&self) -> &PlanNodeId {
        &self.id
    }

    pub fn node_type(&self) -> &str {
        &self.node_type
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn outputs(&self) -> &[Symbol] {
        &self.outputs
    }

    pub fn children(&self) -> &[PlanNodeId] {
        &self.children
    }

    pub fn stats(&self) -> Option<&PlanNodeStats> {
        self.stats.as_ref()
    }

    pub fn estimated_stats(&self) -> &[StatsEstimate] {
        &self.estimated_stats
    }

    pub fn estimated_cost(&self) -> &[CostEstimate] {
        &self.estimated_cost
    }

    /// Stats/cost estimate pairs in positional order.
    pub fn estimates(&self) -> impl Iterator<Item = (&StatsEstimate, &CostEstimate)> {
        self.estimated_stats.iter().zip(self.estimated_cost.iter())
    }

    pub(crate) fn drop_stats(&mut self) {
        self.stats = None;
    }

    // Both lists go together so the pairing invariant holds.
    pub(crate) fn drop_estimates(&mut self) {
        self.estimated_stats.clear();
        self.estimated_cost.clear();
    }
}

/// Field-by-field construction of a [`NodeHeader`].
///
/// Every field is required. `stats` is required as an option: call
/// [`NodeHeaderBuilder::stats`] with `None` (or [`NodeHeaderBuilder::no_stats`])
/// when no runtime statistics were collected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeHeaderBuilder {
    id: Option<PlanNodeId>,
    #[serde(rename = "type")]
    node_type: Option<String>,
    identifier: Option<String>,
    outputs: Option<Vec<Symbol>>,
    #[serde(default, deserialize_with = "present_option")]
    stats: Option<Option<PlanNodeStats>>,
    estimated_stats: Option<Vec<StatsEstimate>>,
    estimated_cost: Option<Vec<CostEstimate>>,
    children: Option<Vec<PlanNodeId>>,
}

// A present key (even `null`) is `Some(..)`; only a missing key stays `None`.
fn present_option<'de, D, T>(de: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

fn missing(field: &str) -> Error {
    Error::InvalidArgument(format!("{field} is missing"))
}

impl NodeHeaderBuilder {
    pub fn id(mut self, id: impl Into<PlanNodeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn node_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn outputs(mut self, outputs: Vec<Symbol>) -> Self {
        self.outputs = Some(outputs);
        self
    }

    pub fn stats(mut self, stats: Option<PlanNodeStats>) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn no_stats(self) -> Self {
        self.stats(None)
    }

    pub fn estimated_stats(mut self, estimated_stats: Vec<StatsEstimate>) -> Self {
        self.estimated_stats = Some(estimated_stats);
        self
    }

    pub fn estimated_cost(mut self, estimated_cost: Vec<CostEstimate>) -> Self {
        self.estimated_cost = Some(estimated_cost);
        self
    }

    pub fn children(mut self, children: Vec<PlanNodeId>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn build(self) -> Result<NodeHeader> {
        let id = self.id.ok_or_else(|| missing("id"))?;
        let node_type = self.node_type.ok_or_else(|| missing("type"))?;
        let identifier = self.identifier.ok_or_else(|| missing("identifier"))?;
        let outputs = self.outputs.ok_or_else(|| missing("outputs"))?;
        let stats = self.stats.ok_or_else(|| missing("stats"))?;
        let estimated_stats = self
            .estimated_stats
            .ok_or_else(|| missing("estimated_stats"))?;
        let estimated_cost = self
            .estimated_cost
            .ok_or_else(|| missing("estimated_cost"))?;
        let children = self.children.ok_or_else(|| missing("children"))?;

        NodeHeader::new(
            id,
            node_type,
            identifier,
            outputs,
            stats,
            estimated_stats,
            estimated_cost,
            children,
        )
    }
}

impl TryFrom<NodeHeaderBuilder> for NodeHeader {
    type Error = Error;

    fn try_from(builder: NodeHeaderBuilder) -> Result<Self> {
        builder.build()
    }
}
