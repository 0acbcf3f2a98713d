//! Flat id → node map for one plan.
//!
//! Nodes refer to their children by id; the arena resolves those ids. It never
//! nests nodes, and it does not prescribe a traversal order. A `BTreeMap`
//! keeps iteration and fingerprints deterministic.

use std::collections::BTreeMap;

use planrep_core::hash::Hash256;
use planrep_core::id::PlanNodeId;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::node::{NodeBuilder, NodeRepresentation, PlanNode};

/// A plan whose nodes are still receiving details.
pub type BuildingPlan = NodeArena<NodeBuilder>;

/// A plan whose nodes are finalized.
pub type PlanRepresentation = NodeArena<NodeRepresentation>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ArenaEntries<N>", bound(deserialize = "N: PlanNode + Deserialize<'de>"))]
pub struct NodeArena<N> {
    root: PlanNodeId,
    nodes: BTreeMap<PlanNodeId, N>,
}

// Decoded form of an arena. Nodes are re-inserted one by one, so a key that
// disagrees with its node's id is rejected.
#[derive(Deserialize)]
struct ArenaEntries<N> {
    root: PlanNodeId,
    nodes: BTreeMap<PlanNodeId, N>,
}

impl<N: PlanNode> TryFrom<ArenaEntries<N>> for NodeArena<N> {
    type Error = Error;

    fn try_from(entries: ArenaEntries<N>) -> Result<Self> {
        let mut arena = NodeArena::new(entries.root);
        for (key, node) in entries.nodes {
            if &key != node.id() {
                return Err(Error::KeyMismatch {
                    key,
                    id: node.id().clone(),
                });
            }
            arena.insert(node)?;
        }
        Ok(arena)
    }
}

impl<N: PlanNode> NodeArena<N> {
    pub fn new(root: impl Into<PlanNodeId>) -> Self {
        Self {
            root: root.into(),
            nodes: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, node: N) -> Result<()> {
        let id = node.id().clone();
        if self.nodes.contains_key(&id) {
            return Err(Error::DuplicateId(id));
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(node = %id, children = node.children().len(), "arena insert");
        self.nodes.insert(id, node);
        Ok(())
    }

    pub fn root_id(&self) -> &PlanNodeId {
        &self.root
    }

    pub fn root(&self) -> Result<&N> {
        self.nodes
            .get(&self.root)
            .ok_or_else(|| Error::MissingRoot(self.root.clone()))
    }

    pub fn get(&self, id: &PlanNodeId) -> Option<&N> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: &PlanNodeId) -> Option<&mut N> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: &PlanNodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &PlanNodeId> {
        self.nodes.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlanNodeId, &N)> {
        self.nodes.iter()
    }

    /// Resolve the children of `id`, in the order the node lists them.
    pub fn children_of(&self, id: &PlanNodeId) -> Result<Vec<&N>> {
        let parent = self
            .nodes
            .get(id)
            .ok_or_else(|| Error::UnknownNode(id.clone()))?;
        parent
            .children()
            .iter()
            .map(|child| {
                self.nodes.get(child).ok_or_else(|| {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(parent = %id, child = %child, "dangling child reference");
                    Error::DanglingReference {
                        parent: id.clone(),
                        child: child.clone(),
                    }
                })
            })
            .collect()
    }

    /// Check that the root exists, every entry is keyed by its own id, and
    /// every child id resolves.
    pub fn validate(&self) -> Result<()> {
        self.root()?;
        for (id, node) in &self.nodes {
            if id != node.id() {
                return Err(Error::KeyMismatch {
                    key: id.clone(),
                    id: node.id().clone(),
                });
            }
            for child in node.children() {
                if !self.nodes.contains_key(child) {
                    return Err(Error::DanglingReference {
                        parent: id.clone(),
                        child: child.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl NodeArena<NodeBuilder> {
    /// Finalize every node. Details written so far are kept as-is.
    pub fn finish(self) -> NodeArena<NodeRepresentation> {
        #[cfg(feature = "tracing")]
        tracing::debug!(root = %self.root, nodes = self.nodes.len(), "plan finished");
        NodeArena {
            root: self.root,
            nodes: self
                .nodes
                .into_iter()
                .map(|(id, node)| (id, node.finish()))
                .collect(),
        }
    }
}

impl NodeArena<NodeRepresentation> {
    /// Stable digest of the whole finalized plan, details included.
    pub fn fingerprint(&self) -> Result<Hash256> {
        Ok(Hash256::of_serde(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::NodeHeader;

    fn leaf_or_inner(id: &str, children: &[&str]) -> NodeBuilder {
        let header = NodeHeader::builder()
            .id(id)
            .node_type("Values")
            .identifier("")
            .outputs(vec![])
            .no_stats()
            .estimated_stats(vec![])
            .estimated_cost(vec![])
            .children(children.iter().map(|c| PlanNodeId::new(*c)).collect())
            .build()
            .unwrap();
        NodeBuilder::new(header)
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut arena = BuildingPlan::new("0");
        arena.insert(leaf_or_inner("0", &[])).unwrap();
        let err = arena.insert(leaf_or_inner("0", &[])).unwrap_err();
        assert!(matches!(err, Error::DuplicateId(id) if id.as_str() == "0"));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_missing_root() {
        let mut arena = BuildingPlan::new("0");
        arena.insert(leaf_or_inner("1", &[])).unwrap();
        assert!(matches!(arena.root(), Err(Error::MissingRoot(_))));
        assert!(matches!(arena.validate(), Err(Error::MissingRoot(_))));
    }

    #[test]
    fn test_validate_rejects_entry_under_foreign_key() {
        let mut arena = BuildingPlan::new("0");
        arena.nodes.insert(PlanNodeId::new("0"), leaf_or_inner("5", &[]));
        match arena.validate() {
            Err(Error::KeyMismatch { key, id }) => {
                assert_eq!(key.as_str(), "0");
                assert_eq!(id.as_str(), "5");
            }
            other => panic!("expected KeyMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_parent() {
        let arena = BuildingPlan::new("0");
        let err = arena.children_of(&PlanNodeId::new("9")).unwrap_err();
        assert!(matches!(err, Error::UnknownNode(_)));
        assert!(arena.is_empty());
    }
}
