#![forbid(unsafe_code)]
//! planrep-printer: the per-node data an EXPLAIN renderer works with.
//!
//! A renderer receives one [`NodeHeader`] per plan node plus the id graph
//! (children are ids, resolved through a [`NodeArena`]). While it walks the
//! tree it appends free-form text to each node through the [`DetailSink`]
//! capability of a [`NodeBuilder`], then calls `finish()` to obtain the
//! immutable [`NodeRepresentation`] it formats into text, JSON, or a graph.
//!
//! Traversal order and output formatting belong to the renderer, not here.

pub mod arena;
pub mod detail;
pub mod error;
pub mod header;
pub mod node;

pub use arena::{BuildingPlan, NodeArena, PlanRepresentation};
pub use detail::{DetailBuffer, DetailSink};
pub use error::{Error, Result};
pub use header::{NodeHeader, NodeHeaderBuilder};
pub use node::{NodeBuilder, NodeRepresentation, PlanNode};
