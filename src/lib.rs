#![forbid(unsafe_code)]
//! planrep: node representations for EXPLAIN renderers.
//!
//! Re-exports `planrep-core` (ids, columns, stats, estimates, config) and
//! `planrep-printer` (headers, detail sinks, node builders, the node arena).

pub use planrep_core;
pub use planrep_printer;

// Printer errors wrap core errors, so they are the ones surfaced here.
pub use planrep_core::prelude::*;
pub use planrep_printer::{
    append_detail, append_detail_line, BuildingPlan, DetailBuffer, DetailSink, Error, NodeArena,
    NodeBuilder, NodeHeader, NodeHeaderBuilder, NodeRepresentation, PlanNode,
    PlanRepresentation, Result,
};
