#![forbid(unsafe_code)]
//! planrep-core: the plain data a plan printer attaches to each plan node.
//!
//! - `id`: plan node identifiers (the arena join key).
//! - `schema`: output column descriptors (`Symbol`).
//! - `stats`: measured runtime statistics for `EXPLAIN ANALYZE`.
//! - `estimate`: optimizer stats/cost estimates.
//! - `config`: printer configuration.
//!
//! Everything here is serde-friendly data; nothing renders or traverses.

pub mod config;
pub mod error;
pub mod estimate;
pub mod hash;
pub mod id;
pub mod prelude;
pub mod schema;
pub mod stats;
