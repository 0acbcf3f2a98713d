//! Plan node identifiers.
//!
//! Ids are opaque strings handed out by the planner (`"0"`, `"N1"`, ...).
//! Children reference their parent's arena entries by id only.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Ord, PartialOrd)]
#[serde(transparent)]
pub struct PlanNodeId(String);

impl PlanNodeId {
    pub fn new(v: impl Into<String>) -> Self {
        Self(v.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlanNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlanNodeId {
    fn from(v: &str) -> Self {
        Self::new(v)
    }
}

impl From<String> for PlanNodeId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl From<u64> for PlanNodeId {
    fn from(v: u64) -> Self {
        Self(v.to_string())
    }
}
