//! Grouping output types
//!
//! The wire shapes the shell consumes: named groups plus leftovers for the
//! semantic and hybrid strategies, plain hostname buckets for domain mode.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use orbit_core::TabId;

use crate::validate::GroupDebug;

/// How a group was formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// Embedding-similarity cluster
    Semantic,
    /// Claimed by a fixed topic anchor (hybrid phase one)
    Anchor,
    /// Hostname bucket
    Domain,
}

impl GroupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKind::Semantic => "semantic",
            GroupKind::Anchor => "anchor",
            GroupKind::Domain => "domain",
        }
    }
}

impl std::fmt::Display for GroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named tab group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Stable within the invocation: "group-1", "group-2", ...
    pub id: String,
    /// Display name, unique within the invocation
    pub title: String,
    /// Member tab ids; every tab appears in at most one group
    pub members: Vec<TabId>,
    /// Present on semantic-pipeline groups only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(rename = "type")]
    pub kind: GroupKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<GroupDebug>,
}

/// Hostname buckets keyed by display name; every tab is in exactly one.
pub type DomainBuckets = BTreeMap<String, Vec<TabId>>;

/// Groups plus leftovers, as emitted by the semantic and hybrid strategies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusteredOutput {
    pub groups: Vec<Group>,
    pub ungrouped: Vec<TabId>,
}

/// Engine output, shaped per strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupingOutput {
    Clustered(ClusteredOutput),
    Domain(DomainBuckets),
}

impl GroupingOutput {
    pub fn as_clustered(&self) -> Option<&ClusteredOutput> {
        match self {
            GroupingOutput::Clustered(out) => Some(out),
            GroupingOutput::Domain(_) => None,
        }
    }

    pub fn as_domain(&self) -> Option<&DomainBuckets> {
        match self {
            GroupingOutput::Domain(buckets) => Some(buckets),
            GroupingOutput::Clustered(_) => None,
        }
    }
}
