//! Grouping error types
//!
//! Failures cross the engine boundary as data, never as panics. A failure
//! always reports every input tab as ungrouped so the caller never acts on
//! a partial result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use orbit_core::{TabDescriptor, TabId};

#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingError {
    #[error("tab count {tabs} does not match embedding count {embeddings}")]
    InputMismatch { tabs: usize, embeddings: usize },

    #[error("embedding {index} has dimension {actual}, expected {expected}")]
    InvalidVector {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("embeddings unavailable: {0}")]
    EmbeddingUnavailable(String),
}

/// Boundary failure object: the error plus the full ungrouped id list.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{error}")]
pub struct GroupingFailure {
    pub error: GroupingError,
    pub ungrouped: Vec<TabId>,
}

impl GroupingFailure {
    pub fn new(error: GroupingError, tabs: &[TabDescriptor]) -> Self {
        Self {
            error,
            ungrouped: tabs.iter().map(|t| t.id).collect(),
        }
    }
}
