//! Grouping engine configuration

use serde::{Deserialize, Serialize};

/// Thresholds and weights for the grouping engine.
///
/// Every field has a shipped default, so the settings surface can override
/// any subset via partial JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// Gap between consecutive open times that starts a new session (ms)
    pub session_gap_ms: i64,
    /// Adjusted pair score required to keep a similarity edge
    pub min_similarity: f32,
    /// Smallest component emitted as a group
    pub min_group_size: usize,
    /// Confidence floor for semantic groups
    pub min_confidence: f32,
    /// Weight of average similarity in the confidence blend
    pub sim_weight: f32,
    /// Weight of time coherence in the confidence blend
    pub time_weight: f32,
    /// Score an anchor must beat to claim a tab in hybrid phase one
    pub anchor_threshold: f32,
    /// Cosine threshold for hybrid residual clustering
    pub semantic_threshold: f32,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            session_gap_ms: 2_700_000, // 45 minutes
            min_similarity: 0.65,
            min_group_size: 2,
            min_confidence: 0.60,
            sim_weight: 0.7,
            time_weight: 0.3,
            anchor_threshold: 0.45,
            semantic_threshold: 0.55,
        }
    }
}
