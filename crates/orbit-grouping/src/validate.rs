//! Group validation and confidence scoring
//!
//! A component becomes a group only if it is big enough and its blend of
//! mutual similarity and temporal coherence clears the confidence floor.

use serde::{Deserialize, Serialize};

use orbit_core::{GroupingConfig, TabDescriptor};

use crate::classify::ContentType;
use crate::similarity::{self, TabSignals};

/// Bonus when a group spans both research intents.
const CROSS_TYPE_BONUS: f32 = 0.05;
/// Time coherence never drops below this floor.
const COHERENCE_FLOOR: f32 = 0.5;
/// Window (minutes) over which coherence decays toward the floor.
const COHERENCE_WINDOW_MIN: f32 = 120.0;

/// Measurements attached to an accepted group for the shell's debug surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupDebug {
    pub avg_sim: f32,
    pub span_minutes: f32,
}

/// A component that survived validation.
#[derive(Debug, Clone)]
pub struct ScoredComponent {
    pub members: Vec<usize>,
    pub confidence: f32,
    pub debug: GroupDebug,
}

/// Gate a component on size and confidence.
///
/// Returns `None` for components that are too small or score below the
/// confidence floor; those tabs stay ungrouped.
pub fn score_component(
    component: &[usize],
    tabs: &[TabDescriptor],
    embeddings: &[Vec<f32>],
    signals: &[TabSignals],
    config: &GroupingConfig,
) -> Option<ScoredComponent> {
    if component.len() < config.min_group_size {
        return None;
    }

    let mut total = 0.0f32;
    let mut pairs = 0u32;
    for (pos, &i) in component.iter().enumerate() {
        for &j in &component[pos + 1..] {
            total += similarity::cosine_similarity(&embeddings[i], &embeddings[j]);
            pairs += 1;
        }
    }
    let avg_sim = if pairs > 0 { total / pairs as f32 } else { 0.0 };

    let min_open = component.iter().map(|&i| tabs[i].open_time_ms).min().unwrap_or(0);
    let max_open = component.iter().map(|&i| tabs[i].open_time_ms).max().unwrap_or(0);
    let span_minutes = (max_open - min_open) as f32 / 60_000.0;
    let time_coherence = (1.0 - span_minutes / COHERENCE_WINDOW_MIN).max(COHERENCE_FLOOR);

    let mut confidence = config.sim_weight * avg_sim + config.time_weight * time_coherence;

    let has_reference = component.iter().any(|&i| signals[i].kind == ContentType::Reference);
    let has_exploration = component.iter().any(|&i| signals[i].kind == ContentType::Exploration);
    if has_reference && has_exploration {
        confidence += CROSS_TYPE_BONUS;
    }

    if confidence < config.min_confidence {
        tracing::debug!(
            size = component.len(),
            confidence,
            "component rejected below confidence floor"
        );
        return None;
    }

    Some(ScoredComponent {
        members: component.to_vec(),
        confidence,
        debug: GroupDebug { avg_sim, span_minutes },
    })
}
