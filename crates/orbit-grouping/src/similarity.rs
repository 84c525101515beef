//! Pairwise similarity scoring
//!
//! Cosine over caller-supplied embeddings, plus the adjustments that shape
//! the similarity graph: workflow affinity, duplicate-title penalty,
//! same-domain discount.

use orbit_core::TabDescriptor;

use crate::classify::{self, ContentType};

/// Raw cosine pairs below this are never considered for an edge.
pub(crate) const RAW_PRUNE: f32 = 0.3;
/// Bonus for an exploration/reference pair that is already similar.
const WORKFLOW_AFFINITY: f32 = 0.10;
/// Raw similarity an exploration/reference pair must clear for the bonus.
const AFFINITY_FLOOR: f32 = 0.55;
/// Penalty for identical titles opened far apart (stale duplicates).
const DEDUP_PENALTY: f32 = 0.20;
/// Identical titles within this window are not treated as duplicates.
const DEDUP_WINDOW_MS: i64 = 30 * 60 * 1000;
/// Same-host pairs are discounted to favor cross-site semantic bridges.
const DOMAIN_DISCOUNT: f32 = 0.95;

/// Per-tab inputs to pair scoring, computed once per invocation.
pub struct TabSignals {
    pub kind: ContentType,
    pub host: Option<String>,
}

pub fn collect_signals(tabs: &[TabDescriptor]) -> Vec<TabSignals> {
    tabs.iter()
        .map(|t| TabSignals {
            kind: classify::classify(&t.title, &t.url),
            host: t.host(),
        })
        .collect()
}

/// Cosine similarity; 0.0 when either vector has zero magnitude, never NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let mag_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    dot / (mag_a * mag_b)
}

/// Adjusted edge score for a tab pair, starting from raw cosine.
pub fn adjusted_score(
    raw: f32,
    a: &TabDescriptor,
    b: &TabDescriptor,
    sig_a: &TabSignals,
    sig_b: &TabSignals,
) -> f32 {
    let mut score = raw;

    let cross_typed = matches!(
        (sig_a.kind, sig_b.kind),
        (ContentType::Exploration, ContentType::Reference)
            | (ContentType::Reference, ContentType::Exploration)
    );
    if cross_typed && raw > AFFINITY_FLOOR {
        score += WORKFLOW_AFFINITY;
    }

    if a.title == b.title && (a.open_time_ms - b.open_time_ms).abs() > DEDUP_WINDOW_MS {
        score -= DEDUP_PENALTY;
    }

    if let (Some(ha), Some(hb)) = (&sig_a.host, &sig_b.host) {
        if ha == hb {
            score *= DOMAIN_DISCOUNT;
        }
    }

    score
}
