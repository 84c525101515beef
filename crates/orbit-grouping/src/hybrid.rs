//! Hybrid strategy
//!
//! Three ordered phases, each consuming only tabs the previous phase left
//! unassigned: claim against fixed topic anchors, cluster the residue at
//! the semantic threshold, bucket what remains by hostname.

use serde::{Deserialize, Serialize};

use orbit_core::{GroupingConfig, TabDescriptor};

use crate::domain;
use crate::graph::{self, SimilarityEdge};
use crate::group::{ClusteredOutput, Group, GroupKind};
use crate::naming::{self, NameAllocator};
use crate::similarity::cosine_similarity;

/// Fixed named topic reference for the anchor phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anchor {
    pub label: String,
    pub embedding: Vec<f32>,
}

/// Collision suffix for residual semantic groups.
const EXT_SUFFIX: &str = " (Ext)";
/// Collision suffix for hostname-fallback groups.
const WEB_SUFFIX: &str = " (Web)";
/// Hostname-fallback buckets below this size are discarded.
const FALLBACK_MIN_BUCKET: usize = 2;

pub fn run(
    tabs: &[TabDescriptor],
    embeddings: &[Vec<f32>],
    anchors: &[Anchor],
    config: &GroupingConfig,
) -> ClusteredOutput {
    let mut assigned = vec![false; tabs.len()];
    let mut names = NameAllocator::new();
    let mut groups: Vec<Group> = Vec::new();

    // Phase one: every tab goes to its single best anchor, if good enough.
    // Exact-equal scores keep the lowest anchor index (strict > while
    // scanning in order).
    let mut claimed: Vec<Vec<usize>> = vec![Vec::new(); anchors.len()];
    for (i, embedding) in embeddings.iter().enumerate() {
        let mut best: Option<(usize, f32)> = None;
        for (a, anchor) in anchors.iter().enumerate() {
            let score = cosine_similarity(embedding, &anchor.embedding);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((a, score));
            }
        }
        if let Some((a, score)) = best {
            if score > config.anchor_threshold {
                claimed[a].push(i);
                assigned[i] = true;
            }
        }
    }
    for (a, members) in claimed.iter().enumerate() {
        if members.is_empty() {
            continue;
        }
        let title = names.claim(anchors[a].label.clone(), None);
        push_group(&mut groups, title, members, tabs, GroupKind::Anchor);
    }
    tracing::debug!(
        anchored = assigned.iter().filter(|&&a| a).count(),
        anchor_groups = groups.len(),
        "anchor phase complete"
    );

    // Phase two: residual clustering over raw cosine, no session split.
    let remaining: Vec<usize> = (0..tabs.len()).filter(|&i| !assigned[i]).collect();
    let mut edges: Vec<SimilarityEdge> = Vec::new();
    for (pos, &i) in remaining.iter().enumerate() {
        for &j in &remaining[pos + 1..] {
            let raw = cosine_similarity(&embeddings[i], &embeddings[j]);
            if raw >= config.semantic_threshold {
                edges.push(SimilarityEdge { a: i, b: j, weight: raw });
            }
        }
    }
    let mut visited = vec![false; tabs.len()];
    for component in graph::connected_components(&remaining, &edges, &mut visited) {
        if component.len() < config.min_group_size {
            continue;
        }
        let members_ref: Vec<&TabDescriptor> = component.iter().map(|&i| &tabs[i]).collect();
        let title = names.claim(naming::derive_name(&members_ref), Some(EXT_SUFFIX));
        for &i in &component {
            assigned[i] = true;
        }
        push_group(&mut groups, title, &component, tabs, GroupKind::Semantic);
    }

    // Phase three: hostname buckets of two or more; singletons stay out.
    let remaining: Vec<usize> = (0..tabs.len()).filter(|&i| !assigned[i]).collect();
    for (label, members) in domain::bucket_indices(tabs, &remaining) {
        if members.len() < FALLBACK_MIN_BUCKET {
            continue;
        }
        let title = names.claim(label, Some(WEB_SUFFIX));
        for &i in &members {
            assigned[i] = true;
        }
        push_group(&mut groups, title, &members, tabs, GroupKind::Domain);
    }

    let ungrouped = tabs
        .iter()
        .enumerate()
        .filter(|&(i, _)| !assigned[i])
        .map(|(_, t)| t.id)
        .collect();

    tracing::debug!(groups = groups.len(), "hybrid clustering complete");
    ClusteredOutput { groups, ungrouped }
}

fn push_group(
    groups: &mut Vec<Group>,
    title: String,
    members: &[usize],
    tabs: &[TabDescriptor],
    kind: GroupKind,
) {
    groups.push(Group {
        id: format!("group-{}", groups.len() + 1),
        title,
        members: members.iter().map(|&i| tabs[i].id).collect(),
        confidence: None,
        kind,
        debug: None,
    });
}
