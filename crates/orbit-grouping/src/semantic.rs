//! Semantic pipeline
//!
//! Segment into sessions, build the similarity graph per session, take
//! connected components, gate them through the validator, name survivors.
//! Groups from all sessions merge into one result.

use orbit_core::{GroupingConfig, TabDescriptor};

use crate::graph;
use crate::group::{ClusteredOutput, Group, GroupKind};
use crate::naming::{self, NameAllocator};
use crate::session;
use crate::similarity;
use crate::validate;

pub fn run(
    tabs: &[TabDescriptor],
    embeddings: &[Vec<f32>],
    config: &GroupingConfig,
) -> ClusteredOutput {
    let signals = similarity::collect_signals(tabs);
    let order = session::sort_by_open_time(tabs);
    let sessions = session::segment(tabs, &order, config.session_gap_ms);
    tracing::debug!(tabs = tabs.len(), sessions = sessions.len(), "segmented tab batch");

    let mut visited = vec![false; tabs.len()];
    let mut assigned = vec![false; tabs.len()];
    let mut names = NameAllocator::new();
    let mut groups: Vec<Group> = Vec::new();

    for sess in &sessions {
        let edges = graph::build_edges(sess, tabs, embeddings, &signals, config.min_similarity);
        let components = graph::connected_components(sess, &edges, &mut visited);
        tracing::debug!(
            session_size = sess.len(),
            edges = edges.len(),
            components = components.len(),
            "session clustered"
        );

        for component in components {
            let Some(scored) =
                validate::score_component(&component, tabs, embeddings, &signals, config)
            else {
                continue;
            };

            let members: Vec<&TabDescriptor> = scored.members.iter().map(|&i| &tabs[i]).collect();
            let title = names.claim(naming::derive_name(&members), None);
            for &i in &scored.members {
                assigned[i] = true;
            }

            groups.push(Group {
                id: format!("group-{}", groups.len() + 1),
                title,
                members: scored.members.iter().map(|&i| tabs[i].id).collect(),
                confidence: Some(scored.confidence),
                kind: GroupKind::Semantic,
                debug: Some(scored.debug),
            });
        }
    }

    let ungrouped = tabs
        .iter()
        .enumerate()
        .filter(|&(i, _)| !assigned[i])
        .map(|(_, t)| t.id)
        .collect();

    tracing::debug!(groups = groups.len(), "semantic clustering complete");
    ClusteredOutput { groups, ungrouped }
}
