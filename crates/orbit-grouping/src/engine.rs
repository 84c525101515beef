//! Engine entry point
//!
//! One `cluster` contract for all three strategies. The engine is a pure
//! function of its inputs and config: no I/O, no shared state, identical
//! input always yields identical output.

use serde::{Deserialize, Serialize};

use orbit_core::{GroupingConfig, TabDescriptor};

use crate::domain;
use crate::error::{GroupingError, GroupingFailure};
use crate::group::GroupingOutput;
use crate::hybrid::{self, Anchor};
use crate::semantic;
use crate::Result;

/// Grouping strategy selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Strategy {
    /// Hostname buckets only; no embeddings required
    Domain,
    /// Session-scoped similarity clustering with confidence gating
    Semantic,
    /// Anchor claim, then residual clustering, then hostname fallback
    Hybrid { anchors: Vec<Anchor> },
}

/// Partition `tabs` into named groups.
///
/// `embeddings` must align with `tabs` one-to-one for the semantic and
/// hybrid strategies; domain mode ignores them. Malformed input fails fast
/// with every tab id reported ungrouped.
pub fn cluster(
    strategy: &Strategy,
    tabs: &[TabDescriptor],
    embeddings: Option<&[Vec<f32>]>,
    config: &GroupingConfig,
) -> Result<GroupingOutput> {
    match strategy {
        Strategy::Domain => Ok(GroupingOutput::Domain(domain::bucket_by_host(tabs))),
        Strategy::Semantic => {
            let embeddings = checked_embeddings(tabs, embeddings)?;
            Ok(GroupingOutput::Clustered(semantic::run(tabs, embeddings, config)))
        }
        Strategy::Hybrid { anchors } => {
            let embeddings = checked_embeddings(tabs, embeddings)?;
            check_anchors(tabs, embeddings, anchors)?;
            Ok(GroupingOutput::Clustered(hybrid::run(
                tabs, embeddings, anchors, config,
            )))
        }
    }
}

/// `cluster`, degrading to domain buckets when embeddings never arrived.
///
/// An upstream embedding outage should not sink the whole request;
/// hostname grouping is always available.
pub fn cluster_with_fallback(
    strategy: &Strategy,
    tabs: &[TabDescriptor],
    embeddings: Option<&[Vec<f32>]>,
    config: &GroupingConfig,
) -> Result<GroupingOutput> {
    match cluster(strategy, tabs, embeddings, config) {
        Err(failure) if matches!(failure.error, GroupingError::EmbeddingUnavailable(_)) => {
            tracing::warn!(error = %failure.error, "falling back to domain grouping");
            cluster(&Strategy::Domain, tabs, None, config)
        }
        other => other,
    }
}

fn checked_embeddings<'a>(
    tabs: &[TabDescriptor],
    embeddings: Option<&'a [Vec<f32>]>,
) -> Result<&'a [Vec<f32>]> {
    let Some(embeddings) = embeddings else {
        return Err(GroupingFailure::new(
            GroupingError::EmbeddingUnavailable("no embeddings supplied".to_string()),
            tabs,
        ));
    };

    if embeddings.len() != tabs.len() {
        return Err(GroupingFailure::new(
            GroupingError::InputMismatch {
                tabs: tabs.len(),
                embeddings: embeddings.len(),
            },
            tabs,
        ));
    }

    if let Some(first) = embeddings.first() {
        let expected = first.len();
        for (index, embedding) in embeddings.iter().enumerate() {
            if embedding.len() != expected {
                return Err(GroupingFailure::new(
                    GroupingError::InvalidVector {
                        index,
                        expected,
                        actual: embedding.len(),
                    },
                    tabs,
                ));
            }
        }
    }

    Ok(embeddings)
}

/// Anchor embeddings must share the tab embedding dimension.
fn check_anchors(
    tabs: &[TabDescriptor],
    embeddings: &[Vec<f32>],
    anchors: &[Anchor],
) -> Result<()> {
    let Some(expected) = embeddings.first().map(Vec::len) else {
        return Ok(());
    };
    for (index, anchor) in anchors.iter().enumerate() {
        if anchor.embedding.len() != expected {
            return Err(GroupingFailure::new(
                GroupingError::InvalidVector {
                    index,
                    expected,
                    actual: anchor.embedding.len(),
                },
                tabs,
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(id: u64, title: &str, url: &str) -> TabDescriptor {
        TabDescriptor::new(id, title, url, 0)
    }

    #[test]
    fn test_domain_ignores_embeddings() {
        let tabs = vec![tab(1, "a", "https://a.com")];
        let out = cluster(&Strategy::Domain, &tabs, None, &GroupingConfig::default()).unwrap();
        assert!(out.as_domain().is_some());
    }

    #[test]
    fn test_input_mismatch() {
        let tabs = vec![tab(1, "a", "https://a.com"), tab(2, "b", "https://b.com")];
        let embeddings = vec![vec![1.0, 0.0]];
        let err = cluster(
            &Strategy::Semantic,
            &tabs,
            Some(&embeddings),
            &GroupingConfig::default(),
        )
        .unwrap_err();

        assert_eq!(err.error, GroupingError::InputMismatch { tabs: 2, embeddings: 1 });
        assert_eq!(err.ungrouped, vec![1, 2]);
    }

    #[test]
    fn test_invalid_vector() {
        let tabs = vec![tab(1, "a", "https://a.com"), tab(2, "b", "https://b.com")];
        let embeddings = vec![vec![1.0, 0.0], vec![1.0, 0.0, 0.0]];
        let err = cluster(
            &Strategy::Semantic,
            &tabs,
            Some(&embeddings),
            &GroupingConfig::default(),
        )
        .unwrap_err();

        assert_eq!(
            err.error,
            GroupingError::InvalidVector { index: 1, expected: 2, actual: 3 }
        );
        assert_eq!(err.ungrouped, vec![1, 2]);
    }

    #[test]
    fn test_anchor_dimension_checked() {
        let tabs = vec![tab(1, "a", "https://a.com")];
        let embeddings = vec![vec![1.0, 0.0]];
        let strategy = Strategy::Hybrid {
            anchors: vec![Anchor { label: "Coding".to_string(), embedding: vec![1.0] }],
        };
        let err = cluster(&strategy, &tabs, Some(&embeddings), &GroupingConfig::default())
            .unwrap_err();
        assert_eq!(
            err.error,
            GroupingError::InvalidVector { index: 0, expected: 2, actual: 1 }
        );
    }

    #[test]
    fn test_missing_embeddings() {
        let tabs = vec![tab(1, "a", "https://a.com")];
        let err =
            cluster(&Strategy::Semantic, &tabs, None, &GroupingConfig::default()).unwrap_err();
        assert!(matches!(err.error, GroupingError::EmbeddingUnavailable(_)));
        assert_eq!(err.ungrouped, vec![1]);
    }

    #[test]
    fn test_fallback_degrades_to_domain() {
        let tabs = vec![
            tab(1, "a", "https://en.wikipedia.org/wiki/A"),
            tab(2, "b", "https://en.wikipedia.org/wiki/B"),
        ];
        let out = cluster_with_fallback(&Strategy::Semantic, &tabs, None, &GroupingConfig::default())
            .unwrap();
        let buckets = out.as_domain().unwrap();
        assert_eq!(buckets["Wikipedia"], vec![1, 2]);
    }

    #[test]
    fn test_fallback_preserves_other_errors() {
        let tabs = vec![tab(1, "a", "https://a.com"), tab(2, "b", "https://b.com")];
        let embeddings = vec![vec![1.0, 0.0]];
        let err = cluster_with_fallback(
            &Strategy::Semantic,
            &tabs,
            Some(&embeddings),
            &GroupingConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err.error, GroupingError::InputMismatch { .. }));
    }

    #[test]
    fn test_empty_batch() {
        let out = cluster(
            &Strategy::Semantic,
            &[],
            Some(&[]),
            &GroupingConfig::default(),
        )
        .unwrap();
        let clustered = out.as_clustered().unwrap();
        assert!(clustered.groups.is_empty());
        assert!(clustered.ungrouped.is_empty());
    }
}
