//! Hostname bucketing
//!
//! The zero-dependency strategy: no embeddings, no gating. Also reused as
//! the last hybrid phase.

use std::collections::BTreeMap;

use orbit_core::TabDescriptor;

use crate::group::DomainBuckets;
use crate::naming::host_label;

/// Bucket for tabs whose URL yields no usable host.
const OTHER_BUCKET: &str = "Other";

/// Bucket a subset of tabs by hostname label; values are arena indices.
///
/// Buckets are keyed by display name, so hosts sharing a label (language
/// subdomains of one site) merge.
pub(crate) fn bucket_indices(
    tabs: &[TabDescriptor],
    indices: &[usize],
) -> BTreeMap<String, Vec<usize>> {
    let mut buckets: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for &i in indices {
        let label = host_label(&tabs[i].url).unwrap_or_else(|| OTHER_BUCKET.to_string());
        buckets.entry(label).or_default().push(i);
    }
    buckets
}

/// Group every tab by hostname label.
///
/// Every tab lands in exactly one bucket; singletons keep theirs and
/// unparsable URLs go to "Other".
pub fn bucket_by_host(tabs: &[TabDescriptor]) -> DomainBuckets {
    let all: Vec<usize> = (0..tabs.len()).collect();
    bucket_indices(tabs, &all)
        .into_iter()
        .map(|(label, indices)| (label, indices.into_iter().map(|i| tabs[i].id).collect()))
        .collect()
}
