//! Time-based session segmentation
//!
//! Tabs opened close together belong to one browsing session. Sessions are
//! clustered independently; a group never crosses a session boundary.

use orbit_core::TabDescriptor;

/// Indices into the input slice, sorted ascending by open time.
///
/// The sort is stable, so tabs with equal (or missing) open times keep
/// their input order.
pub fn sort_by_open_time(tabs: &[TabDescriptor]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..tabs.len()).collect();
    order.sort_by_key(|&i| tabs[i].open_time_ms);
    order
}

/// Split a sorted index order into sessions.
///
/// A new session starts whenever the gap to the previous tab exceeds
/// `gap_ms`. Every tab lands in exactly one session; sessions are never
/// empty.
pub fn segment(tabs: &[TabDescriptor], order: &[usize], gap_ms: i64) -> Vec<Vec<usize>> {
    let mut sessions: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut prev_open = 0i64;

    for &idx in order {
        let open = tabs[idx].open_time_ms;
        if !current.is_empty() && open - prev_open > gap_ms {
            sessions.push(std::mem::take(&mut current));
        }
        current.push(idx);
        prev_open = open;
    }
    if !current.is_empty() {
        sessions.push(current);
    }

    sessions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(id: u64, open_time_ms: i64) -> TabDescriptor {
        TabDescriptor::new(id, format!("tab {id}"), "https://example.com", open_time_ms)
    }

    #[test]
    fn test_single_session() {
        let tabs = vec![tab(1, 0), tab(2, 60_000), tab(3, 120_000)];
        let order = sort_by_open_time(&tabs);
        let sessions = segment(&tabs, &order, 2_700_000);
        assert_eq!(sessions, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_gap_starts_new_session() {
        let gap = 2_700_000;
        let tabs = vec![tab(1, 0), tab(2, 60_000), tab(3, 60_000 + gap + 1)];
        let order = sort_by_open_time(&tabs);
        let sessions = segment(&tabs, &order, gap);
        assert_eq!(sessions, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn test_gap_exactly_at_threshold_stays() {
        let gap = 2_700_000;
        let tabs = vec![tab(1, 0), tab(2, gap)];
        let order = sort_by_open_time(&tabs);
        let sessions = segment(&tabs, &order, gap);
        assert_eq!(sessions.len(), 1);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        // all missing open times sort to 0 and keep input order
        let tabs = vec![tab(9, 0), tab(4, 0), tab(7, 0)];
        let order = sort_by_open_time(&tabs);
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_unsorted_input() {
        let tabs = vec![tab(1, 500_000), tab(2, 0), tab(3, 250_000)];
        let order = sort_by_open_time(&tabs);
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_empty() {
        let tabs: Vec<TabDescriptor> = Vec::new();
        let sessions = segment(&tabs, &[], 2_700_000);
        assert!(sessions.is_empty());
    }
}
