//! Title matching against the remote snapshot.

use crate::model::RemoteRecord;

/// Default threshold: only exact (case-insensitive) titles match.
pub const DEFAULT_MAX_DISTANCE: usize = 1;

/// Count differing positions over the shorter of the two strings.
///
/// Characters past the end of the shorter string are not counted.
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}

/// Indices of the remote records whose title is within `max_distance` of
/// `title`, in snapshot order.
///
/// Records without a text title are never candidates.
#[must_use]
pub fn find_matches(title: &str, remote: &[RemoteRecord], max_distance: usize) -> Vec<usize> {
    let title = title.to_lowercase();
    remote
        .iter()
        .enumerate()
        .filter_map(|(i, page)| {
            let other = page.title()?.to_lowercase();
            (hamming_distance(&title, &other) < max_distance).then_some(i)
        })
        .collect()
}

/// What to do with a source record given its candidate matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Nothing matched: create a new page
    New,
    /// Exactly one page matched: reconcile against it
    Single(usize),
    /// Several pages matched: skip rather than risk updating the wrong one
    Ambiguous(Vec<usize>),
}

impl From<Vec<usize>> for MatchOutcome {
    fn from(indices: Vec<usize>) -> Self {
        match indices.as_slice() {
            [] => Self::New,
            [one] => Self::Single(*one),
            _ => Self::Ambiguous(indices),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RemoteValue;

    fn page(id: &str, title: &str) -> RemoteRecord {
        RemoteRecord::new(id).with("Title", RemoteValue::Text(title.into()))
    }

    #[test]
    fn test_hamming_distance() {
        assert_eq!(hamming_distance("abc", "abc"), 0);
        assert_eq!(hamming_distance("abc", "abd"), 1);
        assert_eq!(hamming_distance("abc", "xyz"), 3);
        // Length difference is not counted.
        assert_eq!(hamming_distance("abc", "abcdef"), 0);
        assert_eq!(hamming_distance("", "abc"), 0);
    }

    #[test]
    fn test_exact_case_insensitive_by_default() {
        let remote = vec![page("1", "Attention Is All You Need"), page("2", "Other")];
        assert_eq!(
            find_matches("attention is all you need", &remote, DEFAULT_MAX_DISTANCE),
            vec![0]
        );
        assert_eq!(find_matches("Attention is all you neeD!x", &remote, 1).len(), 1);
        assert!(find_matches("Attentiom is all you need", &remote, 1).is_empty());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let remote = vec![page("1", "abcdef")];
        // Two differing positions.
        let title = "abXdeY";
        assert!(find_matches(title, &remote, 2).is_empty());
        assert_eq!(find_matches(title, &remote, 3), vec![0]);
    }

    #[test]
    fn test_symmetric_on_identical() {
        let a = "Deep Residual Learning";
        assert_eq!(hamming_distance(a, a), 0);
        assert_eq!(find_matches(a, &[page("1", a)], 1), vec![0]);
    }

    #[test]
    fn test_multiple_candidates_in_snapshot_order() {
        let remote = vec![page("1", "Paper"), page("2", "Other"), page("3", "PAPER")];
        let found = find_matches("paper", &remote, 1);
        assert_eq!(found, vec![0, 2]);
        assert_eq!(MatchOutcome::from(found), MatchOutcome::Ambiguous(vec![0, 2]));
    }

    #[test]
    fn test_pages_without_title_skipped() {
        let remote = vec![
            RemoteRecord::new("1"),
            RemoteRecord::new("2").with("Title", RemoteValue::Empty),
        ];
        assert!(find_matches("anything", &remote, 1).is_empty());
    }

    #[test]
    fn test_match_outcome_from_indices() {
        assert_eq!(MatchOutcome::from(vec![]), MatchOutcome::New);
        assert_eq!(MatchOutcome::from(vec![4]), MatchOutcome::Single(4));
    }
}
