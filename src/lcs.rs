//! Longest common subsequence via the Hunt-Szymanski method.
//!
//! Instead of filling an O(n*m) dynamic-programming grid, matches are
//! reduced to right-hand positions and the longest strictly-increasing
//! subsequence of those positions is found with patience sorting. Cost is
//! O((L + M) log M) where L is the number of (left-line, position) match
//! pairs and M the best subsequence length, and memory is bounded by the
//! number of matches rather than the full grid.
//!
//! # Examples
//!
//! ```
//! use hunt_diff::lcs;
//!
//! let left = ["a", "b", "c", "d"];
//! let right = ["b", "d", "e"];
//! assert_eq!(lcs(&left, &right), vec!["b", "d"]);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

/// Maps each distinct line to the ascending list of positions where it
/// occurs in the right-hand sequence. Repeated lines keep every occurrence.
struct PositionIndex<'a, T> {
    positions: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> PositionIndex<'a, T> {
    /// Build the index in one pass over `right`
    fn build(right: &'a [T]) -> Self {
        let mut positions: HashMap<&T, Vec<usize>> = HashMap::new();
        for (i, line) in right.iter().enumerate() {
            positions.entry(line).or_default().push(i);
        }
        Self { positions }
    }

    fn get(&self, line: &T) -> Option<&[usize]> {
        self.positions.get(line).map(Vec::as_slice)
    }
}

/// A recorded match: left index, right position, and the arena index of
/// the match it chains onto. Nodes are immutable once pushed, so chains
/// through them stay valid when a pile top is later replaced.
struct Match {
    left: usize,
    right: usize,
    prev: Option<usize>,
}

/// Patience-sort state for the strictly-increasing LIS over right positions.
///
/// `piles[k]` holds the arena index of the match with the smallest right
/// position known to end a chain of length k+1. The tops' right positions
/// are ascending across piles, which is what permits binary search, and
/// every predecessor hop is an O(1) arena lookup.
struct PileState {
    piles: Vec<usize>,
    matches: Vec<Match>,
}

impl PileState {
    fn new() -> Self {
        Self {
            piles: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// Feed one match: left index `left` matched right position `right`
    fn push(&mut self, left: usize, right: usize) {
        let matches = &self.matches;
        let pos = self
            .piles
            .partition_point(|&node| matches[node].right < right);
        let prev = (pos > 0).then(|| self.piles[pos - 1]);

        self.matches.push(Match { left, right, prev });
        let node = self.matches.len() - 1;
        if pos == self.piles.len() {
            self.piles.push(node);
        } else {
            // Tighter ending position for a chain of this length
            self.piles[pos] = node;
        }
    }

    /// Walk the chain from the deepest pile top, yielding the matched
    /// (left, right) index pairs in ascending order
    fn into_pairs(self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::with_capacity(self.piles.len());
        let mut cursor = self.piles.last().copied();
        while let Some(node) = cursor {
            let matched = &self.matches[node];
            pairs.push((matched.left, matched.right));
            cursor = matched.prev;
        }
        pairs.reverse();
        pairs
    }
}

/// Compute the LCS as matched (left index, right index) pairs.
///
/// Both index columns are strictly increasing, so the pairs identify
/// exactly which occurrence matched on each side. This is the form the
/// diff builder consumes; [`lcs`] projects it down to values.
pub fn lcs_pairs<T: Eq + Hash>(left: &[T], right: &[T]) -> Vec<(usize, usize)> {
    let index = PositionIndex::build(right);
    let mut state = PileState::new();

    for (li, line) in left.iter().enumerate() {
        let Some(positions) = index.get(line) else {
            // Lines absent from the other side cannot be common
            continue;
        };
        // Descending order: two occurrences of the same left line must
        // never land in one chain, which ascending feeding would allow
        for &rj in positions.iter().rev() {
            state.push(li, rj);
        }
    }

    state.into_pairs()
}

/// Compute the LCS as a sequence of line values.
///
/// # Examples
///
/// ```
/// use hunt_diff::lcs;
///
/// assert_eq!(lcs(&[1, 2, 3, 4], &[2, 4, 5]), vec![2, 4]);
/// assert_eq!(lcs::<u32>(&[], &[1]), vec![]);
/// ```
pub fn lcs<T: Eq + Hash + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    lcs_pairs(left, right)
        .into_iter()
        .map(|(_, rj)| right[rj].clone())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn common_subsequence_of_disjoint_inputs_is_empty() {
        let left = ["a", "b", "c"];
        let right = ["x", "y", "z"];
        assert_eq!(lcs(&left, &right), Vec::<&str>::new());
    }

    #[test]
    fn identical_inputs_match_fully() {
        let lines = ["one", "two", "three"];
        assert_eq!(lcs(&lines, &lines), vec!["one", "two", "three"]);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(lcs::<&str>(&[], &[]), Vec::<&str>::new());
        assert_eq!(lcs(&["a"], &[]), Vec::<&str>::new());
        assert_eq!(lcs(&[], &["a"]), Vec::<&str>::new());
    }

    #[test]
    fn interleaved_match() {
        let left = ["a", "b", "c", "d", "e"];
        let right = ["x", "b", "y", "d", "z"];
        assert_eq!(lcs(&left, &right), vec!["b", "d"]);
    }

    #[test]
    fn left_line_matches_at_most_one_right_occurrence() {
        // A single "a" on the left must not claim both right "a"s
        assert_eq!(lcs(&["a"], &["a", "a"]), vec!["a"]);
    }

    #[test]
    fn repeated_lines_match_pairwise() {
        assert_eq!(lcs(&["a", "a"], &["a", "a", "a"]), vec!["a", "a"]);
    }

    #[test]
    fn pairs_are_strictly_increasing_on_both_sides() {
        let left = ["a", "b", "a", "b"];
        let right = ["b", "a", "b", "a"];
        let pairs = lcs_pairs(&left, &right);
        for window in pairs.windows(2) {
            assert!(window[0].0 < window[1].0);
            assert!(window[0].1 < window[1].1);
        }
        for &(li, rj) in &pairs {
            assert_eq!(left[li], right[rj]);
        }
    }

    #[test]
    fn crossing_order_picks_longest_side() {
        // "b" then "d" survive; matching "c" first would cap the chain at 2
        let left = ["b", "c", "d"];
        let right = ["c", "b", "d"];
        assert_eq!(lcs(&left, &right).len(), 2);
    }
}
