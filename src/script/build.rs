//! Turn an LCS into an edit script.

use super::block::{Block, Payload};
use super::Script;

/// Build a script from the matched index pairs produced by
/// [`lcs_pairs`](crate::lcs_pairs).
///
/// Because the pairs name exact indices on both sides, each gap before a
/// match is emitted directly; no value search is involved and repeated
/// lines cannot be confused with one another.
pub(crate) fn from_pairs<T: Clone>(
    left: &[T],
    right: &[T],
    pairs: &[(usize, usize)],
) -> Script<T> {
    let mut blocks = Vec::new();
    let mut li = 0;
    let mut rj = 0;

    for &(lm, rm) in pairs {
        push_gap(&mut blocks, left, right, li..lm, rj..rm);
        blocks.push(Block::Equal(Payload::Lines(vec![right[rm].clone()])));
        li = lm + 1;
        rj = rm + 1;
    }

    push_gap(&mut blocks, left, right, li..left.len(), rj..right.len());
    Script::new(blocks)
}

/// Build a script from a precomputed LCS given as line values.
///
/// Each LCS line is located by scanning forward from the current cursor on
/// both sides. If a line cannot be found at or after the cursor (possible
/// only when the LCS was not derived from these inputs), the remainder of
/// both sequences is emitted as a delete plus an insert and the rest of
/// the LCS is ignored.
///
/// Callers holding repeated lines should prefer [`diff`](crate::diff),
/// which matches by index pair and cannot pick the wrong occurrence.
///
/// # Examples
///
/// ```
/// use hunt_diff::{build_diff, lcs, patch};
///
/// let left = vec!["a", "b", "c"];
/// let right = vec!["a", "x", "c"];
/// let common = lcs(&left, &right);
/// let script = build_diff(&left, &right, &common);
/// assert_eq!(patch(&left, &script), right);
/// ```
pub fn build_diff<T: Eq + Clone>(left: &[T], right: &[T], lcs: &[T]) -> Script<T> {
    let mut blocks = Vec::new();
    let mut li = 0;
    let mut rj = 0;

    for m in lcs {
        let found = position_at_or_after(left, li, m)
            .zip(position_at_or_after(right, rj, m));
        let Some((lm, rm)) = found else {
            break;
        };
        push_gap(&mut blocks, left, right, li..lm, rj..rm);
        blocks.push(Block::Equal(Payload::Lines(vec![m.clone()])));
        li = lm + 1;
        rj = rm + 1;
    }

    push_gap(&mut blocks, left, right, li..left.len(), rj..right.len());
    Script::new(blocks)
}

/// Emit the unmatched stretch before a match (or the tails after the last
/// one) as a delete then an insert, skipping empty blocks
fn push_gap<T: Clone>(
    blocks: &mut Vec<Block<T>>,
    left: &[T],
    right: &[T],
    deleted: std::ops::Range<usize>,
    inserted: std::ops::Range<usize>,
) {
    if !deleted.is_empty() {
        blocks.push(Block::Delete(Payload::Lines(left[deleted].to_vec())));
    }
    if !inserted.is_empty() {
        blocks.push(Block::Insert(right[inserted].to_vec()));
    }
}

/// First index of `needle` in `haystack` at or after `from`
fn position_at_or_after<T: Eq>(haystack: &[T], from: usize, needle: &T) -> Option<usize> {
    haystack
        .get(from..)?
        .iter()
        .position(|line| line == needle)
        .map(|offset| from + offset)
}
