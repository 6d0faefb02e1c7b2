//! Run-length compaction of edit scripts.

use super::block::{Block, Payload};
use super::Script;

/// Collapse a script into its run-length form.
///
/// Adjacent equal blocks merge into a single `Equal(Count)`, adjacent
/// deletes into a single `Delete(Count)`, and adjacent inserts concatenate
/// their lines (insert content is not recoverable from the old sequence,
/// so it stays). Merging is maximal: no two consecutive blocks of the
/// result share a kind, and running it again is a no-op. Block order is
/// preserved.
///
/// The count form only replays correctly against the original old
/// sequence, via [`patch`](crate::patch).
///
/// # Examples
///
/// ```
/// use hunt_diff::{diff, optimize, Block, Payload};
///
/// let script = diff(&["a", "b", "c"], &["a", "b", "x"]);
/// let compact = optimize(&script);
/// assert_eq!(compact.blocks[0], Block::Equal(Payload::Count(2)));
/// ```
pub fn optimize<T: Clone>(script: &Script<T>) -> Script<T> {
    let mut blocks: Vec<Block<T>> = Vec::new();

    for block in &script.blocks {
        let merged = match (blocks.last_mut(), block) {
            (Some(Block::Equal(acc)), Block::Equal(payload)) => {
                *acc = Payload::Count(acc.len() + payload.len());
                true
            }
            (Some(Block::Delete(acc)), Block::Delete(payload)) => {
                *acc = Payload::Count(acc.len() + payload.len());
                true
            }
            (Some(Block::Insert(acc)), Block::Insert(lines)) => {
                acc.extend(lines.iter().cloned());
                true
            }
            _ => false,
        };

        if !merged {
            blocks.push(match block {
                Block::Equal(payload) => Block::Equal(Payload::Count(payload.len())),
                Block::Delete(payload) => Block::Delete(Payload::Count(payload.len())),
                Block::Insert(lines) => Block::Insert(lines.clone()),
            });
        }
    }

    Script::new(blocks)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn eq_lines(lines: &[&'static str]) -> Block<&'static str> {
        Block::Equal(Payload::Lines(lines.to_vec()))
    }

    #[test]
    fn adjacent_equal_runs_collapse_to_counts() {
        let script = Script::new(vec![eq_lines(&["a"]), eq_lines(&["b"]), eq_lines(&["c"])]);
        let compact = optimize(&script);
        assert_eq!(compact.blocks, vec![Block::Equal(Payload::Count(3))]);
    }

    #[test]
    fn adjacent_inserts_concatenate_content() {
        let script = Script::new(vec![
            Block::Insert(vec!["x"]),
            Block::Insert(vec!["y", "z"]),
        ]);
        let compact = optimize(&script);
        assert_eq!(compact.blocks, vec![Block::Insert(vec!["x", "y", "z"])]);
    }

    #[test]
    fn differing_kinds_stay_separate_in_order() {
        let script = Script::new(vec![
            eq_lines(&["a"]),
            Block::Delete(Payload::Lines(vec!["b"])),
            Block::Insert(vec!["c"]),
            eq_lines(&["d"]),
        ]);
        let compact = optimize(&script);
        assert_eq!(
            compact.blocks,
            vec![
                Block::Equal(Payload::Count(1)),
                Block::Delete(Payload::Count(1)),
                Block::Insert(vec!["c"]),
                Block::Equal(Payload::Count(1)),
            ]
        );
    }

    #[test]
    fn optimize_is_idempotent() {
        let script = Script::new(vec![
            eq_lines(&["a"]),
            eq_lines(&["b"]),
            Block::Delete(Payload::Lines(vec!["c", "d"])),
            Block::Insert(vec!["e"]),
            Block::Insert(vec!["f"]),
        ]);
        let once = optimize(&script);
        let twice = optimize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_script_stays_empty() {
        let script: Script<&str> = Script::new(vec![]);
        assert!(optimize(&script).blocks.is_empty());
    }

    #[test]
    fn no_adjacent_same_kind_after_optimizing() {
        let script = Script::new(vec![
            Block::Delete(Payload::Lines(vec!["a"])),
            Block::Delete(Payload::Lines(vec!["b"])),
            eq_lines(&["c"]),
            eq_lines(&["d"]),
            Block::Delete(Payload::Lines(vec!["e"])),
        ]);
        let compact = optimize(&script);
        for window in compact.blocks.windows(2) {
            assert_ne!(window[0].kind(), window[1].kind());
        }
    }
}
