//! Replay an edit script against an old sequence.

use crate::script::{Block, Script};

/// Apply `script` to `old`, producing the new sequence.
///
/// A cursor walks `old`: equal blocks copy lines from it, delete blocks
/// skip lines, insert blocks append their content without touching the
/// cursor. Whatever the script leaves unconsumed is flushed to the output
/// afterwards, which makes the empty script the identity. Count and
/// content payloads are treated alike, so both fresh and optimized
/// scripts replay.
///
/// Malformed input never fails: if `old` runs short of what an equal or
/// delete block claims, the copy or skip truncates to what is available.
/// Callers needing strict validation should check the result against an
/// expected sequence instead.
///
/// # Examples
///
/// ```
/// use hunt_diff::{diff, patch};
///
/// let old = vec!["a", "b", "c"];
/// let new = vec!["a", "x", "c"];
/// assert_eq!(patch(&old, &diff(&old, &new)), new);
/// ```
pub fn patch<T: Clone>(old: &[T], script: &Script<T>) -> Vec<T> {
    let mut output = Vec::new();
    let mut cursor = 0;

    for block in &script.blocks {
        match block {
            Block::Equal(payload) => {
                let end = (cursor + payload.len()).min(old.len());
                output.extend_from_slice(&old[cursor..end]);
                cursor = end;
            }
            Block::Delete(payload) => {
                cursor = (cursor + payload.len()).min(old.len());
            }
            Block::Insert(lines) => {
                output.extend(lines.iter().cloned());
            }
        }
    }

    output.extend_from_slice(&old[cursor..]);
    output
}

/// String form of [`patch`]: `old` is split on `'\n'`, patched, and the
/// result joined with `'\n'` again.
///
/// # Examples
///
/// ```
/// use hunt_diff::{diff_str, patch_str};
///
/// let old = "one\ntwo\nthree\n";
/// let new = "one\n2\nthree\n";
/// assert_eq!(patch_str(old, &diff_str(old, new)), new);
/// ```
pub fn patch_str(old: &str, script: &Script<String>) -> String {
    let lines: Vec<String> = old.split('\n').map(str::to_string).collect();
    patch(&lines, script).join("\n")
}
