//! Line-oriented diff and patch using the Hunt-Szymanski algorithm.
//!
//! Two sequences of lines are compared by indexing the positions of each
//! line in the right-hand sequence and running a patience-sort longest
//! increasing subsequence over those positions, so cost scales with the
//! number of matching lines rather than the product of document lengths.
//! On top of the LCS sit an edit-script builder (equal, delete, and
//! insert blocks), a run-length optimizer, and a patcher that replays a
//! script against the old sequence.
//!
//! # Examples
//!
//! ```
//! use hunt_diff::{diff_str, optimize, patch_str};
//!
//! let old = "Roses are red,\nViolets are blue,\n";
//! let new = "Roses are blue,\nViolets are blue,\n";
//!
//! let script = diff_str(old, new);
//! assert_eq!(patch_str(old, &script), new);
//!
//! // The optimized form replays identically against the original
//! assert_eq!(patch_str(old, &optimize(&script)), new);
//! ```

use error_set::error_set;
use std::hash::Hash;
use std::path::Path;

pub mod lcs;
pub mod patch;
pub mod script;

pub use lcs::{lcs, lcs_pairs};
pub use patch::{patch, patch_str};
pub use script::build::build_diff;
pub use script::optimize::optimize;
pub use script::{Block, BlockKind, Payload, Script, Stats, format_script};

error_set! {
    /// Errors from the file-level diff surface. The algorithmic core is
    /// total over well-formed inputs and exposes no error type.
    DiffToolError := {
        #[display("Failed to read {path}: {message}")]
        ReadFailed { path: String, message: String },
        #[display("Invalid UTF-8 in {path}: {message}")]
        InvalidUtf8 { path: String, message: String },
    }
}

/// Compute an edit script transforming `left` into `right`.
///
/// Matches are carried as index pairs from the LCS stage through the
/// builder, so repeated lines always resolve to the occurrence that was
/// actually matched.
///
/// # Examples
///
/// ```
/// use hunt_diff::{diff, Block, Payload};
///
/// let script = diff(
///     &["Line A", "Line B", "Line C"],
///     &["Line A", "Line B changed", "Line C"],
/// );
/// assert_eq!(
///     script.blocks,
///     vec![
///         Block::Equal(Payload::Lines(vec!["Line A"])),
///         Block::Delete(Payload::Lines(vec!["Line B"])),
///         Block::Insert(vec!["Line B changed"]),
///         Block::Equal(Payload::Lines(vec!["Line C"])),
///     ],
/// );
/// ```
pub fn diff<T: Eq + Hash + Clone>(left: &[T], right: &[T]) -> Script<T> {
    script::build::from_pairs(left, right, &lcs_pairs(left, right))
}

/// [`diff`] over raw text: both sides are split on `'\n'` into owned
/// line sequences. Replay the result with [`patch_str`].
pub fn diff_str(left: &str, right: &str) -> Script<String> {
    let left: Vec<String> = left.split('\n').map(str::to_string).collect();
    let right: Vec<String> = right.split('\n').map(str::to_string).collect();
    diff(&left, &right)
}

/// Diff two files, read as UTF-8 text.
///
/// This is the thin plumbing layer over [`diff_str`] used by the binary;
/// render the result with [`format_script`].
///
/// # Examples
/// ```no_run
/// # use hunt_diff::{diff_files, format_script};
/// let script = diff_files("old.txt".as_ref(), "new.txt".as_ref()).unwrap();
/// print!("{}", format_script(&script));
/// ```
pub fn diff_files(left: &Path, right: &Path) -> Result<Script<String>, DiffToolError> {
    Ok(diff_str(&read_text(left)?, &read_text(right)?))
}

fn read_text(path: &Path) -> Result<String, DiffToolError> {
    let bytes = std::fs::read(path).map_err(|e| DiffToolError::ReadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|e| DiffToolError::InvalidUtf8 {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
