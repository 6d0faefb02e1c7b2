pub mod block;
pub mod build;
pub mod optimize;

pub use block::{Block, BlockKind, Payload};

use std::fmt;

/// An ordered edit script transforming one line sequence into another.
///
/// Concatenating the content of all equal and delete blocks reproduces the
/// old sequence; equal and insert content reproduces the new one. Once a
/// script has been through [`optimize`](crate::optimize), equal and delete
/// blocks carry counts instead of content and the script only replays
/// against the original old sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script<T> {
    pub blocks: Vec<Block<T>>,
}

impl<T> Script<T> {
    pub fn new(blocks: Vec<Block<T>>) -> Self {
        Self { blocks }
    }

    /// An empty script, the identity under [`patch`](crate::patch)
    pub fn empty() -> Self {
        Self { blocks: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Run-length form of this script, see [`optimize`](crate::optimize)
    pub fn optimize(&self) -> Self
    where
        T: Clone,
    {
        optimize::optimize(self)
    }

    /// Line counts per block kind. Count and content payloads tally
    /// alike, so fresh and optimized scripts report the same totals.
    pub fn stats(&self) -> Stats {
        let mut stats = Stats::default();
        for block in &self.blocks {
            match block {
                Block::Equal(payload) => stats.equal += payload.len(),
                Block::Delete(payload) => stats.deleted += payload.len(),
                Block::Insert(lines) => stats.inserted += lines.len(),
            }
        }
        stats
    }
}

/// Summary of a script: how many lines are unchanged, deleted, and
/// inserted. Produced by [`Script::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub equal: usize,
    pub deleted: usize,
    pub inserted: usize,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "= {} lines, - {} lines, + {} lines",
            self.equal, self.deleted, self.inserted
        )
    }
}

impl<T: fmt::Display> fmt::Display for Script<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            write!(f, "{}", block)?;
        }
        Ok(())
    }
}

/// Format a script for human-readable display with explicit line numbers.
///
/// Each content line is prefixed with its marker and line number: `=` for
/// unchanged lines (old numbering), `-` for deletions (old numbering),
/// `+` for insertions (new numbering). Count blocks from an optimized
/// script render as a marker and line count.
///
/// Example output:
/// ```text
/// =1	Roses are red,
/// -2	Violets are blue,
/// +2	Violets are purple,
/// = 2 lines
/// ```
pub fn format_script<T: fmt::Display>(script: &Script<T>) -> String {
    let mut result = String::new();
    let mut old_line = 1usize;
    let mut new_line = 1usize;

    for block in &script.blocks {
        match block {
            Block::Equal(Payload::Lines(lines)) => {
                for line in lines {
                    result.push_str(&format!("={}\t{}\n", old_line, line));
                    old_line += 1;
                    new_line += 1;
                }
            }
            Block::Equal(Payload::Count(count)) => {
                result.push_str(&format!("= {} lines\n", count));
                old_line += count;
                new_line += count;
            }
            Block::Delete(Payload::Lines(lines)) => {
                for line in lines {
                    result.push_str(&format!("-{}\t{}\n", old_line, line));
                    old_line += 1;
                }
            }
            Block::Delete(Payload::Count(count)) => {
                result.push_str(&format!("- {} lines\n", count));
                old_line += count;
            }
            Block::Insert(lines) => {
                for line in lines {
                    result.push_str(&format!("+{}\t{}\n", new_line, line));
                    new_line += 1;
                }
            }
        }
    }

    result
}
