use std::fmt;

/// Payload of an equal or delete block.
///
/// Freshly built scripts carry the actual lines; [`optimize`] collapses
/// them to a count, since the content is recoverable from the old sequence
/// when the script is replayed against it.
///
/// [`optimize`]: crate::optimize
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload<T> {
    /// The lines themselves
    Lines(Vec<T>),
    /// How many lines to copy or skip from the old-sequence cursor
    Count(usize),
}

impl<T> Payload<T> {
    /// Number of old-sequence lines this payload spans
    pub fn len(&self) -> usize {
        match self {
            Payload::Lines(lines) => lines.len(),
            Payload::Count(count) => *count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single block of an edit script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<T> {
    /// Lines present in both sequences
    Equal(Payload<T>),
    /// Lines present only in the old sequence
    Delete(Payload<T>),
    /// Lines present only in the new sequence. Always carries content,
    /// since insertions cannot be derived from the old sequence.
    Insert(Vec<T>),
}

/// Block kind without its payload, for adjacency checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Equal,
    Delete,
    Insert,
}

impl<T> Block<T> {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Equal(_) => BlockKind::Equal,
            Block::Delete(_) => BlockKind::Delete,
            Block::Insert(_) => BlockKind::Insert,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Block<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Equal(Payload::Lines(lines)) => {
                for line in lines {
                    writeln!(f, "  {}", line)?;
                }
                Ok(())
            }
            Block::Equal(Payload::Count(count)) => writeln!(f, "@@ ={} @@", count),
            Block::Delete(Payload::Lines(lines)) => {
                for line in lines {
                    writeln!(f, "- {}", line)?;
                }
                Ok(())
            }
            Block::Delete(Payload::Count(count)) => writeln!(f, "@@ -{} @@", count),
            Block::Insert(lines) => {
                for line in lines {
                    writeln!(f, "+ {}", line)?;
                }
                Ok(())
            }
        }
    }
}
