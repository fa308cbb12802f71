use std::fmt;

use crate::error::{Error, Result};

/// The four elementary steps of an edit trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Both characters are equal; no cost.
    Match,
    /// Replace a source character with a target character.
    Substitute,
    /// Drop a source character.
    Delete,
    /// Emit a target character.
    Insert,
}

impl OperationKind {
    /// Tie-break order among optimal moves: when several apply at a cell,
    /// the earliest kind in this list wins. Backtracking hard-codes its
    /// branches in this order; this constant records it for callers.
    pub const PRIORITY: [OperationKind; 4] = [
        OperationKind::Match,
        OperationKind::Substitute,
        OperationKind::Delete,
        OperationKind::Insert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Match => "match",
            OperationKind::Substitute => "substitute",
            OperationKind::Delete => "delete",
            OperationKind::Insert => "insert",
        }
    }

    /// Whether this kind costs one edit.
    pub fn is_edit(&self) -> bool {
        !matches!(self, OperationKind::Match)
    }

    /// How far this move advances through `(source, target)`.
    pub fn advance(&self) -> (usize, usize) {
        match self {
            OperationKind::Match | OperationKind::Substitute => (1, 1),
            OperationKind::Delete => (1, 0),
            OperationKind::Insert => (0, 1),
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of an edit trace.
///
/// `position` is a zero-based `(i, j)` pair of offsets into the source and
/// target sequences:
/// - match and substitute: both characters consumed, `(i, j)` are their offsets
/// - delete: `i` is the dropped source character, `j` the target offset it sits before
/// - insert: `j` is the emitted target character, `i` the source offset it goes before
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// 1-based index in transformation order.
    pub step: usize,
    pub kind: OperationKind,
    pub position: (usize, usize),
    /// The source character involved, if any.
    pub source: Option<char>,
    /// The target character involved, if any.
    pub target: Option<char>,
    pub description: String,
}

impl Operation {
    pub(crate) fn matched(position: (usize, usize), ch: char) -> Self {
        Self {
            step: 0,
            kind: OperationKind::Match,
            position,
            source: Some(ch),
            target: Some(ch),
            description: format!("Match '{}' at position {}", ch, position.0),
        }
    }

    pub(crate) fn substitute(position: (usize, usize), from: char, to: char) -> Self {
        Self {
            step: 0,
            kind: OperationKind::Substitute,
            position,
            source: Some(from),
            target: Some(to),
            description: format!(
                "Substitute '{}' with '{}' at position {}",
                from, to, position.0
            ),
        }
    }

    pub(crate) fn delete(position: (usize, usize), ch: char) -> Self {
        Self {
            step: 0,
            kind: OperationKind::Delete,
            position,
            source: Some(ch),
            target: None,
            description: format!("Delete '{}' at position {}", ch, position.0),
        }
    }

    pub(crate) fn insert(position: (usize, usize), ch: char) -> Self {
        Self {
            step: 0,
            kind: OperationKind::Insert,
            position,
            source: None,
            target: Some(ch),
            description: format!("Insert '{}' at position {}", ch, position.0),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.step, self.description)
    }
}

/// Per-kind operation counts for a trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationSummary {
    pub matches: usize,
    pub substitutions: usize,
    pub deletions: usize,
    pub insertions: usize,
}

impl OperationSummary {
    pub fn from_operations(operations: &[Operation]) -> Self {
        let mut summary = Self::default();
        for op in operations {
            match op.kind {
                OperationKind::Match => summary.matches += 1,
                OperationKind::Substitute => summary.substitutions += 1,
                OperationKind::Delete => summary.deletions += 1,
                OperationKind::Insert => summary.insertions += 1,
            }
        }
        summary
    }

    /// Number of costed operations. Equals the distance for an optimal trace.
    pub fn edits(&self) -> usize {
        self.substitutions + self.deletions + self.insertions
    }

    /// True when the trace needs no edits at all.
    pub fn is_identical(&self) -> bool {
        self.edits() == 0
    }
}

/// Replays `operations` in order against `source` and returns the
/// transformed sequence.
///
/// Each operation must sit at the current source offset, and matches must
/// name the character actually found there. The trace has to consume the
/// whole source.
///
/// # Examples
///
/// ```
/// use editdistance::{apply_operations, edit_distance};
///
/// let result = edit_distance("flaw", "lawn");
/// let a: Vec<char> = "flaw".chars().collect();
/// let b: String = apply_operations(&a, &result.operations).unwrap().into_iter().collect();
/// assert_eq!(b, "lawn");
/// ```
pub fn apply_operations(source: &[char], operations: &[Operation]) -> Result<Vec<char>> {
    let mut output = Vec::with_capacity(source.len() + operations.len());
    let mut cursor = 0;

    for op in operations {
        let mismatch = || Error::TraceMismatch { step: op.step };
        if op.position.0 != cursor {
            return Err(mismatch());
        }

        let (consumes, _) = op.kind.advance();
        // Every consuming operation must name the source character it consumes.
        let current = if consumes == 1 {
            let current = source.get(cursor).copied().ok_or_else(mismatch)?;
            if op.source != Some(current) {
                return Err(mismatch());
            }
            Some(current)
        } else {
            None
        };

        match op.kind {
            OperationKind::Match => output.extend(current),
            OperationKind::Substitute | OperationKind::Insert => {
                output.push(op.target.ok_or_else(mismatch)?);
            }
            OperationKind::Delete => {}
        }
        cursor += consumes;
    }

    if cursor != source.len() {
        return Err(Error::IncompleteTrace {
            consumed: cursor,
            len: source.len(),
        });
    }

    Ok(output)
}
