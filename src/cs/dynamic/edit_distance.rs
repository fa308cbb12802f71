//! Levenshtein edit distance with a full cost matrix and an edit trace.
//!
//! [`compute`] fills the `(m + 1) x (n + 1)` cost matrix for two character
//! sequences, reads the distance from its last cell, and backtracks to one
//! minimal sequence of match, substitute, delete and insert steps.
//!
//! When several optimal moves exist at a cell, backtracking always prefers
//! them in the order of [`OperationKind::PRIORITY`]:
//! match, then substitute, then delete, then insert. Two runs over the same
//! inputs always produce the same trace.
//!
//! [`levenshtein_distance`] computes only the distance with two rolling rows,
//! for callers that do not need the matrix or the trace.

mod backtrack;
mod limits;
mod matrix;
mod operation;

use std::time::{Duration, Instant};

use log::debug;

use crate::error::Result;

pub use limits::{InputLimits, InputSide, DEFAULT_MAX_LEN};
pub use matrix::CostMatrix;
pub use operation::{apply_operations, Operation, OperationKind, OperationSummary};

/// Everything produced by one run of the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDistanceResult {
    /// Minimum number of single-character edits, `matrix[(m, n)]`.
    pub distance: usize,
    /// The full cost matrix.
    pub matrix: CostMatrix,
    /// One optimal trace, in transformation order.
    pub operations: Vec<Operation>,
    /// Time complexity for these input sizes, e.g. `O(3 × 4) = O(12)`.
    pub time_complexity: String,
    /// Space complexity for these input sizes.
    pub space_complexity: String,
    /// Wall time spent building the matrix and backtracking.
    pub elapsed: Duration,
}

impl EditDistanceResult {
    /// Counts of each operation kind in the trace.
    pub fn summary(&self) -> OperationSummary {
        OperationSummary::from_operations(&self.operations)
    }

    /// Matrix cells visited by the trace, from `(0, 0)` to `(m, n)`.
    pub fn path(&self) -> Vec<(usize, usize)> {
        let mut cell = (0, 0);
        let mut path = Vec::with_capacity(self.operations.len() + 1);
        path.push(cell);
        for op in &self.operations {
            let (di, dj) = op.kind.advance();
            cell = (cell.0 + di, cell.1 + dj);
            path.push(cell);
        }
        path
    }

    /// Replays the trace against `source`. See [`apply_operations`].
    pub fn apply(&self, source: &[char]) -> Result<Vec<char>> {
        apply_operations(source, &self.operations)
    }

    /// Rebuilds the source sequence from the trace.
    pub fn source_chars(&self) -> Vec<char> {
        self.operations.iter().filter_map(|op| op.source).collect()
    }

    /// Rebuilds the target sequence from the trace.
    pub fn target_chars(&self) -> Vec<char> {
        self.operations.iter().filter_map(|op| op.target).collect()
    }

    /// Elapsed time in fractional milliseconds.
    pub fn execution_time_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Computes the edit distance, cost matrix and edit trace for `a` against `b`.
///
/// Either input may be empty. This never fails; apply any length policy
/// before calling, or use [`compute_checked`].
///
/// # Examples
///
/// ```
/// use editdistance::{compute, OperationKind};
///
/// let a: Vec<char> = "cat".chars().collect();
/// let b: Vec<char> = "bat".chars().collect();
/// let result = compute(&a, &b);
///
/// assert_eq!(result.distance, 1);
/// assert_eq!(result.operations[0].kind, OperationKind::Substitute);
/// assert_eq!(result.operations[0].description, "Substitute 'c' with 'b' at position 0");
/// assert_eq!(result.operations[1].kind, OperationKind::Match);
/// ```
pub fn compute(a: &[char], b: &[char]) -> EditDistanceResult {
    let start = Instant::now();

    let matrix = CostMatrix::build(a, b);
    let operations = backtrack::backtrack(a, b, &matrix);

    let elapsed = start.elapsed();
    let distance = matrix.distance();
    let complexity = complexity_annotation(a.len(), b.len());

    debug!(
        "edit distance {}x{}: distance={} operations={} elapsed={:?}",
        a.len(),
        b.len(),
        distance,
        operations.len(),
        elapsed
    );

    EditDistanceResult {
        distance,
        matrix,
        operations,
        time_complexity: complexity.clone(),
        space_complexity: complexity,
        elapsed,
    }
}

/// Same as [`compute`], taking string slices.
///
/// # Examples
///
/// ```
/// use editdistance::edit_distance;
///
/// let result = edit_distance("kitten", "sitting");
/// assert_eq!(result.distance, 3);
/// assert_eq!(result.time_complexity, "O(6 × 7) = O(42)");
/// ```
pub fn edit_distance(a: &str, b: &str) -> EditDistanceResult {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    compute(&a, &b)
}

/// Checks `a` and `b` against `limits`, then runs [`compute`].
///
/// # Errors
///
/// - [`Error::EmptyInputs`](crate::Error::EmptyInputs) when both inputs are
///   empty and the limits refuse that.
/// - [`Error::InputTooLong`](crate::Error::InputTooLong) when an input is
///   longer than `limits.max_len` characters.
///
/// # Examples
///
/// ```
/// use editdistance::{compute_checked, Error, InputLimits};
///
/// let limits = InputLimits::with_max_len(5);
/// assert_eq!(compute_checked("abc", "abd", &limits).unwrap().distance, 1);
/// assert!(matches!(
///     compute_checked("abcdef", "abc", &limits),
///     Err(Error::InputTooLong { len: 6, max: 5, .. })
/// ));
/// ```
pub fn compute_checked(a: &str, b: &str, limits: &InputLimits) -> Result<EditDistanceResult> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    limits.check(&a, &b)?;
    Ok(compute(&a, &b))
}

/// Computes only the Levenshtein distance between two string slices.
///
/// Keeps two rows of the matrix at a time, so memory is linear in the
/// length of `b`. Agrees with `compute(a, b).distance`.
///
/// # Examples
///
/// ```
/// use editdistance::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("", ""), 0);
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("gumbo", "gambol"), 2);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb {
                previous[j]
            } else {
                1 + previous[j + 1].min(current[j]).min(previous[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

fn complexity_annotation(m: usize, n: usize) -> String {
    format!("O({} × {}) = O({})", m, n, m * n)
}
