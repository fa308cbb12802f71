use log::trace;

use super::matrix::CostMatrix;
use super::operation::Operation;

/// Walks `matrix` from the bottom-right cell back to the origin and returns
/// one optimal edit trace in transformation order, with steps numbered
/// from 1.
///
/// At every cell the first applicable move wins, in the order match,
/// substitute, delete, insert. `matrix` must have been built from `a` and `b`.
pub(crate) fn backtrack(a: &[char], b: &[char], matrix: &CostMatrix) -> Vec<Operation> {
    let mut i = a.len();
    let mut j = b.len();
    let mut operations = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        let cost = matrix[(i, j)];

        let op = if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            let op = Operation::matched((i - 1, j - 1), a[i - 1]);
            i -= 1;
            j -= 1;
            op
        } else if i > 0 && j > 0 && cost == matrix[(i - 1, j - 1)] + 1 {
            let op = Operation::substitute((i - 1, j - 1), a[i - 1], b[j - 1]);
            i -= 1;
            j -= 1;
            op
        } else if i > 0 && cost == matrix[(i - 1, j)] + 1 {
            let op = Operation::delete((i - 1, j), a[i - 1]);
            i -= 1;
            op
        } else {
            // A well-formed matrix always leaves insertion as the last option.
            debug_assert!(j > 0 && cost == matrix[(i, j - 1)] + 1);
            let op = Operation::insert((i, j - 1), b[j - 1]);
            j -= 1;
            op
        };

        trace!("backtrack {} -> ({}, {}): {}", op.kind, i, j, op.description);
        operations.push(op);
    }

    operations.reverse();
    for (index, op) in operations.iter_mut().enumerate() {
        op.step = index + 1;
    }
    operations
}

#[cfg(test)]
mod tests {
    use super::super::operation::OperationKind::{self, Delete, Insert, Match, Substitute};
    use super::*;

    fn trace_of(a: &str, b: &str) -> Vec<(OperationKind, (usize, usize))> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let matrix = CostMatrix::build(&a, &b);
        backtrack(&a, &b, &matrix)
            .into_iter()
            .map(|op| (op.kind, op.position))
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(trace_of("", "").is_empty());
    }

    #[test]
    fn test_all_deletes() {
        assert_eq!(
            trace_of("abc", ""),
            vec![(Delete, (0, 0)), (Delete, (1, 0)), (Delete, (2, 0))]
        );
    }

    #[test]
    fn test_all_inserts() {
        assert_eq!(
            trace_of("", "xy"),
            vec![(Insert, (0, 0)), (Insert, (0, 1))]
        );
    }

    #[test]
    fn test_kitten_sitting() {
        assert_eq!(
            trace_of("kitten", "sitting"),
            vec![
                (Substitute, (0, 0)),
                (Match, (1, 1)),
                (Match, (2, 2)),
                (Match, (3, 3)),
                (Substitute, (4, 4)),
                (Match, (5, 5)),
                (Insert, (6, 6)),
            ]
        );
    }

    #[test]
    fn test_substitute_beats_delete() {
        // At (2, 2) substitute and delete are both optimal.
        assert_eq!(
            trace_of("ab", "ba"),
            vec![(Substitute, (0, 0)), (Substitute, (1, 1))]
        );
    }

    #[test]
    fn test_delete_beats_insert() {
        // At (3, 3) delete and insert are both optimal; substitute is not.
        assert_eq!(
            trace_of("aba", "bab"),
            vec![
                (Insert, (0, 0)),
                (Match, (0, 1)),
                (Match, (1, 2)),
                (Delete, (2, 3)),
            ]
        );
    }

    #[test]
    fn test_mixed_trace() {
        assert_eq!(
            trace_of("horse", "ros"),
            vec![
                (Substitute, (0, 0)),
                (Match, (1, 1)),
                (Delete, (2, 2)),
                (Match, (3, 2)),
                (Delete, (4, 3)),
            ]
        );
        assert_eq!(
            trace_of("sunday", "saturday"),
            vec![
                (Match, (0, 0)),
                (Insert, (1, 1)),
                (Insert, (1, 2)),
                (Match, (1, 3)),
                (Substitute, (2, 4)),
                (Match, (3, 5)),
                (Match, (4, 6)),
                (Match, (5, 7)),
            ]
        );
    }

    /// Whether `kind` is an optimal move out of cell `(i, j)`.
    fn applies(
        kind: OperationKind,
        a: &[char],
        b: &[char],
        m: &CostMatrix,
        i: usize,
        j: usize,
    ) -> bool {
        let cost = m[(i, j)];
        match kind {
            Match => i > 0 && j > 0 && a[i - 1] == b[j - 1],
            Substitute => i > 0 && j > 0 && cost == m[(i - 1, j - 1)] + 1,
            Delete => i > 0 && cost == m[(i - 1, j)] + 1,
            Insert => j > 0 && cost == m[(i, j - 1)] + 1,
        }
    }

    #[test]
    fn test_follows_priority_order() {
        let pairs = [
            ("ab", "ba"),
            ("aba", "bab"),
            ("kitten", "sitting"),
            ("sunday", "saturday"),
            ("horse", "ros"),
            ("abcdef", "azced"),
            ("", "xyz"),
            ("xyz", ""),
        ];
        for (a, b) in pairs {
            let a: Vec<char> = a.chars().collect();
            let b: Vec<char> = b.chars().collect();
            let matrix = CostMatrix::build(&a, &b);
            let ops = backtrack(&a, &b, &matrix);

            // Walk the trace backwards, the way it was produced.
            let (mut i, mut j) = (a.len(), b.len());
            for op in ops.iter().rev() {
                let expected = OperationKind::PRIORITY
                    .into_iter()
                    .find(|&kind| applies(kind, &a, &b, &matrix, i, j));
                assert_eq!(Some(op.kind), expected, "at cell ({}, {})", i, j);
                let (di, dj) = op.kind.advance();
                i -= di;
                j -= dj;
            }
            assert_eq!((i, j), (0, 0));
        }
    }

    #[test]
    fn test_steps_are_sequential() {
        let a: Vec<char> = "flaw".chars().collect();
        let b: Vec<char> = "lawn".chars().collect();
        let matrix = CostMatrix::build(&a, &b);
        let steps: Vec<usize> = backtrack(&a, &b, &matrix).iter().map(|op| op.step).collect();
        assert_eq!(steps, vec![1, 2, 3, 4, 5]);
    }
}
