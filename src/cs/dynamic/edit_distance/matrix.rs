use std::ops::Index;

/// Prefix-to-prefix edit distances between two character sequences.
///
/// Cell `(i, j)` holds the minimum number of single-character insertions,
/// deletions and substitutions needed to turn the first `i` characters of
/// the source into the first `j` characters of the target. The grid has
/// `source.len() + 1` rows and `target.len() + 1` columns and is stored
/// row-major in one buffer.
///
/// # Examples
///
/// ```
/// use editdistance::CostMatrix;
///
/// let a: Vec<char> = "cat".chars().collect();
/// let b: Vec<char> = "bat".chars().collect();
/// let matrix = CostMatrix::build(&a, &b);
///
/// assert_eq!(matrix.rows(), 4);
/// assert_eq!(matrix.cols(), 4);
/// assert_eq!(matrix[(3, 3)], 1);
/// assert_eq!(matrix.row(0), Some(&[0, 1, 2, 3][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    data: Vec<usize>,
}

impl CostMatrix {
    /// Fills the matrix for `a` against `b`, row by row.
    pub fn build(a: &[char], b: &[char]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut data = vec![0_usize; rows * cols];

        // Row 0 and column 0: converting to or from the empty prefix.
        for (j, cell) in data.iter_mut().take(cols).enumerate() {
            *cell = j;
        }
        for i in 1..rows {
            data[i * cols] = i;
        }

        for i in 1..rows {
            let above = (i - 1) * cols;
            let here = i * cols;
            for j in 1..cols {
                let diagonal = data[above + j - 1];
                data[here + j] = if a[i - 1] == b[j - 1] {
                    diagonal
                } else {
                    let deletion = data[above + j];
                    let insertion = data[here + j - 1];
                    1 + deletion.min(insertion).min(diagonal)
                };
            }
        }

        Self { rows, cols, data }
    }

    /// Number of rows, `source.len() + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `target.len() + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns cell `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Returns one row of the grid.
    pub fn row(&self, row: usize) -> Option<&[usize]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// The edit distance between the full sequences, the bottom-right cell.
    pub fn distance(&self) -> usize {
        // rows and cols are both at least 1, so the buffer is never empty.
        self.data[self.data.len() - 1]
    }

    /// The raw row-major buffer.
    pub fn as_slice(&self) -> &[usize] {
        &self.data
    }

    /// Copies the grid out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.data.chunks(self.cols).map(<[usize]>::to_vec).collect()
    }

    /// Iterates `(row, col, value)` in the order the cells were filled.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(index, &value)| (index / cols, index % cols, value))
    }

    /// Whether `(row, col)` lies on the initialized border rather than
    /// being derived from the recurrence.
    pub fn is_base_case(row: usize, col: usize) -> bool {
        row == 0 || col == 0
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = usize;

    /// # Panics
    ///
    /// Panics if `row >= rows()` or `col >= cols()`.
    fn index(&self, (row, col): (usize, usize)) -> &usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) is outside a {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}
