use itertools::Itertools;
use std::fmt;
use std::fmt::Display;

/// Dense row-major matrix of `f64` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from parsed rows. Rows shorter than the widest one are
    /// padded with zeros, as the input format documentation promises.
    pub fn from_rows(lines: Vec<Vec<f64>>) -> Self {
        let cols = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        let rows = lines.len();

        Matrix {
            rows,
            cols,
            cells: lines
                .into_iter()
                .flat_map(|l| {
                    let padding = cols - l.len();
                    l.into_iter().chain(std::iter::repeat(0.0).take(padding))
                })
                .collect(),
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    pub fn identity(n: usize) -> Matrix {
        Matrix {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { 1.0 } else { 0.0 }))
                .collect(),
        }
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.cols + col]
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    /// The submatrix obtained by deleting one row and one column.
    pub fn minor(&self, row: usize, col: usize) -> Matrix {
        Matrix {
            rows: self.rows - 1,
            cols: self.cols - 1,
            cells: (0..self.rows)
                .filter(|&r| r != row)
                .flat_map(|r| {
                    (0..self.cols)
                        .filter(move |&c| c != col)
                        .map(move |c| self.at(r, c))
                })
                .collect(),
        }
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            writeln!(f, "\t{}", row.iter().map(|x| x.to_string()).join("\t|\t"))?;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::Matrix;

    #[test]
    fn test_from_rows_pads_ragged_rows_with_zeros() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0]]);
        assert_eq!(m.rows, 2);
        assert_eq!(m.cols, 3);
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 0.0, 0.0]]);
    }

    #[test]
    fn test_identity_and_squareness() {
        let m = Matrix::identity(3);
        assert!(m.is_square());
        assert_eq!(m.at(1, 1), 1.0);
        assert_eq!(m.at(1, 2), 0.0);

        let m = Matrix::from_rows(vec![vec![1.0, 2.0]]);
        assert!(!m.is_square());
    }

    #[test]
    fn test_minor_deletes_row_and_column() {
        let m = Matrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ]);
        assert_eq!(
            m.minor(0, 1).to_rows(),
            vec![vec![4.0, 6.0], vec![7.0, 9.0]]
        );
    }

    #[test]
    fn test_swap_rows() {
        let mut m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        m.swap_rows(0, 1);
        assert_eq!(m.to_rows(), vec![vec![3.0, 4.0], vec![1.0, 2.0]]);
    }

    #[test]
    fn test_display_layout() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(m.to_string(), "\t1\t|\t2\n\t3\t|\t4\n");
    }
}
