use crate::error::CalcError;
use crate::matrix::matrix::Matrix;

/// A matrix whose squareness was checked at construction, so the determinant
/// never has to defend against out-of-bounds minors.
#[derive(Debug, Clone)]
pub struct SquareMatrix(Matrix);

impl TryFrom<Matrix> for SquareMatrix {
    type Error = CalcError;

    fn try_from(matrix: Matrix) -> Result<SquareMatrix, CalcError> {
        if !matrix.is_square() {
            return Err(CalcError::NonSquare {
                rows: matrix.rows,
                cols: matrix.cols,
            });
        }
        Ok(SquareMatrix(matrix))
    }
}

impl SquareMatrix {
    pub fn size(&self) -> usize {
        self.0.rows
    }

    /// Laplace cofactor expansion along the first row.
    ///
    /// O(n!), no pivot-selection heuristic; fine for the small matrices this
    /// calculator is meant for.
    pub fn determinant(&self) -> f64 {
        determinant(&self.0)
    }
}

fn determinant(matrix: &Matrix) -> f64 {
    if matrix.rows == 1 {
        return matrix.at(0, 0);
    }

    let mut det = 0.0;
    let mut sign = 1.0;

    for i in 0..matrix.cols {
        det += sign * matrix.at(0, i) * determinant(&matrix.minor(0, i));
        sign = -sign;
    }

    det
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::SquareMatrix;
    use crate::error::CalcError;
    use crate::matrix::matrix::Matrix;

    fn square(rows: Vec<Vec<f64>>) -> SquareMatrix {
        SquareMatrix::try_from(Matrix::from_rows(rows)).unwrap()
    }

    #[test]
    fn test_determinant_of_one_by_one() {
        assert_eq!(square(vec![vec![5.0]]).determinant(), 5.0);
    }

    #[test]
    fn test_determinant_of_two_by_two() {
        let m = square(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(m.determinant(), -2.0);
    }

    #[test]
    fn test_determinant_of_identity() {
        let m = SquareMatrix::try_from(Matrix::identity(3)).unwrap();
        assert_eq!(m.size(), 3);
        assert_eq!(m.determinant(), 1.0);
    }

    #[test]
    fn test_determinant_with_zero_row_is_zero() {
        let m = square(vec![
            vec![1.0, 2.0, 3.0],
            vec![0.0, 0.0, 0.0],
            vec![7.0, 8.0, 9.0],
        ]);
        assert_eq!(m.determinant(), 0.0);
    }

    #[test]
    fn test_non_square_matrix_is_rejected_at_construction() {
        let wide = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert!(matches!(
            SquareMatrix::try_from(wide),
            Err(CalcError::NonSquare { rows: 2, cols: 3 })
        ));
    }
}
