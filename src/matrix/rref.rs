use num_traits::Zero;

use crate::error::CalcError;
use crate::matrix::matrix::Matrix;

/// Row-reduced echelon form by Gauss-Jordan elimination.
///
/// Works on its own copy; the caller's matrix is never mutated. Each step
/// swaps in a row with a non-zero entry in the pivot column before dividing,
/// and a column with no usable pivot is reported as `SingularPivot` rather
/// than letting the division produce `inf`/`NaN`.
pub fn rref(matrix: &Matrix) -> Result<Matrix, CalcError> {
    let mut m = matrix.clone();

    for lead in 0..m.rows.min(m.cols) {
        let pivot_row = (lead..m.rows)
            .find(|&r| !m.at(r, lead).is_zero())
            .ok_or(CalcError::SingularPivot { col: lead })?;

        if pivot_row != lead {
            m.swap_rows(lead, pivot_row);
        }

        for r in 0..m.rows {
            let divisor = m.at(lead, lead);
            let multiplier = m.at(r, lead) / divisor;

            for c in 0..m.cols {
                let idx = r * m.cols + c;
                if r == lead {
                    m.cells[idx] /= divisor;
                } else {
                    let delta = multiplier * m.at(lead, c);
                    m.cells[idx] -= delta;
                }
            }
        }
    }

    // elimination leaves -0.0 behind; rewrite to the canonical zero
    for x in &mut m.cells {
        if x.is_zero() {
            *x = 0.0;
        }
    }

    Ok(m)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
