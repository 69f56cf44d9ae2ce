use thiserror::Error;

/// Classified failures of the input pipeline and the numeric kernel.
///
/// Validation errors are recoverable at the prompt; the rest are reported to
/// the user as a structured message instead of crashing or propagating
/// non-finite values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("no matrix was given")]
    EmptyInput,

    #[error("the matrix must have at least one numerical entry")]
    NoNumericEntries,

    #[error("the matrix contains an invalid character: {0:?}")]
    InvalidCharacter(char),

    #[error("{0:?} is not a number")]
    NotANumber(String),

    #[error("matrix is {rows}x{cols}, not square")]
    NonSquare { rows: usize, cols: usize },

    #[error("no non-zero pivot in column {col}, matrix cannot be row-reduced")]
    SingularPivot { col: usize },
}
