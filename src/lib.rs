pub mod input {
    pub mod normalize;
    pub mod parse;
    pub mod validate;
}
pub mod matrix {
    pub mod determinant;
    pub mod matrix;
    pub mod rref;
}

pub mod error;
