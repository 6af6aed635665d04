use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MatrixError {
    #[error("matrix must be a square grid of integers: {0}")]
    InvalidInput(String),
}
