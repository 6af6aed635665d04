pub mod constants;
pub mod engine;
pub mod error;
pub mod matrix;

mod stopwatch;

pub use constants::NO_PATH;
pub use engine::{Strategy, execute};
pub use error::MatrixError;
pub use matrix::{DistanceMatrix, Weight, is_valid_matrix};
