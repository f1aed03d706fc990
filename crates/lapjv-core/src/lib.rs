#![deny(missing_docs)]
//! Jonker-Volgenant solver for the dense linear assignment problem.
//!
//! [`lapjv`] finds the row to column permutation of minimum total cost for a
//! square matrix of any [`Cost`] type. The surrounding modules cover what a
//! caller needs around it: [`to_square`] pads rectangular input, [`solve`]
//! validates shape and values first, the serialization helpers persist
//! matrices as JSON and [`MatrixGenerator`] produces test inputs.

pub mod cost;
pub mod errors;
pub mod generator;
mod pad;
pub mod serialization;
mod solution;
mod solver;
pub mod validate;

pub use cost::Cost;
pub use errors::{ErrorInfo, LapError};
pub use generator::{FillMode, GeneratorConfig, MatrixGenerator};
pub use pad::{is_square, to_square};
pub use serialization::{
    load_matrix, matrix_from_json, matrix_to_json, read_matrix, save_matrix, solution_to_json,
    write_matrix,
};
pub use solution::Solution;
pub use solver::{lapjv, solve};
