//! JSON persistence for cost matrices and solutions.
//!
//! Matrices are stored as a row-major JSON array of arrays of numbers.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{ErrorInfo, LapError};
use crate::solution::Solution;
use crate::validate::check_rectangular;

/// Parses a matrix from a JSON string.
pub fn matrix_from_json<T: DeserializeOwned>(json: &str) -> Result<Vec<Vec<T>>, LapError> {
    let matrix: Vec<Vec<T>> =
        serde_json::from_str(json).map_err(|err| LapError::serde("deserialize-matrix", &err))?;
    check_rectangular(&matrix)?;
    Ok(matrix)
}

/// Serializes a matrix to a compact JSON string.
pub fn matrix_to_json<T: Serialize, R: AsRef<[T]>>(matrix: &[R]) -> Result<String, LapError> {
    let rows: Vec<&[T]> = matrix.iter().map(|row| row.as_ref()).collect();
    serde_json::to_string(&rows).map_err(|err| LapError::serde("serialize-matrix", &err))
}

/// Reads a matrix from any byte stream, such as stdin.
pub fn read_matrix<T: DeserializeOwned, Rd: Read>(reader: Rd) -> Result<Vec<Vec<T>>, LapError> {
    let matrix: Vec<Vec<T>> = serde_json::from_reader(reader)
        .map_err(|err| LapError::serde("deserialize-matrix", &err))?;
    check_rectangular(&matrix)?;
    Ok(matrix)
}

/// Writes a matrix as JSON followed by a newline.
pub fn write_matrix<T: Serialize, R: AsRef<[T]>, W: Write>(
    mut writer: W,
    matrix: &[R],
) -> Result<(), LapError> {
    let json = matrix_to_json(matrix)?;
    writer
        .write_all(json.as_bytes())
        .and_then(|_| writer.write_all(b"\n"))
        .and_then(|_| writer.flush())
        .map_err(|err| LapError::io("write-matrix", &err))
}

/// Loads a matrix from a JSON file.
pub fn load_matrix<T: DeserializeOwned>(path: &Path) -> Result<Vec<Vec<T>>, LapError> {
    let file = File::open(path).map_err(|err| with_path(LapError::io("open-matrix", &err), path))?;
    read_matrix(BufReader::new(file)).map_err(|err| with_path(err, path))
}

/// Saves a matrix to a JSON file, replacing any existing content.
pub fn save_matrix<T: Serialize, R: AsRef<[T]>>(path: &Path, matrix: &[R]) -> Result<(), LapError> {
    let file =
        File::create(path).map_err(|err| with_path(LapError::io("create-matrix", &err), path))?;
    write_matrix(BufWriter::new(file), matrix).map_err(|err| with_path(err, path))
}

/// Serializes a solution report to a pretty-printed JSON string.
pub fn solution_to_json<T: Serialize>(solution: &Solution<T>) -> Result<String, LapError> {
    serde_json::to_string_pretty(solution)
        .map_err(|err| LapError::serde("serialize-solution", &err))
}

fn with_path(err: LapError, path: &Path) -> LapError {
    let attach = |info: ErrorInfo| info.with_context("path", path.display());
    match err {
        LapError::Shape(info) => LapError::Shape(attach(info)),
        LapError::Domain(info) => LapError::Domain(attach(info)),
        LapError::Config(info) => LapError::Config(attach(info)),
        LapError::Io(info) => LapError::Io(attach(info)),
        LapError::Serde(info) => LapError::Serde(attach(info)),
    }
}
