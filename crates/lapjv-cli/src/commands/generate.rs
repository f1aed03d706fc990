use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use lapjv_core::{save_matrix, MatrixGenerator};
use tracing::info;

use super::MatrixArgs;

const DEFAULT_FILENAME: &str = "example.json";

#[derive(Args, Debug)]
pub struct GenerateArgs {}

pub fn run(matrix: &MatrixArgs, _args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let path = matrix
        .filename
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILENAME));
    let config = matrix.resolve_config()?;
    let mut generator = MatrixGenerator::new(config)?;
    let generated = generator.generate();
    save_matrix(&path, &generated)?;
    info!(
        path = %path.display(),
        size = generator.config().size,
        fill = %generator.config().fill,
        "matrix written"
    );
    Ok(())
}
