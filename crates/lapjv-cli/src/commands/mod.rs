use std::error::Error;
use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Args;
use lapjv_core::{FillMode, GeneratorConfig};

use crate::prompt;

pub mod generate;
pub mod solve;

/// Matrix options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct MatrixArgs {
    /// File in which the matrix is stored.
    #[arg(short, long, global = true)]
    pub filename: Option<PathBuf>,
    /// Prompt for the generator settings on stdin.
    #[arg(short, long, global = true)]
    pub interactive: bool,
    /// Fill mode of generated matrices: `random` or `constant`.
    #[arg(short = 't', long = "type", global = true)]
    pub fill: Option<FillMode>,
    /// Number of rows and columns of generated matrices [default: 10].
    #[arg(short, long, global = true)]
    pub size: Option<usize>,
    /// Seed for random fills; omit for a fresh matrix on every run.
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// Exclusive upper bound of random entries [default: 1000].
    #[arg(long, global = true)]
    pub max_value: Option<i64>,
    /// JSON generator configuration; explicit flags override its fields.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl MatrixArgs {
    /// Whether any flag asks for a generated matrix.
    pub fn requests_generation(&self) -> bool {
        self.size.is_some() || self.fill.is_some() || self.seed.is_some() || self.config.is_some()
    }

    /// Resolves the generator configuration from the config file and flags.
    pub fn generator_config(&self) -> Result<GeneratorConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_json(&fs::read_to_string(path)?)?,
            None => GeneratorConfig::default(),
        };
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(fill) = self.fill {
            config.fill = fill;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_value) = self.max_value {
            config.max_value = max_value;
        }
        Ok(config)
    }

    /// Resolves the configuration, asking on stdin when `--interactive` is set.
    pub fn resolve_config(&self) -> Result<GeneratorConfig, Box<dyn Error>> {
        let config = self.generator_config()?;
        if !self.interactive {
            return Ok(config);
        }
        let stdin = io::stdin();
        let stderr = io::stderr();
        prompt::prompt_config(stdin.lock(), stderr.lock(), config)
    }
}
