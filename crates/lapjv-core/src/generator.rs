//! Deterministic cost matrix generator.

use std::fmt::{self, Display};
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ErrorInfo, LapError};

/// How generated matrices are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// Uniform integers in `[0, max_value)`.
    #[default]
    Random,
    /// The product matrix `c[i][j] = i * j`, whose optimum is the reversal.
    Constant,
}

impl FillMode {
    /// Lowercase label used on the command line and in configs.
    pub fn as_str(&self) -> &'static str {
        match self {
            FillMode::Random => "random",
            FillMode::Constant => "constant",
        }
    }
}

impl Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FillMode {
    type Err = LapError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(FillMode::Random),
            "constant" => Ok(FillMode::Constant),
            other => Err(LapError::Config(
                ErrorInfo::new("unknown-fill-mode", "unsupported fill mode")
                    .with_context("value", other)
                    .with_hint("expected `random` or `constant`"),
            )),
        }
    }
}

/// Parameters of a generated matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of rows and columns.
    pub size: usize,
    /// Fill strategy.
    pub fill: FillMode,
    /// Exclusive upper bound for random entries.
    pub max_value: i64,
    /// Master seed; `None` draws one from the operating system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 10,
            fill: FillMode::Random,
            max_value: 1000,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Parses a configuration, filling omitted fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, LapError> {
        serde_json::from_str(json).map_err(|err| LapError::serde("deserialize-config", &err))
    }

    /// Checks that the configuration describes a matrix that can be built.
    pub fn validate(&self) -> Result<(), LapError> {
        if self.fill == FillMode::Random && self.max_value <= 0 {
            return Err(LapError::Config(
                ErrorInfo::new("empty-value-range", "random fill needs a positive max_value")
                    .with_context("max_value", self.max_value),
            ));
        }
        Ok(())
    }
}

/// Builds square integer matrices from a [`GeneratorConfig`].
#[derive(Debug, Clone)]
pub struct MatrixGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl MatrixGenerator {
    /// Creates a generator after validating the configuration.
    pub fn new(config: GeneratorConfig) -> Result<Self, LapError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    /// Configuration the generator was built from.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Produces the next matrix. Successive calls on a seeded random generator
    /// continue the same stream.
    pub fn generate(&mut self) -> Vec<Vec<i64>> {
        let size = self.config.size;
        debug!(size, fill = %self.config.fill, "generating matrix");
        match self.config.fill {
            FillMode::Constant => (0..size)
                .map(|i| (0..size).map(|j| (i * j) as i64).collect())
                .collect(),
            FillMode::Random => {
                let max_value = self.config.max_value;
                let mut matrix = Vec::with_capacity(size);
                for _ in 0..size {
                    let row: Vec<i64> = (0..size)
                        .map(|_| self.rng.gen_range(0..max_value))
                        .collect();
                    matrix.push(row);
                }
                matrix
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_mode_parses_case_insensitively() {
        assert_eq!("Constant".parse::<FillMode>().unwrap(), FillMode::Constant);
        assert_eq!(" random ".parse::<FillMode>().unwrap(), FillMode::Random);
        let err = "diagonal".parse::<FillMode>().unwrap_err();
        assert_eq!(err.info().code, "unknown-fill-mode");
    }

    #[test]
    fn constant_fill_is_the_product_matrix() {
        let config = GeneratorConfig {
            size: 3,
            fill: FillMode::Constant,
            ..GeneratorConfig::default()
        };
        let matrix = MatrixGenerator::new(config).unwrap().generate();
        assert_eq!(matrix, vec![vec![0, 0, 0], vec![0, 1, 2], vec![0, 2, 4]]);
    }

    #[test]
    fn seeded_random_fill_repeats() {
        let config = GeneratorConfig {
            size: 6,
            max_value: 50,
            seed: Some(7),
            ..GeneratorConfig::default()
        };
        let first = MatrixGenerator::new(config.clone()).unwrap().generate();
        let second = MatrixGenerator::new(config).unwrap().generate();
        assert_eq!(first, second);
        assert!(first.iter().flatten().all(|&value| (0..50).contains(&value)));
    }

    #[test]
    fn zero_range_is_rejected() {
        let config = GeneratorConfig {
            max_value: 0,
            ..GeneratorConfig::default()
        };
        let err = MatrixGenerator::new(config).unwrap_err();
        assert!(matches!(err, LapError::Config(_)));
    }

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config = GeneratorConfig::from_json(r#"{"size": 4, "fill": "constant"}"#).unwrap();
        assert_eq!(config.size, 4);
        assert_eq!(config.fill, FillMode::Constant);
        assert_eq!(config.max_value, 1000);
        assert_eq!(config.seed, None);
    }
}
