//! Structured error types raised at the boundaries of the solver.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`LapError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (row indices, sizes, paths).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for matrix validation, persistence and generation.
///
/// The solving routine itself never fails; these errors only surface from
/// the checks and collaborators around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum LapError {
    /// Ragged or non-square matrices.
    #[error("shape error: {0}")]
    Shape(ErrorInfo),
    /// Entries the solver cannot order, such as NaN or infinite floats.
    #[error("domain error: {0}")]
    Domain(ErrorInfo),
    /// Invalid generator or command configuration.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Filesystem and stream failures.
    #[error("io error: {0}")]
    Io(ErrorInfo),
    /// JSON encoding and decoding failures.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl LapError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            LapError::Shape(info)
            | LapError::Domain(info)
            | LapError::Config(info)
            | LapError::Io(info)
            | LapError::Serde(info) => info,
        }
    }

    pub(crate) fn io(code: &str, err: &std::io::Error) -> Self {
        LapError::Io(ErrorInfo::new(code, err.to_string()).with_context("kind", err.kind()))
    }

    pub(crate) fn serde(code: &str, err: &serde_json::Error) -> Self {
        let mut info = ErrorInfo::new(code, err.to_string());
        if err.line() > 0 {
            info = info
                .with_context("line", err.line())
                .with_context("column", err.column());
        }
        LapError::Serde(info)
    }
}
