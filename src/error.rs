use std::path::PathBuf;

use thiserror::Error;

/// Failure to read a learning-path document.
///
/// The layout engine itself never fails; only the document boundary does.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input is neither JSON nor JSON5: {0}")]
    Syntax(String),
    #[error("unexpected document shape: {0}")]
    Shape(#[source] serde_json::Error),
    #[error("expected a JSON object at the document root, found {0}")]
    NotAnObject(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("`{field}` must be a finite, non-negative number (got {value})")]
    InvalidSpacing { field: &'static str, value: f64 },
    #[error("minViewportHeight ({min}) exceeds maxViewportHeight ({max})")]
    ViewportRange { min: u32, max: u32 },
}
