// File: crates/svgchart-core/src/error.rs
// Summary: Error type for the fallible edges (selectors, axis keys, options parsing).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: &'static str },

    #[error("unknown coordinate key '{0}', expected 'x' or 'y'")]
    UnknownCoord(String),

    #[error("markup write error: {0}")]
    Markup(String),

    #[error("options parse error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
