// Fri Aug 28 2026 - Alex

use thiserror::Error;

/// The external frontend could not produce a usable translation unit.
/// Recoverable at the request level; never aborts the process.
#[derive(Error, Debug)]
pub enum FrontendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Malformed translation unit: {0}")]
    MalformedUnit(String),
}
