use thiserror::Error;

use crate::source::FetchError;

/// Error type that captures report-generation failures.
///
/// Degenerate computations (empty record sets, zero denominators) and
/// malformed records are not errors; assemblers resolve those to defined
/// defaults and only the upstream fetch can fail a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
