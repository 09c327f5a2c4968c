//! Error types for the block analyzer.

use thiserror::Error;

/// Result type for analyzer operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Errors that can occur during block analysis.
///
/// "Not found" outcomes (no enclosing statement, no further header) are not
/// errors; they are `Option` results so callers can apply their own fallback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    /// Line index at or beyond the document's line count.
    ///
    /// Callers are responsible for clamping cursor positions before querying;
    /// an out-of-range index is reported rather than silently clamped so that
    /// caller bugs cannot select the wrong content.
    #[error("line {line} out of range (document has {line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },
}
