//! Reference table errors

use thiserror::Error;

/// Errors raised while building the ISO 639 lookup tables
///
/// The tables are embedded in the binary, so any of these indicates a
/// packaging defect rather than a runtime condition. Callers should treat
/// construction failure as fatal.
#[derive(Debug, Error)]
pub enum TableError {
    /// A table line could not be split into `key=value`
    #[error("malformed table entry at line {line}: {content:?}")]
    MalformedEntry { line: usize, content: String },

    /// A table parsed to zero entries
    #[error("reference table {name} is empty")]
    Empty { name: &'static str },
}
