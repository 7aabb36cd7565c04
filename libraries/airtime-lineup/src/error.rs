//! Error types for lineup operations

use thiserror::Error;

/// Lineup errors
///
/// Kept deliberately narrow: index-range misses and unresolvable lookups
/// are silent no-ops by design, so errors only surface where a caller
/// handed the engine data that cannot be interpreted at all.
#[derive(Debug, Error)]
pub enum LineupError {
    /// A saved lineup references a unique-program slot that does not exist
    #[error("Saved lineup references program index {index} out of {len}")]
    InvalidReference {
        /// Referenced position
        index: usize,
        /// Length of the unique-program list
        len: usize,
    },
}

/// Result type for lineup operations
pub type Result<T> = std::result::Result<T, LineupError>;
