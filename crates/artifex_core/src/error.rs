//! # Generation Error Types
//!
//! All errors that can occur while generating content.

use thiserror::Error;

/// Errors that can occur in any generation pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Invalid configuration (non-positive counts, malformed probability bands).
    ///
    /// Reported before generation starts; nothing is produced.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text could not be parsed.
    #[error("malformed configuration: {0}")]
    ConfigParse(String),

    /// Out-of-range entity reference.
    ///
    /// Correct bookkeeping never produces this; seeing it means a caller bug.
    #[error("{what} index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// The collection that was indexed.
        what: &'static str,
        /// The offending index.
        index: usize,
        /// The collection length.
        len: usize,
    },

    /// A building found no free site within the retry cap.
    ///
    /// Recovered locally: the building is skipped and generation continues.
    #[error("no free site for building slot {slot} in district {district} after {attempts} attempts")]
    PlacementExhausted {
        /// District being populated.
        district: usize,
        /// Building slot within the district.
        slot: u32,
        /// Attempts made before giving up.
        attempts: u32,
    },

    /// A pipeline stage was run before the stage it depends on.
    #[error("{pipeline}: stage requires {expected}, but pipeline is at {found}")]
    StageOutOfOrder {
        /// Pipeline name.
        pipeline: &'static str,
        /// Stage that must be complete first.
        expected: &'static str,
        /// Stage the pipeline is actually at.
        found: &'static str,
    },
}

impl GenerationError {
    /// Shorthand for an [`GenerationError::InvalidConfig`] error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Result type for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;
