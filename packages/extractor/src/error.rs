//! Error types for the extractor.

use thiserror::Error;

/// Main error type for the extractor library.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// Input HTML yielded no usable block structure.
    #[error("Failed to parse document: {0}")]
    Parse(String),

    /// A segmentation invariant was violated.
    ///
    /// This indicates a defect in the segmenter, not bad input: for any
    /// parsed node sequence the emitted sections must cover every node
    /// exactly once and be numbered contiguously from 1.
    #[error("Segmentation invariant violated: {0}")]
    InvariantViolation(String),

    /// Input exceeds the maximum processable size.
    #[error("Input of {size} bytes exceeds maximum of {max} bytes")]
    InputTooLarge { size: u64, max: u64 },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractorError>;
