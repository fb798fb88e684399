//! Error types for seqtrace

use thiserror::Error;

/// Result type alias for seqtrace operations
pub type Result<T> = std::result::Result<T, TraceError>;

/// Errors raised by the chromatogram data model. All of these signal a caller
/// programming error on indexed access; an offending index is reported, never
/// silently clamped.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TraceError {
    /// Sample read or write outside a trace's sample array
    #[error("sample index {index} out of range for trace of length {len}")]
    SampleOutOfRange {
        /// The requested sample index
        index: usize,
        /// Sample count of the trace
        len: usize,
    },

    /// Analyzed-trace access outside the fixed set of 4
    #[error("analyzed-trace index {index} out of range ({count} analyzed traces)")]
    AnalyzedTraceOutOfRange {
        /// The requested trace index
        index: usize,
        /// Number of analyzed traces (always 4)
        count: usize,
    },

    /// Raw-trace access outside the constructed set of 4 or 5
    #[error("raw-trace index {index} out of range ({count} raw traces)")]
    RawTraceOutOfRange {
        /// The requested trace index
        index: usize,
        /// Number of raw traces (4, or 5 with the extra dye)
        count: usize,
    },
}
