//! Data model for DNA-sequencer trace data ("chromatograms"), covering the two
//! instrument file formats: capillary files carrying raw instrument signal
//! plus edited base calls, and standard/compressed files carrying only the
//! final base-called signal. Both variants are consumed through the single
//! [`Chromatogram`] contract by downstream viewing and analysis tooling.
//!
//! Byte-level parsing of the source formats is out of scope here; a
//! chromatogram is assembled from the already-decoded fields exposed by the
//! [`source`] traits.

pub mod capillary;
pub mod chromatogram;
pub mod error;
pub mod source;
pub mod standard;
pub mod trace;

pub use capillary::CapillaryChromatogram;
pub use chromatogram::{
    trace_set_length, trace_set_max_intensity, Chromatogram, NUM_ANALYZED_TRACES,
};
pub use error::{Result, TraceError};
pub use source::{CapillaryTraceSource, StandardTraceSource, TraceFileKind};
pub use standard::StandardChromatogram;
pub use trace::{ChannelId, Trace, FIFTH_DYE_LABEL};

pub type Color = (u8, u8, u8); // RGB
