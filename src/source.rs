//! The boundary to the (out-of-scope) source-file decoders: already-decoded
//! fields from a trace file, one contract per instrument format. Byte-level
//! parsing of the formats lives behind these traits.

use bincode::{Decode, Encode};

/// Which of the two source formats a decoded file came from.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Encode, Decode)]
pub enum TraceFileKind {
    /// Capillary-instrument file: raw and analyzed signal, called and
    /// user-edited base calls.
    Capillary,
    /// Standard/compressed trace file: final base-called signal only.
    Standard,
}

/// Decoded fields common to both formats.
///
/// Per-channel arrays are addressed by base index 1..=4, mapped to base
/// labels via `base_for_index`. Passing an index outside 1..=4 violates the
/// contract and implementations are free to panic.
pub trait StandardTraceSource {
    fn kind(&self) -> TraceFileKind;

    fn called_bases(&self) -> &str;

    fn called_peak_locations(&self) -> &[u32];

    /// Post-processing sample array for one base channel.
    fn analyzed_data(&self, base_index: usize) -> &[i32];

    /// Channel label for a base index, e.g. 1 -> "A".
    fn base_for_index(&self, base_index: usize) -> &str;
}

/// Additional decoded fields only the capillary format carries.
pub trait CapillaryTraceSource: StandardTraceSource {
    fn edited_bases(&self) -> &str;

    fn edited_peak_locations(&self) -> &[u32];

    /// Pre-processing instrument sample array for one base channel.
    fn raw_data(&self, base_index: usize) -> &[i32];

    /// Raw samples for the optional fifth dye; empty when the instrument
    /// recorded none.
    fn extra_dye_data(&self) -> &[i32];
}
