//! The capability contract shared by both chromatogram variants, and the
//! aggregate statistics both derive from their analyzed traces.

use log::warn;
use strum::IntoEnumIterator;

use crate::{
    error::{Result, TraceError},
    source::StandardTraceSource,
    trace::{ChannelId, Trace},
};

/// Number of analyzed traces every chromatogram carries: one per canonical
/// base, in A, C, G, T order.
pub const NUM_ANALYZED_TRACES: usize = 4;

/// Max sample count across a set of traces; 0 for an empty set.
pub fn trace_set_length(traces: &[Trace]) -> usize {
    traces.iter().map(Trace::len).max().unwrap_or(0)
}

/// Max intensity across a set of traces; 0 for an empty set.
pub fn trace_set_max_intensity(traces: &[Trace]) -> i32 {
    traces.iter().map(Trace::max_intensity).max().unwrap_or(0)
}

/// Operations every chromatogram variant supports.
///
/// The aggregate statistics are re-derived on every call by scanning the
/// analyzed traces -- the sample arrays are the source of truth, so a point
/// write to any analyzed trace is reflected by the next query.
pub trait Chromatogram {
    /// The analyzed traces, in canonical A, C, G, T order.
    fn analyzed_traces(&self) -> &[Trace];

    fn analyzed_trace_count(&self) -> usize {
        self.analyzed_traces().len()
    }

    fn analyzed_trace(&self, index: usize) -> Result<&Trace> {
        let traces = self.analyzed_traces();

        traces
            .get(index)
            .ok_or(TraceError::AnalyzedTraceOutOfRange {
                index,
                count: traces.len(),
            })
    }

    /// Max length among the analyzed traces. Never cached.
    fn length(&self) -> usize {
        trace_set_length(self.analyzed_traces())
    }

    /// Max intensity among the analyzed traces. Never cached, like `length`.
    fn max_intensity(&self) -> i32 {
        trace_set_max_intensity(self.analyzed_traces())
    }
}

/// Build the 4 analyzed traces from a decoded source, one per base index,
/// using the source's base-label lookup for each trace's identity.
pub(crate) fn build_analyzed_traces(source: &impl StandardTraceSource) -> Vec<Trace> {
    let analyzed: Vec<_> = (1..=NUM_ANALYZED_TRACES)
        .map(|i| Trace::from_label(source.base_for_index(i), source.analyzed_data(i).to_vec()))
        .collect();

    // The canonical-order invariant: position i carries base i's channel tag.
    debug_assert!(analyzed
        .iter()
        .zip(ChannelId::iter())
        .all(|(trace, channel)| trace.channel == channel));

    analyzed
}

/// The source formats don't guarantee one peak location per called base; we
/// keep the decoded arrays verbatim and surface a mismatch in the log rather
/// than rejecting the file.
pub(crate) fn check_peak_counts(what: &str, bases: &str, num_peaks: usize) {
    if bases.len() != num_peaks {
        warn!(
            "{what}: base count ({}) != peak-location count ({num_peaks})",
            bases.len()
        );
    }
}
