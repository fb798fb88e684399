//! Chromatograms read from capillary-instrument trace files: raw per-channel
//! instrument signal alongside the analyzed signal, plus called and
//! user-edited base calls.

use bincode::{Decode, Encode};

use crate::{
    chromatogram::{
        build_analyzed_traces, check_peak_counts, trace_set_length, trace_set_max_intensity,
        Chromatogram, NUM_ANALYZED_TRACES,
    },
    error::{Result, TraceError},
    source::CapillaryTraceSource,
    trace::{ChannelId, Trace, FIFTH_DYE_LABEL},
};

/// A capillary-format chromatogram. Read-only after construction, except for
/// the per-trace point write reachable through the `_mut` accessors.
#[derive(Clone, Debug, Default, Encode, Decode)]
pub struct CapillaryChromatogram {
    analyzed: Vec<Trace>,
    /// 4 raw traces, or 5 when the source carries the extra dye.
    raw: Vec<Trace>,
    has_extra_dye: bool,
    /// Cached at construction -- unlike the analyzed aggregates, a later point
    /// write to a raw trace does not update this.
    raw_trace_length: usize,
    /// Cached at construction, same policy as `raw_trace_length`.
    raw_max_intensity: i32,
    called_bases: String,
    edited_bases: String,
    called_peak_locations: Vec<u32>,
    edited_peak_locations: Vec<u32>,
}

impl CapillaryChromatogram {
    /// Assemble a chromatogram from a fully decoded capillary source file.
    /// Base strings are upper-cased; peak-location arrays are stored verbatim.
    pub fn from_source(source: &impl CapillaryTraceSource) -> Self {
        let called_bases = source.called_bases().to_uppercase();
        let edited_bases = source.edited_bases().to_uppercase();

        check_peak_counts(
            "Called",
            &called_bases,
            source.called_peak_locations().len(),
        );
        check_peak_counts(
            "Edited",
            &edited_bases,
            source.edited_peak_locations().len(),
        );

        let analyzed = build_analyzed_traces(source);

        let extra_dye = source.extra_dye_data();
        let has_extra_dye = !extra_dye.is_empty();

        let mut raw: Vec<_> = (1..=NUM_ANALYZED_TRACES)
            .map(|i| Trace::from_label(source.base_for_index(i), source.raw_data(i).to_vec()))
            .collect();

        if has_extra_dye {
            raw.push(Trace::new(
                FIFTH_DYE_LABEL.to_owned(),
                ChannelId::FifthDye,
                extra_dye.to_vec(),
            ));
        }

        let raw_trace_length = trace_set_length(&raw);
        let raw_max_intensity = trace_set_max_intensity(&raw);

        Self {
            analyzed,
            raw,
            has_extra_dye,
            raw_trace_length,
            raw_max_intensity,
            called_bases,
            edited_bases,
            called_peak_locations: source.called_peak_locations().to_vec(),
            edited_peak_locations: source.edited_peak_locations().to_vec(),
        }
    }

    /// Mutable analyzed-trace access, for the point write.
    pub fn analyzed_trace_mut(&mut self, index: usize) -> Result<&mut Trace> {
        let count = self.analyzed.len();

        self.analyzed
            .get_mut(index)
            .ok_or(TraceError::AnalyzedTraceOutOfRange { index, count })
    }

    /// 4, or 5 when the extra dye is present.
    pub fn raw_trace_count(&self) -> usize {
        self.raw.len()
    }

    /// Bounds are checked against the raw-trace count itself, never against an
    /// analyzed-trace figure.
    pub fn raw_trace(&self, index: usize) -> Result<&Trace> {
        self.raw.get(index).ok_or(TraceError::RawTraceOutOfRange {
            index,
            count: self.raw.len(),
        })
    }

    pub fn raw_trace_mut(&mut self, index: usize) -> Result<&mut Trace> {
        let count = self.raw.len();

        self.raw
            .get_mut(index)
            .ok_or(TraceError::RawTraceOutOfRange { index, count })
    }

    /// True iff the source supplied non-empty extra-dye samples.
    pub fn has_extra_dye(&self) -> bool {
        self.has_extra_dye
    }

    /// Max sample count among the raw traces, computed once at construction.
    pub fn raw_trace_length(&self) -> usize {
        self.raw_trace_length
    }

    /// Max intensity among the raw traces, computed once at construction.
    pub fn raw_max_intensity(&self) -> i32 {
        self.raw_max_intensity
    }

    pub fn called_bases(&self) -> &str {
        &self.called_bases
    }

    pub fn edited_bases(&self) -> &str {
        &self.edited_bases
    }

    pub fn called_peak_locations(&self) -> &[u32] {
        &self.called_peak_locations
    }

    pub fn edited_peak_locations(&self) -> &[u32] {
        &self.edited_peak_locations
    }
}

impl Chromatogram for CapillaryChromatogram {
    fn analyzed_traces(&self) -> &[Trace] {
        &self.analyzed
    }
}
