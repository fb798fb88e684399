//! Chromatograms read from standard/compressed trace files. These carry only
//! the final base-called signal: analyzed traces, called bases, and called
//! peak locations. No raw signal, no edited calls, no extra dye.

use bincode::{Decode, Encode};

use crate::{
    chromatogram::{build_analyzed_traces, check_peak_counts, Chromatogram},
    error::{Result, TraceError},
    source::StandardTraceSource,
    trace::Trace,
};

#[derive(Clone, Debug, Default, Encode, Decode)]
pub struct StandardChromatogram {
    analyzed: Vec<Trace>,
    called_bases: String,
    called_peak_locations: Vec<u32>,
}

impl StandardChromatogram {
    /// Assemble a chromatogram from a fully decoded standard source file.
    pub fn from_source(source: &impl StandardTraceSource) -> Self {
        let called_bases = source.called_bases().to_uppercase();

        check_peak_counts(
            "Called",
            &called_bases,
            source.called_peak_locations().len(),
        );

        Self {
            analyzed: build_analyzed_traces(source),
            called_bases,
            called_peak_locations: source.called_peak_locations().to_vec(),
        }
    }

    /// Mutable analyzed-trace access, for the point write.
    pub fn analyzed_trace_mut(&mut self, index: usize) -> Result<&mut Trace> {
        let count = self.analyzed.len();

        self.analyzed
            .get_mut(index)
            .ok_or(TraceError::AnalyzedTraceOutOfRange { index, count })
    }

    pub fn called_bases(&self) -> &str {
        &self.called_bases
    }

    pub fn called_peak_locations(&self) -> &[u32] {
        &self.called_peak_locations
    }
}

impl Chromatogram for StandardChromatogram {
    fn analyzed_traces(&self) -> &[Trace] {
        &self.analyzed
    }
}
