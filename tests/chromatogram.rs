//! End-to-end tests driving both chromatogram variants through fixture
//! sources, the way a decoded trace file would feed them.

use seqtrace::{
    CapillaryChromatogram, CapillaryTraceSource, ChannelId, Chromatogram, StandardChromatogram,
    StandardTraceSource, TraceError, TraceFileKind, FIFTH_DYE_LABEL,
};

const BASE_LABELS: [&str; 4] = ["A", "C", "G", "T"];

/// A decoded capillary file, as the out-of-scope parser would hand it over.
struct CapillaryFixture {
    called_bases: String,
    edited_bases: String,
    called_peaks: Vec<u32>,
    edited_peaks: Vec<u32>,
    analyzed: [Vec<i32>; 4],
    raw: [Vec<i32>; 4],
    extra_dye: Vec<i32>,
}

impl CapillaryFixture {
    /// The §-independent baseline: two samples per channel, no extra dye.
    fn plain() -> Self {
        Self {
            called_bases: String::from("acgt"),
            edited_bases: String::from("acga"),
            called_peaks: vec![4, 9, 14, 19],
            edited_peaks: vec![4, 9, 14, 19],
            analyzed: [vec![10, 20], vec![11, 21], vec![12, 22], vec![13, 23]],
            raw: [vec![10, 20], vec![11, 21], vec![12, 22], vec![13, 23]],
            extra_dye: Vec::new(),
        }
    }
}

impl StandardTraceSource for CapillaryFixture {
    fn kind(&self) -> TraceFileKind {
        TraceFileKind::Capillary
    }

    fn called_bases(&self) -> &str {
        &self.called_bases
    }

    fn called_peak_locations(&self) -> &[u32] {
        &self.called_peaks
    }

    fn analyzed_data(&self, base_index: usize) -> &[i32] {
        &self.analyzed[base_index - 1]
    }

    fn base_for_index(&self, base_index: usize) -> &str {
        BASE_LABELS[base_index - 1]
    }
}

impl CapillaryTraceSource for CapillaryFixture {
    fn edited_bases(&self) -> &str {
        &self.edited_bases
    }

    fn edited_peak_locations(&self) -> &[u32] {
        &self.edited_peaks
    }

    fn raw_data(&self, base_index: usize) -> &[i32] {
        &self.raw[base_index - 1]
    }

    fn extra_dye_data(&self) -> &[i32] {
        &self.extra_dye
    }
}

/// A decoded standard/compressed file.
struct StandardFixture {
    called_bases: String,
    called_peaks: Vec<u32>,
    analyzed: [Vec<i32>; 4],
}

impl StandardTraceSource for StandardFixture {
    fn kind(&self) -> TraceFileKind {
        TraceFileKind::Standard
    }

    fn called_bases(&self) -> &str {
        &self.called_bases
    }

    fn called_peak_locations(&self) -> &[u32] {
        &self.called_peaks
    }

    fn analyzed_data(&self, base_index: usize) -> &[i32] {
        &self.analyzed[base_index - 1]
    }

    fn base_for_index(&self, base_index: usize) -> &str {
        BASE_LABELS[base_index - 1]
    }
}

#[test]
fn capillary_without_extra_dye() {
    let source = CapillaryFixture::plain();
    assert_eq!(source.kind(), TraceFileKind::Capillary);

    let chromatogram = CapillaryChromatogram::from_source(&source);

    assert_eq!(chromatogram.analyzed_trace_count(), 4);
    assert_eq!(chromatogram.length(), 2);
    assert_eq!(chromatogram.max_intensity(), 23);
    assert!(!chromatogram.has_extra_dye());
    assert_eq!(chromatogram.raw_trace_count(), 4);
    assert_eq!(chromatogram.called_bases(), "ACGT");
    assert_eq!(chromatogram.edited_bases(), "ACGA");
    assert_eq!(chromatogram.called_peak_locations(), &[4, 9, 14, 19]);
}

#[test]
fn capillary_with_extra_dye() {
    let mut source = CapillaryFixture::plain();
    source.extra_dye = vec![5, 50, 5];

    let chromatogram = CapillaryChromatogram::from_source(&source);

    assert!(chromatogram.has_extra_dye());
    assert_eq!(chromatogram.raw_trace_count(), 5);
    assert_eq!(chromatogram.raw_trace_length(), 3);
    assert_eq!(chromatogram.raw_max_intensity(), 50);

    let fifth = chromatogram.raw_trace(4).unwrap();
    assert_eq!(fifth.label, FIFTH_DYE_LABEL);
    assert_eq!(fifth.channel, ChannelId::FifthDye);
}

#[test]
fn analyzed_traces_follow_canonical_order() {
    let chromatogram = CapillaryChromatogram::from_source(&CapillaryFixture::plain());

    let channels: Vec<_> = (0..4)
        .map(|i| chromatogram.analyzed_trace(i).unwrap().channel)
        .collect();
    assert_eq!(
        channels,
        [ChannelId::A, ChannelId::C, ChannelId::G, ChannelId::T]
    );
}

#[test]
fn analyzed_trace_access_bounds() {
    let chromatogram = CapillaryChromatogram::from_source(&CapillaryFixture::plain());

    assert!(chromatogram.analyzed_trace(3).is_ok());
    assert_eq!(
        chromatogram.analyzed_trace(4),
        Err(TraceError::AnalyzedTraceOutOfRange { index: 4, count: 4 })
    );
}

#[test]
fn raw_trace_access_bounds() {
    let chromatogram = CapillaryChromatogram::from_source(&CapillaryFixture::plain());

    assert!(chromatogram.raw_trace(3).is_ok());
    // No extra dye, so index 4 is out of range even though 5 channels exist
    // in principle.
    assert_eq!(
        chromatogram.raw_trace(4),
        Err(TraceError::RawTraceOutOfRange { index: 4, count: 4 })
    );
}

#[test]
fn analyzed_aggregates_track_point_writes() {
    let mut chromatogram = CapillaryChromatogram::from_source(&CapillaryFixture::plain());
    assert_eq!(chromatogram.max_intensity(), 23);

    chromatogram
        .analyzed_trace_mut(0)
        .unwrap()
        .set_sample(1, 999)
        .unwrap();

    // Re-derived per query: the write shows up immediately.
    assert_eq!(chromatogram.max_intensity(), 999);
    assert_eq!(chromatogram.length(), 2);
}

#[test]
fn raw_aggregates_are_fixed_at_construction() {
    let mut source = CapillaryFixture::plain();
    source.extra_dye = vec![5, 50, 5];
    let mut chromatogram = CapillaryChromatogram::from_source(&source);

    chromatogram
        .raw_trace_mut(0)
        .unwrap()
        .set_sample(0, 10_000)
        .unwrap();

    // Cached once; the later write is not reflected.
    assert_eq!(chromatogram.raw_max_intensity(), 50);
    assert_eq!(chromatogram.raw_trace_length(), 3);
}

#[test]
fn standard_chromatogram_aggregates() {
    let source = StandardFixture {
        called_bases: String::from("cat"),
        called_peaks: vec![3, 8, 13],
        analyzed: [vec![1, 7, 2], vec![0, 3], vec![4], Vec::new()],
    };
    assert_eq!(source.kind(), TraceFileKind::Standard);

    let chromatogram = StandardChromatogram::from_source(&source);

    assert_eq!(chromatogram.analyzed_trace_count(), 4);
    assert_eq!(chromatogram.length(), 3);
    assert_eq!(chromatogram.max_intensity(), 7);
    assert_eq!(chromatogram.called_bases(), "CAT");
    assert_eq!(chromatogram.called_peak_locations(), &[3, 8, 13]);
}

#[test]
fn standard_aggregates_track_point_writes() {
    let source = StandardFixture {
        called_bases: String::from("g"),
        called_peaks: vec![2],
        analyzed: [vec![1, 2], vec![1, 2], vec![1, 2], vec![1, 2]],
    };
    let mut chromatogram = StandardChromatogram::from_source(&source);
    assert_eq!(chromatogram.max_intensity(), 2);

    chromatogram
        .analyzed_trace_mut(2)
        .unwrap()
        .set_sample(0, 88)
        .unwrap();

    assert_eq!(chromatogram.max_intensity(), 88);
}

#[test]
fn mismatched_peak_counts_are_tolerated() {
    // Three called bases but four peak locations; the model stores both
    // verbatim rather than rejecting the file.
    let mut source = CapillaryFixture::plain();
    source.called_bases = String::from("acg");

    let chromatogram = CapillaryChromatogram::from_source(&source);
    assert_eq!(chromatogram.called_bases(), "ACG");
    assert_eq!(chromatogram.called_peak_locations().len(), 4);
}
