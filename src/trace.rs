//! The fundamental signal-channel types: one `Trace` per dye channel, plus the
//! display-channel identity each trace carries for rendering.

use bincode::{Decode, Encode};
use log::warn;
use num_enum::TryFromPrimitive;
use strum_macros::EnumIter;

use crate::{
    error::{Result, TraceError},
    Color,
};

/// Label of the optional fifth raw signal stream beyond the four bases.
pub const FIFTH_DYE_LABEL: &str = "Fifth Dye";

/// Display-channel identity, derived from a channel's label. Consumers use
/// this to pick plot colors etc; it carries no intensity data. The u8 repr
/// lets saved state store the tag compactly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Encode, Decode, TryFromPrimitive, EnumIter)]
#[repr(u8)]
pub enum ChannelId {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
    FifthDye = 4,
    Unknown = 5,
}

impl Default for ChannelId {
    fn default() -> Self {
        Self::Unknown
    }
}

impl ChannelId {
    /// Map a channel-name string to its display tag. Pure and stateless;
    /// case-insensitive over the five recognized names. Any other label yields
    /// `Unknown` -- callers log that condition, but it is never an error.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "a" => Self::A,
            "c" => Self::C,
            "g" => Self::G,
            "t" => Self::T,
            "fifth dye" => Self::FifthDye,
            _ => Self::Unknown,
        }
    }

    /// For displaying in the UI
    pub fn to_string(self) -> String {
        match self {
            Self::A => "A",
            Self::C => "C",
            Self::G => "G",
            Self::T => "T",
            Self::FifthDye => FIFTH_DYE_LABEL,
            Self::Unknown => "Unknown",
        }
        .to_owned()
    }

    /// Conventional plot color for this channel.
    pub fn color(&self) -> Color {
        match self {
            Self::A => (0, 200, 0),
            Self::C => (0, 0, 255),
            Self::G => (0, 0, 0),
            Self::T => (255, 0, 0),
            Self::FifthDye => (255, 130, 0),
            Self::Unknown => (128, 128, 128),
        }
    }
}

/// One signal channel: a label, its display identity, and the ordered sample
/// sequence. Immutable by convention once constructed -- the only mutation
/// path is the explicit `set_sample` point write, which downstream consumers
/// use sparingly to patch individual intensity samples.
///
/// Samples are non-negative by convention. Negative values are representable
/// and not rejected; they are semantically invalid instrument data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct Trace {
    pub label: String,
    pub channel: ChannelId,
    samples: Vec<i32>,
}

impl Trace {
    pub fn new(label: String, channel: ChannelId, samples: Vec<i32>) -> Self {
        Self {
            label,
            channel,
            samples,
        }
    }

    /// Build a trace from a decoded channel label, deriving the display tag.
    /// An unrecognized label is kept verbatim, tagged `Unknown`, and logged;
    /// construction proceeds.
    pub fn from_label(label: &str, samples: Vec<i32>) -> Self {
        let channel = ChannelId::from_label(label);

        if channel == ChannelId::Unknown {
            warn!("Unrecognized channel label: {label}");
        }

        Self::new(label.to_owned(), channel, samples)
    }

    /// Sample count. O(1).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    /// Highest intensity in this trace; 0 when empty. Scans the full sample
    /// array on every call -- callers needing repeated access should cache.
    pub fn max_intensity(&self) -> i32 {
        self.samples.iter().copied().max().unwrap_or(0)
    }

    /// Intensity at `index`.
    pub fn sample(&self, index: usize) -> Result<i32> {
        self.samples
            .get(index)
            .copied()
            .ok_or(TraceError::SampleOutOfRange {
                index,
                len: self.samples.len(),
            })
    }

    /// Overwrite the intensity at `index` in place. Fail-fast: an out-of-range
    /// write is rejected with the same bounds contract as the read.
    pub fn set_sample(&mut self, index: usize, value: i32) -> Result<()> {
        if index >= self.samples.len() {
            return Err(TraceError::SampleOutOfRange {
                index,
                len: self.samples.len(),
            });
        }

        self.samples[index] = value;
        Ok(())
    }
}
