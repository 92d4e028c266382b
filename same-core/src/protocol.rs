//! SAME/EAS protocol definition.
//!
//! Defines the canonical physical-layer and framing constants shared by the
//! waveform generator, correlator, symbol recovery, and protocol state
//! machine. Values come from the NWS SAME specification (47 CFR 11.31) and
//! match the reference decoder bit-for-bit.

use std::fmt;

/// Originating authority codes (first field of a descriptor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Originator {
    /// Primary Entry Point station / National Weather Service.
    Wxr,
    /// Primary Entry Point (civil defense).
    Pep,
    /// Civil authorities.
    Civ,
    /// EAS participant (broadcast station relay).
    Eas,
}

impl Originator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Originator::Wxr => "WXR",
            Originator::Pep => "PEP",
            Originator::Civ => "CIV",
            Originator::Eas => "EAS",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "WXR" => Some(Originator::Wxr),
            "PEP" => Some(Originator::Pep),
            "CIV" => Some(Originator::Civ),
            "EAS" => Some(Originator::Eas),
            _ => None,
        }
    }
}

impl fmt::Display for Originator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Physical-layer constants for AFSK modulation.
///
/// These are NOT configurable at runtime: they define the waveform itself,
/// and changing them would produce audio no SAME decoder in the field could
/// demodulate.
pub struct PhysicalLayer;

impl PhysicalLayer {
    /// MARK tone frequency in Hz (binary 1).
    pub const MARK_FREQ_HZ: f64 = 2083.333_333_333_3;

    /// SPACE tone frequency in Hz (binary 0).
    pub const SPACE_FREQ_HZ: f64 = 1562.5;

    /// Baud rate in symbols (bits) per second.
    pub const BAUD: f64 = 520.833_333_333_3;

    /// Canonical internal sample rate for the correlator and DLL. Audio at
    /// any other rate is resampled to this before it reaches the correlator.
    pub const SAMPLE_RATE_HZ: u32 = 22_050;

    /// Sample rate the waveform generator emits. The encoder and decoder
    /// deliberately run at different native rates; a generated WAV file is
    /// resampled down to `SAMPLE_RATE_HZ` like any other decoder input.
    pub const SAMPLE_RATE_TX_HZ: u32 = 43_750;

    /// Amplitude of a MARK-tone (binary 1) bit. Lower than the SPACE
    /// amplitude by design — see `SPACE_BIT_AMPLITUDE`.
    pub const MARK_BIT_AMPLITUDE: f64 = 0.8;

    /// Amplitude of a SPACE-tone (binary 0) bit.
    ///
    /// The MARK/SPACE amplitude asymmetry (0.8 vs 1.0) is a deliberate
    /// property of the reference encoder, not a synthesis artifact; changing
    /// it alters the transmitted spectrum and breaks compatibility with
    /// decoders in the field.
    pub const SPACE_BIT_AMPLITUDE: f64 = 1.0;

    /// Samples of leading silence prepended before the first burst, letting
    /// a receiver's AGC settle before the preamble begins.
    pub const SETTLE_SAMPLES: usize = 20_000;

    /// Byte value repeated to form the preamble before every burst.
    pub const PREAMBLE_BYTE: u8 = 0xAB;

    /// Number of preamble bytes sent before each ZCZC/NNNN burst.
    pub const PREAMBLE_LEN: usize = 16;

    /// Start-of-message marker that opens every descriptor burst.
    pub const SOM_MARKER: &'static str = "ZCZC";

    /// End-of-message marker.
    pub const EOM_MARKER: &'static str = "NNNN";

    /// Samples per symbol at the canonical sample rate (rounded).
    pub const fn samples_per_symbol() -> f64 {
        Self::SAMPLE_RATE_HZ as f64 / Self::BAUD
    }
}

/// Host-facing audio input limits. The core itself has no hard-coded
/// ceiling on decode length, but `wav::read_wav` enforces this reference
/// limit so a misbehaving upload fails fast with `AudioError` rather than
/// allocating unbounded memory while resampling.
pub struct AudioLimits;

impl AudioLimits {
    /// Reference upload size limit in bytes (10 MiB).
    pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
}

/// Message-layer framing constants.
pub struct FrameLayout;

impl FrameLayout {
    /// Header burst repeat count (redundancy against noise per the spec).
    pub const HEADER_REPEATS: usize = 3;

    /// EOM burst repeat count.
    pub const EOM_REPEATS: usize = 3;

    /// Maximum descriptor length in characters, including the `ZCZC-` prefix
    /// and trailing dash.
    pub const MAX_DESCRIPTOR_CHARS: usize = 268;

    /// Maximum number of FIPS location codes in one descriptor.
    pub const MAX_LOCATIONS: usize = 31;

    /// Minimum number of FIPS location codes.
    pub const MIN_LOCATIONS: usize = 1;

    /// Upper bound on the assembled message buffer in bytes (layer-2 guard
    /// against a runaway, sync-less bitstream).
    pub const MAX_MESSAGE_BYTES: usize = 300;
}
