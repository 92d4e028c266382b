//! Configuration types for the SAME/EAS codec.

use serde::{Deserialize, Serialize};

use crate::protocol::PhysicalLayer;

/// Tunables for the matched-filter correlator and delay-locked loop.
///
/// Defaults reproduce the reference decoder's fixed-point timing recovery
/// exactly; changing them trades lock speed against noise immunity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Sample rate the correlator and DLL operate at. Audio at any other
    /// rate is resampled to this before decoding.
    pub sample_rate_hz: u32,

    /// Phase-accumulator subsamples examined per symbol period.
    pub subsamples_per_symbol: u32,

    /// Saturation bound of the soft-bit integrator.
    pub integrator_max: i32,

    /// Proportional gain applied to the DLL phase correction.
    pub dll_gain: f64,

    /// Maximum per-subsample phase increment the DLL may apply.
    pub dll_max_increment: i32,

    /// Width in bits of the DLL's fixed-point phase accumulator.
    pub phase_accumulator_bits: u32,

    /// Number of trailing bytes scanned for the 0xAB preamble pattern.
    pub preamble_scan_window: usize,

    /// Maximum bytes buffered for one in-progress message before the
    /// layer-2 state machine discards it and returns to idle.
    pub max_message_bytes: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: PhysicalLayer::SAMPLE_RATE_HZ,
            subsamples_per_symbol: 2,
            integrator_max: 10,
            dll_gain: 0.5,
            dll_max_increment: 8192,
            phase_accumulator_bits: 16,
            preamble_scan_window: 4,
            max_message_bytes: crate::protocol::FrameLayout::MAX_MESSAGE_BYTES,
        }
    }
}

/// Tunables for the waveform generator.
///
/// MARK/SPACE tone amplitude is not configurable here: the reference
/// encoder fixes it at 0.8 and 1.0 respectively, and that asymmetry must be
/// reproduced exactly for compatibility with decoders in the field
/// (`PhysicalLayer::MARK_BIT_AMPLITUDE` / `SPACE_BIT_AMPLITUDE`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Output sample rate for generated WAV audio. Defaults to the
    /// reference transmitter rate; a decoder resamples to its own canonical
    /// rate regardless of what this is set to.
    pub sample_rate_hz: u32,

    /// Whether `encode` appends the three-burst NNNN end-of-message marker.
    pub include_eom: bool,

    /// Silence, in seconds, inserted after the preamble/header and again
    /// after the EOM burst, matching typical EAS encoder behavior.
    pub guard_interval_secs: f32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: PhysicalLayer::SAMPLE_RATE_TX_HZ,
            include_eom: true,
            guard_interval_secs: 1.0,
        }
    }
}
