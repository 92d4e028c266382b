//! AFSK waveform synthesis for the SAME/EAS header tone.
//!
//! Each bit is one full cycle window of either the MARK or SPACE tone at
//! the baud rate; a byte is its eight bits, LSB first; the preamble is the
//! 0xAB byte repeated sixteen times. This mirrors the reference encoder's
//! bit-by-bit waveform assembly rather than a block FFT synthesis, since
//! the protocol framing (not spectral shaping) is what must match bit for
//! bit with real decoders in the field. Every bit's sinusoid starts at
//! phase zero of its own local time vector — there is no phase continuity
//! across bit boundaries, and none should be added.

use std::f64::consts::TAU;

use crate::protocol::PhysicalLayer;

/// Render one bit period of MARK (`true`) or SPACE (`false`) tone at the
/// reference amplitude for that tone (see `PhysicalLayer::MARK_BIT_AMPLITUDE`
/// / `SPACE_BIT_AMPLITUDE`).
pub fn encode_bit(bit: bool, sample_rate: u32) -> Vec<f32> {
    let (freq, amplitude) = if bit {
        (PhysicalLayer::MARK_FREQ_HZ, PhysicalLayer::MARK_BIT_AMPLITUDE)
    } else {
        (PhysicalLayer::SPACE_FREQ_HZ, PhysicalLayer::SPACE_BIT_AMPLITUDE)
    };
    let samples_per_bit = (sample_rate as f64 / PhysicalLayer::BAUD).round() as usize;
    (0..samples_per_bit)
        .map(|n| {
            let t = n as f64 / sample_rate as f64;
            ((TAU * freq * t).sin() * amplitude) as f32
        })
        .collect()
}

/// Render one byte as eight consecutive bit tones, LSB first.
pub fn encode_byte(byte: u8, sample_rate: u32) -> Vec<f32> {
    let mut out = Vec::new();
    for i in 0..8 {
        let bit = (byte >> i) & 1 == 1;
        out.extend(encode_bit(bit, sample_rate));
    }
    out
}

/// Render the sixteen-byte 0xAB attention preamble.
pub fn encode_preamble(sample_rate: u32) -> Vec<f32> {
    let mut out = Vec::new();
    for _ in 0..PhysicalLayer::PREAMBLE_LEN {
        out.extend(encode_byte(PhysicalLayer::PREAMBLE_BYTE, sample_rate));
    }
    out
}

/// Render a full burst: preamble followed by every byte of `text`.
pub fn encode_burst(text: &str, sample_rate: u32) -> Vec<f32> {
    let mut out = encode_preamble(sample_rate);
    for byte in text.as_bytes() {
        out.extend(encode_byte(*byte, sample_rate));
    }
    out
}
