//! Delay-locked loop timing recovery and byte synchronization.
//!
//! Implements the same fixed-point DLL multimon-ng's `demod_eas.c` uses and
//! the reference Python decoder ports: a 16-bit phase accumulator advanced
//! `SUBSAMP` correlator windows per symbol, a saturating soft-bit
//! integrator that low-pass-filters the per-window mark/space decision, and
//! a shift register that watches for bit transitions to nudge the phase
//! toward the center of each symbol. `ByteSync` additionally looks for the
//! 0xAB preamble in the assembled bit shift register and, once locked,
//! assembles successive bytes straight out of the bitstream.

use crate::config::DecoderConfig;
use crate::protocol::PhysicalLayer;
use crate::signal_processing::correlator::Correlator;

pub type ByteSyncConfig = DecoderConfig;

/// Streaming FSK-to-bytes recoverer.
///
/// Owns a correlator sized for its sample rate and all DLL/byte-sync state,
/// so it can be fed audio in arbitrarily sized chunks and will produce the
/// same byte sequence regardless of how the input was chunked.
#[derive(Debug, Clone)]
pub struct ByteSync {
    config: ByteSyncConfig,
    correlator: Correlator,
    phase_increment: i64,
    phase: i64,
    integrator: i32,
    dcd_shreg: u32,
    lasts: u8,
    sync_locked: bool,
    bit_counter: u32,
    /// Unconsumed samples carried across `process` calls; bounded by one
    /// correlation window plus the subsample step.
    tail: Vec<f32>,
}

impl ByteSync {
    pub fn new(config: ByteSyncConfig) -> Self {
        let correlator = Correlator::new(config.sample_rate_hz);
        let phase_increment = ((1u64 << 16) as f64 * PhysicalLayer::BAUD
            * config.subsamples_per_symbol as f64
            / config.sample_rate_hz as f64) as i64;
        Self {
            config,
            correlator,
            phase_increment,
            phase: 0,
            integrator: 0,
            dcd_shreg: 0,
            lasts: 0,
            sync_locked: false,
            bit_counter: 0,
            tail: Vec::new(),
        }
    }

    /// Reset all timing-recovery and sync state, discarding any buffered
    /// samples. Used when the caller wants a clean decode, e.g. `reset()`
    /// on the owning decoder.
    pub fn reset(&mut self) {
        self.phase = 0;
        self.integrator = 0;
        self.dcd_shreg = 0;
        self.lasts = 0;
        self.sync_locked = false;
        self.bit_counter = 0;
        self.tail.clear();
    }

    pub fn is_sync_locked(&self) -> bool {
        self.sync_locked
    }

    /// Feed a chunk of audio samples and return every fully decoded byte
    /// (preamble bytes are consumed internally and never returned).
    pub fn process(&mut self, samples: &[f32]) -> Vec<u8> {
        let mut buffer = std::mem::take(&mut self.tail);
        buffer.extend_from_slice(samples);

        let window_len = self.correlator.window_len();
        let subsamp = self.config.subsamples_per_symbol as usize;
        let mut decoded = Vec::new();

        let mut i = 0usize;
        while i + window_len <= buffer.len() {
            let window = &buffer[i..i + window_len];
            let f = self.correlator.decide(window);

            self.dcd_shreg = (self.dcd_shreg << 1) & 0xFFFF_FFFF;
            if f > 0.0 {
                self.dcd_shreg |= 1;
            }

            if f > 0.0 && self.integrator < self.config.integrator_max {
                self.integrator += 1;
            } else if f < 0.0 && self.integrator > -self.config.integrator_max {
                self.integrator -= 1;
            }

            if (self.dcd_shreg ^ (self.dcd_shreg >> 1)) & 1 != 0 {
                let half_increment = self.phase_increment / 2;
                let eighth_increment = self.phase_increment / 8;
                if self.phase < (0x8000 - eighth_increment) {
                    if self.phase > half_increment {
                        let adjustment =
                            ((self.phase as f64 * self.config.dll_gain) as i64)
                                .min(self.config.dll_max_increment as i64);
                        self.phase -= adjustment;
                    }
                } else if self.phase < (0x10000 - half_increment) {
                    let adjustment = (((0x10000 - self.phase) as f64 * self.config.dll_gain)
                        as i64)
                        .min(self.config.dll_max_increment as i64);
                    self.phase += adjustment;
                }
            }

            self.phase += self.phase_increment;

            if self.phase >= 0x10000 {
                self.phase = 1;

                self.lasts >>= 1;
                if self.integrator >= 0 {
                    self.lasts |= 0x80;
                }

                if self.lasts == PhysicalLayer::PREAMBLE_BYTE && !self.sync_locked {
                    self.sync_locked = true;
                    self.bit_counter = 0;
                } else if self.sync_locked {
                    self.bit_counter += 1;
                    if self.bit_counter == 8 {
                        self.bit_counter = 0;
                        if self.lasts != PhysicalLayer::PREAMBLE_BYTE {
                            if is_valid_same_char(self.lasts) {
                                decoded.push(self.lasts);
                            } else {
                                self.sync_locked = false;
                            }
                        }
                    }
                }
            }

            i += subsamp;
        }

        self.tail = buffer[i..].to_vec();
        decoded
    }
}

/// Mirrors multimon-ng's `eas_allowed()`: printable ASCII plus bare CR/LF,
/// rejecting high-bit-set bytes outright.
fn is_valid_same_char(byte: u8) -> bool {
    if byte & 0x80 != 0 {
        return false;
    }
    byte == 13 || byte == 10 || (32..=126).contains(&byte)
}
