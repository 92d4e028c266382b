//! Signal processing functions for AFSK modulation and demodulation.
//!
//! This module provides the core DSP functions for:
//! - Synthesizing MARK/SPACE tone audio from a bitstream (`modulation`)
//! - Correlating incoming audio against MARK/SPACE templates (`correlator`)
//! - Recovering symbol timing via a delay-locked loop (`symbol_recovery`)
//!
//! These functions are designed to be reusable, testable, and suitable for
//! real-time streaming operation.

pub mod correlator;
pub mod modulation;
pub mod symbol_recovery;

pub use correlator::Correlator;
pub use modulation::{encode_bit, encode_burst, encode_byte, encode_preamble};
pub use symbol_recovery::{ByteSync, ByteSyncConfig};
