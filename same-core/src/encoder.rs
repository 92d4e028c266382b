//! Waveform generation: a descriptor string in, WAV bytes out.

use crate::config::EncoderConfig;
use crate::errors::{DescriptorError, Result};
use crate::protocol::{FrameLayout, PhysicalLayer};
use crate::signal_processing::modulation::encode_burst;
use crate::wav::write_wav;

/// Encode a pre-built descriptor string (e.g. from `Descriptor::build`)
/// into WAV-encoded AFSK audio: the header burst three times, optionally
/// followed by the `NNNN` end-of-message burst three times, each separated
/// by a guard interval of silence.
///
/// `descriptor` must already include the leading `ZCZC-` marker and
/// trailing dash; this function validates only its length, not its
/// grammar — use `Descriptor::build` to get a grammar-checked string.
pub fn encode(descriptor: &str, config: &EncoderConfig) -> Result<Vec<u8>> {
    if descriptor.len() > FrameLayout::MAX_DESCRIPTOR_CHARS {
        return Err(DescriptorError::TooLong {
            length: descriptor.len(),
        }
        .into());
    }

    let guard_samples =
        (config.guard_interval_secs * config.sample_rate_hz as f32) as usize;
    let mut signal = vec![0.0f32; PhysicalLayer::SETTLE_SAMPLES];

    for _ in 0..FrameLayout::HEADER_REPEATS {
        signal.extend(encode_burst(descriptor, config.sample_rate_hz));
        signal.extend(std::iter::repeat(0.0f32).take(guard_samples));
    }

    if config.include_eom {
        for _ in 0..FrameLayout::EOM_REPEATS {
            signal.extend(encode_burst(
                PhysicalLayer::EOM_MARKER,
                config.sample_rate_hz,
            ));
            signal.extend(std::iter::repeat(0.0f32).take(guard_samples));
        }
    }

    write_wav(&signal, config.sample_rate_hz)
}
