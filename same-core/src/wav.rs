//! Minimal WAV I/O: just enough to get PCM samples in and out of the
//! codec. Grounded in the teacher's `external_audio.rs`, scaled down from
//! full `symphonia` multi-format probing to `hound`-only WAV handling,
//! since arbitrary file-format ingestion is explicitly out of scope here.

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use rubato::{FastFixedIn, PolynomialDegree, Resampler};

use crate::errors::{AudioError, Result};
use crate::protocol::AudioLimits;

/// Read a WAV file's samples as mono `f32` in `[-1.0, 1.0]`, resampling to
/// `target_sample_rate_hz` if the file's native rate differs. Multi-channel
/// files are downmixed by averaging channels.
pub fn read_wav(bytes: &[u8], target_sample_rate_hz: u32) -> Result<Vec<f32>> {
    if bytes.len() > AudioLimits::MAX_UPLOAD_BYTES {
        return Err(AudioError::TooLarge {
            size: bytes.len(),
            limit: AudioLimits::MAX_UPLOAD_BYTES,
        }
        .into());
    }
    if bytes.len() < 12 || &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
        return Err(AudioError::BadMagic.into());
    }

    let cursor = std::io::Cursor::new(bytes);
    let mut reader = WavReader::new(cursor).map_err(|e| AudioError::ReadFailed {
        reason: e.to_string(),
    })?;
    let spec = reader.spec();

    let mono: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => {
            let samples: Vec<f32> = reader
                .samples::<f32>()
                .collect::<std::result::Result<_, _>>()
                .map_err(|e| AudioError::ReadFailed {
                    reason: e.to_string(),
                })?;
            downmix(&samples, spec.channels)
        }
        SampleFormat::Int => {
            let scale = 1.0 / (1i64 << (spec.bits_per_sample - 1)) as f32;
            let samples: Vec<f32> = reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<std::result::Result<_, _>>()
                .map_err(|e| AudioError::ReadFailed {
                    reason: e.to_string(),
                })?;
            downmix(&samples, spec.channels)
        }
    };

    if mono.is_empty() {
        return Err(AudioError::EmptySamples.into());
    }

    if spec.sample_rate == target_sample_rate_hz {
        Ok(mono)
    } else {
        resample(&mono, spec.sample_rate, target_sample_rate_hz)
    }
}

/// Encode mono `f32` samples as a 16-bit PCM WAV file.
pub fn write_wav(samples: &[f32], sample_rate_hz: u32) -> Result<Vec<u8>> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: sample_rate_hz,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut buffer = Vec::new();
    {
        let cursor = std::io::Cursor::new(&mut buffer);
        let mut writer = WavWriter::new(cursor, spec).map_err(|e| AudioError::WriteFailed {
            reason: e.to_string(),
        })?;
        for &sample in samples {
            let scaled = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer.write_sample(scaled).map_err(|e| AudioError::WriteFailed {
                reason: e.to_string(),
            })?;
        }
        writer.finalize().map_err(|e| AudioError::WriteFailed {
            reason: e.to_string(),
        })?;
    }

    Ok(buffer)
}

fn downmix(samples: &[f32], channels: u16) -> Vec<f32> {
    if channels <= 1 {
        return samples.to_vec();
    }
    let channels = channels as usize;
    samples
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect()
}

fn resample(samples: &[f32], from_hz: u32, to_hz: u32) -> Result<Vec<f32>> {
    let chunk_size = from_hz as usize;
    let mut resampler = FastFixedIn::<f32>::new(
        to_hz as f64 / from_hz as f64,
        1.0,
        PolynomialDegree::Linear,
        chunk_size,
        1,
    )
    .map_err(|e| AudioError::ResampleFailed {
        from_hz,
        to_hz,
        reason: e.to_string(),
    })?;

    let mut output = Vec::new();
    let mut input_buf = vec![Vec::new()];

    for chunk in samples.chunks(chunk_size) {
        input_buf[0].clear();
        input_buf[0].extend_from_slice(chunk);
        if input_buf[0].len() < chunk_size {
            input_buf[0].resize(chunk_size, 0.0);
        }

        let out = resampler
            .process(&input_buf, None)
            .map_err(|e| AudioError::ResampleFailed {
                from_hz,
                to_hz,
                reason: e.to_string(),
            })?;
        output.extend_from_slice(&out[0]);
    }

    // The last chunk was zero-padded up to chunk_size before resampling;
    // trim the corresponding tail of silence from the output.
    let expected_len = ((samples.len() as f64) * to_hz as f64 / from_hz as f64).round() as usize;
    output.truncate(expected_len);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_roundtrips_at_same_rate() {
        use approx::assert_abs_diff_eq;

        let samples: Vec<f32> = (0..1000).map(|i| (i as f32 * 0.01).sin() * 0.5).collect();
        let wav = write_wav(&samples, 22050).unwrap();
        let recovered = read_wav(&wav, 22050).unwrap();
        assert_eq!(recovered.len(), samples.len());
        for (a, b) in samples.iter().zip(recovered.iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 0.01);
        }
    }

    #[test]
    fn empty_wav_is_rejected() {
        let wav = write_wav(&[], 22050).unwrap();
        assert!(matches!(
            read_wav(&wav, 22050),
            Err(crate::errors::SameError::Audio(AudioError::EmptySamples))
        ));
    }

    #[test]
    fn bad_magic_is_rejected() {
        let not_a_wav = b"this is not a riff file".to_vec();
        assert!(matches!(
            read_wav(&not_a_wav, 22050),
            Err(crate::errors::SameError::Audio(AudioError::BadMagic))
        ));
    }

    #[test]
    fn oversize_upload_is_rejected() {
        let mut huge = Vec::with_capacity(AudioLimits::MAX_UPLOAD_BYTES + 1);
        huge.extend_from_slice(b"RIFF");
        huge.resize(AudioLimits::MAX_UPLOAD_BYTES + 1, 0);
        assert!(matches!(
            read_wav(&huge, 22050),
            Err(crate::errors::SameError::Audio(AudioError::TooLarge { .. }))
        ));
    }

    #[test]
    fn resamples_to_target_rate() {
        let samples: Vec<f32> = (0..4410).map(|i| (i as f32 * 0.02).sin()).collect();
        let wav = write_wav(&samples, 44100).unwrap();
        let recovered = read_wav(&wav, 22050).unwrap();
        // Resampled length should be roughly half the original.
        assert!(recovered.len() > 1500 && recovered.len() < 3500);
    }
}
