//! Streaming SAME decoder: audio in, `Message`s out.
//!
//! `SameDecoder` owns the correlator/DLL byte recovery and the layer-2
//! frame assembler and is the only decode entry point the crate exposes.
//! Feeding it the same audio split across arbitrarily many `process_chunk`
//! calls yields the same messages as feeding it in one call — bounded
//! memory and chunk-invariance are the only contract callers should rely on.

use crate::config::DecoderConfig;
use crate::framing::{FrameAssembler, Message};
use crate::logging::{LogCollector, LogConfig};
use crate::signal_processing::ByteSync;

/// Streaming decoder for SAME/EAS audio.
///
/// Not `Sync`: a single instance must not be driven from two threads at
/// once, though it may be moved to another thread between calls.
pub struct SameDecoder {
    byte_sync: ByteSync,
    assembler: FrameAssembler,
    log: LogCollector,
}

impl SameDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self::with_logging(config, LogConfig::default())
    }

    pub fn with_logging(config: DecoderConfig, log_config: LogConfig) -> Self {
        let max_message_bytes = config.max_message_bytes;
        Self {
            byte_sync: ByteSync::new(config),
            assembler: FrameAssembler::new(max_message_bytes),
            log: LogCollector::new(log_config),
        }
    }

    /// Feed one chunk of mono `f32` audio at the decoder's configured
    /// sample rate and return every `Message` completed by it. An empty
    /// return is the ordinary case of "no full message yet", not an error.
    pub fn process_chunk(&mut self, samples: &[f32]) -> Vec<Message> {
        let was_locked = self.byte_sync.is_sync_locked();
        let bytes = self.byte_sync.process(samples);

        if !was_locked && self.byte_sync.is_sync_locked() {
            self.log.debug("SYNC", "preamble lock acquired");
        } else if was_locked && !self.byte_sync.is_sync_locked() {
            self.log.warn("SYNC", "lost preamble lock");
        }

        let messages = self.assembler.feed(&bytes);
        for message in &messages {
            if message.is_eom {
                self.log.info("FRAMING", "end-of-message burst recovered");
            } else {
                self.log.info(
                    "FRAMING",
                    format_args!("header burst recovered: {}", message.text),
                );
            }
        }

        messages
    }

    /// Reset all decoder state — sync lock, DLL phase, and any partially
    /// assembled message — as if freshly constructed. Accumulated log
    /// entries are preserved.
    pub fn reset(&mut self) {
        self.byte_sync.reset();
        self.assembler.reset();
    }

    pub fn is_sync_locked(&self) -> bool {
        self.byte_sync.is_sync_locked()
    }

    pub fn log(&self) -> &LogCollector {
        &self.log
    }
}

impl Default for SameDecoder {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}
