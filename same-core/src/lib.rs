//! SAME/EAS codec core library.
//!
//! Encodes a SAME descriptor into AFSK WAV audio, and recovers `Message`s
//! from arbitrary audio by streaming it through a matched-filter
//! correlator, a delay-locked loop, and a layer-2 protocol state machine.
//! Modules are organized leaf-first: `protocol` and `config` define the
//! constants everything else builds on, `signal_processing` turns those
//! constants into waveforms and back into bytes, `descriptor` and
//! `framing` turn bytes into typed messages, and `decoder`/`encoder` tie
//! the pieces into the two operations this crate exposes.

pub mod config;
pub mod decoder;
pub mod descriptor;
pub mod encoder;
pub mod errors;
pub mod framing;
pub mod logging;
pub mod protocol;
pub mod signal_processing;
pub mod wav;

pub use config::{DecoderConfig, EncoderConfig};
pub use decoder::SameDecoder;
pub use descriptor::{clean_descriptor_text, Descriptor};
pub use encoder::encode;
pub use errors::{AudioError, DescriptorError, Result, SameError};
pub use framing::Message;
