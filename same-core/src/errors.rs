//! SAME/EAS error types with granular categories.

use thiserror::Error;

/// Top-level error type for all SAME codec operations.
#[derive(Debug, Error)]
pub enum SameError {
    #[error("descriptor error: {0}")]
    Descriptor(#[from] DescriptorError),

    #[error("audio error: {0}")]
    Audio(#[from] AudioError),
}

/// Errors building or validating a textual SAME descriptor.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DescriptorError {
    #[error("descriptor length {length} exceeds maximum 268 characters")]
    TooLong { length: usize },

    #[error("originator {org:?} is not one of WXR, PEP, CIV, EAS")]
    InvalidOrg { org: String },

    #[error("event code {event:?} must be exactly 3 uppercase letters")]
    InvalidEvent { event: String },

    #[error("no location codes given (need 1-31)")]
    NoLocations,

    #[error("too many location codes: {count} (max 31)")]
    TooManyLocations { count: usize },

    #[error("invalid location code {code:?}: must be exactly 6 digits")]
    InvalidLocation { code: String },

    #[error("invalid duration {duration:?}: must match +HHMM")]
    InvalidDuration { duration: String },

    #[error("invalid timestamp {timestamp:?}: must match JJJHHMM")]
    InvalidTimestamp { timestamp: String },

    #[error("invalid station identifier {station:?}: must be 1-8 chars of [A-Z0-9/\\- ]")]
    InvalidStation { station: String },
}

/// Errors reading or interpreting host-provided audio.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("not a valid WAV file: missing RIFF/WAVE magic")]
    BadMagic,

    #[error("WAV file contains zero samples")]
    EmptySamples,

    #[error("audio buffer of {size} bytes exceeds the {limit} byte upload limit")]
    TooLarge { size: usize, limit: usize },

    #[error("failed to read WAV data: {reason}")]
    ReadFailed { reason: String },

    #[error("failed to write WAV data: {reason}")]
    WriteFailed { reason: String },

    #[error("resampling from {from_hz} Hz to {to_hz} Hz failed: {reason}")]
    ResampleFailed {
        from_hz: u32,
        to_hz: u32,
        reason: String,
    },
}

/// Result type alias for SAME codec operations.
pub type Result<T> = std::result::Result<T, SameError>;
