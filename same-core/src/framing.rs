//! Layer-2 framing: assembles decoded bytes into complete SAME messages.
//!
//! Sits above `signal_processing::ByteSync`. Where `ByteSync` recovers a
//! stream of bytes from audio, `FrameAssembler` watches that byte stream
//! for the `ZCZC`/`NNNN` markers and emits a `Message` once a burst has
//! been fully read, matching a header's three-times repetition by simply
//! returning one `Message` per burst — callers that want deduplicated
//! alerts compare `Message::text` across results themselves.

use crate::descriptor::Descriptor;
use crate::protocol::PhysicalLayer;

/// A fully assembled SAME burst: either a header (`ZCZC...`) or an
/// end-of-message marker (`NNNN`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Raw text recovered between the marker and the terminating dash (for
    /// a header) or the literal `NNNN` (for an end-of-message burst).
    pub text: String,
    /// Parsed descriptor fields, present only for header bursts.
    pub descriptor: Option<Descriptor>,
    /// True if this burst was the `NNNN` end-of-message marker rather than
    /// a `ZCZC` header.
    pub is_eom: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    ReadingMessage,
}

/// Streaming layer-2 state machine: feed it bytes as `ByteSync` recovers
/// them, and it returns any `Message`s completed so far.
#[derive(Debug, Clone)]
pub struct FrameAssembler {
    state: State,
    buffer: Vec<u8>,
    max_message_bytes: usize,
}

impl FrameAssembler {
    pub fn new(max_message_bytes: usize) -> Self {
        Self {
            state: State::Idle,
            buffer: Vec::new(),
            max_message_bytes,
        }
    }

    pub fn reset(&mut self) {
        self.state = State::Idle;
        self.buffer.clear();
    }

    /// Feed newly decoded bytes and return any messages completed by them.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<Message> {
        let mut messages = Vec::new();

        for &byte in bytes {
            match self.state {
                State::Idle => {
                    self.buffer.push(byte);
                    if self.buffer.len() > 4 {
                        self.buffer.remove(0);
                    }
                    if self.buffer.ends_with(b"ZCZC") {
                        self.buffer.clear();
                        self.state = State::ReadingMessage;
                    } else if self.buffer.ends_with(b"NNNN") {
                        messages.push(Message {
                            text: PhysicalLayer::EOM_MARKER.to_string(),
                            descriptor: None,
                            is_eom: true,
                        });
                        self.buffer.clear();
                    }
                }
                State::ReadingMessage => {
                    self.buffer.push(byte);

                    if self.buffer.ends_with(b"NNNN") {
                        messages.push(Message {
                            text: PhysicalLayer::EOM_MARKER.to_string(),
                            descriptor: None,
                            is_eom: true,
                        });
                        self.buffer.clear();
                        self.state = State::Idle;
                        continue;
                    }

                    if buffer_ends_descriptor(&self.buffer) {
                        // The separator between "ZCZC" and the ORG field was
                        // cleared out of the buffer along with the marker
                        // itself when we entered ReadingMessage, but on a
                        // real burst that separator is the very next byte to
                        // arrive, so it lands at the front of this buffer —
                        // trim it so `text` starts at ORG, not a leading
                        // dash.
                        let text = String::from_utf8_lossy(&self.buffer);
                        let text = text.trim_end().trim_start_matches('-').to_string();
                        let descriptor = Descriptor::parse(&text);
                        messages.push(Message {
                            text,
                            descriptor: Some(descriptor),
                            is_eom: false,
                        });
                        self.buffer.clear();
                        self.state = State::Idle;
                        continue;
                    }

                    if self.buffer.len() > self.max_message_bytes {
                        // Over-long, sync-less data: give up on this burst
                        // rather than growing the buffer without bound.
                        self.buffer.clear();
                        self.state = State::Idle;
                    }
                }
            }
        }

        messages
    }
}

/// True once the buffer holds a complete `ORG-EVT-...+HHMM-JJJHHMM-STATION-`
/// descriptor. The text after the `+` duration marker has a fixed shape —
/// `HHMM-JJJHHMM-STATION-` — so once a `+` has been seen, three more dashes
/// (duration/timestamp/station field boundaries) mean the burst is done.
fn buffer_ends_descriptor(buffer: &[u8]) -> bool {
    if !buffer.ends_with(b"-") {
        return false;
    }
    let Some(plus_pos) = buffer.iter().position(|&b| b == b'+') else {
        return false;
    };
    let dashes_after_plus = buffer[plus_pos..].iter().filter(|&&b| b == b'-').count();
    dashes_after_plus == 3
}
