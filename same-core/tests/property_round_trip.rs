//! Property-based coverage for the descriptor grammar and the chunk-
//! invariance contract of the streaming decoder.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use same_core::{encode, DecoderConfig, Descriptor, EncoderConfig, SameDecoder};

fn arb_event() -> impl Strategy<Value = String> {
    "[A-Z]{3}"
}

fn arb_location() -> impl Strategy<Value = String> {
    "[0-9]{6}"
}

fn arb_duration() -> impl Strategy<Value = String> {
    (0u32..100, 0u32..60).prop_map(|(h, m)| format!("+{h:02}{m:02}"))
}

fn arb_timestamp() -> impl Strategy<Value = String> {
    (1u32..367, 0u32..24, 0u32..60).prop_map(|(j, h, m)| format!("{j:03}{h:02}{m:02}"))
}

fn arb_station() -> impl Strategy<Value = String> {
    "[A-Z0-9]{1,8}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn build_then_parse_recovers_every_field(
        event in arb_event(),
        locations in proptest::collection::vec(arb_location(), 1..5),
        duration in arb_duration(),
        timestamp in arb_timestamp(),
        station in arb_station(),
    ) {
        let descriptor = Descriptor {
            org: Some("WXR".to_string()),
            event: Some(event),
            locations,
            duration: Some(duration),
            timestamp: Some(timestamp),
            station: Some(station),
            partial: false,
        };

        let text = descriptor.build().unwrap();
        let parsed = Descriptor::parse(&text);

        prop_assert_eq!(parsed.org, descriptor.org);
        prop_assert_eq!(parsed.event, descriptor.event);
        prop_assert_eq!(parsed.locations, descriptor.locations);
        prop_assert_eq!(parsed.duration, descriptor.duration);
        prop_assert_eq!(parsed.timestamp, descriptor.timestamp);
        prop_assert_eq!(parsed.station, descriptor.station);
        prop_assert!(!parsed.partial);
    }

    #[test]
    fn emitted_header_fields_always_satisfy_the_grammar(
        event in arb_event(),
        locations in proptest::collection::vec(arb_location(), 1..5),
        duration in arb_duration(),
        timestamp in arb_timestamp(),
        station in arb_station(),
    ) {
        let descriptor = Descriptor {
            org: Some("WXR".to_string()),
            event: Some(event),
            locations,
            duration: Some(duration),
            timestamp: Some(timestamp),
            station: Some(station),
            partial: false,
        };
        let text = descriptor.build().unwrap();

        let config = EncoderConfig::default();
        let wav = encode(&text, &config).unwrap();
        let samples = same_core::wav::read_wav(&wav, DecoderConfig::default().sample_rate_hz).unwrap();

        let mut decoder = SameDecoder::new(DecoderConfig::default());
        let messages = decoder.process_chunk(&samples);
        let header = messages.iter().find(|m| !m.is_eom).expect("a header was recovered");
        let recovered = header.descriptor.as_ref().unwrap();

        prop_assert!(matches!(recovered.org.as_deref(), Some("WXR" | "PEP" | "CIV" | "EAS")));
        prop_assert_eq!(recovered.event.as_ref().unwrap().len(), 3);
        prop_assert!(recovered.event.as_ref().unwrap().chars().all(|c| c.is_ascii_uppercase()));
        prop_assert!(!recovered.locations.is_empty() && recovered.locations.len() <= 31);
        prop_assert!(recovered.duration.as_deref().unwrap().starts_with('+'));
        prop_assert_eq!(recovered.timestamp.as_ref().unwrap().len(), 7);
    }
}

#[test]
fn arbitrary_chunk_boundaries_never_change_the_message_sequence() {
    let descriptor = "ZCZC-WXR-SVR-024031+0100-3191500-PHILLYWX-";
    let config = EncoderConfig::default();
    let wav = encode(descriptor, &config).unwrap();
    let samples = same_core::wav::read_wav(&wav, DecoderConfig::default().sample_rate_hz).unwrap();

    let mut whole = SameDecoder::new(DecoderConfig::default());
    let baseline = whole.process_chunk(&samples);

    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for _ in 0..20 {
        let mut decoder = SameDecoder::new(DecoderConfig::default());
        let mut pieces = Vec::new();
        let mut offset = 0usize;
        while offset < samples.len() {
            let remaining = samples.len() - offset;
            let take = rng.gen_range(1..=remaining.min(2000));
            pieces.extend(decoder.process_chunk(&samples[offset..offset + take]));
            offset += take;
        }
        assert_eq!(baseline, pieces);
    }
}
