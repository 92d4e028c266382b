//! SAME descriptor grammar: build a canonical descriptor string, parse one
//! back out of recovered text, and validate the fields in between.
//!
//! Grammar: `ZCZC-ORG-EEE-PSSCCC(-PSSCCC...)+HHMM-JJJHHMM-STATION-`

use chrono::{Datelike, Timelike, Utc};

use crate::errors::DescriptorError;
use crate::protocol::{FrameLayout, Originator};

/// Event codes issued by a Primary Entry Point station rather than the
/// National Weather Service. Used to infer `org` when the caller builds a
/// descriptor without specifying one explicitly.
const PEP_EVENTS: &[&str] = &["EAN", "EAT", "NIC", "NPT", "RMT", "RWT"];
const WXR_EVENTS: &[&str] = &["TOR", "SVR", "FFW", "EVI"];

/// A parsed or to-be-built SAME descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub org: Option<String>,
    pub event: Option<String>,
    pub locations: Vec<String>,
    pub duration: Option<String>,
    pub timestamp: Option<String>,
    pub station: Option<String>,
    /// True if any required field was missing or malformed when this
    /// descriptor was recovered from a decoded byte stream. Never true for
    /// a descriptor produced by `build`.
    pub partial: bool,
}

impl Descriptor {
    fn empty() -> Self {
        Self {
            org: None,
            event: None,
            locations: Vec::new(),
            duration: None,
            timestamp: None,
            station: None,
            partial: true,
        }
    }

    /// Render the canonical descriptor text, including the leading `ZCZC-`
    /// and trailing dash. Returns an error if any field violates the SAME
    /// grammar.
    pub fn build(&self) -> Result<String, DescriptorError> {
        let org = match &self.org {
            Some(org) => {
                if Originator::from_str(org).is_none() {
                    return Err(DescriptorError::InvalidOrg { org: org.clone() });
                }
                org.clone()
            }
            None => infer_org(self.event.as_deref().unwrap_or_default()).to_string(),
        };

        let event = self.event.clone().unwrap_or_default();
        if !is_valid_event(&event) {
            return Err(DescriptorError::InvalidEvent { event });
        }

        if self.locations.is_empty() {
            return Err(DescriptorError::NoLocations);
        }
        if self.locations.len() > FrameLayout::MAX_LOCATIONS {
            return Err(DescriptorError::TooManyLocations {
                count: self.locations.len(),
            });
        }
        for code in &self.locations {
            if !is_valid_location(code) {
                return Err(DescriptorError::InvalidLocation { code: code.clone() });
            }
        }

        let duration = self.duration.clone().unwrap_or_default();
        if !is_valid_duration(&duration) {
            return Err(DescriptorError::InvalidDuration { duration });
        }

        let timestamp = self
            .timestamp
            .clone()
            .unwrap_or_else(current_utc_timestamp);
        if !is_valid_timestamp(&timestamp) {
            return Err(DescriptorError::InvalidTimestamp { timestamp });
        }

        let station = self.station.clone().unwrap_or_default();
        if !is_valid_station(&station) {
            return Err(DescriptorError::InvalidStation { station });
        }

        let locations = self.locations.join("-");
        let text = format!("ZCZC-{org}-{event}-{locations}{duration}-{timestamp}-{station}-");

        if text.len() > FrameLayout::MAX_DESCRIPTOR_CHARS {
            return Err(DescriptorError::TooLong { length: text.len() });
        }

        Ok(text)
    }

    /// Parse a descriptor out of recovered text. `text` may or may not
    /// carry the leading `ZCZC` marker; it is stripped if present. Fields
    /// that cannot be located are left `None` (or empty, for `locations`)
    /// rather than causing an error, and `partial` is set to `true` when
    /// that happens — a noisy or truncated channel produces a usable
    /// partial result instead of nothing.
    pub fn parse(text: &str) -> Self {
        let cleaned = clean_descriptor_text(text);
        let body = cleaned
            .strip_prefix("ZCZC")
            .unwrap_or(&cleaned)
            .trim_start_matches('-')
            .trim_end_matches('-');

        let mut parts: Vec<&str> = body.split('-').filter(|p| !p.is_empty()).collect();
        if parts.len() < 2 {
            return Descriptor::empty();
        }

        let org = parts.remove(0).to_string();
        let event = parts.remove(0).to_string();

        // The duration is attached to the last location code without its
        // own separator, e.g. "024031+0030" rather than "024031" / "+0030".
        let mut locations = Vec::new();
        let mut duration = None;
        let mut split_at = None;
        for (idx, part) in parts.iter().enumerate() {
            if let Some(plus_pos) = part.find('+') {
                let (loc, dur) = part.split_at(plus_pos);
                if !loc.is_empty() {
                    locations.push(loc.to_string());
                }
                duration = Some(dur.to_string());
                split_at = Some(idx);
                break;
            }
            locations.push(part.to_string());
        }

        let (timestamp, station) = match split_at {
            Some(idx) => {
                let rest = &parts[idx + 1..];
                (
                    rest.first().map(|s| s.to_string()),
                    rest.get(1).map(|s| s.to_string()),
                )
            }
            None => (None, None),
        };

        let partial = !is_valid_event(&event)
            || locations.is_empty()
            || duration.as_deref().map_or(true, |d| !is_valid_duration(d))
            || timestamp.as_deref().map_or(true, |t| !is_valid_timestamp(t))
            || station.as_deref().map_or(true, |s| !is_valid_station(s));

        Descriptor {
            org: Some(org),
            event: Some(event),
            locations,
            duration,
            timestamp,
            station,
            partial,
        }
    }
}

/// Strip non-printable bytes a noisy channel may have left between
/// repeated header bursts, leaving only characters the SAME grammar uses.
pub fn clean_descriptor_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_graphic() || *c == '-' || *c == '+')
        .collect()
}

/// Derive the `JJJHHMM` issue-time field from the current UTC clock, used
/// by `build` when the caller omits an explicit `timestamp`.
fn current_utc_timestamp() -> String {
    let now = Utc::now();
    format!("{:03}{:02}{:02}", now.ordinal(), now.hour(), now.minute())
}

fn infer_org(event: &str) -> Originator {
    if PEP_EVENTS.contains(&event) {
        Originator::Pep
    } else if WXR_EVENTS.contains(&event) {
        Originator::Wxr
    } else {
        Originator::Civ
    }
}

fn is_valid_event(event: &str) -> bool {
    event.len() == 3 && event.chars().all(|c| c.is_ascii_uppercase())
}

fn is_valid_location(code: &str) -> bool {
    code.len() == 6 && code.chars().all(|c| c.is_ascii_digit())
}

fn is_valid_duration(duration: &str) -> bool {
    duration.len() == 5
        && duration.starts_with('+')
        && duration[1..].chars().all(|c| c.is_ascii_digit())
}

fn is_valid_timestamp(timestamp: &str) -> bool {
    timestamp.len() == 7 && timestamp.chars().all(|c| c.is_ascii_digit())
}

fn is_valid_station(station: &str) -> bool {
    !station.is_empty()
        && station.len() <= 8
        && station
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | ' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tornado_warning() -> Descriptor {
        Descriptor {
            org: Some("WXR".into()),
            event: Some("TOR".into()),
            locations: vec!["024031".into()],
            duration: Some("+0030".into()),
            timestamp: Some("3191423".into()),
            station: Some("PHILLYWX".into()),
            partial: false,
        }
    }

    #[test]
    fn builds_canonical_tornado_warning() {
        let text = tornado_warning().build().unwrap();
        assert_eq!(text, "ZCZC-WXR-TOR-024031+0030-3191423-PHILLYWX-");
    }

    #[test]
    fn infers_org_when_absent() {
        let mut d = tornado_warning();
        d.org = None;
        let text = d.build().unwrap();
        assert!(text.starts_with("ZCZC-WXR-"));
    }

    #[test]
    fn rejects_too_many_locations() {
        let mut d = tornado_warning();
        d.locations = (0..32).map(|i| format!("{i:06}")).collect();
        assert_eq!(
            d.build(),
            Err(DescriptorError::TooManyLocations { count: 32 })
        );
    }

    #[test]
    fn rejects_bad_duration() {
        let mut d = tornado_warning();
        d.duration = Some("0030".into());
        assert!(matches!(d.build(), Err(DescriptorError::InvalidDuration { .. })));
    }

    #[test]
    fn parses_basic_message() {
        let parsed = Descriptor::parse("WXR-TOR-024031+0030-3191423-PHILLYWX-");
        assert_eq!(parsed.org.as_deref(), Some("WXR"));
        assert_eq!(parsed.event.as_deref(), Some("TOR"));
        assert_eq!(parsed.locations, vec!["024031".to_string()]);
        assert_eq!(parsed.duration.as_deref(), Some("+0030"));
        assert_eq!(parsed.timestamp.as_deref(), Some("3191423"));
        assert_eq!(parsed.station.as_deref(), Some("PHILLYWX"));
        assert!(!parsed.partial);
    }

    #[test]
    fn parses_multiple_locations() {
        let parsed =
            Descriptor::parse("ZCZC-WXR-TOR-024031-024033-024017+0030-3191800-PHILLYWX-");
        assert_eq!(parsed.locations.len(), 3);
        assert!(parsed.locations.contains(&"024031".to_string()));
        assert!(parsed.locations.contains(&"024033".to_string()));
    }

    #[test]
    fn marks_partial_when_truncated() {
        let parsed = Descriptor::parse("WXR-TOR-024031+0030-");
        assert!(parsed.partial);
    }

    #[test]
    fn strips_control_bytes_before_parsing() {
        let cleaned = clean_descriptor_text("WXR-TOR-024031+0030-3191423-PHILLYWX-\u{0}\u{1}");
        assert!(!cleaned.contains('\u{0}'));
        assert!(cleaned.contains("PHILLYWX"));
    }

    #[test]
    fn build_derives_timestamp_from_clock_when_omitted() {
        let mut d = tornado_warning();
        d.timestamp = None;
        let text = d.build().unwrap();
        let parsed = Descriptor::parse(&text);
        let timestamp = parsed.timestamp.unwrap();
        assert_eq!(timestamp.len(), 7);
        assert!(timestamp.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn roundtrips_through_build_and_parse() {
        let original = tornado_warning();
        let text = original.build().unwrap();
        let parsed = Descriptor::parse(&text);
        assert_eq!(parsed.org, original.org);
        assert_eq!(parsed.event, original.event);
        assert_eq!(parsed.locations, original.locations);
        assert_eq!(parsed.duration, original.duration);
        assert_eq!(parsed.timestamp, original.timestamp);
        assert_eq!(parsed.station, original.station);
        assert!(!parsed.partial);
    }
}
