//! Rendering decoded messages as a caller-facing JSON object, plus a
//! human-readable alternative.

use serde::Serialize;

use same_core::Message;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
}

/// The wire-shape message object a downstream consumer (an HTTP façade, a
/// log shipper) would want back. `same_core::Message` carries the parsed
/// descriptor as well; this is the flattened, glue-facing projection of it.
#[derive(Debug, Serialize)]
struct ExternalMessage<'a> {
    demod_name: &'static str,
    header_begin: &'static str,
    last_message: &'a str,
    end_of_message: bool,
}

pub fn render(messages: &[Message], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let external: Vec<ExternalMessage> = messages
                .iter()
                .map(|m| ExternalMessage {
                    demod_name: "EAS",
                    header_begin: "ZCZC",
                    last_message: &m.text,
                    end_of_message: m.is_eom,
                })
                .collect();
            serde_json::to_string_pretty(&external).expect("Vec<ExternalMessage> always encodes")
        }
        OutputFormat::Pretty => {
            if messages.is_empty() {
                return "(no messages recovered)".to_string();
            }
            let mut out = String::new();
            for message in messages {
                if message.is_eom {
                    out.push_str("EOM  NNNN\n");
                    continue;
                }
                out.push_str(&format!("HDR  {}\n", message.text));
                if let Some(d) = &message.descriptor {
                    out.push_str(&format!(
                        "     org={} event={} locations={:?} duration={:?} timestamp={:?} station={:?}{}\n",
                        d.org.as_deref().unwrap_or("?"),
                        d.event.as_deref().unwrap_or("?"),
                        d.locations,
                        d.duration,
                        d.timestamp,
                        d.station,
                        if d.partial { " (partial)" } else { "" },
                    ));
                }
            }
            out
        }
    }
}
