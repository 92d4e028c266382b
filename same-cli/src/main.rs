//! Thin command-line demonstrator for the SAME/EAS codec core.
//!
//! Exposes exactly the two operations the core library offers: encode a
//! descriptor to a WAV burst, and decode a WAV file back into messages. No
//! config-file presets, telemetry aggregation, or frame hex-dumping — that
//! belongs to a server/HTTP façade this crate does not implement.

mod output;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, Context, Result};

use output::OutputFormat;
use same_core::{encode, Descriptor, DecoderConfig, EncoderConfig, SameDecoder};

#[derive(Parser, Debug)]
#[command(author, version, about = "SAME/EAS AFSK encoder and decoder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a descriptor from its fields and encode it to a WAV file.
    Encode {
        /// Three-letter event code, e.g. TOR, SVR, RWT.
        #[arg(short, long)]
        event: String,

        /// One or more 6-digit FIPS location codes.
        #[arg(short, long, value_delimiter = ',', num_args = 1..)]
        locations: Vec<String>,

        /// Purge-time offset as +HHMM, e.g. +0030.
        #[arg(short, long)]
        duration: String,

        /// Station identifier, 1-8 characters.
        #[arg(short, long)]
        station: String,

        /// Originator code (WXR/PEP/CIV/EAS); inferred from the event code
        /// if omitted.
        #[arg(short, long)]
        org: Option<String>,

        /// Issue timestamp as JJJHHMM; derived from the current UTC time if
        /// omitted.
        #[arg(short, long)]
        timestamp: Option<String>,

        /// Skip the trailing NNNN end-of-message burst.
        #[arg(long)]
        no_eom: bool,

        /// Output WAV path.
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// Encode an already-built descriptor string directly.
    EncodeRaw {
        /// Full descriptor text, e.g.
        /// "ZCZC-WXR-TOR-024031+0030-3171500-PHILLYWX-".
        descriptor: String,

        /// Skip the trailing NNNN end-of-message burst.
        #[arg(long)]
        no_eom: bool,

        /// Output WAV path.
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// Decode a WAV file and print every message recovered from it.
    Decode {
        /// Input WAV path.
        input: PathBuf,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match cli.command {
        Command::Encode {
            event,
            locations,
            duration,
            station,
            org,
            timestamp,
            no_eom,
            output,
        } => {
            let descriptor = Descriptor {
                org,
                event: Some(event),
                locations,
                duration: Some(duration),
                timestamp,
                station: Some(station),
                partial: false,
            };
            let text = descriptor
                .build()
                .wrap_err("built descriptor failed SAME grammar validation")?;
            encode_to_file(&text, !no_eom, &output)
        }

        Command::EncodeRaw {
            descriptor,
            no_eom,
            output,
        } => encode_to_file(&descriptor, !no_eom, &output),

        Command::Decode { input, format } => {
            let bytes = fs::read(&input)
                .wrap_err_with(|| format!("failed to read {}", input.display()))?;
            let config = DecoderConfig::default();
            let samples = same_core::wav::read_wav(&bytes, config.sample_rate_hz)
                .wrap_err("failed to load WAV audio")?;

            let mut decoder = SameDecoder::new(config);
            let mut messages = Vec::new();
            // Feed the decoder in fixed chunks rather than one call to
            // exercise the same streaming path a live audio source would use.
            for chunk in samples.chunks(4096) {
                messages.extend(decoder.process_chunk(chunk));
            }

            println!("{}", output::render(&messages, format));
            if messages.is_empty() {
                eprintln!("no messages recovered from {}", input.display());
            }
            Ok(())
        }
    }
}

fn encode_to_file(descriptor: &str, include_eom: bool, output: &PathBuf) -> Result<()> {
    let config = EncoderConfig {
        include_eom,
        ..EncoderConfig::default()
    };
    let wav = encode(descriptor, &config).wrap_err("failed to encode descriptor")?;
    if wav.len() < 44 {
        bail!("encoder produced an implausibly small WAV file");
    }
    fs::write(output, &wav)
        .wrap_err_with(|| format!("failed to write {}", output.display()))?;
    eprintln!("wrote {} bytes to {}", wav.len(), output.display());
    Ok(())
}
