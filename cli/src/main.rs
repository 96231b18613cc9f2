mod simulate;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use quietcast_core::auth::{self, CHALLENGE_LEN};
use quietcast_core::padding::{pad, unpad};
use quietcast_core::{Codec, ENCODED_LEN, MAX_PAYLOAD_LEN};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "quietcast")]
#[command(about = "Burst-tolerant error correction for 48-byte radio messages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pad a payload into a message and encode it into a 192-byte block
    Encode {
        /// Input payload file (only the first 47 bytes are sent)
        #[arg(value_name = "INPUT.BIN")]
        input: PathBuf,

        /// Output block file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Block file format
        #[arg(short, long, value_enum, default_value = "raw")]
        format: BlockFormat,
    },

    /// Decode a 192-byte block and write the recovered payload
    Decode {
        /// Input block file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output payload file
        #[arg(value_name = "OUTPUT.BIN")]
        output: PathBuf,

        /// Block file format
        #[arg(short, long, value_enum, default_value = "raw")]
        format: BlockFormat,

        /// Fail instead of writing a best-effort payload when errors remain
        #[arg(long)]
        strict: bool,
    },

    /// Print the codebook and reverse map
    Tables {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Push random messages through a noisy channel and report outcomes
    Simulate {
        /// Number of blocks to send
        #[arg(short, long, default_value = "1000")]
        trials: usize,

        /// Probability that any transmitted bit is flipped
        #[arg(short, long, default_value = "0.005")]
        ber: f64,

        /// RNG seed for reproducible runs
        #[arg(short, long, default_value = "1")]
        seed: u64,

        /// Histogram bins for the flipped-bit distribution
        #[arg(long, default_value = "20")]
        bins: usize,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the keyed-hash tag of a payload
    Sign {
        /// Payload file
        #[arg(value_name = "INPUT.BIN")]
        input: PathBuf,

        /// Shared secret key (16 bytes recommended)
        #[arg(short, long)]
        key: String,

        /// Single-use 4-character challenge
        #[arg(short, long)]
        challenge: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BlockFormat {
    Raw,
    Base64,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Challenge must be exactly 4 bytes, got {0}")]
    BadChallenge(usize),

    #[error("Block is not valid base64: {0}")]
    BadBase64(#[from] base64::DecodeError),

    #[error("Block has {0} uncorrected nibble errors")]
    Uncorrected(usize),

    #[error("Bit error rate must be within 0.0..=1.0, got {0}")]
    BadBitErrorRate(f64),
}

#[derive(Serialize)]
struct TablesReport {
    codebook: Vec<u8>,
    min_distance: u32,
    reverse_map: Vec<u8>,
    ambiguous: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let codec = Codec::standard();

    match cli.command {
        Commands::Encode { input, output, format } => {
            encode_command(&codec, &input, &output, format)?
        }
        Commands::Decode { input, output, format, strict } => {
            decode_command(&codec, &input, &output, format, strict)?
        }
        Commands::Tables { json } => tables_command(&codec, json)?,
        Commands::Simulate { trials, ber, seed, bins, json } => {
            if !(0.0..=1.0).contains(&ber) {
                return Err(CliError::BadBitErrorRate(ber).into());
            }
            let report = simulate::run(&codec, trials, ber, seed)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.summary(bins)?);
            }
        }
        Commands::Sign { input, key, challenge } => sign_command(&input, &key, &challenge)?,
    }

    Ok(())
}

fn encode_command(
    codec: &Codec,
    input_path: &Path,
    output_path: &Path,
    format: BlockFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let payload = std::fs::read(input_path)?;
    println!("Read {} bytes from {}", payload.len(), input_path.display());
    if payload.len() > MAX_PAYLOAD_LEN {
        warn!(
            "Payload is {} bytes; only the first {} will be sent",
            payload.len(),
            MAX_PAYLOAD_LEN
        );
    }

    let block = codec.encode_message(&pad(&payload));
    match format {
        BlockFormat::Raw => std::fs::write(output_path, block)?,
        BlockFormat::Base64 => std::fs::write(output_path, BASE64.encode(block) + "\n")?,
    }

    println!("Encoded {} byte block to {}", block.len(), output_path.display());
    Ok(())
}

fn decode_command(
    codec: &Codec,
    input_path: &Path,
    output_path: &Path,
    format: BlockFormat,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read(input_path)?;
    let block = match format {
        BlockFormat::Raw => raw,
        BlockFormat::Base64 => BASE64
            .decode(String::from_utf8_lossy(&raw).trim())
            .map_err(CliError::from)?,
    };
    info!("Read {} byte block (expected {})", block.len(), ENCODED_LEN);

    let decoded = codec.decode(&block)?;
    if decoded.has_error {
        if strict {
            return Err(CliError::Uncorrected(decoded.unresolved).into());
        }
        warn!(
            "{} nibble halves could not be corrected; payload may be damaged",
            decoded.unresolved
        );
    }

    let payload = unpad(&decoded.message);
    std::fs::write(output_path, &payload)?;
    println!("Decoded {} bytes to {}", payload.len(), output_path.display());
    Ok(())
}

fn tables_command(codec: &Codec, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let codebook = codec.encoder().codebook();
    let reverse_map = codec.decoder().reverse_map();
    let report = TablesReport {
        codebook: codebook.codewords().to_vec(),
        min_distance: codebook.min_distance(),
        reverse_map: reverse_map.to_raw().to_vec(),
        ambiguous: reverse_map.ambiguous_count(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Codebook (min distance {}):", report.min_distance);
    for (nibble, codeword) in report.codebook.iter().enumerate() {
        println!("  {:2} -> {:#04x} {:08b}", nibble, codeword, codeword);
    }
    println!("Reverse map ({} of 256 ambiguous, shown as --):", report.ambiguous);
    for row in report.reverse_map.chunks(16) {
        let cells: Vec<String> = row
            .iter()
            .map(|&entry| {
                if entry as usize >= report.codebook.len() {
                    "--".to_string()
                } else {
                    format!("{:2}", entry)
                }
            })
            .collect();
        println!("  {}", cells.join(" "));
    }
    Ok(())
}

fn sign_command(
    input_path: &Path,
    key: &str,
    challenge: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let challenge: [u8; CHALLENGE_LEN] = challenge
        .as_bytes()
        .try_into()
        .map_err(|_| CliError::BadChallenge(challenge.len()))?;
    if key.len() != auth::RECOMMENDED_KEY_LEN {
        warn!(
            "Key is {} bytes; {} is recommended",
            key.len(),
            auth::RECOMMENDED_KEY_LEN
        );
    }

    let payload = std::fs::read(input_path)?;
    let tag = auth::tag(key.as_bytes(), &challenge, &payload);
    println!("{:04x}", tag);
    Ok(())
}
