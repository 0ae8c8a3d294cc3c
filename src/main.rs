use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use oidkit::config::{KitConfig, DEFAULT_CONFIG_FILE};
use oidkit::oid::{decode_oid, known};
use oidkit::utils::{parse_hex, HexDumpOptions};
use oidkit::{pad_bytes, trim_padding, ObjectIdentifier, PadSide};

#[derive(Parser)]
#[command(name = "oidkit")]
#[command(about = "OID encoding, padding and hex dump utilities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true, help = "Config file path")]
    config: Option<String>,

    #[arg(long, global = true, help = "Output as JSON")]
    json: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Convert between dotted OIDs and their encoded bytes
    Oid {
        #[command(subcommand)]
        oid_cmd: OidCommands,
    },
    /// Pad bytes out to a fixed length
    Pad {
        hex: String,
        #[arg(long, help = "Target length in bytes")]
        length: usize,
        #[arg(long, value_parser = parse_byte, help = "Padding byte, e.g. 0xFF")]
        byte: Option<u8>,
        #[arg(long, value_parser = parse_side, help = "Which end to work on: front or end")]
        side: Option<PadSide>,
    },
    /// Strip padding bytes from one end
    Trim {
        hex: String,
        #[arg(long, value_parser = parse_byte, help = "Padding byte, e.g. 0xFF")]
        byte: Option<u8>,
        #[arg(long, value_parser = parse_side, help = "Which end to work on: front or end")]
        side: Option<PadSide>,
    },
    /// Print bytes as formatted hex
    Hexdump {
        hex: String,
        #[arg(long, help = "Bytes per line (0 for a single line)")]
        width: Option<usize>,
        #[arg(long, help = "Separator between bytes")]
        delimiter: Option<char>,
    },
    GenerateConfig {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE, help = "Config file path")]
        output: String,
    },
}

#[derive(clap::Subcommand)]
enum OidCommands {
    Encode { oid: String },
    Decode { hex: String },
}

fn parse_byte(s: &str) -> Result<u8, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u8::from_str_radix(digits, 16).map_err(|e| format!("expected a hex byte: {}", e))
}

fn parse_side(s: &str) -> Result<PadSide, String> {
    match s.to_ascii_lowercase().as_str() {
        "front" | "start" => Ok(PadSide::Front),
        "end" => Ok(PadSide::End),
        other => Err(format!("expected front or end, got {:?}", other)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("oidkit=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = KitConfig::load(cli.config.as_deref())?;
    debug!("Using config {:?}", config);

    if let Err(e) = run(cli.command, &config, cli.json) {
        if cli.json {
            println!("{}", serde_json::json!({"error": e.to_string()}));
        } else {
            eprintln!("❌ {}", e);
        }
        return Err(e);
    }
    Ok(())
}

fn run(command: Commands, config: &KitConfig, json: bool) -> Result<()> {
    let dump = &config.hexdump;

    match command {
        Commands::Oid { oid_cmd: OidCommands::Encode { oid } } => {
            let oid: ObjectIdentifier = oid.parse()?;
            let bytes = oid.to_der();
            let name = oid.name();
            if json {
                println!("{}", serde_json::json!({
                    "oid": oid.to_string(),
                    "name": name,
                    "hex": hex::encode_upper(&bytes),
                }));
            } else {
                println!("{}", dump.format(&bytes));
                if let Some(name) = name {
                    println!("   ({})", name);
                }
            }
        }
        Commands::Oid { oid_cmd: OidCommands::Decode { hex } } => {
            let bytes = parse_hex(&hex)?;
            let oid = decode_oid(&bytes)?;
            let name = known::name_of(&oid);
            if json {
                println!("{}", serde_json::json!({"oid": oid, "name": name}));
            } else {
                println!("{}", oid);
                if let Some(name) = name {
                    println!("   ({})", name);
                }
            }
        }
        Commands::Pad { hex, length, byte, side } => {
            let input = parse_hex(&hex)?;
            let padding = byte.unwrap_or(config.padding_byte);
            let padded = pad_bytes(&input, length, padding, side.unwrap_or(config.pad_side));
            print_bytes(&padded, dump, json);
        }
        Commands::Trim { hex, byte, side } => {
            let input = parse_hex(&hex)?;
            let padding = byte.unwrap_or(config.padding_byte);
            let trimmed = trim_padding(&input, padding, side.unwrap_or(config.pad_side));
            print_bytes(&trimmed, dump, json);
        }
        Commands::Hexdump { hex, width, delimiter } => {
            let input = parse_hex(&hex)?;
            let opts = HexDumpOptions {
                bytes_per_line: width.unwrap_or(dump.bytes_per_line),
                delimiter: delimiter.unwrap_or(dump.delimiter),
            };
            print_bytes(&input, &opts, json);
        }
        Commands::GenerateConfig { output } => {
            config.save(&output)?;
            if json {
                println!("{}", serde_json::json!({"success": true, "config_file": output}));
            } else {
                println!("✅ Wrote {}", output);
            }
        }
    }
    Ok(())
}

fn print_bytes(bytes: &[u8], opts: &HexDumpOptions, json: bool) {
    if json {
        println!("{}", serde_json::json!({
            "hex": hex::encode_upper(bytes),
            "length": bytes.len(),
        }));
    } else {
        println!("{}", opts.format(bytes));
    }
}
