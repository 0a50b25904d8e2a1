//! wotsctl - WOTS+ key, signature and verification tool

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;
use wotsp::account::WidePublicKey;
use wotsp::utils::decode_hex;
use wotsp::wots::{self, hash::sha256, MasterSeed, MessageDigest, PublicSeed, AddrSeed, Signature};
use wotsp::Error;

#[derive(Parser)]
#[command(name = "wotsctl")]
#[command(about = "WOTS+ One-Time Signature Tool", long_about = None)]
struct Cli {
    /// Print JSON instead of plain lines
    #[arg(long, global = true)]
    json: bool,

    /// Log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the private, public and address seeds of a master seed
    Derive {
        /// Master seed (32 bytes hex)
        #[arg(long)]
        seed: String,
    },

    /// Generate a wide (2208-byte) public key
    Keygen {
        /// Master seed (32 bytes hex); a random one is generated when omitted
        #[arg(long)]
        seed: Option<String>,

        /// Overwrite the trailing 12 bytes with the default account tag
        #[arg(long)]
        tag: bool,
    },

    /// Sign a digest with a master seed. Never sign twice with one seed!
    Sign {
        /// Master seed (32 bytes hex)
        #[arg(long)]
        seed: String,

        #[command(flatten)]
        input: DigestInput,
    },

    /// Verify a signature against a wide public key
    Verify {
        /// Wide public key (2208 bytes hex)
        #[arg(long)]
        public_key: String,

        /// Signature (2144 bytes hex)
        #[arg(long)]
        signature: String,

        #[command(flatten)]
        input: DigestInput,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct DigestInput {
    /// Digest to sign (32 bytes hex)
    #[arg(long)]
    digest: Option<String>,

    /// Message text, hashed with SHA-256 first
    #[arg(long)]
    message: Option<String>,
}

impl DigestInput {
    fn resolve(&self) -> Result<MessageDigest, Error> {
        match (&self.digest, &self.message) {
            (Some(text), _) => decode_fixed("digest", text),
            (None, Some(message)) => Ok(sha256(message.as_bytes())),
            (None, None) => Err(Error::InvalidInput("either --digest or --message is required".into())),
        }
    }
}

#[derive(Serialize)]
struct SeedsOutput {
    public_seed: PublicSeed,
    addr_seed: AddrSeed,
    private_seed: String,
}

#[derive(Serialize)]
struct KeygenOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    master_seed: Option<String>,
    public_key: WidePublicKey,
}

#[derive(Serialize)]
struct SignOutput {
    digest: String,
    signature: Signature,
}

#[derive(Serialize)]
struct VerifyOutput {
    digest: String,
    valid: bool,
}

fn decode_fixed<const L: usize>(what: &str, text: &str) -> Result<[u8; L], Error> {
    let bytes = decode_hex(text).map_err(|e| Error::InvalidInput(format!("{}: {}", what, e)))?;
    <[u8; L]>::try_from(bytes.as_slice()).map_err(|_| {
        Error::InvalidInput(format!("{}: expected {} bytes, got {}", what, L, bytes.len()))
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Error> {
    let text = serde_json::to_string_pretty(value).map_err(|e| Error::Serialization(e.to_string()))?;
    println!("{}", text);
    Ok(())
}

fn run(cli: Cli) -> Result<bool, Error> {
    match cli.command {
        Commands::Derive { seed } => {
            let master = MasterSeed::new(decode_fixed("master seed", &seed)?);
            let seeds = master.derive();
            let output = SeedsOutput {
                public_seed: *seeds.public_seed(),
                addr_seed: *seeds.addr_seed(),
                private_seed: hex::encode(seeds.private_seed().as_bytes()),
            };
            if cli.json {
                print_json(&output)?;
            } else {
                println!("Private seed: {}", output.private_seed);
                println!("Public seed:  {}", output.public_seed.to_hex());
                println!("Addr seed:    {}", output.addr_seed.to_hex());
            }
        }

        Commands::Keygen { seed, tag } => {
            let (master, generated) = match seed {
                Some(text) => (MasterSeed::new(decode_fixed("master seed", &text)?), false),
                None => (MasterSeed::generate(), true),
            };
            let seeds = master.derive();
            let mut wide = WidePublicKey::from_parts(&seeds.public_key(), seeds.public_seed(), seeds.addr_seed());
            if tag {
                wide = wide.with_default_tag();
            }

            let output = KeygenOutput {
                master_seed: generated.then(|| hex::encode(master.as_bytes())),
                public_key: wide,
            };
            if cli.json {
                print_json(&output)?;
            } else {
                if let Some(master_hex) = &output.master_seed {
                    println!("{}", "Generated new master seed (keep it secret, sign once)".yellow().bold());
                    println!("Master seed: {}", master_hex);
                }
                println!("Public key:  {}", output.public_key.to_hex());
            }
        }

        Commands::Sign { seed, input } => {
            let master = MasterSeed::new(decode_fixed("master seed", &seed)?);
            let digest = input.resolve()?;
            let signature = master.derive().sign(&digest);

            let output = SignOutput { digest: hex::encode(digest), signature };
            if cli.json {
                print_json(&output)?;
            } else {
                println!("Digest:    {}", output.digest);
                println!("Signature: {}", output.signature.to_hex());
            }
        }

        Commands::Verify { public_key, signature, input } => {
            let wide = WidePublicKey::from_hex(&public_key)?;
            let signature = Signature::new(decode_fixed("signature", &signature)?);
            let digest = input.resolve()?;

            let valid = match wide.verify(&signature, &digest) {
                Ok(()) => true,
                Err(wots::WotsError::InvalidSignature) => false,
                Err(e) => return Err(e.into()),
            };

            if cli.json {
                print_json(&VerifyOutput { digest: hex::encode(digest), valid })?;
            } else if valid {
                println!("{}", "Signature valid".green().bold());
            } else {
                println!("{}", "Signature INVALID".red().bold());
            }
            return Ok(valid);
        }

        Commands::Version => {
            println!("wotsctl v{}", wotsp::VERSION);
            println!("WOTS+ One-Time Signatures");
            println!("\nParameters:");
            println!("  • n = {} bytes (SHA-256)", wots::N);
            println!("  • w = {}, {} chains ({} message + {} checksum)", wots::W, wots::LEN, wots::LEN_1, wots::LEN_2);
            println!("  • signature / public key: {} bytes", wots::SIG_BYTES);
        }
    }
    Ok(true)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}
