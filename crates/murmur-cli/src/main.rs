//! murmur payload codec CLI
//!
//! A thin shell around the [`murmur_payload`] façade for inspecting and
//! producing version-1 payloads by hand: generate keys, encode a
//! payload, decode one coming off the wire. All byte arguments are hex
//! strings, with or without a `0x` prefix.
//!
//! Keys pass through argv, so this tool is for development and
//! debugging, not for handling production secrets.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use murmur_crypto::hexstr;
use murmur_payload::{
    decode, encode, DecodeOptions, EncodeOptions, PrivateKey, PublicKey, SymmetricKey,
};

/// murmur payload codec
#[derive(Parser, Debug)]
#[command(name = "murmur")]
#[command(version, about, long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "MURMUR_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a key and print it as hex
    Keygen {
        /// Generate a 32-byte symmetric key instead of a secp256k1 pair
        #[arg(long)]
        symmetric: bool,
    },

    /// Encode a payload into an encrypted version-1 byte string
    Encode {
        /// Payload bytes as hex
        payload: String,

        /// 32-byte symmetric key as hex (selects AES-256-GCM)
        #[arg(long, conflicts_with = "asym_pub_key")]
        sym_key: Option<String>,

        /// 65-byte recipient public key as hex (selects ECIES)
        #[arg(long)]
        asym_pub_key: Option<String>,

        /// 32-byte signing private key as hex (optional)
        #[arg(long)]
        sign_key: Option<String>,
    },

    /// Decode an encrypted version-1 byte string back to its payload
    Decode {
        /// Wire bytes as hex
        bytes: String,

        /// 32-byte symmetric key as hex
        #[arg(long, conflicts_with = "asym_priv_key")]
        sym_key: Option<String>,

        /// 32-byte recipient private key as hex
        #[arg(long)]
        asym_priv_key: Option<String>,
    },
}

fn setup_logging(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .context("invalid log filter")?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("failed to set subscriber")?;
    Ok(())
}

fn run_keygen(symmetric: bool) -> Result<()> {
    if symmetric {
        let key = SymmetricKey::generate();
        println!("{}", hexstr::encode(key.as_bytes()));
    } else {
        let key = PrivateKey::generate();
        println!("private: {}", hexstr::encode(key.as_bytes()));
        println!("public:  {}", hexstr::encode(key.public_key().as_bytes()));
    }
    Ok(())
}

fn run_encode(
    payload: &str,
    sym_key: Option<&str>,
    asym_pub_key: Option<&str>,
    sign_key: Option<&str>,
) -> Result<()> {
    let payload = hexstr::decode(payload).context("payload is not valid hex")?;

    let opts = EncodeOptions {
        sig_priv_key: sign_key
            .map(PrivateKey::from_hex)
            .transpose()
            .context("invalid signing key")?,
        asym_pub_key: asym_pub_key
            .map(PublicKey::from_hex)
            .transpose()
            .context("invalid recipient public key")?,
        sym_key: sym_key
            .map(SymmetricKey::from_hex)
            .transpose()
            .context("invalid symmetric key")?,
    };

    debug!(payload_len = payload.len(), "encoding payload");
    let encoded = encode(&payload, &opts)?;
    info!(
        payload_len = payload.len(),
        wire_len = encoded.bytes.len(),
        signed = encoded.signature.is_some(),
        "payload encoded"
    );

    println!("{}", hexstr::encode(&encoded.bytes));
    Ok(())
}

fn run_decode(bytes: &str, sym_key: Option<&str>, asym_priv_key: Option<&str>) -> Result<()> {
    let bytes = hexstr::decode(bytes).context("input is not valid hex")?;

    let opts = DecodeOptions {
        asym_priv_key: asym_priv_key
            .map(PrivateKey::from_hex)
            .transpose()
            .context("invalid private key")?,
        sym_key: sym_key
            .map(SymmetricKey::from_hex)
            .transpose()
            .context("invalid symmetric key")?,
    };

    debug!(wire_len = bytes.len(), "decoding payload");
    let decoded = decode(&bytes, &opts)?;
    info!(
        payload_len = decoded.payload.len(),
        signed = decoded.signature.is_some(),
        "payload decoded"
    );

    println!("payload: {}", hexstr::encode(&decoded.payload));
    if let Some(signature) = &decoded.signature {
        match &signature.public_key {
            Some(public_key) => {
                println!("signer:  {}", hexstr::encode(public_key.as_bytes()))
            }
            None => bail!("payload is signed but the public key could not be recovered"),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args.log_level)?;

    match &args.command {
        Command::Keygen { symmetric } => run_keygen(*symmetric),
        Command::Encode {
            payload,
            sym_key,
            asym_pub_key,
            sign_key,
        } => run_encode(
            payload,
            sym_key.as_deref(),
            asym_pub_key.as_deref(),
            sign_key.as_deref(),
        ),
        Command::Decode {
            bytes,
            sym_key,
            asym_priv_key,
        } => run_decode(bytes, sym_key.as_deref(), asym_priv_key.as_deref()),
    }
}
