use anyhow::Context;
use ciphercore::cipher::{self, Algorithm, Mode};
use clap::Parser;
use std::io::Read;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// CipherCore text transform tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Algorithm: caesar, vigenere, reverse, xor, base64, symmetric, toy-asymmetric
    #[arg(short, long, default_value = "caesar")]
    algorithm: String,

    /// Run the decrypt direction instead of encrypt
    #[arg(short, long)]
    decrypt: bool,

    /// Key material (shift for caesar, keyword for vigenere, key/passphrase
    /// for xor and symmetric; ignored by the rest)
    #[arg(short, long)]
    key: Option<String>,

    /// Text to transform; read from stdin when omitted
    text: Option<String>,
}

fn main() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::WARN.into())
                    .from_env_lossy(),
            )
            .finish(),
    )
    .unwrap();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let algorithm: Algorithm = args
        .algorithm
        .parse()
        .map_err(|e: ciphercore::Error| anyhow::anyhow!(e))?;
    let mode = if args.decrypt { Mode::Decrypt } else { Mode::Encrypt };

    let text = match &args.text {
        Some(text) => text.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .with_context(|| "failed to read text from stdin")?;
            // Trailing newline is an artifact of the pipe, not the message.
            buf.trim_end_matches('\n').to_string()
        }
    };

    let result = cipher::transform(algorithm, mode, &text, args.key.as_deref());
    if result.success {
        println!("{}", result.output);
        Ok(())
    } else {
        anyhow::bail!(
            "{} {} failed: {}",
            algorithm,
            mode,
            result.error.unwrap_or_else(|| "unknown error".to_string())
        )
    }
}
