use clap::Args;

use crate::cmd::zigzag;
use crate::io::{artifact, input};

#[derive(Args)]
pub struct EncodeArgs {
    /// Plaintext given inline
    #[arg(long)]
    pub text: Option<String>,

    /// Plaintext read from a UTF-8 file (exactly one of --text / --in)
    #[arg(long)]
    pub r#in: Option<String>,

    /// Number of rails (k). Must be >= 1; k == 1 encodes to the identity.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub rails: u32,

    /// Write a .rfz artifact instead of printing the ciphertext to stdout.
    /// The artifact embeds the rail count, so decode needs no --rails.
    #[arg(long)]
    pub out: Option<String>,

    /// Also print the plaintext's zigzag layout (to stderr)
    #[arg(long, default_value_t = false)]
    pub show_zigzag: bool,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let plain = input::read_text(args.text.as_deref(), args.r#in.as_deref())?;
    let rails = args.rails as usize;

    let cipher = railfence_core::encode(&plain, rails)?;

    if let Some(path) = args.out.as_deref() {
        artifact::write_rfz(path, rails, &cipher)?;
        eprintln!(
            "encode ok: chars={} rails={} out={}",
            plain.chars().count(),
            rails,
            path
        );
    } else {
        println!("{cipher}");
        eprintln!("encode ok: chars={} rails={}", plain.chars().count(), rails);
    }

    if args.show_zigzag {
        zigzag::print_zigzag_stderr(&plain, rails)?;
    }

    Ok(())
}
