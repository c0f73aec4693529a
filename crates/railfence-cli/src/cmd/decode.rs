use clap::Args;

use crate::cmd::zigzag;
use crate::io::{artifact, input};

#[derive(Args)]
pub struct DecodeArgs {
    /// Ciphertext given inline (requires --rails)
    #[arg(long)]
    pub text: Option<String>,

    /// Input .rfz artifact path (rails read from the file)
    #[arg(long)]
    pub r#in: Option<String>,

    /// Number of rails (k). Required with --text; with --in the artifact's
    /// embedded rail count is used instead.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub rails: Option<u32>,

    /// Write the decoded text to this file instead of stdout
    #[arg(long)]
    pub out: Option<String>,

    /// Also print the decoded text's zigzag layout (to stderr)
    #[arg(long, default_value_t = false)]
    pub show_zigzag: bool,
}

pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    // Source:
    // 1) --in artifact, which embeds the rail count it was encoded with
    // 2) --text + an explicit --rails
    let (rails, cipher) = match (args.r#in.as_deref(), args.text.as_deref()) {
        (Some(path), None) => artifact::read_rfz(path)?,
        (None, Some(text)) => {
            let rails = args
                .rails
                .ok_or_else(|| anyhow::anyhow!("--rails is required with --text"))?;
            (rails as usize, text.to_string())
        }
        _ => anyhow::bail!("exactly one of --text or --in is required"),
    };

    let plain = railfence_core::decode(&cipher, rails)?;

    if let Some(path) = args.out.as_deref() {
        std::fs::write(path, &plain)?;
        eprintln!(
            "decode ok: chars={} rails={} out={}",
            plain.chars().count(),
            rails,
            path
        );
    } else {
        println!("{plain}");
        eprintln!("decode ok: chars={} rails={}", plain.chars().count(), rails);
    }

    if args.show_zigzag {
        zigzag::print_zigzag_stderr(&plain, rails)?;
    }

    Ok(())
}
