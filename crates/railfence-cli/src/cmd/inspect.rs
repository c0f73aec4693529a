use clap::Args;

use crate::io::artifact;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input .rfz path
    #[arg(long)]
    pub r#in: String,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let (rails, cipher) = artifact::read_rfz(&args.r#in)?;

    eprintln!("--- inspect ---");
    eprintln!("file             = {}", args.r#in);
    eprintln!("rfz_ok           = true (magic + crc32 verified)");
    eprintln!("version          = {}", railfence_core::artifact::VERSION);
    eprintln!("rails            = {rails}");
    eprintln!("ciphertext_bytes = {}", cipher.len());
    eprintln!("ciphertext_chars = {}", cipher.chars().count());

    Ok(())
}
