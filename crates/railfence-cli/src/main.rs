// crates/railfence-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "railfence-cli")]
#[command(about = "Rail fence transposition cipher CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode text across k zigzag rails
    Encode(cmd::encode::EncodeArgs),

    /// Decode rail fence ciphertext (inline or from a .rfz artifact)
    Decode(cmd::decode::DecodeArgs),

    /// Print the zigzag layout of a text
    Zigzag(cmd::zigzag::ZigzagArgs),

    /// Inspect a .rfz artifact (magic/crc, embedded rails, sizes)
    Inspect(cmd::inspect::InspectArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Decode(args) => cmd::decode::run(args),
        Commands::Zigzag(args) => cmd::zigzag::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
    }
}
