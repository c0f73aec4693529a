use clap::Args;

use crate::io::input;

#[derive(Args)]
pub struct ZigzagArgs {
    /// Text given inline
    #[arg(long)]
    pub text: Option<String>,

    /// Text read from a UTF-8 file (exactly one of --text / --in)
    #[arg(long)]
    pub r#in: Option<String>,

    /// Number of rails (k)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub rails: u32,
}

pub fn run(args: ZigzagArgs) -> anyhow::Result<()> {
    let text = input::read_text(args.text.as_deref(), args.r#in.as_deref())?;
    let rails = args.rails as usize;

    match railfence_core::render(&text, rails)? {
        Some(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        None => {
            eprintln!("{}", degenerate_notice(rails));
        }
    }

    Ok(())
}

/// Diagnostic variant for the --show-zigzag flags: everything goes to
/// stderr so stdout stays a clean payload stream.
pub fn print_zigzag_stderr(text: &str, rails: usize) -> anyhow::Result<()> {
    match railfence_core::render(text, rails)? {
        Some(lines) => {
            eprintln!("--- zigzag ({rails} rails) ---");
            for line in lines {
                eprintln!("{line}");
            }
        }
        None => {
            eprintln!("{}", degenerate_notice(rails));
        }
    }
    Ok(())
}

fn degenerate_notice(rails: usize) -> String {
    format!("no zigzag for rails={rails}: degenerate range (rails == 1 or rails >= text length)")
}
