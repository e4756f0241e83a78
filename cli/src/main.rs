//! pdfdump CLI - print the text of every PDF page to stdout

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

/// Document read when no FILE is given.
const DEFAULT_INPUT: &str = "base-brand-assets/Base Brand Guidelines.pdf";

#[derive(Parser)]
#[command(name = "pdfdump")]
#[command(version)]
#[command(about = "Print the text of every PDF page, one newline after each page", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
    input: PathBuf,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli.input) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("extracting text from {}", input.display());

    // Nothing reaches stdout until every page has been extracted.
    let text = pdfdump::extract_text(input)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;

    Ok(())
}
