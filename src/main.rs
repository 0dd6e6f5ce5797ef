use anyhow::{Context, Result};
use clap::Parser;
use html_from_docx::package::Package;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input .docx with reviewer comments.
    input: PathBuf,

    /// Output HTML path.
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut package =
        Package::open(&args.input).with_context(|| format!("open {}", args.input.display()))?;
    let html = html_from_docx::convert(&mut package)
        .with_context(|| format!("convert {}", args.input.display()))?;
    fs::write(&args.output, html)
        .with_context(|| format!("write {}", args.output.display()))?;

    println!("HTML file saved to {}", args.output.display());
    Ok(())
}
