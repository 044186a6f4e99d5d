use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

/// Convert GIF animations to PNG spritesheets.
#[derive(Parser, Debug)]
#[command(name = "gifsheet", version)]
struct Cli {
    /// Directory containing GIF files.
    input_dir: PathBuf,

    /// Directory to save spritesheets (defaults to each GIF's own directory).
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let processed = gifsheet::process_directory(&cli.input_dir, cli.output_dir.as_deref())
        .with_context(|| format!("process '{}'", cli.input_dir.display()))?;

    println!("Processed {processed} GIF files");
    Ok(())
}
