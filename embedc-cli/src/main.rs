use anyhow::Result;
use clap::Parser;

/// Binary-to-C-header embedding CLI
#[derive(Parser)]
#[command(
    name = "embedc",
    about = "Embed a binary file into a C header as a const char array",
    version,
    author
)]
struct Cli {
    /// Path to the binary file to embed
    #[arg(required = true)]
    input: std::path::PathBuf,

    /// Path of the header file to generate
    #[arg(required = true)]
    output: std::path::PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    embedc_core::embed(&cli.input, &cli.output)?;
    log::info!(
        "wrote {} from {}",
        cli.output.display(),
        cli.input.display()
    );

    Ok(())
}
