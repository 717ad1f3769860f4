// Primary entry point for the PNG padder.
// The lib.rs file serves as the public API; this binary only wires up logging and the CLI.

use std::process::ExitCode;

use anyhow::Context;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use png_even_pad_lib::BatchProcessor;
use png_even_pad_lib::cli::Cli;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)          // Keep colored output
        .with_writer(std::io::stderr) // Log to stderr
        .compact()                // Use compact formatter instead of pretty
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config();
    let processor = BatchProcessor::new(config).context("Invalid configuration")?;
    let targets = cli.targets();
    debug!("Positional targets: {:?}", targets);

    let summary = processor.run(&targets).with_context(|| {
        format!("Failed to process directory {}", processor.config().scan_dir.display())
    })?;

    if !summary.failures.is_empty() {
        info!("{} paths skipped", summary.failures.len());
    }
    println!(
        "{} PNG files saved to subdirectory {}",
        summary.saved(),
        processor.config().output_subdir
    );
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse_normalized();
    info!("=== PNG even padder ===");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
