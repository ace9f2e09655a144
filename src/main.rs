// IconGen - main.rs
//
// Command-line entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Running the generator over the fixed icon set
// 4. Console reporting and exit status

use clap::Parser;
use icongen::app::generate;
use icongen::util;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

/// IconGen - generates the extension's toolbar icons.
///
/// Draws a white "C" on a green square at 16, 48 and 128 px and writes
/// icon16.png, icon48.png and icon128.png into the output directory.
#[derive(Parser, Debug)]
#[command(name = "IconGen", version, about)]
struct Cli {
    /// Directory to write the icons into (created if missing).
    #[arg(default_value = util::constants::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        output_dir = %cli.output_dir.display(),
        "IconGen starting"
    );

    let result = generate::run_default(&cli.output_dir, |icon| {
        println!("Created {}", icon.path.display());
    });

    match result {
        Ok(_) => {
            println!("All icons generated successfully!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let mut chain = Vec::new();
            let mut source = e.source();
            while let Some(cause) = source {
                chain.push(cause.to_string());
                source = cause.source();
            }
            tracing::error!(error = %e, causes = ?chain, "Icon generation failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
