// IconGen - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug (sets the filter to debug)
//
// Output: stderr only. stdout is reserved for the per-icon confirmation
// lines so build scripts can capture them cleanly.

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
///
/// Priority: RUST_LOG env var > CLI --debug flag > default "info".
pub fn init(debug_flag: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = EnvFilter::new(filter_directive(rust_log.as_deref(), debug_flag));

    // `try_init` so a second call (e.g. from tests) is harmless.
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .try_init();

    if result.is_ok() {
        tracing::debug!(
            app = super::constants::APP_NAME,
            version = super::constants::APP_VERSION,
            "Logging initialised"
        );
    }
}

/// Pick the filter directive from the RUST_LOG value and the --debug flag.
fn filter_directive(rust_log: Option<&str>, debug_flag: bool) -> &str {
    match rust_log {
        Some(directive) => directive,
        None if debug_flag => "debug",
        None => super::constants::DEFAULT_LOG_LEVEL,
    }
}
