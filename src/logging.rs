use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber for the binary.
///
/// `RUST_LOG` wins when set, otherwise `default_level` applies.
/// Output goes to stderr so the ranked report on stdout stays clean.
/// Calling it twice is harmless.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
