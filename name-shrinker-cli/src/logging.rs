use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used when RUST_LOG is unset
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Send diagnostics to stderr so stdout stays clean for results
pub fn init(verbose: u8, use_color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_color)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .init();
}
