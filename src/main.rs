//! pytok CLI entry point

fn main() {
    // Token dumps go to stdout, so logging defaults to warnings only
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    pytok::cli::run();
}
