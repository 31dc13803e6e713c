use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Initialize tracing output on stderr. `-v` raises the default level to
/// debug; an explicit `RUST_LOG` still takes precedence.
pub fn init(verbose: bool) {
    let default_level =
        if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
