// src/log.rs
use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

/// Install the stderr subscriber. `RUST_LOG` wins over the flags; otherwise
/// this crate logs at info (`-v` debug, `-vv` trace, `-q` warn) and
/// dependencies at warn. Lines carry the elapsed time since start.
pub fn init(verbose: u8, quiet: bool) {
    let level = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,fide_scrape={level}")));

    // A second init (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(Uptime::default())
        .with_target(false)
        .try_init();
}
