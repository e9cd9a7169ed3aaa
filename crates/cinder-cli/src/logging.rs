//! Log subscriber setup
//!
//! Library crates only emit `tracing` events. The binary decides where they
//! go: always stderr, since stdout carries program output.

use tracing::Level;

/// Level from the `-v` count, falling back to `CINDER_LOG`, then `warn`
pub fn level(verbose: u8, env_level: Option<&str>) -> Level {
    match verbose {
        0 => env_level
            .and_then(|name| name.parse::<Level>().ok())
            .unwrap_or(Level::WARN),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber
pub fn init(verbose: u8, json: bool, env_level: Option<&str>) {
    let max_level = level(verbose, env_level);
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(max_level)
        .with_target(false);

    // A second install (e.g. in tests) is not an error worth reporting
    let _ = if json {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.try_init()
    };
}
