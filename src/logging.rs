//! Diagnostic logging for the CLI.
//!
//! Demo output is part of each demo's view; this is only for tracing what the
//! tool itself does, and it always goes to stderr so `--json` output stays
//! clean on stdout.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV: &str = "PATTERNALYSIS_LOG";

/// Crate-level directive for a `-v` count: 0 → warn, 1 → info, 2 → debug,
/// anything higher → trace.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "patternalysis=warn",
        1 => "patternalysis=info",
        2 => "patternalysis=debug",
        _ => "patternalysis=trace",
    }
}

/// Build the filter: `PATTERNALYSIS_LOG` when set and parseable, otherwise
/// the verbosity default.
pub fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(verbosity: u8) {
    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(console_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_the_default_level() {
        assert_eq!(default_directive(0), "patternalysis=warn");
        assert_eq!(default_directive(2), "patternalysis=debug");
        assert_eq!(default_directive(9), "patternalysis=trace");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logging(0);
        init_logging(3);
    }
}
