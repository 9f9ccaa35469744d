//! Logging setup for the `ccrm` binary
//!
//! Log lines go to stderr so that stdout carries only rendered output.
//! `RUST_LOG` overrides the default filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "campus_records=debug,ccrm=debug,info"
    } else {
        "campus_records=info,ccrm=info"
    }
}

/// Install the global subscriber. Call once, early in `main`.
pub fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_parses() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directive(verbose)).is_ok());
        }
        assert!(default_directive(true).contains("campus_records=debug"));
    }
}
