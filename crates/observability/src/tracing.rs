//! Subscriber setup for the ledger binaries.
//!
//! Events go to stderr as one JSON object per line. Stdout is left to the
//! interactive menu, so a session transcript never mixes with log output.

use tracing_subscriber::EnvFilter;

/// Install the process subscriber.
///
/// `RUST_LOG` wins when it parses; otherwise `default_directive` is used.
/// A second call finds a subscriber already installed and leaves it alone.
pub fn init(default_directive: &str) {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = select_filter(from_env.as_deref(), default_directive);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn select_filter(from_env: Option<&str>, default_directive: &str) -> EnvFilter {
    from_env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_applies_without_env() {
        assert_eq!(select_filter(None, "warn").to_string(), "warn");
    }

    #[test]
    fn env_directives_override_the_default() {
        let filter = select_filter(Some("ledgerbank_bank=debug"), "warn");
        assert_eq!(filter.to_string(), "ledgerbank_bank=debug");
    }

    #[test]
    fn repeated_init_keeps_the_first_subscriber() {
        init("warn");
        init("debug");
        ::tracing::info!("logging still works after a second init");
    }
}
