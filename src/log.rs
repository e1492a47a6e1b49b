use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// Used when RUST_LOG is unset or unparsable; keeps a normal run silent.
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Events go to stderr, filtered by `RUST_LOG`.
pub fn init() -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(filter))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails() {
        // Another test may already have installed it; either way the
        // global subscriber is set after the first call.
        let _ = init();
        assert!(init().is_err());
    }
}
