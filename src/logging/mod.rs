use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the logging/tracing subsystem.
///
/// Precedence: `verbose`, then `RUST_LOG`, then the configured directive.
/// Output goes to stderr; stdout is reserved for computed versions.
pub fn init_logging(verbose: bool, configured: Option<&str>) {
    let filter = build_filter(verbose, configured);

    // A subscriber may already be installed (tests, embedding callers).
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn build_filter(verbose: bool, configured: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("vercalc=debug");
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    configured
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new("vercalc=info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_enables_debug() {
        let filter = build_filter(true, Some("vercalc=warn"));
        assert_eq!(filter.to_string(), "vercalc=debug");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logging(false, None);
        init_logging(true, None);
    }
}
