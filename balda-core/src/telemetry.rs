//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Filter used when no directive is supplied or the supplied one does not parse.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a stderr `fmt` subscriber filtered by `filter`.
///
/// Returns `false` if a global subscriber was already installed, in which case
/// nothing changes. Safe to call more than once.
pub fn init_tracing(filter: Option<&str>) -> bool {
    let filter = filter
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        init_tracing(Some("balda_core=debug"));
        assert!(!init_tracing(Some("debug")));
    }

    #[test]
    fn test_bad_directive_falls_back() {
        // Must not panic regardless of whether another test installed first.
        init_tracing(Some("[[not a filter"));
    }
}
