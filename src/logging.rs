//! Diagnostic logging setup.
//!
//! Library code emits `tracing` events; the binary installs a single
//! `fmt` subscriber writing to stderr so stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

use crate::constants::ENV_LOG;
use crate::env::Env;

/// Pick the filter directive.
///
/// Priority: `DEVCHAINS_LOG`, then `-v`/`-q`, then the configured level.
pub fn filter_directive(env: &Env, verbose: u8, quiet: bool, configured: &str) -> String {
    if let Some(directive) = env.var(ENV_LOG) {
        return directive;
    }
    match (verbose, quiet) {
        (0, true) => "error".to_string(),
        (0, false) => configured.to_string(),
        (1, _) => "info".to_string(),
        (2, _) => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber.
///
/// An unparsable directive falls back to `warn`. Calling this twice is
/// harmless; the second call is ignored.
pub fn init(directive: &str) {
    let (filter, rejected) = match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new(crate::constants::DEFAULT_LOG_LEVEL), true),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    if rejected {
        tracing::warn!("ignoring invalid log filter: {directive}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env() -> Env {
        Env::mock(Vec::<(&str, &str)>::new())
    }

    #[test]
    fn env_directive_wins() {
        let env = Env::mock([("DEVCHAINS_LOG", "devchains=trace")]);
        assert_eq!(filter_directive(&env, 2, true, "warn"), "devchains=trace");
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(filter_directive(&no_env(), 0, false, "warn"), "warn");
        assert_eq!(filter_directive(&no_env(), 1, false, "warn"), "info");
        assert_eq!(filter_directive(&no_env(), 2, false, "warn"), "debug");
        assert_eq!(filter_directive(&no_env(), 5, false, "warn"), "trace");
    }

    #[test]
    fn quiet_only_applies_without_verbose() {
        assert_eq!(filter_directive(&no_env(), 0, true, "info"), "error");
        assert_eq!(filter_directive(&no_env(), 1, true, "info"), "info");
    }

    #[test]
    fn init_tolerates_bad_directive_and_repeat_calls() {
        init("not a [valid filter");
        init("info");
    }
}
