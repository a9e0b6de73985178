//! Logging setup, powered by tracing-subscriber.

use tracing_subscriber::EnvFilter;

/// Map `-v` occurrences and `--quiet` to a base level.
fn base_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter. `RUST_LOG` wins over the command-line level when set.
fn build_env_filter(verbose: u8, quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = base_level(verbose, quiet);
        // sqlx logs every statement at info
        EnvFilter::new(format!("{level},sqlx=warn"))
    })
}

/// Install the global subscriber, writing to stderr so stdout stays
/// reserved for command output. Calling it twice is harmless.
pub fn init_logging(verbose: u8, quiet: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(verbose, quiet))
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_level() {
        assert_eq!(base_level(0, false), "warn");
        assert_eq!(base_level(1, false), "info");
        assert_eq!(base_level(2, false), "debug");
        assert_eq!(base_level(9, false), "trace");
        assert_eq!(base_level(3, true), "error");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(0, true);
        init_logging(2, false);
    }
}
