use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins over the built-in directive when it is set.
fn registry_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Human-readable logs for the interactive shell and the one-shot commands.
/// Everything goes to stderr; stdout carries only registry output.
pub fn init_cli_logger(verbose: bool) {
    // Verbose raises the crate to debug, dependencies stay at info
    let directive = if verbose {
        "media_registry=debug,info"
    } else {
        "media_registry=info"
    };

    let format = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(registry_filter(directive))
        .with(format)
        .init();
}

pub fn init_json_logger() {
    // One JSON object per event, still on stderr
    let format = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .json()
        .with_current_span(false);

    tracing_subscriber::registry()
        .with(registry_filter("media_registry=info"))
        .with(format)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_filter_uses_directive_without_env() {
        std::env::remove_var("RUST_LOG");
        let filter = registry_filter("media_registry=debug");
        assert_eq!(filter.to_string(), "media_registry=debug");
    }
}
