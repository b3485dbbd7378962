use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a console subscriber for applications embedding the client.
///
/// `RUST_LOG` takes precedence over `default_filter`. Requests and responses
/// are logged under the `ragios_client` target at debug level.
pub fn init_logging(default_filter: &str) -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let console_layer = fmt::layer()
        .with_ansi(true)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        // Another test may have installed a subscriber first.
        let _ = init_logging("ragios_client=debug");
        assert!(init_logging("info").is_err());
    }
}
