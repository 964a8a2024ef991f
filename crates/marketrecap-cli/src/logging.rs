use tracing_subscriber::EnvFilter;

use crate::error::CliError;

const DEFAULT_FILTER: &str = "info";

/// Install the stderr subscriber. `--log-level` wins over `RUST_LOG`, which
/// wins over the `info` default. Stdout is left to the report.
pub fn init(level: Option<&str>) -> Result<(), CliError> {
    let filter = match level {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|error| CliError::Logging(format!("invalid log level '{directives}': {error}")))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| CliError::Logging(error.to_string()))
}
