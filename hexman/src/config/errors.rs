use thiserror::Error;

/// Errors emitted while reading the config file.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("config IO failed")]
    Io(#[from] std::io::Error),
}
