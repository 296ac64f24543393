//! Error type shared by the loader, the builder, and the driver.

use thiserror::Error as ThisError;

/// Errors produced while loading cities or constructing a tour.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A tour was requested over zero cities, or a loader produced none.
    #[error("cannot construct a tour from an empty city list")]
    EmptyInput,
    /// The city source could not be opened or read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A configuration document could not be parsed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// The global logger could not be installed.
    #[error("logger init failed: {0}")]
    Logger(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds an [`Error::InvalidConfig`] from any message.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
