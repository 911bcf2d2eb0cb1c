use thiserror::Error;

#[derive(Error, Debug)]
pub enum WmsError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Logging setup error: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for WmsError {
    fn from(err: config::ConfigError) -> Self {
        WmsError::Configuration(err.to_string())
    }
}
