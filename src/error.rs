
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineageError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Retrieval error: {0}")]
    Retrieval(String),
    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, LineageError>;

// Helper conversions
impl From<config::ConfigError> for LineageError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
impl From<std::io::Error> for LineageError {
    fn from(e: std::io::Error) -> Self { Self::Retrieval(e.to_string()) }
}
impl From<serde_json::Error> for LineageError {
    fn from(e: serde_json::Error) -> Self { Self::Render(e.to_string()) }
}
