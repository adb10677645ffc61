use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeanStdError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("Parse error on line {line}: {message}")]
    Parse { message: String, line: usize },
}

pub type Result<T> = std::result::Result<T, MeanStdError>;

// Helper conversions
impl From<config::ConfigError> for MeanStdError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
