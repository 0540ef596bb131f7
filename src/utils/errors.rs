use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnrollerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream CA error: {status} - {message}")]
    Upstream { status: StatusCode, message: String },

    #[error("CSR not found: {0}")]
    CsrNotFound(i64),

    #[error("Request canceled")]
    Canceled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EnrollerError>;
