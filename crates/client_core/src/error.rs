use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server rejected request with status {status}: {message}")]
    Api { status: StatusCode, message: String },
    #[error("unsupported attachment '{filename}': only jpeg and png images are accepted")]
    UnsupportedAttachment { filename: String },
}

pub type ClientResult<T> = Result<T, ClientError>;
