use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("missing package part: {0}")]
    MissingPart(String),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, Error>;
