use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed XML: {0}")]
    Malformed(String),

    #[error("Write error: {0}")]
    Write(String),
}
