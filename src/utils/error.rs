use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Timestamp error: {message}")]
    TimestampError { message: String },
}

pub type Result<T> = std::result::Result<T, ProfileError>;
