use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input file \"{file}\" does not exist")]
    InputNotFound { file: String },
    #[error("Error reading or writing \"{file}\": {source}")]
    FileIo {
        file: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("Error reading or writing bytes: {0}")]
    BytesIo(Box<dyn std::error::Error + Send + Sync>),
    #[error("Invalid config file \"{file}\": {source}")]
    Config {
        file: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("Line width must be at least 1, but got {0}")]
    InvalidWidth(usize),
    #[error("Substitution needle cannot be empty")]
    EmptyNeedle,
}

impl Error {
    pub(crate) fn file_io(file: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Error::FileIo {
            file: file.as_ref().display().to_string(),
            source: Box::new(source),
        }
    }
}
