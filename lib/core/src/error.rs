use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Network data not loaded")]
    DatasetNotLoaded,

    #[error("Dataset not available: {0}")]
    DatasetMissing(String),

    #[error("Dataset parse error: {0}")]
    DatasetParse(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Client-attributable errors map to a 4xx response; everything else is
    /// a server fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::DatasetNotLoaded
                | Error::DatasetMissing(_)
                | Error::MissingParameter(_)
        )
    }
}
