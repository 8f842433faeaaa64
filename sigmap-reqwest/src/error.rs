use sigmap::MappingError;
use thiserror::Error;

/// Failure of a reqwest-backed signal.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent or the body could not be read.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// An operator rejected the response.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl Error {
    /// The mapping failure, if this is one.
    pub fn as_mapping(&self) -> Option<&MappingError> {
        match self {
            Error::Mapping(error) => Some(error),
            Error::Transport(_) => None,
        }
    }
}
