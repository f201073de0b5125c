use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("No search results available; run a search before preparing a download")]
    NoResultGroup,

    #[error("Song index {index} is out of range for a result group of {len} songs")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Runtime error: {0}")]
    Runtime(#[from] core_runtime::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
