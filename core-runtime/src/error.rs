use thiserror::Error;

/// Failures raised while setting up the search core.
#[derive(Error, Debug)]
pub enum Error {
    /// Search settings or logging setup rejected
    #[error("Invalid search core configuration: {0}")]
    Config(String),

    /// A bridge the coordinator cannot run without was not provided
    #[error("{capability} bridge not provided: {message}")]
    CapabilityMissing { capability: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
