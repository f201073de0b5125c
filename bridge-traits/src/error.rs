use thiserror::Error;

/// Failure reported by a host-provided bridge.
///
/// Every variant carries the human-readable message produced by the host.
/// `Display` renders that message verbatim so it can be handed straight to a
/// view; [`BridgeError::message`] exposes it without formatting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    OperationFailed(String),
}

impl BridgeError {
    /// The message carried by this error, untouched.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(msg) | Self::InvalidInput(msg) | Self::OperationFailed(msg) => msg,
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_verbatim() {
        let err = BridgeError::OperationFailed("network unreachable".to_string());
        assert_eq!(err.message(), "network unreachable");
        assert_eq!(err.to_string(), "network unreachable");
    }

    #[test]
    fn test_empty_message() {
        let err = BridgeError::NotFound(String::new());
        assert_eq!(err.message(), "");
    }
}
