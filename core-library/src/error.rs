use bridge_traits::error::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),

    #[error("{entity_type} {id} not found")]
    NotFound { entity_type: String, id: String },

    #[error("Invalid input: {field} - {message}")]
    InvalidInput { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, LibraryError>;

impl From<LibraryError> for BridgeError {
    fn from(err: LibraryError) -> Self {
        match err {
            LibraryError::Bridge(inner) => inner,
            LibraryError::NotFound { .. } => BridgeError::NotFound(err.to_string()),
            LibraryError::InvalidInput { message, .. } => BridgeError::InvalidInput(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_bridge_not_found() {
        let err = LibraryError::NotFound {
            entity_type: "Song".to_string(),
            id: "9".to_string(),
        };
        assert_eq!(
            BridgeError::from(err),
            BridgeError::NotFound("Song 9 not found".to_string())
        );
    }

    #[test]
    fn test_invalid_input_keeps_only_message() {
        let err = LibraryError::InvalidInput {
            field: "key".to_string(),
            message: "Search key cannot be empty".to_string(),
        };
        assert_eq!(BridgeError::from(err).message(), "Search key cannot be empty");
    }

    #[test]
    fn test_bridge_error_round_trips() {
        let inner = BridgeError::OperationFailed("disk full".to_string());
        let err = LibraryError::from(inner.clone());
        assert_eq!(BridgeError::from(err), inner);
    }
}
