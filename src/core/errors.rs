//! Custom error types for API operations

use thiserror::Error;

/// Errors raised while talking to the scripture API
#[derive(Error, Debug)]
pub enum BibleError {
    /// Connection failure, timeout or a body that is not JSON
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("API error: {status} - {message}")]
    Api {
        status: u16,
        message: String,
    },

    /// Body decoded but an expected field is missing or mistyped
    #[error("{message}")]
    ResponseShape {
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },
}

impl BibleError {
    /// True for failures at the HTTP layer, as opposed to shape errors
    pub fn is_transport(&self) -> bool {
        matches!(self, BibleError::Network(_) | BibleError::Api { .. })
    }

    pub(crate) fn shape(err: serde_json::Error) -> Self {
        BibleError::ResponseShape {
            message: err.to_string(),
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, BibleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let api = BibleError::Api {
            status: 401,
            message: "unauthorized".to_string(),
        };
        assert!(api.is_transport());
        assert_eq!(api.to_string(), "API error: 401 - unauthorized");

        let shape = BibleError::ResponseShape {
            message: "missing field `data`".to_string(),
        };
        assert!(!shape.is_transport());
        assert_eq!(shape.to_string(), "missing field `data`");
    }

    #[test]
    fn test_shape_from_serde() {
        let err = serde_json::from_str::<Vec<u8>>("{}").unwrap_err();
        assert!(matches!(BibleError::shape(err), BibleError::ResponseShape { .. }));
    }
}
