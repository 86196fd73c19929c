use thiserror::Error;

/// Errors surfaced by the remote entity gateway.
///
/// `Clone` so a single fetch failure can be delivered to every subscriber of a
/// cache key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Transport(String),
    /// The server rejected the credential (401).
    #[error("{detail}")]
    Unauthorized { detail: String },
    /// Any other non-success status. `detail` is shown to the user verbatim.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
    /// The server answered with success but the body could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// Returns the HTTP status, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Unauthorized { .. } => Some(401),
            GatewayError::Rejected { status, .. } => Some(*status),
            GatewayError::Transport(_) | GatewayError::InvalidResponse(_) => None,
        }
    }

    /// Returns true for 401 responses.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, GatewayError::Unauthorized { .. })
    }
}

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_display() {
        let error = GatewayError::Transport("connection refused".to_string());
        assert_eq!(error.to_string(), "Network error: connection refused");
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_rejected_displays_detail_verbatim() {
        let error = GatewayError::Rejected {
            status: 400,
            detail: "Tag already exists".to_string(),
        };
        assert_eq!(error.to_string(), "Tag already exists");
        assert_eq!(error.status(), Some(400));
        assert!(!error.is_unauthorized());
    }

    #[test]
    fn test_unauthorized() {
        let error = GatewayError::Unauthorized {
            detail: "Invalid token".to_string(),
        };
        assert!(error.is_unauthorized());
        assert_eq!(error.status(), Some(401));
    }
}
