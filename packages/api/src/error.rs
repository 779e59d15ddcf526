use thiserror::Error;

/// Everything a backend call can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Required local input is missing. Raised before any request is sent.
    #[error("{0}")]
    Validation(String),

    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Http { status: u16, message: Option<String> },

    /// The request never completed or the body could not be decoded.
    #[error("network error: {0}")]
    Transport(String),

    /// An auth endpoint reported success without handing out a token.
    #[error("Login succeeded but token not returned by server.")]
    MissingToken,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// The message the backend supplied, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http {
                message: Some(m), ..
            } => Some(m.as_str()),
            _ => None,
        }
    }

    /// Text to show the user: validation and server messages verbatim,
    /// `fallback` for everything the user can't act on.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation(m) => m.clone(),
            ApiError::Http {
                message: Some(m), ..
            } => m.clone(),
            ApiError::MissingToken => self.to_string(),
            ApiError::Http { message: None, .. } | ApiError::Transport(_) => fallback.to_string(),
        }
    }

    /// 401/403: the credential was rejected, typically because the session
    /// ended between reading the token and using it.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401 | 403, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Http {
            status: 409,
            message: Some("Patient already exists".into()),
        };
        assert_eq!(err.user_message("Signup failed"), "Patient already exists");
        assert_eq!(err.server_message(), Some("Patient already exists"));
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Signup failed"), "Signup failed");
        assert_eq!(
            ApiError::Transport("offline".into()).user_message("Signup failed"),
            "Signup failed"
        );
    }

    #[test]
    fn test_missing_token_message() {
        assert_eq!(
            ApiError::MissingToken.user_message("ignored"),
            "Login succeeded but token not returned by server."
        );
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::Http { status: 401, message: None }.is_unauthorized());
        assert!(!ApiError::Http { status: 500, message: None }.is_unauthorized());
        assert!(!ApiError::MissingToken.is_unauthorized());
    }
}
