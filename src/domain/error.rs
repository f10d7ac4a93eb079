use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Empty response: {0}")]
    EmptyResponseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::AuthenticationError(msg.into())
    }

    pub fn service(msg: impl Into<String>) -> Self {
        Self::ServiceError(msg.into())
    }

    pub fn empty_response(msg: impl Into<String>) -> Self {
        Self::EmptyResponseError(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn is_authentication_error(&self) -> bool {
        matches!(self, Self::AuthenticationError(_))
    }

    pub fn is_service_error(&self) -> bool {
        matches!(self, Self::ServiceError(_))
    }

    pub fn is_empty_response(&self) -> bool {
        matches!(self, Self::EmptyResponseError(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_and_detail() {
        let err = DomainError::authentication("OPENAI_API_KEY is not set");
        assert_eq!(
            err.to_string(),
            "Authentication error: OPENAI_API_KEY is not set"
        );
    }

    #[test]
    fn predicates_match_only_their_variant() {
        let err = DomainError::empty_response("no choices");
        assert!(err.is_empty_response());
        assert!(!err.is_service_error());
        assert!(!err.is_authentication_error());
        assert!(!err.is_invalid_input());
    }
}
