use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Author not found: {0}")]
    AuthorNotFound(Uuid),

    #[error("Post not found: {0}")]
    PostNotFound(Uuid),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl DomainError {
    pub fn to_status_code(&self) -> u16 {
        match self {
            Self::UserNotFound(_) | Self::AuthorNotFound(_) | Self::PostNotFound(_) => 404,
            Self::ValidationError(_) => 422,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.to_status_code() == 404
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_map_to_404() {
        let id = Uuid::new_v4();
        assert_eq!(DomainError::UserNotFound(id).to_status_code(), 404);
        assert_eq!(DomainError::AuthorNotFound(id).to_status_code(), 404);
        assert_eq!(DomainError::PostNotFound(id).to_status_code(), 404);
        assert!(DomainError::PostNotFound(id).is_not_found());
    }

    #[test]
    fn validation_maps_to_422() {
        let err = DomainError::validation("Limit cannot be negative");
        assert_eq!(err.to_status_code(), 422);
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Validation error: Limit cannot be negative");
    }
}
