use thiserror::Error;

/// Core domain errors
///
/// Expected business outcomes (unknown id, duplicate e-mail) never travel
/// through this type; stores report them as `Ok(false)` / `Ok(None)`.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Candidate '7' not found");
        assert_eq!(error.to_string(), "Not found: Candidate '7' not found");
    }

    #[test]
    fn test_storage_error() {
        let error = DomainError::storage("Failed to acquire write lock");
        assert_eq!(
            error.to_string(),
            "Storage error: Failed to acquire write lock"
        );
    }

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("Unknown storage backend 'redis'");
        assert_eq!(
            error.to_string(),
            "Configuration error: Unknown storage backend 'redis'"
        );
    }
}
