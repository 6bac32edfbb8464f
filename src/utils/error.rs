use crate::model::errors::SsmServiceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Duplicated keys ({key}) are provided for {field}")]
    DuplicateKey { field: String, key: String },

    #[error("Validation failed at {path}: {reason}")]
    ValidationError { path: String, reason: String },

    #[error("Cannot marshal {path}: {message}")]
    MarshallingError { path: String, message: String },

    #[error("Schema error: {message}")]
    SchemaError { message: String },

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Unknown shape: {0}")]
    UnknownShape(String),

    #[error("Operation {operation} expects {expected}, got {actual}")]
    ShapeMismatch {
        operation: String,
        expected: String,
        actual: String,
    },

    #[error("Service error: {0}")]
    Service(#[from] SsmServiceError),

    #[error("Transport failure: {message}")]
    TransportError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    CallerInput,
    Schema,
    Service,
    Transport,
    System,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ModelError {
    pub fn marshalling(path: impl Into<String>, message: impl Into<String>) -> Self {
        ModelError::MarshallingError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn validation(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ModelError::ValidationError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn schema(message: impl Into<String>) -> Self {
        ModelError::SchemaError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ModelError::InvalidArgument { .. }
            | ModelError::DuplicateKey { .. }
            | ModelError::ValidationError { .. }
            | ModelError::MarshallingError { .. }
            | ModelError::SerializationError(_) => ErrorCategory::CallerInput,
            ModelError::SchemaError { .. }
            | ModelError::UnknownOperation(_)
            | ModelError::UnknownShape(_)
            | ModelError::ShapeMismatch { .. } => ErrorCategory::Schema,
            ModelError::Service(_) => ErrorCategory::Service,
            ModelError::TransportError { .. } => ErrorCategory::Transport,
            ModelError::IoError(_) => ErrorCategory::System,
            ModelError::ConfigError { .. }
            | ModelError::ConfigValidationError { .. }
            | ModelError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::CallerInput => ErrorSeverity::High,
            ErrorCategory::Service | ErrorCategory::Transport => ErrorSeverity::Medium,
            ErrorCategory::Schema => ErrorSeverity::High,
            ErrorCategory::System | ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ModelError::InvalidArgument { .. } => {
                "Use one of the documented wire values for this field".to_string()
            }
            ModelError::DuplicateKey { field, .. } => {
                format!("Each key may appear only once in {}", field)
            }
            ModelError::ValidationError { path, .. } => {
                format!("Fix the value at {} or disable client-side validation", path)
            }
            ModelError::MarshallingError { path, .. } => {
                format!("Check the type of the value at {}", path)
            }
            ModelError::SchemaError { .. } => "Review the shape definitions".to_string(),
            ModelError::UnknownOperation(_) => {
                "Run `ssm-model operations` to list known operations".to_string()
            }
            ModelError::UnknownShape(_) => {
                "Check the shape name; names are case-sensitive".to_string()
            }
            ModelError::ShapeMismatch { expected, .. } => {
                format!("Pass a {} for this operation", expected)
            }
            ModelError::Service(e) if e.is_throttling_or_limit() => {
                "Reduce request volume or raise the service quota".to_string()
            }
            ModelError::Service(_) => "Inspect the service message and request".to_string(),
            ModelError::TransportError { .. } => {
                "Check connectivity and credentials of the transport".to_string()
            }
            ModelError::IoError(_) => "Check file paths and permissions".to_string(),
            ModelError::SerializationError(_) => "Check that the input is valid JSON".to_string(),
            ModelError::ConfigError { .. }
            | ModelError::ConfigValidationError { .. }
            | ModelError::InvalidConfigValueError { .. } => {
                "Review the configuration file and environment variables".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::CallerInput => format!("Invalid input: {}", self),
            ErrorCategory::Schema => format!("Model problem: {}", self),
            ErrorCategory::Service => format!("The service rejected the request: {}", self),
            ErrorCategory::Transport => format!("Could not reach the service: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err = ModelError::DuplicateKey {
            field: "Parameters".to_string(),
            key: "commands".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::CallerInput);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("commands"));

        let io = ModelError::from(std::io::Error::other("disk"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_user_friendly_message() {
        let err = ModelError::UnknownOperation("Frobnicate".to_string());
        assert!(err.user_friendly_message().starts_with("Model problem"));
        assert!(err.recovery_suggestion().contains("operations"));
    }
}
