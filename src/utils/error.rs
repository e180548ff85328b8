use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeetingCostError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl MeetingCostError {
    pub fn invalid_value(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::InvalidConfigValueError { .. }
            | Self::ValidationError { .. }
            | Self::UrlError(_) => ErrorCategory::Input,
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Try another output format with --format"
            }
            Self::UrlError(_) => "Pass a full link (https://...) or a query such as ?a=5&s=150000",
            Self::ConfigValidationError { .. } => "Fix the configuration file and try again",
            Self::InvalidConfigValueError { .. } | Self::ValidationError { .. } => {
                "Run with --help to see the accepted values for each option"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid {}: {}", value, field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MeetingCostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_is_input_error() {
        let err = MeetingCostError::invalid_value("duration", 20, "not an allowed duration");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("'20'"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = MeetingCostError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
