use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data error at row {row}: {message}")]
    DataError { row: usize, message: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DashError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashError::ConfigError { .. }
            | DashError::ConfigValidationError { .. }
            | DashError::InvalidConfigValueError { .. }
            | DashError::MissingConfigError { .. } => ErrorCategory::Configuration,
            DashError::CsvError(_) | DashError::DataError { .. } => ErrorCategory::Data,
            DashError::IoError(_) | DashError::ServerError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 行程結束碼：設定錯誤 1、資料錯誤 2、系統錯誤 3
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DashError::CsvError(_) => {
                "Check that the CSV file has the expected headers: Launch Site, class, Payload Mass (kg), Booster Version, Booster Version Category".to_string()
            }
            DashError::DataError { .. } => {
                "Fix the offending row: payload mass must be a finite number and launch site must not be blank".to_string()
            }
            DashError::IoError(_) => {
                "Make sure the file exists and the process can read it".to_string()
            }
            DashError::ConfigError { .. } | DashError::ConfigValidationError { .. } => {
                "Review the configuration file and command line arguments".to_string()
            }
            DashError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            DashError::MissingConfigError { field } => {
                format!("Set '{}' in the config file or on the command line", field)
            }
            DashError::ServerError { .. } => {
                "Check that the bind address is free and reachable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Data => format!("Could not load launch records: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    pub(crate) fn data(row: usize, message: impl Into<String>) -> Self {
        DashError::DataError {
            row,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_drives_exit_code() {
        let config = DashError::MissingConfigError {
            field: "data.path".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.exit_code(), 1);

        let data = DashError::data(3, "launch site is empty");
        assert_eq!(data.category(), ErrorCategory::Data);
        assert_eq!(data.exit_code(), 2);

        let io = DashError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_user_friendly_message_mentions_cause() {
        let err = DashError::data(7, "payload is negative");
        let msg = err.user_friendly_message();
        assert!(msg.contains("row 7"));
        assert!(msg.contains("payload is negative"));
    }

    #[test]
    fn test_data_error_suggestion_names_row_checks() {
        let suggestion = DashError::data(4, "payload mass is not a finite number").recovery_suggestion();
        assert!(suggestion.contains("finite"));
        assert!(suggestion.contains("launch site"));
        assert!(!suggestion.contains("class"));
    }
}
