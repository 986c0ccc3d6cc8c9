use crate::domain::model::InterestKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Missing required fields: {}", fields.join(", "))]
    MissingFields {
        kind: InterestKind,
        fields: Vec<String>,
    },

    #[error("Unknown calculation kind: {kind}")]
    UnknownKind { kind: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    // 包裝的錯誤直接沿用來源的訊息，避免 anyhow 的錯誤鏈重複輸出
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    CsvError(#[from] csv::Error),

    #[error(transparent)]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn missing_fields<I, S>(kind: InterestKind, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CalcError::MissingFields {
            kind,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::MissingFields { .. } | CalcError::UnknownKind { .. } => ErrorCategory::Input,
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            CalcError::IoError(_) | CalcError::CsvError(_) | CalcError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// CLI 的結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 1,
            ErrorSeverity::High => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::MissingFields { fields, .. } => {
                format!("Please fill in: {}", fields.join(", "))
            }
            CalcError::UnknownKind { kind } => {
                format!("'{}' is not a calculation kind (use 'simple' or 'compound')", kind)
            }
            CalcError::ConfigError { message } => format!("Configuration problem: {}", message),
            CalcError::InvalidConfigValue { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            CalcError::IoError(e) => format!("Could not read or write a file: {}", e),
            CalcError::CsvError(e) => format!("Could not process the CSV input: {}", e),
            CalcError::SerializationError(e) => format!("Could not render the result: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::MissingFields { .. } => {
                "Provide a value for every required field, or run with --lenient"
            }
            CalcError::UnknownKind { .. } => "Set the kind column to 'simple' or 'compound'",
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValue { .. } => {
                "Check the TOML configuration file against the documented settings"
            }
            CalcError::IoError(_) => "Check that the path exists and is accessible",
            CalcError::CsvError(_) => {
                "Make sure the file has the header kind,principal,rate,time,frequency"
            }
            CalcError::SerializationError(_) => "Try --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
