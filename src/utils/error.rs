use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依嚴重程度對應的結束碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl GreetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GreetError::IoError(_) => ErrorCategory::Io,
            GreetError::SerializationError(_) => ErrorCategory::Output,
            GreetError::TomlError(_)
            | GreetError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GreetError::TomlError(_) | GreetError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            GreetError::IoError(_) | GreetError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GreetError::IoError(e) => format!("Could not read the configuration file: {}", e),
            GreetError::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            GreetError::SerializationError(e) => format!("Could not render the greeting: {}", e),
            GreetError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the --config path exists and is readable",
            ErrorCategory::Configuration => {
                "Fix the value in the config file or override it on the command line"
            }
            ErrorCategory::Output => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, GreetError>;
