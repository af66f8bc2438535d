use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Failed to read input '{path}': {source}")]
    InputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input '{path}' is not valid {encoding}")]
    InputEncoding { path: String, encoding: &'static str },

    #[error("Failed to parse SVG '{path}': {source}")]
    XmlParse {
        path: String,
        #[source]
        source: roxmltree::Error,
    },

    #[error("Failed to write output '{path}': {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Parse,
    Output,
    Serialization,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::InputRead { .. }
            | EtlError::InputEncoding { .. }
            | EtlError::XmlParse { .. } => ErrorCategory::Parse,
            EtlError::OutputWrite { .. } => ErrorCategory::Output,
            EtlError::Serialization(_) => ErrorCategory::Serialization,
            EtlError::ConfigError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Parse => ErrorSeverity::High,
            ErrorCategory::Output | ErrorCategory::Serialization => ErrorSeverity::Critical,
        }
    }

    /// 程序結束碼：設定錯誤 2、輸入錯誤 1、輸出錯誤 3
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        format!("Error processing SVG file: {}", self)
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::InputRead { .. } => "Check that the input SVG exists and is readable",
            EtlError::InputEncoding { .. } => {
                "Re-save the SVG in the encoding its XML declaration names, or as UTF-8"
            }
            EtlError::XmlParse { .. } => "Make sure the input is a well-formed SVG/XML document",
            EtlError::OutputWrite { .. } => {
                "Check permissions and free space for the output location"
            }
            EtlError::Serialization(_) => "Report this as a bug together with the input file",
            EtlError::ConfigError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::ConfigValidationError { .. } => {
                "Review the command line flags or configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
