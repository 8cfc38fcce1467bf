use thiserror::Error;

/// 錯誤分類，對應管道的各個階段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Http,
    Data,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Failed to fetch data: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Failed to fetch data: {status}")]
    HttpStatusError { status: String },

    #[error("Failed to decode JSON: {source}")]
    DecodeError { source: serde_json::Error },

    #[error("Failed to serialize JSON: {source}")]
    SerializationError { source: serde_json::Error },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::TransportError(_) => ErrorCategory::Network,
            EtlError::HttpStatusError { .. } => ErrorCategory::Http,
            EtlError::DecodeError { .. } | EtlError::SerializationError { .. } => {
                ErrorCategory::Data
            }
            EtlError::IoError(_) => ErrorCategory::Storage,
            EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Http => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for a fatal run. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::TransportError(e) => format!("Error fetching JSON: {}", e),
            EtlError::HttpStatusError { status } => {
                format!("Error fetching JSON: failed to fetch data: {}", status)
            }
            EtlError::DecodeError { source } => format!("Error fetching JSON: {}", source),
            EtlError::SerializationError { source } => {
                format!("Error marshaling JSON: {}", source)
            }
            EtlError::IoError(e) => format!("Error writing JSON to file: {}", e),
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check network connectivity and DNS resolution",
            ErrorCategory::Http => "The inventory host rejected the request; try again later",
            ErrorCategory::Data => "The inventory format may have changed upstream",
            ErrorCategory::Storage => {
                "Check write permissions and free space in the output directory"
            }
            ErrorCategory::Configuration => "Fix the reported configuration value",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
