use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SecdashError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // File operation errors
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
        context: Option<String>,
    },

    // Validation errors
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // Network/API errors
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },
    ApiError {
        endpoint: String,
        status_code: u16,
        body: String,
    },

    // Import errors
    EmptyImport {
        kind: String,
        rejected_rows: usize,
        discarded_groups: usize,
    },
    SubmissionFailed {
        kind: String,
        failed: usize,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },

    // Multiple errors (for batch operations)
    MultipleErrors {
        errors: Vec<SecdashError>,
        context: String,
    },
}

impl SecdashError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, line_number: Option<usize>, reason: &str, context: Option<&str>) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            line_number,
            reason: reason.to_string(),
            context: context.map(|s| s.to_string()),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn api_error(endpoint: &str, status_code: u16, body: &str) -> Self {
        Self::ApiError {
            endpoint: endpoint.to_string(),
            status_code,
            body: body.to_string(),
        }
    }

    /// Transport failures and 5xx/429 responses are worth retrying by hand.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. } => true,
            Self::ApiError { status_code, .. } => *status_code >= 500 || *status_code == 429,
            Self::ValidationError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::SubmissionFailed { .. } => true,
            Self::EmptyImport { .. } => false,
            Self::SystemError { .. } => false,
            Self::MultipleErrors { errors, .. } => errors.iter().any(|e| e.is_recoverable()),
            _ => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::FileOperationError { .. } => ErrorSeverity::High,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::SubmissionFailed { .. } => ErrorSeverity::High,
            Self::EmptyImport { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::ApiError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
            Self::MultipleErrors { errors, .. } => {
                errors.iter()
                    .map(|e| e.severity())
                    .max()
                    .unwrap_or(ErrorSeverity::Low)
            }
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::FileOperationError { file_path, operation, reason } => {
                format!("File operation '{}' failed for '{}': {}\n💡 Check file permissions and path", operation, file_path, reason)
            }
            Self::ParseError { content_type, line_number, reason, context } => {
                let mut msg = format!("Parse error in {}: {}", content_type, reason);
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {})", line));
                }
                if let Some(ctx) = context {
                    msg.push_str(&format!("\nContext: {}", ctx));
                }
                msg.push_str("\n💡 Check the format and headers of the input");
                msg
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for field '{}': value '{}' violates constraint '{}'", field, value, constraint);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check that the dashboard API is reachable and try again");
                msg
            }
            Self::ApiError { endpoint, status_code, body } => {
                let mut msg = format!("API rejected request to '{}' with status {}", endpoint, status_code);
                if !body.is_empty() {
                    msg.push_str(&format!(": {}", body));
                }
                msg
            }
            Self::EmptyImport { kind, rejected_rows, discarded_groups } => {
                format!(
                    "No valid {} records found ({} rows rejected, {} groups discarded)\n💡 Run 'secdash template {}' to see the expected format",
                    kind, rejected_rows, discarded_groups, kind
                )
            }
            Self::SubmissionFailed { kind, failed } => {
                format!("All {} {} submissions failed\n💡 Check the API logs and rerun the import", failed, kind)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
            Self::MultipleErrors { errors, context } => {
                let mut msg = format!("Multiple errors occurred during {}:\n", context);
                for (i, error) in errors.iter().enumerate() {
                    msg.push_str(&format!("  {}. {}\n", i + 1, error.user_message().replace('\n', "\n     ")));
                }
                msg
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }

    pub fn with_context(self, context: &str) -> Self {
        match self {
            Self::MultipleErrors { errors, context: existing_context } => {
                Self::MultipleErrors {
                    errors,
                    context: format!("{} -> {}", existing_context, context),
                }
            }
            _ => Self::MultipleErrors {
                errors: vec![self],
                context: context.to_string(),
            }
        }
    }
}

impl fmt::Display for SecdashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for SecdashError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for secdash operations
pub type SecdashResult<T> = Result<T, SecdashError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Handle error with appropriate logging and user feedback
    pub fn handle_error(error: &SecdashError) {
        let severity = error.severity();

        log::debug!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

/// Extension trait for Result to add context
pub trait ResultExt<T> {
    fn with_context(self, context: &str) -> SecdashResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<SecdashError>,
{
    fn with_context(self, context: &str) -> SecdashResult<T> {
        self.map_err(|e| e.into().with_context(context))
    }
}

impl From<serde_json::Error> for SecdashError {
    fn from(error: serde_json::Error) -> Self {
        SecdashError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
            context: None,
        }
    }
}

impl From<toml::de::Error> for SecdashError {
    fn from(error: toml::de::Error) -> Self {
        SecdashError::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
            context: None,
        }
    }
}

impl From<csv::Error> for SecdashError {
    fn from(error: csv::Error) -> Self {
        let line_number = error.position().map(|p| p.line() as usize);
        SecdashError::ParseError {
            content_type: "CSV".to_string(),
            line_number,
            reason: error.to_string(),
            context: None,
        }
    }
}

impl From<reqwest::Error> for SecdashError {
    fn from(error: reqwest::Error) -> Self {
        SecdashError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
