use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeadError {
    #[error("Invalid request: {field} is required")]
    InvalidRequest { field: String },

    #[error("Missing provider credential: {name} is not set")]
    MissingCredential { name: String },

    #[error("Places API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Places API error: {message}")]
    Upstream { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Registry error: {message}")]
    RegistryError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller supplied a bad request.
    Request,
    /// Operator misconfiguration.
    Configuration,
    /// The places provider failed or returned something unusable.
    Upstream,
    Internal,
}

impl LeadError {
    pub fn upstream(message: impl Into<String>) -> Self {
        LeadError::Upstream {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            LeadError::InvalidRequest { .. } => ErrorCategory::Request,
            LeadError::MissingCredential { .. }
            | LeadError::RegistryError { .. }
            | LeadError::ConfigValidationError { .. }
            | LeadError::InvalidConfigValueError { .. }
            | LeadError::MissingConfigError { .. } => ErrorCategory::Configuration,
            LeadError::ApiError(_) | LeadError::Upstream { .. } => ErrorCategory::Upstream,
            LeadError::IoError(_) => ErrorCategory::Internal,
        }
    }

    /// Only provider failures are worth retrying; nothing is persisted by a failed attempt.
    pub fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::Upstream
    }

    /// Short message surfaced to API callers.
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Request => "Area and category are required".to_string(),
            ErrorCategory::Configuration => "Server configuration error".to_string(),
            ErrorCategory::Upstream => "Failed to fetch places".to_string(),
            ErrorCategory::Internal => "Internal server error".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LeadError::InvalidRequest { .. } => {
                "Supply both the area and category query parameters".to_string()
            }
            LeadError::MissingCredential { name } => {
                format!("Set {} in the environment or provider.api_key in the config file", name)
            }
            LeadError::ApiError(_) | LeadError::Upstream { .. } => {
                "Check network connectivity and the Places API quota, then retry".to_string()
            }
            LeadError::RegistryError { .. } => {
                "Check the registry TOML file referenced by classification.registry_path".to_string()
            }
            LeadError::ConfigValidationError { .. }
            | LeadError::InvalidConfigValueError { .. }
            | LeadError::MissingConfigError { .. } => {
                "Fix the configuration file and restart".to_string()
            }
            LeadError::IoError(_) => "Check file paths and permissions".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LeadError>;
