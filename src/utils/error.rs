use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Envelope field missing or not a string: {field}")]
    MissingContentError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PulseError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            PulseError::ApiError(e) => format!("Could not reach the embed API: {}", e),
            PulseError::SerializationError(_) => {
                "The API response was not valid JSON".to_string()
            }
            PulseError::MissingContentError { field } => {
                format!("The API response has no usable `{}` field", field)
            }
            PulseError::ProcessingError { message } => {
                format!("Could not parse the realtime data: {}", message)
            }
            PulseError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for --{}: {}", field.replace('_', "-"), reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PulseError::ApiError(_) => "Check your network connection and the endpoint URL",
            PulseError::SerializationError(_) | PulseError::MissingContentError { .. } => {
                "Verify the endpoint serves the embed JSON envelope"
            }
            PulseError::ProcessingError { .. } => {
                "The embed layout may have changed; inspect the raw HTML with --verbose"
            }
            PulseError::InvalidConfigValueError { .. } => "Run with --help to see accepted values",
        }
    }
}

pub type Result<T> = std::result::Result<T, PulseError>;
