//! Error types for the skin_season library

use thiserror::Error;

/// Result type alias for skin_season operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for skin-tone analysis operations
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Every sampled pixel was rejected by the skin filters
    #[error(
        "No reliable skin region found: all {examined} sampled pixels rejected \
         ({transparent} transparent, {lip} lip-like, {shadow} hair/shadow-like)"
    )]
    InsufficientSample {
        examined: usize,
        transparent: usize,
        lip: usize,
        shadow: usize,
    },

    /// Input violated a precondition (dimensions, channel range, malformed value)
    #[error("Invalid input: {parameter} = {value}")]
    InvalidInput { parameter: String, value: String },

    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration file could not be read, parsed or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AnalysisError {
    /// Create an invalid input error for a named parameter
    pub fn invalid_input(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidInput {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Only an insufficient sample is recoverable: the caller can ask for
    /// another photo. Everything else is a caller bug or an I/O failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AnalysisError::InsufficientSample { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::InsufficientSample { .. } => {
                "Could not detect a reliable skin region. Try a clearer, well-lit face photo, \
                 centered in the frame."
                    .to_string()
            }
            AnalysisError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            _ => "Analysis failed. Please try a different photo.".to_string(),
        }
    }
}
