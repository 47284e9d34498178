//! Error types for the outfit_colors library

use thiserror::Error;

/// Result type alias for outfit_colors operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for the fallible edges of the library.
///
/// The analysis functions themselves are total: they clamp geometry and fall
/// back to sentinel values instead of failing. Errors only arise when a pixel
/// buffer is constructed, a hex string is parsed or configuration is loaded.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Pixel data does not match the declared geometry
    #[error("Invalid pixel buffer: {reason}")]
    InvalidBuffer { reason: String },

    /// Hex color string could not be parsed
    #[error("Invalid hex color: {value}")]
    InvalidHex { value: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read or written
    #[error("Configuration I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Configuration file is not valid JSON for `AnalysisConfig`
    #[error("Configuration format error: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Create an invalid buffer error
    pub fn invalid_buffer(reason: impl Into<String>) -> Self {
        Self::InvalidBuffer {
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error comes from caller input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::InvalidBuffer { .. }
                | AnalysisError::InvalidHex { .. }
                | AnalysisError::InvalidParameter { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::InvalidBuffer { .. } => {
                "The photo could not be read. Please try capturing it again.".to_string()
            }
            AnalysisError::InvalidHex { value } => {
                format!("\"{}\" is not a valid color. Use the #RRGGBB format.", value)
            }
            AnalysisError::InvalidParameter { parameter, .. } => {
                format!("The analysis setting \"{}\" is out of range.", parameter)
            }
            AnalysisError::ConfigIo(_) | AnalysisError::ConfigFormat(_) => {
                "Analysis settings could not be loaded. Default settings will be used.".to_string()
            }
        }
    }
}
