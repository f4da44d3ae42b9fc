/// Error types for the application
///
/// Both enums are `Clone` because they travel inside iced messages.
/// Foreign errors (io, image, reqwest) are captured as their display text.

use thiserror::Error;

/// Failures while acquiring a photo from disk
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// No file was provided (dialog cancelled)
    #[error("no image file was provided")]
    NoFile,

    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// Content is an image, but not one the provider accepts inline
    #[error("unsupported image format: {0}")]
    Unsupported(String),

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("image is {size} bytes, the limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },

    #[error("background task failed: {0}")]
    Task(String),
}

/// Failures of a single analysis request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("no API key configured (set GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Prompt or candidate rejected by the provider's safety filter
    #[error("response blocked by the model: {reason}")]
    Blocked { reason: String },

    #[error("the model returned no text")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AnalysisError::Malformed(err.to_string())
        } else {
            AnalysisError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Malformed(err.to_string())
    }
}
