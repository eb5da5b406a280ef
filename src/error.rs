use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while finding, showing or saving recipes
#[derive(Error, Debug)]
pub enum FinderError {
    /// Failed to reach the recipe API or it answered with an error status
    #[error("Failed to fetch: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with JSON that does not look like a meal response
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Thumbnail bytes could not be decoded
    #[error("Failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    /// Writing the exported recipe failed
    #[error("Failed to save {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Terminal setup, drawing or input failed
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl FinderError {
    /// Short label used when the UI reports a failure on the status line.
    pub fn kind(&self) -> &'static str {
        match self {
            FinderError::Network(_) => "network error",
            FinderError::MalformedResponse(_) => "unexpected response",
            FinderError::Image(_) => "image error",
            FinderError::Export { .. } => "save error",
            FinderError::Terminal(_) => "terminal error",
            FinderError::Config(_) => "configuration error",
        }
    }
}
