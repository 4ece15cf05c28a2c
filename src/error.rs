//! Error types for aisearch
//!
//! Resolution errors are never propagated to the launcher; the resolver turns
//! them into an inert error item. The file-backed preferences layer and the
//! CLI are the only places that return them.

use thiserror::Error;

/// Errors that can occur while resolving a query
#[derive(Debug, Error)]
pub enum AiSearchError {
    /// `engines_config` is not a JSON array of engine records
    #[error("Invalid Engines Configuration")]
    InvalidConfig(#[source] serde_json::Error),

    /// An explicitly selected engine is missing from the catalog
    #[error("Engine '{id}' not found")]
    EngineNotFound { id: String, available: Vec<String> },

    /// Neither the configured default nor any fallback engine exists
    #[error("Default engine '{id}' not found")]
    DefaultEngineNotFound { id: String },

    /// Failed to hand a URL to the system opener
    #[error("Launch error: {0}")]
    Launch(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Preferences file parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AiSearchError {
    /// Second line shown under the error title.
    pub fn detail(&self) -> String {
        match self {
            AiSearchError::InvalidConfig(_) => {
                "Please check your engines_config JSON in preferences".to_string()
            }
            AiSearchError::EngineNotFound { available, .. } => {
                format!("Available engines: {}", available.join(", "))
            }
            AiSearchError::DefaultEngineNotFound { .. } => {
                "Please configure a valid default_engine_id in preferences".to_string()
            }
            AiSearchError::Launch(e) => e.clone(),
            AiSearchError::Io(e) => e.to_string(),
            AiSearchError::TomlParse(e) => e.to_string(),
        }
    }
}

/// Result type alias for aisearch operations
pub type AiSearchResult<T> = Result<T, AiSearchError>;
