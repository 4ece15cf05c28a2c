use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AiSearchError, AiSearchResult};

/// Placeholder substituted with the encoded query in `url_template`.
pub const QUERY_PLACEHOLDER: &str = "%s";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineDefinition {
    pub id: String,
    pub name: String,
    pub url_template: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl EngineDefinition {
    /// The Google AI Mode engine, always present in the catalog.
    pub fn google_ai() -> Self {
        Self {
            id: "googleai".to_string(),
            name: "Google AI Mode".to_string(),
            url_template: "https://www.google.com/search?udm=50&q=%s".to_string(),
            icon: Some("fa-brain".to_string()),
        }
    }

    pub fn has_query_placeholder(&self) -> bool {
        self.url_template.contains(QUERY_PLACEHOLDER)
    }

    /// Substitute the form-encoded query, or return the template unchanged
    /// when it has no placeholder.
    pub fn resolve_url(&self, query: &str) -> String {
        if self.has_query_placeholder() {
            self.url_template
                .replace(QUERY_PLACEHOLDER, &encode_query(query))
        } else {
            self.url_template.clone()
        }
    }
}

/// Form-urlencode a query: unreserved characters pass through, spaces become
/// `+`, everything else is percent-escaped.
pub fn encode_query(query: &str) -> String {
    // A literal '%' is escaped to "%25", so "%20" only ever comes from a space.
    urlencoding::encode(query).replace("%20", "+")
}

/// Extension preferences as supplied by the host launcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub default_engine_id: String,
    /// JSON array of engine records, kept as text so a broken value can be
    /// reported instead of rejected at load time.
    pub engines_config: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            default_engine_id: "googleai".to_string(),
            engines_config: "[]".to_string(),
        }
    }
}

impl Preferences {
    /// Get the preferences file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("aisearch")
            .join("config.toml")
    }

    /// Load preferences from the default path, or return defaults if the file
    /// is missing or broken
    pub fn load() -> Self {
        let path = Self::config_path();

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!("Failed to load preferences from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load preferences from a specific file
    pub fn load_from(path: &Path) -> AiSearchResult<Self> {
        let content = fs::read_to_string(path)?;
        let prefs = toml::from_str(&content)?;
        Ok(prefs)
    }

    /// Save preferences to the default path
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::config_path())
    }

    /// Save preferences to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize preferences: {}", e))?;

        fs::write(path, content).map_err(|e| format!("Failed to write preferences: {}", e))?;

        Ok(())
    }

    /// Apply values given on the command line over the loaded ones.
    pub fn with_overrides(
        mut self,
        default_engine_id: Option<String>,
        engines_config: Option<String>,
    ) -> Self {
        if let Some(id) = default_engine_id {
            self.default_engine_id = id;
        }
        if let Some(engines) = engines_config {
            self.engines_config = engines;
        }
        self
    }

    /// Decode `engines_config` into engine records, in the order given.
    pub fn engines(&self) -> AiSearchResult<Vec<EngineDefinition>> {
        parse_engines(&self.engines_config)
    }
}

/// Decode a JSON array of engine records.
pub fn parse_engines(engines_config: &str) -> AiSearchResult<Vec<EngineDefinition>> {
    serde_json::from_str(engines_config).map_err(AiSearchError::InvalidConfig)
}
