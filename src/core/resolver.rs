//! Query resolution: turns one keystroke's worth of input into what the
//! launcher should show.
//!
//! Resolution is pure. Configuration is decoded anew on every call and no
//! state survives between calls, so it is safe to call from any thread.

use crate::config::{parse_engines, EngineDefinition, Preferences};
use crate::error::{AiSearchError, AiSearchResult};

use super::catalog::{EngineCatalog, GOOGLE_AI_ID};
use super::query::ParsedInput;

/// Maximum number of engines listed for an empty query.
pub const MAX_SUGGESTIONS: usize = 8;

/// Description shown when an engine is selected but nothing was typed yet.
pub const PROMPT_DESCRIPTION: &str = "Enter your query to search";

/// An engine listed for an empty query.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub engine_id: String,
    pub title: String,
    pub description: String,
}

impl Suggestion {
    fn for_engine(engine: &EngineDefinition) -> Self {
        Self {
            engine_id: engine.id.clone(),
            title: engine.name.clone(),
            description: format!("Use {}: to search this engine directly", engine.id),
        }
    }
}

/// What the launcher should display for a query.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Empty query: list the configured engines
    Suggestions(Vec<Suggestion>),

    /// Engine chosen but no search text yet
    Prompt { engine: EngineDefinition },

    /// A URL ready to open
    Search {
        engine: EngineDefinition,
        url: String,
        description: String,
    },

    /// Configuration or lookup failure
    Error { message: String, detail: String },
}

impl Resolution {
    /// Build the search result for `text` on `engine`.
    pub fn search(engine: &EngineDefinition, text: &str) -> Self {
        let description = if engine.has_query_placeholder() {
            format!("Opens query in browser: {}", text)
        } else {
            format!("Opens {} (paste your query: {})", engine.name, text)
        };

        Resolution::Search {
            engine: engine.clone(),
            url: engine.resolve_url(text),
            description,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Resolution::Error { .. })
    }

    /// URL to open, if this resolution is actionable.
    pub fn url(&self) -> Option<&str> {
        match self {
            Resolution::Search { url, .. } => Some(url),
            _ => None,
        }
    }
}

impl From<AiSearchError> for Resolution {
    fn from(err: AiSearchError) -> Self {
        Resolution::Error {
            message: err.to_string(),
            detail: err.detail(),
        }
    }
}

/// Resolve a raw query against the default engine id and the raw
/// `engines_config` JSON text.
pub fn resolve(query: &str, default_engine_id: &str, engines_config: &str) -> Resolution {
    let engines = match parse_engines(engines_config) {
        Ok(engines) => engines,
        Err(err) => {
            if let AiSearchError::InvalidConfig(source) = &err {
                tracing::error!("Failed to parse engines_config JSON: {}", source);
            }
            return err.into();
        }
    };

    let (catalog, default_engine_id) = EngineCatalog::from_config(engines, default_engine_id);
    resolve_with_catalog(query, &default_engine_id, &catalog)
}

/// Resolve a query using the host's preferences.
pub fn resolve_preferences(query: &str, prefs: &Preferences) -> Resolution {
    resolve(query, &prefs.default_engine_id, &prefs.engines_config)
}

/// Resolve against an already-normalized catalog.
pub fn resolve_with_catalog(
    query: &str,
    default_engine_id: &str,
    catalog: &EngineCatalog,
) -> Resolution {
    try_resolve(query, default_engine_id, catalog).unwrap_or_else(|err| {
        tracing::debug!("Query {:?} did not resolve: {}", query, err);
        err.into()
    })
}

fn try_resolve(
    query: &str,
    default_engine_id: &str,
    catalog: &EngineCatalog,
) -> AiSearchResult<Resolution> {
    let parsed = ParsedInput::parse(query, catalog);

    if let Some(engine_id) = &parsed.explicit_engine_id {
        let engine = catalog
            .get(engine_id)
            .ok_or_else(|| AiSearchError::EngineNotFound {
                id: engine_id.clone(),
                available: catalog.ids(),
            })?;

        if parsed.search_text.is_empty() {
            return Ok(Resolution::Prompt {
                engine: engine.clone(),
            });
        }

        tracing::debug!("Routing to explicit engine {}", engine.id);
        return Ok(Resolution::search(engine, &parsed.search_text));
    }

    if parsed.query.is_empty() {
        let suggestions = catalog
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(Suggestion::for_engine)
            .collect();
        return Ok(Resolution::Suggestions(suggestions));
    }

    let engine = default_engine(default_engine_id, catalog).ok_or_else(|| {
        AiSearchError::DefaultEngineNotFound {
            id: default_engine_id.to_string(),
        }
    })?;

    tracing::debug!("Routing to default engine {}", engine.id);
    Ok(Resolution::search(engine, &parsed.query))
}

/// The configured default, else Google AI Mode, else the first engine.
fn default_engine<'a>(
    default_engine_id: &str,
    catalog: &'a EngineCatalog,
) -> Option<&'a EngineDefinition> {
    catalog
        .get(default_engine_id)
        .or_else(|| catalog.get(GOOGLE_AI_ID))
        .or_else(|| catalog.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGINES: &str = r#"[
        {"id": "chatgpt", "name": "ChatGPT", "url_template": "https://chatgpt.com/?q=%s"},
        {"id": "claude", "name": "Claude", "url_template": "https://claude.ai/new"},
        {"id": "wikipedia", "name": "Wikipedia", "url_template": "https://en.wikipedia.org/?search=%s"}
    ]"#;

    fn engine(id: &str, template: &str) -> EngineDefinition {
        EngineDefinition {
            id: id.to_string(),
            name: id.to_uppercase(),
            url_template: template.to_string(),
            icon: None,
        }
    }

    #[test]
    fn test_explicit_engine_search() {
        let resolution = resolve(":wikipedia test query", "googleai", ENGINES);
        match resolution {
            Resolution::Search {
                engine,
                url,
                description,
            } => {
                assert_eq!(engine.id, "wikipedia");
                assert_eq!(url, "https://en.wikipedia.org/?search=test+query");
                assert_eq!(description, "Opens query in browser: test query");
            }
            other => panic!("expected search, got {:?}", other),
        }
    }

    #[test]
    fn test_engine_without_placeholder() {
        let resolution = resolve("claude: write a haiku", "googleai", ENGINES);
        match resolution {
            Resolution::Search {
                url, description, ..
            } => {
                assert_eq!(url, "https://claude.ai/new");
                assert_eq!(description, "Opens Claude (paste your query: write a haiku)");
            }
            other => panic!("expected search, got {:?}", other),
        }
    }

    #[test]
    fn test_prompt_when_no_search_text() {
        let resolution = resolve(":chatgpt   ", "googleai", ENGINES);
        match resolution {
            Resolution::Prompt { engine } => assert_eq!(engine.name, "ChatGPT"),
            other => panic!("expected prompt, got {:?}", other),
        }
        assert!(matches!(
            resolve("chatgpt:", "googleai", ENGINES),
            Resolution::Prompt { .. }
        ));
    }

    #[test]
    fn test_unknown_explicit_engine() {
        let resolution = resolve(":unknown", "googleai", ENGINES);
        assert_eq!(
            resolution,
            Resolution::Error {
                message: "Engine 'unknown' not found".to_string(),
                detail: "Available engines: googleai, chatgpt, claude, wikipedia".to_string(),
            }
        );
    }

    #[test]
    fn test_default_mode_uses_full_query() {
        let resolution = resolve("bogus: hello", "chatgpt", ENGINES);
        assert_eq!(resolution.url(), Some("https://chatgpt.com/?q=bogus%3A+hello"));
    }

    #[test]
    fn test_default_falls_back_to_googleai() {
        let resolution = resolve("hello world", "missing", ENGINES);
        assert_eq!(
            resolution.url(),
            Some("https://www.google.com/search?udm=50&q=hello+world")
        );
    }

    #[test]
    fn test_gemini_default_rewritten() {
        let config =
            r#"[{"id": "gemini", "name": "Gemini", "url_template": "https://gemini.google.com/"}]"#;
        let resolution = resolve("hi", "gemini", config);
        match resolution {
            Resolution::Search { engine, .. } => assert_eq!(engine.id, "googleai"),
            other => panic!("expected search, got {:?}", other),
        }
    }

    #[test]
    fn test_default_falls_back_to_first_entry() {
        let catalog = EngineCatalog::from_definitions(vec![
            engine("first", "https://first.example/?q=%s"),
            engine("second", "https://second.example/?q=%s"),
        ]);
        let resolution = resolve_with_catalog("x", "missing", &catalog);
        assert_eq!(resolution.url(), Some("https://first.example/?q=x"));
    }

    #[test]
    fn test_empty_catalog_default_not_found() {
        let resolution = resolve_with_catalog("x", "missing", &EngineCatalog::default());
        assert_eq!(
            resolution,
            Resolution::Error {
                message: "Default engine 'missing' not found".to_string(),
                detail: "Please configure a valid default_engine_id in preferences".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_query_lists_suggestions() {
        let resolution = resolve("   ", "googleai", ENGINES);
        match resolution {
            Resolution::Suggestions(items) => {
                let ids: Vec<_> = items.iter().map(|s| s.engine_id.as_str()).collect();
                assert_eq!(ids, vec!["googleai", "chatgpt", "claude", "wikipedia"]);
                assert_eq!(items[1].title, "ChatGPT");
                assert_eq!(items[1].description, "Use chatgpt: to search this engine directly");
            }
            other => panic!("expected suggestions, got {:?}", other),
        }
    }

    #[test]
    fn test_suggestions_truncated() {
        let engines: Vec<String> = (0..12)
            .map(|i| format!(r#"{{"id": "e{i}", "name": "E{i}", "url_template": "https://e{i}.example/%s"}}"#))
            .collect();
        let config = format!("[{}]", engines.join(","));
        match resolve("", "googleai", &config) {
            Resolution::Suggestions(items) => {
                assert_eq!(items.len(), MAX_SUGGESTIONS);
                assert_eq!(items[0].engine_id, "googleai");
                assert_eq!(items[7].engine_id, "e6");
            }
            other => panic!("expected suggestions, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_config() {
        let resolution = resolve("anything", "googleai", "{not valid");
        assert_eq!(
            resolution,
            Resolution::Error {
                message: "Invalid Engines Configuration".to_string(),
                detail: "Please check your engines_config JSON in preferences".to_string(),
            }
        );
    }
}
