//! Query parsing for the two engine-selection syntaxes:
//!
//! - `:engine query` - the engine id follows a leading colon
//! - `engine: query` - the engine id precedes the first colon, but only when
//!   it names a known engine (so `http://...` or `note: x` stay plain text)

use super::catalog::EngineCatalog;

/// A query split into its engine selector and search text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedInput {
    /// The full query with surrounding whitespace removed
    pub query: String,
    /// Engine chosen by the user, if any. Never empty.
    pub explicit_engine_id: Option<String>,
    /// Text to search for on the explicit engine. Empty in default mode.
    pub search_text: String,
}

impl ParsedInput {
    pub fn parse(raw: &str, catalog: &EngineCatalog) -> Self {
        let query = raw.trim();

        let (engine_id, search_text) = if let Some(content) = query.strip_prefix(':') {
            let content = content.trim();
            match content.split_once(' ') {
                Some((id, rest)) => (id, rest),
                None => (content, ""),
            }
        } else if let Some((candidate, rest)) = query.split_once(':') {
            let candidate = candidate.trim();
            if catalog.contains(candidate) {
                (candidate, rest)
            } else {
                ("", "")
            }
        } else {
            ("", "")
        };

        let engine_id = engine_id.trim();
        let explicit_engine_id = (!engine_id.is_empty()).then(|| engine_id.to_string());
        let search_text = match explicit_engine_id {
            Some(_) => search_text.trim().to_string(),
            None => String::new(),
        };

        Self {
            query: query.to_string(),
            explicit_engine_id,
            search_text,
        }
    }

    /// True when no engine was selected explicitly.
    pub fn is_default_mode(&self) -> bool {
        self.explicit_engine_id.is_none()
    }
}
