//! Engine catalog: the normalized, insertion-ordered set of engines a query
//! can be routed to.

use std::collections::HashMap;

use crate::config::EngineDefinition;

/// Id of the built-in Google AI Mode engine.
pub const GOOGLE_AI_ID: &str = "googleai";

/// Retired id, rewritten to [`GOOGLE_AI_ID`] when used as the default.
pub const LEGACY_GEMINI_ID: &str = "gemini";

/// Engines keyed by id, iterated in the order ids were first seen.
#[derive(Debug, Clone, Default)]
pub struct EngineCatalog {
    engines: Vec<EngineDefinition>,
    index: HashMap<String, usize>,
}

impl EngineCatalog {
    /// Fold a sequence of definitions into a catalog. A repeated id keeps the
    /// position of its first occurrence and the value of its last.
    pub fn from_definitions(definitions: impl IntoIterator<Item = EngineDefinition>) -> Self {
        let mut catalog = Self::default();
        for engine in definitions {
            match catalog.index.get(&engine.id) {
                Some(&pos) => catalog.engines[pos] = engine,
                None => {
                    catalog.index.insert(engine.id.clone(), catalog.engines.len());
                    catalog.engines.push(engine);
                }
            }
        }
        catalog
    }

    /// Normalize user-supplied engines and the configured default id.
    ///
    /// The built-in Google AI Mode engine is prepended unless the user already
    /// defines `googleai`, and the legacy `gemini` engine is dropped. Returns
    /// the catalog together with the effective default id (`gemini` is
    /// rewritten to `googleai`).
    pub fn from_config(
        mut engines: Vec<EngineDefinition>,
        default_engine_id: &str,
    ) -> (Self, String) {
        let default_engine_id = if default_engine_id == LEGACY_GEMINI_ID {
            GOOGLE_AI_ID.to_string()
        } else {
            default_engine_id.to_string()
        };

        if !engines.iter().any(|e| e.id == GOOGLE_AI_ID) {
            engines.insert(0, EngineDefinition::google_ai());
        }
        engines.retain(|e| e.id != LEGACY_GEMINI_ID);

        (Self::from_definitions(engines), default_engine_id)
    }

    pub fn get(&self, id: &str) -> Option<&EngineDefinition> {
        self.index.get(id).map(|&pos| &self.engines[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Ids in catalog order.
    pub fn ids(&self) -> Vec<String> {
        self.engines.iter().map(|e| e.id.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EngineDefinition> {
        self.engines.iter()
    }

    pub fn first(&self) -> Option<&EngineDefinition> {
        self.engines.first()
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}
