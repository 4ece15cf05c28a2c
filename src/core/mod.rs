//! Core routing module - platform-agnostic query logic.
//!
//! This module contains everything that decides where a query goes:
//! - Engine catalog normalization (built-in engine, legacy ids)
//! - Query parsing (`:engine query` and `engine: query`)
//! - Resolution into suggestions, prompts, search URLs, or errors

pub mod catalog;
pub mod query;
pub mod resolver;

pub use catalog::{EngineCatalog, GOOGLE_AI_ID, LEGACY_GEMINI_ID};
pub use query::ParsedInput;
pub use resolver::{
    resolve, resolve_preferences, resolve_with_catalog, Resolution, Suggestion, MAX_SUGGESTIONS,
};
