//! aisearch - launcher query router for AI and web search engines.
//!
//! Given the text typed after the launcher keyword, aisearch decides which
//! engine the user wants and builds the URL to open. Engines are selected with
//! `:engine query` or `engine: query`; anything else goes to the configured
//! default engine.
//!
//! # Architecture
//!
//! - [`config`] - Engine definitions and preferences loading
//! - [`core`] - Catalog normalization, query parsing and resolution
//! - [`executor`] - Rendering resolutions as items and opening URLs
//! - [`cli`] - Command-line host
//!
//! # Example
//!
//! ```
//! use aisearch::resolve;
//!
//! let engines = r#"[{"id": "wiki", "name": "Wikipedia", "url_template": "https://en.wikipedia.org/?search=%s"}]"#;
//! let resolution = resolve(":wiki rust lang", "googleai", engines);
//! assert_eq!(resolution.url(), Some("https://en.wikipedia.org/?search=rust+lang"));
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod executor;

mod error;

// Re-export commonly used types for convenience
pub use config::{EngineDefinition, Preferences};
pub use crate::core::{resolve, resolve_preferences, EngineCatalog, Resolution};
pub use error::{AiSearchError, AiSearchResult};
pub use executor::{execute, ExecutionAction, ResultItem};
