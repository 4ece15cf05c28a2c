//! Result rendering and execution - turns a [`Resolution`] into launcher items
//! and performs the action of an activated item.

use serde::Serialize;

use crate::core::resolver::{Resolution, PROMPT_DESCRIPTION};
use crate::error::{AiSearchError, AiSearchResult};

/// Icon shown on every item.
pub const EXTENSION_ICON: &str = "images/icon.png";

/// The action to perform when an item is activated
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ExecutionAction {
    /// Open a URL in the default browser
    OpenUrl { url: String },

    /// No action needed (engine selected, waiting for query input)
    NeedsInput,
}

/// A single row in the launcher's result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    pub icon: String,
    pub title: String,
    pub description: String,
    /// `None` for inert items (suggestions, errors)
    pub action: Option<ExecutionAction>,
}

impl ResultItem {
    fn new(title: String, description: String, action: Option<ExecutionAction>) -> Self {
        Self {
            icon: EXTENSION_ICON.to_string(),
            title,
            description,
            action,
        }
    }

    /// Check if activating this item does something.
    pub fn is_actionable(&self) -> bool {
        matches!(self.action, Some(ExecutionAction::OpenUrl { .. }))
    }
}

impl Resolution {
    /// Render this resolution as launcher items.
    pub fn into_items(self) -> Vec<ResultItem> {
        match self {
            Resolution::Suggestions(suggestions) => suggestions
                .into_iter()
                .map(|s| ResultItem::new(s.title, s.description, None))
                .collect(),
            Resolution::Prompt { engine } => vec![ResultItem::new(
                format!("Search {}", engine.name),
                PROMPT_DESCRIPTION.to_string(),
                Some(ExecutionAction::NeedsInput),
            )],
            Resolution::Search {
                engine,
                url,
                description,
            } => vec![ResultItem::new(
                format!("Search {}", engine.name),
                description,
                Some(ExecutionAction::OpenUrl { url }),
            )],
            Resolution::Error { message, detail } => {
                vec![ResultItem::new(format!("Error: {}", message), detail, None)]
            }
        }
    }
}

/// Open URLs with the system default handler
pub trait SystemOpen: Send + Sync {
    fn open_url(&self, url: &str) -> AiSearchResult<()>;
}

/// Cross-platform URL opening using the `open` crate
pub struct OpenCrateOpener;

impl SystemOpen for OpenCrateOpener {
    fn open_url(&self, url: &str) -> AiSearchResult<()> {
        open::that(url).map_err(|e| AiSearchError::Launch(e.to_string()))
    }
}

/// Perform an item's action. Inert actions succeed without doing anything.
pub fn execute(action: &ExecutionAction, opener: &dyn SystemOpen) -> AiSearchResult<()> {
    match action {
        ExecutionAction::OpenUrl { url } => {
            tracing::info!("Opening {}", url);
            opener.open_url(url)
        }
        ExecutionAction::NeedsInput => Ok(()),
    }
}
