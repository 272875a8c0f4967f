//! Intent handler registry.

use crate::docs::DocsSource;
use crate::error::DocbotError;
use crate::intent::get_docs::{GetDocsHandler, GET_DOCS_INTENT};
use crate::lex::{IntentRequest, LexResponse};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Handles one named intent.
#[async_trait]
pub trait IntentHandler: Send + Sync {
    async fn handle(&self, request: &IntentRequest) -> Result<LexResponse, DocbotError>;
}

/// Exact-name lookup table from intent name to handler.
#[derive(Clone, Default)]
pub struct IntentRegistry {
    handlers: HashMap<String, Arc<dyn IntentHandler>>,
}

impl IntentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in intent wired to `source`.
    pub fn with_default_handlers(source: Arc<dyn DocsSource>) -> Self {
        let mut registry = Self::new();
        registry.register(GET_DOCS_INTENT, Arc::new(GetDocsHandler::new(source)));
        registry
    }

    /// Register a handler, replacing any previous one with the same name
    pub fn register(&mut self, intent_name: &str, handler: Arc<dyn IntentHandler>) {
        self.handlers.insert(intent_name.to_string(), handler);
    }

    pub fn get(&self, intent_name: &str) -> Option<Arc<dyn IntentHandler>> {
        self.handlers.get(intent_name).cloned()
    }

    /// Get a handler by name or return `UnsupportedIntent`
    pub fn get_or_error(&self, intent_name: &str) -> Result<Arc<dyn IntentHandler>, DocbotError> {
        self.get(intent_name)
            .ok_or_else(|| DocbotError::UnsupportedIntent(intent_name.to_string()))
    }

    /// Registered intent names, sorted
    pub fn intent_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
