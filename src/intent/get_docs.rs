//! `GetDocs` intent: answer with the docs summary for the `module` slot.

use crate::docs::{get_docs, not_found_message, parse_module_slot, DocsSource};
use crate::error::DocbotError;
use crate::intent::registry::IntentHandler;
use crate::lex::request::MODULE_SLOT;
use crate::lex::{IntentRequest, LexResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

pub const GET_DOCS_INTENT: &str = "GetDocs";

/// Reply when the request carries no module name at all.
pub const MISSING_MODULE_MESSAGE: &str = "Docs not found: no module name was given";

pub struct GetDocsHandler {
    source: Arc<dyn DocsSource>,
}

impl GetDocsHandler {
    pub fn new(source: Arc<dyn DocsSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl IntentHandler for GetDocsHandler {
    async fn handle(&self, request: &IntentRequest) -> Result<LexResponse, DocbotError> {
        let slot = request.slot(MODULE_SLOT);
        let content = match parse_module_slot(slot) {
            Some(target) => {
                info!(lookup = %target, "Looking up docs");
                get_docs(self.source.as_ref(), &target).await?
            }
            None => match slot.map(str::trim).filter(|raw| !raw.is_empty()) {
                Some(raw) => {
                    info!(slot = raw, "Module slot has no attribute to look up");
                    not_found_message(raw)
                }
                None => {
                    info!("Module slot is empty");
                    MISSING_MODULE_MESSAGE.to_string()
                }
            },
        };
        Ok(LexResponse::fulfilled(content))
    }
}
