use async_trait::async_trait;
use docbot::docs::DocsSource;
use docbot::lex::IntentRequest;
use docbot::DocbotError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const RE_PAGE: &str = include_str!("../fixtures/re.xhtml");

/// In-memory docs source keyed by module name; counts fetches.
#[derive(Default)]
pub struct FixtureDocs {
    pages: HashMap<String, String>,
    fetches: AtomicUsize,
}

impl FixtureDocs {
    pub fn with_page(mut self, module: &str, html: &str) -> Self {
        self.pages.insert(module.to_string(), html.to_string());
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocsSource for FixtureDocs {
    async fn fetch_page(&self, module: &str) -> Result<String, DocbotError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.pages
            .get(module)
            .cloned()
            .ok_or_else(|| DocbotError::HttpStatus {
                url: format!("fixture://{}", module),
                status: 404,
            })
    }
}

pub fn get_docs_request(module_slot: &str) -> IntentRequest {
    IntentRequest::new("PyDocs", "user-1", "GetDocs").with_slot("module", module_slot)
}
