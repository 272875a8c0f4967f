//! Documentation Lookup
//!
//! Turns a dotted `module.attribute` name into a plain-text description taken
//! from the module's reference page. The page is fetched fresh on every call;
//! nothing is cached.

pub mod dom;
pub mod extract;
pub mod fetch;
pub mod sanitize;
pub mod slot;

pub use extract::{find_description, get_attr_docstr, not_found_message};
pub use fetch::{DocsSource, HttpDocsSource};
pub use slot::{parse_module_slot, ModuleRef};

use crate::error::DocbotError;

/// Fetch the module page and extract the attribute's description.
///
/// Transport failures propagate; extraction failures become the
/// "Docs not found" text.
pub async fn get_docs(source: &dyn DocsSource, target: &ModuleRef) -> Result<String, DocbotError> {
    let html = source.fetch_page(&target.module).await?;
    Ok(get_attr_docstr(&html, &target.module, &target.attribute))
}
