//! Attribute description extraction.
//!
//! The reference pages mark each documented attribute with an element whose
//! id is `module.attribute`. Its parent is the definition block; the block's
//! second child holds the body, and the body's first paragraph is the summary.

use super::dom::Document;
use super::sanitize::strip_entities;
use crate::error::ExtractError;
use tracing::debug;

/// Fallback answer for anything that could not be looked up.
pub fn not_found_message(name: &str) -> String {
    format!("Docs not found for {}", name)
}

/// Locate the description for `module.attr`, reporting why it failed.
pub fn find_description(html: &str, module: &str, attr: &str) -> Result<String, ExtractError> {
    let anchor = format!("{}.{}", module, attr);
    let sanitized = strip_entities(html);
    let doc = Document::parse(&sanitized)?;

    let target = doc.find_by_id(&anchor).ok_or_else(|| ExtractError::NotFound {
        anchor: anchor.clone(),
    })?;
    let block = doc
        .parent(target)
        .ok_or_else(|| mismatch(&anchor, "anchor has no enclosing block"))?;
    let body = doc
        .child_elements(block)
        .nth(1)
        .ok_or_else(|| mismatch(&anchor, "definition block has fewer than two children"))?;
    let paragraph = doc
        .descendants(body)
        .into_iter()
        .find(|&id| doc.element(id).is_paragraph())
        .ok_or_else(|| mismatch(&anchor, "definition body has no paragraph"))?;

    Ok(doc.text_content(paragraph))
}

/// Description text for `module.attr`, or the "Docs not found" fallback.
pub fn get_attr_docstr(html: &str, module: &str, attr: &str) -> String {
    match find_description(html, module, attr) {
        Ok(text) => text,
        Err(err) => {
            debug!(module, attr, error = %err, "Docs extraction failed");
            not_found_message(&format!("{}.{}", module, attr))
        }
    }
}

fn mismatch(anchor: &str, reason: &str) -> ExtractError {
    ExtractError::StructureMismatch {
        anchor: anchor.to_string(),
        reason: reason.to_string(),
    }
}
