//! Markup cleanup ahead of strict parsing.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

fn entity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"&[a-zA-Z_0-9]{1,7};").expect("entity pattern is a valid regex")
    })
}

/// Drop character references such as `&mdash;` or `&nbsp;`.
///
/// The XML parser only knows the five predefined entities, so anything the
/// HTML page declares would otherwise abort the parse.
pub fn strip_entities(markup: &str) -> Cow<'_, str> {
    entity_pattern().replace_all(markup, "")
}
