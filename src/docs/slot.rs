//! Splitting the `module` slot into module path and attribute.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A module path plus the attribute to look up in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRef {
    /// Dotted module path, e.g. `os.path`
    pub module: String,
    /// Last dotted segment, e.g. `join`
    pub attribute: String,
}

impl ModuleRef {
    pub fn new(module: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            attribute: attribute.into(),
        }
    }

    /// Element id used by the docs page for this attribute.
    pub fn anchor(&self) -> String {
        format!("{}.{}", self.module, self.attribute)
    }
}

impl fmt::Display for ModuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.attribute)
    }
}

/// Parse a raw slot value.
///
/// `os.path.join` gives module `os.path` and attribute `join`. Empty input,
/// a single segment, or an empty module/attribute half yields `None`.
pub fn parse_module_slot(slot: Option<&str>) -> Option<ModuleRef> {
    let (module, attribute) = slot?.rsplit_once('.')?;
    if module.is_empty() || attribute.is_empty() {
        return None;
    }
    Some(ModuleRef::new(module, attribute))
}
