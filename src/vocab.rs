//! Slot Vocabulary Generator
//!
//! Converts a plain text file (one value per line) into the slot type JSON the
//! chat platform imports. Values keep file order.

use crate::error::DocbotError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Named enumeration of slot values.
///
/// Field order matches the platform's export format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotEnumeration {
    pub enumeration_values: Vec<EnumerationValue>,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationValue {
    pub value: String,
}

/// Read one value per line, each trimmed. Blank lines become empty values.
pub fn read_raw_values(path: &Path) -> Result<Vec<String>, DocbotError> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(|line| line.trim().to_string()).collect())
}

pub fn generate_slot(name: &str, description: &str, values: Vec<String>) -> SlotEnumeration {
    SlotEnumeration {
        enumeration_values: values
            .into_iter()
            .map(|value| EnumerationValue { value })
            .collect(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// `<dir>/<slot name>.json`
pub fn slot_output_path(dir: &Path, slot_name: &str) -> PathBuf {
    dir.join(format!("{}.json", slot_name))
}

/// Write the slot as single-line JSON; the directory must already exist.
pub fn save_slot(slot: &SlotEnumeration, dir: &Path) -> Result<PathBuf, DocbotError> {
    let path = slot_output_path(dir, &slot.name);
    let json = serde_json::to_string(slot)?;
    fs::write(&path, json)?;
    Ok(path)
}

/// Full pipeline: `<dir>/<raw file>` in, `<dir>/<slot name>.json` out.
pub fn generate_slot_file(
    dir: &Path,
    slot_name: &str,
    slot_description: &str,
    raw_filename: &Path,
) -> Result<PathBuf, DocbotError> {
    let raw_path = dir.join(raw_filename);
    debug!(path = %raw_path.display(), "Reading raw slot values");
    let values = read_raw_values(&raw_path)?;

    let slot = generate_slot(slot_name, slot_description, values);
    let path = save_slot(&slot, dir)?;
    info!(
        slot = slot_name,
        values = slot.enumeration_values.len(),
        path = %path.display(),
        "Wrote slot file"
    );
    Ok(path)
}
