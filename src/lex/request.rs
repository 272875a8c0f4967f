use crate::error::DocbotError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Slot carrying the dotted `module.attribute` name.
pub const MODULE_SLOT: &str = "module";

/// Intent request as delivered by the chat platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub bot: Bot,
    pub user_id: String,
    pub current_intent: CurrentIntent,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invocation_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dialog_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_transcript: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_attributes: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,
    /// Unfilled slots arrive as `null`
    #[serde(default)]
    pub slots: HashMap<String, Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
}

impl IntentRequest {
    /// Parse an event body.
    pub fn from_json(raw: &str) -> Result<Self, DocbotError> {
        serde_json::from_str(raw).map_err(|e| DocbotError::InvalidRequest(e.to_string()))
    }

    pub fn intent_name(&self) -> &str {
        &self.current_intent.name
    }

    /// Value of a slot; `None` when the slot is missing or unfilled.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.current_intent
            .slots
            .get(name)
            .and_then(|value| value.as_deref())
    }

    /// Build a minimal request, mainly for local invocation.
    pub fn new(bot_name: &str, user_id: &str, intent_name: &str) -> Self {
        Self {
            bot: Bot {
                name: bot_name.to_string(),
                alias: None,
                version: None,
            },
            user_id: user_id.to_string(),
            current_intent: CurrentIntent {
                name: intent_name.to_string(),
                slots: HashMap::new(),
                confirmation_status: None,
            },
            message_version: None,
            invocation_source: None,
            output_dialog_mode: None,
            input_transcript: None,
            session_attributes: None,
            request_attributes: None,
        }
    }

    pub fn with_slot(mut self, name: &str, value: &str) -> Self {
        self.current_intent
            .slots
            .insert(name.to_string(), Some(value.to_string()));
        self
    }
}
