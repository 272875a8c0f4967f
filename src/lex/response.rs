use serde::{Deserialize, Serialize};

/// Response envelope returned to the chat platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexResponse {
    pub dialog_action: DialogAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogAction {
    #[serde(rename = "type")]
    pub action_type: DialogActionType,
    pub fulfillment_state: FulfillmentState,
    pub message: Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogActionType {
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    PlainText,
}

impl LexResponse {
    /// Close the conversation as fulfilled with a plain-text answer.
    pub fn fulfilled(content: impl Into<String>) -> Self {
        Self {
            dialog_action: DialogAction {
                action_type: DialogActionType::Close,
                fulfillment_state: FulfillmentState::Fulfilled,
                message: Message {
                    content_type: ContentType::PlainText,
                    content: content.into(),
                },
            },
        }
    }

    pub fn content(&self) -> &str {
        &self.dialog_action.message.content
    }
}
