//! Event entry point and intent dispatch.

use crate::error::DocbotError;
use crate::intent::registry::IntentRegistry;
use crate::lex::{IntentRequest, LexResponse};
use tracing::debug;

/// Route a request to the handler registered under its intent name.
///
/// The handler's result is returned as-is.
pub async fn dispatch(
    registry: &IntentRegistry,
    request: &IntentRequest,
) -> Result<LexResponse, DocbotError> {
    debug!(
        user_id = %request.user_id,
        intent_name = %request.intent_name(),
        "dispatch"
    );
    let handler = registry.get_or_error(request.intent_name())?;
    handler.handle(request).await
}

/// Top-level handler for one platform event.
pub async fn handle_event(
    registry: &IntentRegistry,
    event: &IntentRequest,
) -> Result<LexResponse, DocbotError> {
    debug!(bot_name = %event.bot.name, "event received");
    dispatch(registry, event).await
}
