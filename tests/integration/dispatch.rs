use async_trait::async_trait;
use docbot::intent::{
    dispatch, handle_event, IntentHandler, IntentRegistry, MISSING_MODULE_MESSAGE,
};
use docbot::lex::{IntentRequest, LexResponse};
use docbot::DocbotError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::support::{get_docs_request, FixtureDocs, RE_PAGE};

struct Counting {
    reply: &'static str,
    calls: AtomicUsize,
}

#[async_trait]
impl IntentHandler for Counting {
    async fn handle(&self, _request: &IntentRequest) -> Result<LexResponse, DocbotError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(LexResponse::fulfilled(self.reply))
    }
}

fn counting(reply: &'static str) -> Arc<Counting> {
    Arc::new(Counting {
        reply,
        calls: AtomicUsize::new(0),
    })
}

#[tokio::test]
async fn dispatch_invokes_exactly_the_named_handler() {
    let first = counting("first");
    let second = counting("second");
    let mut registry = IntentRegistry::new();
    registry.register("First", first.clone());
    registry.register("Second", second.clone());

    let response = dispatch(&registry, &IntentRequest::new("bot", "u", "Second"))
        .await
        .unwrap();

    assert_eq!(response, LexResponse::fulfilled("second"));
    assert_eq!(first.calls.load(Ordering::SeqCst), 0);
    assert_eq!(second.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn dispatch_rejects_unknown_intent() {
    let registry = IntentRegistry::new();
    let err = dispatch(&registry, &IntentRequest::new("bot", "u", "BookFlight"))
        .await
        .unwrap_err();
    assert!(matches!(&err, DocbotError::UnsupportedIntent(name) if name == "BookFlight"));
    assert!(err.to_string().contains("BookFlight"));
}

#[tokio::test]
async fn get_docs_answers_from_fetched_page() {
    let docs = Arc::new(FixtureDocs::default().with_page("re", RE_PAGE));
    let registry = IntentRegistry::with_default_handlers(docs.clone());

    let response = handle_event(&registry, &get_docs_request("re.escape"))
        .await
        .unwrap();

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["dialogAction"]["type"], "Close");
    assert_eq!(value["dialogAction"]["fulfillmentState"], "Fulfilled");
    assert_eq!(value["dialogAction"]["message"]["contentType"], "PlainText");
    assert_eq!(
        value["dialogAction"]["message"]["content"],
        "Escape special characters inpattern."
    );
    assert_eq!(docs.fetch_count(), 1);
}

#[tokio::test]
async fn get_docs_not_found_is_a_normal_answer() {
    let docs = Arc::new(FixtureDocs::default().with_page("re", RE_PAGE));
    let registry = IntentRegistry::with_default_handlers(docs);

    let response = handle_event(&registry, &get_docs_request("re.nothing"))
        .await
        .unwrap();
    assert_eq!(response.content(), "Docs not found for re.nothing");
}

#[tokio::test]
async fn get_docs_unparseable_slot_skips_fetch() {
    let docs = Arc::new(FixtureDocs::default());
    let registry = IntentRegistry::with_default_handlers(docs.clone());

    let response = handle_event(&registry, &get_docs_request("sys"))
        .await
        .unwrap();
    assert_eq!(response.content(), "Docs not found for sys");

    let mut no_slot = get_docs_request("");
    no_slot.current_intent.slots.clear();
    let response = handle_event(&registry, &no_slot).await.unwrap();
    assert_eq!(response.content(), MISSING_MODULE_MESSAGE);

    let response = handle_event(&registry, &get_docs_request("  "))
        .await
        .unwrap();
    assert_eq!(response.content(), "Docs not found: no module name was given");

    assert_eq!(docs.fetch_count(), 0);
}

#[tokio::test]
async fn get_docs_fetch_failure_propagates() {
    let registry = IntentRegistry::with_default_handlers(Arc::new(FixtureDocs::default()));

    let err = handle_event(&registry, &get_docs_request("nosuchmodule.attr"))
        .await
        .unwrap_err();
    assert!(matches!(err, DocbotError::HttpStatus { status: 404, .. }));
}
