use clap::Parser;
use docbot::config::DocbotConfig;
use docbot::intent::IntentRegistry;
use docbot::tooling::cli::{Cli, CliContext, Commands, SlotsCli};
use std::sync::Arc;

use crate::support::{FixtureDocs, RE_PAGE};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["docbot", "invoke"],
        vec!["docbot", "invoke", "--event", "event.json"],
        vec!["docbot", "lookup", "os.path.join"],
        vec!["docbot", "intents"],
        vec!["docbot", "--log-level", "debug", "--log-format", "json", "intents"],
        vec!["docbot", "--config", "docbot.toml", "lookup", "re.compile"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn lookup_requires_a_name() {
    assert!(Cli::try_parse_from(["docbot", "lookup"]).is_err());
}

#[test]
fn slots_cli_takes_exactly_three_positionals() {
    let parsed =
        SlotsCli::try_parse_from(["generate_slots", "Color", "Colors", "colors.txt"]).unwrap();
    assert_eq!(parsed.slot_name, "Color");
    assert_eq!(parsed.slot_description, "Colors");
    assert_eq!(parsed.slot_raw_filename, std::path::PathBuf::from("colors.txt"));

    assert!(SlotsCli::try_parse_from(["generate_slots", "Color", "Colors"]).is_err());
    assert!(SlotsCli::try_parse_from(["generate_slots", "a", "b", "c", "d"]).is_err());
    assert!(SlotsCli::try_parse_from(["generate_slots", "--pretty", "a", "b", "c"]).is_err());
}

fn fixture_context() -> CliContext {
    let docs = Arc::new(FixtureDocs::default().with_page("re", RE_PAGE));
    CliContext::with_registry(
        DocbotConfig::default(),
        IntentRegistry::with_default_handlers(docs),
    )
}

#[tokio::test]
async fn lookup_prints_description() {
    let context = fixture_context();
    let output = context
        .execute(&Commands::Lookup {
            name: "re.escape".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(output, "Escape special characters inpattern.");
}

#[tokio::test]
async fn invoke_returns_response_json() {
    let context = fixture_context();
    let event = r#"{
        "bot": {"name": "PyDocs"},
        "userId": "user-1",
        "currentIntent": {"name": "GetDocs", "slots": {"module": "re.compile"}}
    }"#;

    let output = context.invoke(event).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(value["dialogAction"]["message"]["content"]
        .as_str()
        .unwrap()
        .starts_with("Compile a regular expression pattern"));
}

#[tokio::test]
async fn invoke_unknown_intent_fails() {
    let context = fixture_context();
    let event = r#"{"bot": {"name": "PyDocs"}, "userId": "u", "currentIntent": {"name": "Weather", "slots": {}}}"#;
    let err = context.invoke(event).await.unwrap_err();
    assert_eq!(err.to_string(), "Intent with name Weather not supported");
}

#[tokio::test]
async fn intents_lists_registry() {
    let context = fixture_context();
    assert_eq!(context.execute(&Commands::Intents).await.unwrap(), "GetDocs");
}
