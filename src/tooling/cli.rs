//! CLI Tooling
//!
//! `docbot` runs the intent handler locally, either on a full platform event
//! or on a bare dotted name. `generate_slots` builds slot vocabulary files.

use crate::config::{ConfigLoader, DocbotConfig, SlotsConfig};
use crate::docs::{DocsSource, HttpDocsSource};
use crate::error::DocbotError;
use crate::intent::{handle_event, IntentRegistry, GET_DOCS_INTENT};
use crate::lex::request::MODULE_SLOT;
use crate::lex::IntentRequest;
use crate::logging::init_logging;
use crate::vocab;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const LOCAL_BOT_NAME: &str = "docbot-cli";
const LOCAL_USER_ID: &str = "local";

/// Docbot CLI - standard-library docs lookups for chat intents
#[derive(Parser)]
#[command(name = "docbot")]
#[command(about = "Answer standard-library lookups from the online documentation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Handle one intent request event and print the response JSON
    Invoke {
        /// Event JSON file (reads stdin when omitted)
        #[arg(long)]
        event: Option<PathBuf>,
    },
    /// Print the docs summary for a dotted name such as `re.compile`
    Lookup {
        /// Module path and attribute, e.g. `os.path.join`
        name: String,
    },
    /// List registered intents
    Intents,
}

/// Generates json slots file for uploading to lex-models from raw text
#[derive(Parser)]
#[command(name = "generate_slots")]
#[command(about = "Generates json slots file for uploading to lex-models from raw text")]
pub struct SlotsCli {
    /// The name of your slot.
    pub slot_name: String,

    /// The description of your slot.
    pub slot_description: String,

    /// The filename of your raw slot vals.
    pub slot_raw_filename: PathBuf,
}

impl SlotsCli {
    /// Generate the slot file under the configured slots directory.
    pub fn run(&self, config: &SlotsConfig) -> Result<PathBuf, DocbotError> {
        vocab::generate_slot_file(
            &config.dir,
            &self.slot_name,
            &self.slot_description,
            &self.slot_raw_filename,
        )
    }
}

/// CLI context holding config and the intent registry
pub struct CliContext {
    config: DocbotConfig,
    registry: IntentRegistry,
}

impl CliContext {
    /// Load configuration and wire the default registry to the HTTP docs source.
    pub fn new(config_path: Option<&Path>) -> Result<Self, DocbotError> {
        let config = load_config(config_path)?;
        let source: Arc<dyn DocsSource> = Arc::new(HttpDocsSource::from_config(&config.docs)?);
        Ok(Self::with_registry(
            config,
            IntentRegistry::with_default_handlers(source),
        ))
    }

    /// Build from parsed arguments, folding log flags into the config.
    pub fn from_cli(cli: &Cli) -> Result<Self, DocbotError> {
        let mut context = Self::new(cli.config.as_deref())?;
        context.apply_log_overrides(cli);
        Ok(context)
    }

    pub fn with_registry(config: DocbotConfig, registry: IntentRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &DocbotConfig {
        &self.config
    }

    pub fn apply_log_overrides(&mut self, cli: &Cli) {
        let logging = &mut self.config.logging;
        if let Some(level) = &cli.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &cli.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &cli.log_output {
            logging.output = output.clone();
        }
        if let Some(file) = &cli.log_file {
            logging.file = Some(file.clone());
        }
    }

    pub fn init_logging(&self) -> Result<(), DocbotError> {
        init_logging(Some(&self.config.logging), self.config.timezone.log_zone()?)
    }

    /// Execute a command and return what should be printed on stdout.
    pub async fn execute(&self, command: &Commands) -> Result<String, DocbotError> {
        match command {
            Commands::Invoke { event } => {
                let raw = match event {
                    Some(path) => std::fs::read_to_string(path)?,
                    None => std::io::read_to_string(std::io::stdin())?,
                };
                self.invoke(&raw).await
            }
            Commands::Lookup { name } => self.lookup(name).await,
            Commands::Intents => Ok(self.registry.intent_names().join("\n")),
        }
    }

    /// Run a raw event body through the router and serialize the response.
    pub async fn invoke(&self, raw_event: &str) -> Result<String, DocbotError> {
        let request = IntentRequest::from_json(raw_event)?;
        let response = handle_event(&self.registry, &request).await?;
        Ok(serde_json::to_string(&response)?)
    }

    /// Answer a dotted name exactly as the `GetDocs` intent would.
    pub async fn lookup(&self, name: &str) -> Result<String, DocbotError> {
        let request = IntentRequest::new(LOCAL_BOT_NAME, LOCAL_USER_ID, GET_DOCS_INTENT)
            .with_slot(MODULE_SLOT, name);
        let response = handle_event(&self.registry, &request).await?;
        Ok(response.content().to_string())
    }
}

/// Explicit file wins; otherwise `docbot.toml` in the working directory.
pub fn load_config(config_path: Option<&Path>) -> Result<DocbotConfig, DocbotError> {
    let config = match config_path {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load(Path::new("."))?,
    };
    Ok(config)
}
