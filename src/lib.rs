//! Docbot: standard-library docs answers for chat intents
//!
//! Receives intent requests from a chat platform, fetches the documentation
//! page for the requested module, and replies with the summary paragraph of
//! the requested attribute. Also ships a generator for slot vocabulary files.

pub mod config;
pub mod docs;
pub mod error;
pub mod intent;
pub mod lex;
pub mod logging;
pub mod tooling;
pub mod vocab;

pub use error::{DocbotError, ExtractError};
