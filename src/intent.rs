//! Intent Routing
//!
//! Maps intent names to handlers. The registry is built once at startup and
//! handed to the router explicitly; an unknown intent name is a hard error.

pub mod get_docs;
pub mod registry;
pub mod router;

pub use get_docs::{GetDocsHandler, GET_DOCS_INTENT, MISSING_MODULE_MESSAGE};
pub use registry::{IntentHandler, IntentRegistry};
pub use router::{dispatch, handle_event};
