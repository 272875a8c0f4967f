//! Chat platform wire types
//!
//! The intent request arriving from the platform and the close/fulfilled
//! response sent back. Field names follow the platform's camelCase JSON.

pub mod request;
pub mod response;

pub use request::{Bot, CurrentIntent, IntentRequest};
pub use response::{
    ContentType, DialogAction, DialogActionType, FulfillmentState, LexResponse, Message,
};
