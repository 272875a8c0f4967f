//! Integration tests for docbot

mod cli_parse;
mod dispatch;
mod docs_extraction;
mod http_fetch;
mod support;
