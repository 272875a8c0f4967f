//! Config composition: defaults plus ordered sources.

mod merge_policy;
pub mod service;
