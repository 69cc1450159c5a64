//! `kintree` - A family tree record keeper
//!
//! This library provides the core functionality for maintaining a JSON-encoded
//! family tree document: appending person records and best-effort keeping the
//! reciprocal parent/child and spouse links in sync.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod person;
pub mod prompt;
pub mod storage;
pub mod tree;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use person::Person;
pub use prompt::Prompter;
pub use storage::{TreeStats, TreeStore};
pub use tree::FamilyTree;
