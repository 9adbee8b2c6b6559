// Content Enhancement Engine
// Rewrites a resume section by picking phrases from curated template pools.
// Every pick is a pure function of the input text: no randomness, no I/O.

pub mod education;
pub mod engine;
pub mod experience;
pub mod handlers;
pub mod registry;
pub mod section;
pub mod selector;
pub mod skills;
pub mod summary;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnhanceError {
    #[error("Content cannot be empty")]
    EmptyContent,

    /// A template pool with no phrases was asked to produce one.
    #[error("Template pool '{0}' is empty")]
    EmptyPool(String),
}
