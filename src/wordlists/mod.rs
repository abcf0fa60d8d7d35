//! Word lists for hangman episodes
//!
//! Provides the embedded default list, file loading, and the bounded [`Corpus`]
//! that episodes draw their target words from.

mod corpus;
mod embedded;
pub mod loader;

pub use corpus::{Corpus, CorpusError};
pub use embedded::{WORDLIST, WORDLIST_COUNT};
