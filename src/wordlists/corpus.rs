//! Bounded word corpus
//!
//! Built once at startup and passed by reference to whatever plays episodes.

use super::WORDLIST;
use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::io;
use std::path::Path;

/// Error type for corpus construction
#[derive(Debug)]
pub enum CorpusError {
    /// The word list file could not be read
    Io { path: String, source: io::Error },
    /// No valid word was available
    Empty,
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "Failed to read word list {path}: {source}"),
            Self::Empty => write!(f, "Word list contains no valid words"),
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

/// Immutable, non-empty collection of candidate words
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<Word>,
    requested: usize,
}

impl Corpus {
    /// Build a corpus from already-parsed words
    ///
    /// `requested` is the configured bound. Supplying fewer words than requested
    /// is not an error: the corpus is simply smaller, and a warning is logged.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::Empty`] if `words` is empty.
    pub fn new(words: Vec<Word>, requested: usize) -> Result<Self, CorpusError> {
        if words.is_empty() {
            return Err(CorpusError::Empty);
        }

        if words.len() < requested {
            tracing::warn!(
                requested,
                available = words.len(),
                "corpus exhausted, using every available word"
            );
        }

        Ok(Self { words, requested })
    }

    /// The first `requested` words of the embedded list
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::Empty`] if `requested` is zero.
    pub fn embedded(requested: usize) -> Result<Self, CorpusError> {
        Self::new(words_from_slice(WORDLIST, requested), requested)
    }

    /// The first `requested` valid words of a file
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::Io`] if the file cannot be read, or
    /// [`CorpusError::Empty`] if it holds no valid word.
    pub fn from_file<P: AsRef<Path>>(path: P, requested: usize) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let words = load_from_file(path, requested).map_err(|source| CorpusError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::new(words, requested)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The configured bound this corpus was built with
    #[inline]
    #[must_use]
    pub const fn requested(&self) -> usize {
        self.requested
    }

    /// Whether fewer words were available than requested
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.words.len() < self.requested
    }

    /// A uniformly random word
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.words
            .choose(rng)
            .unwrap_or_else(|| unreachable!("corpus is never empty"))
    }
}
