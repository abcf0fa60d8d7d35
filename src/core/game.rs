//! Hangman episode state machine
//!
//! A `GameState` is built fresh for every episode and is only ever mutated by
//! choosing a letter. Its status is recomputed from the remaining lives and
//! hidden slots on every query rather than stored.

use super::choice::{Choice, available_choices};
use super::contracts::{Rewarder, State};
use super::reward::reward;
use super::{Pattern, Word};
use rustc_hash::FxHashSet;
use std::fmt;

/// Lives a new game starts with unless configured otherwise
pub const STARTING_LIVES: u32 = 6;

/// Completion status of an episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Active,
    Won,
    Lost,
}

impl Status {
    #[inline]
    #[must_use]
    pub const fn is_complete(self) -> bool {
        !matches!(self, Self::Active)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// State of a single hangman episode
#[derive(Debug, Clone)]
pub struct GameState {
    word: Word,
    hidden: usize,
    starting_lives: u32,
    lives: u32,
    attempted: FxHashSet<u8>,
    pattern: Pattern,
    debug: bool,
}

impl GameState {
    /// Start a new episode for `word` with `starting_lives` lives
    #[must_use]
    pub fn new(word: Word, starting_lives: u32) -> Self {
        let pattern = Pattern::hidden(word.len());
        Self {
            hidden: word.len(),
            word,
            starting_lives,
            lives: starting_lives,
            attempted: FxHashSet::default(),
            pattern,
            debug: false,
        }
    }

    /// Enable or disable the [`GameState::log`] progress hook
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Number of word positions not yet revealed
    #[inline]
    #[must_use]
    pub const fn hidden(&self) -> usize {
        self.hidden
    }

    #[inline]
    #[must_use]
    pub const fn starting_lives(&self) -> u32 {
        self.starting_lives
    }

    #[inline]
    #[must_use]
    pub const fn lives(&self) -> u32 {
        self.lives
    }

    /// Lives lost so far
    #[inline]
    #[must_use]
    pub const fn misses(&self) -> u32 {
        self.starting_lives - self.lives
    }

    /// Number of letters attempted so far
    #[inline]
    #[must_use]
    pub fn moves(&self) -> usize {
        self.attempted.len()
    }

    #[inline]
    #[must_use]
    pub fn has_attempted(&self, letter: u8) -> bool {
        self.attempted.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Apply a letter guess, returning true if it was in the word
    ///
    /// Every matching position is revealed at once. A miss costs exactly one
    /// life. Callers must not choose the same letter twice in an episode; the
    /// action space never offers one.
    pub fn choose(&mut self, letter: u8) -> bool {
        self.attempted.insert(letter);

        let positions = self.word.positions_of(letter);
        if positions.is_empty() {
            self.lives = self.lives.saturating_sub(1);
            return false;
        }

        self.hidden -= self.pattern.reveal(letter, positions);
        true
    }

    /// Current completion status
    ///
    /// A fully revealed word wins even when no lives remain.
    #[must_use]
    pub const fn status(&self) -> Status {
        if self.hidden == 0 {
            Status::Won
        } else if self.lives == 0 {
            Status::Lost
        } else {
            Status::Active
        }
    }

    /// Emit a progress line for this episode when debugging is enabled
    pub fn log(&self, message: impl fmt::Display) {
        if self.debug {
            tracing::debug!(
                target: "hangman::game",
                "[GAME {}] ({} moves, {} lives) {}",
                self.word,
                self.moves(),
                self.lives,
                message
            );
        }
    }
}

impl State for GameState {
    type Action = Choice;

    /// The revealed pattern only; lives and attempted letters are not part of it
    fn key(&self) -> String {
        self.pattern.key()
    }

    fn is_complete(&self) -> bool {
        self.status().is_complete()
    }

    fn next(&self) -> Vec<Choice> {
        available_choices(self)
    }
}

impl Rewarder for GameState {
    fn reward(&self, action: &Choice) -> f64 {
        reward(self, action.letter())
    }
}
