//! Revealed pattern of a hangman episode
//!
//! One slot per word position, each either a revealed letter or blank. The
//! pattern doubles as the canonical state key handed to the learning agent.

use std::fmt;

/// Placeholder used for hidden positions in the state key
pub const HIDDEN: char = '_';

/// Per-position view of the target word as the player sees it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: Vec<Option<u8>>,
}

impl Pattern {
    /// A fully hidden pattern for a word of `len` letters
    #[must_use]
    pub fn hidden(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Number of slots (always the word length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Count the number of still-blank slots
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Reveal `letter` at every given position
    ///
    /// Returns how many slots went from blank to revealed.
    pub(crate) fn reveal(&mut self, letter: u8, positions: &[usize]) -> usize {
        let mut revealed = 0;
        for &i in positions {
            if self.slots[i].is_none() {
                self.slots[i] = Some(letter);
                revealed += 1;
            }
        }
        revealed
    }

    /// Fixed-width key: the revealed letter or [`HIDDEN`] per slot
    ///
    /// # Examples
    /// ```
    /// use hangman_rl::core::{GameState, Word};
    ///
    /// let mut game = GameState::new(Word::new("cat").unwrap(), 6);
    /// game.choose(b't');
    /// assert_eq!(game.pattern().key(), "__t");
    /// ```
    #[must_use]
    pub fn key(&self) -> String {
        self.slots
            .iter()
            .map(|slot| slot.map_or(HIDDEN, char::from))
            .collect()
    }
}

/// Spaced, uppercase rendering for people: `C _ T`
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match slot {
                Some(letter) => write!(f, "{}", char::from(*letter).to_ascii_uppercase())?,
                None => write!(f, "{HIDDEN}")?,
            }
        }
        Ok(())
    }
}
