//! Letter choices and the action space
//!
//! The alphabet is fixed, so the action space of a game is just the letters
//! that have not been tried yet.

use super::GameState;
use super::contracts::Action;
use std::fmt;

/// Letters an agent may guess, in the order they are offered
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// A single letter guess
///
/// Identity is the letter itself; a choice carries no game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Choice(u8);

impl Choice {
    /// Create a choice for `letter`, normalising to lowercase
    ///
    /// Returns `None` for anything outside `a..z`.
    #[must_use]
    pub fn new(letter: char) -> Option<Self> {
        let letter = letter.to_ascii_lowercase();
        letter
            .is_ascii_lowercase()
            .then_some(Self(letter as u8))
    }

    #[inline]
    #[must_use]
    pub const fn letter(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn as_char(self) -> char {
        char::from(self.0)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Action<GameState> for Choice {
    fn id(&self) -> String {
        self.to_string()
    }

    fn apply(&self, state: &mut GameState) {
        state.choose(self.0);
    }
}

/// Every untried letter of the alphabet, alphabetically
///
/// # Examples
/// ```
/// use hangman_rl::core::{GameState, Word, available_choices};
///
/// let mut game = GameState::new(Word::new("cat").unwrap(), 6);
/// assert_eq!(available_choices(&game).len(), 26);
///
/// game.choose(b'a');
/// let choices = available_choices(&game);
/// assert_eq!(choices.len(), 25);
/// assert_eq!(choices[0].as_char(), 'b');
/// ```
#[must_use]
pub fn available_choices(game: &GameState) -> Vec<Choice> {
    ALPHABET
        .iter()
        .filter(|&&letter| !game.has_attempted(letter))
        .map(|&letter| Choice(letter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn choice_new_normalizes_and_validates() {
        assert_eq!(Choice::new('Q').map(Choice::letter), Some(b'q'));
        assert_eq!(Choice::new('e').map(Choice::as_char), Some('e'));
        assert!(Choice::new('1').is_none());
        assert!(Choice::new('é').is_none());
        assert!(Choice::new(' ').is_none());
    }

    #[test]
    fn choice_id_is_the_letter() {
        let choice = Choice::new('k').unwrap();
        assert_eq!(choice.id(), "k");
        assert_eq!(choice.to_string(), "k");
    }

    #[test]
    fn choice_equality_by_letter() {
        assert_eq!(Choice::new('a'), Choice::new('A'));
        assert_ne!(Choice::new('a'), Choice::new('b'));
    }

    #[test]
    fn apply_mutates_game() {
        let mut game = GameState::new(Word::new("cat").unwrap(), 6);
        Choice::new('c').unwrap().apply(&mut game);
        assert!(game.has_attempted(b'c'));
        assert_eq!(game.hidden(), 2);
    }

    #[test]
    fn action_space_shrinks_by_one_per_application() {
        let mut game = GameState::new(Word::new("zebra").unwrap(), 30);
        let mut expected = ALPHABET.len();

        for &letter in ALPHABET.iter().rev() {
            let choices = available_choices(&game);
            assert_eq!(choices.len(), expected);
            assert!(choices.windows(2).all(|w| w[0] < w[1]));
            assert!(choices.iter().all(|c| !game.has_attempted(c.letter())));

            game.choose(letter);
            expected -= 1;
        }

        assert!(available_choices(&game).is_empty());
    }
}
