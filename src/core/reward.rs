//! Reward shaping for letter guesses
//!
//! Hits earn a reward that decays with the number of letters tried so far; a
//! miss always costs the same large penalty.

use super::GameState;

/// Numerator of the hit reward
pub const HIT_REWARD: f64 = 24.0;

/// Reward for a letter that is not in the word
pub const MISS_PENALTY: f64 = -1000.0;

/// Score `letter` against `game` without changing it
///
/// For a hit the reward is `24 / n`, where `n` counts the attempted letters
/// including `letter` itself. Scoring before applying therefore divides by
/// `1 + attempted`.
///
/// # Examples
/// ```
/// use hangman_rl::core::{GameState, Word, reward};
///
/// let mut game = GameState::new(Word::new("cat").unwrap(), 6);
/// game.choose(b'x');
/// game.choose(b'y');
///
/// assert_eq!(reward(&game, b'a'), 8.0);
/// assert_eq!(reward(&game, b'z'), -1000.0);
/// ```
#[must_use]
pub fn reward(game: &GameState, letter: u8) -> f64 {
    if !game.word().has_letter(letter) {
        return MISS_PENALTY;
    }

    let attempted = game.moves() + usize::from(!game.has_attempted(letter));
    HIT_REWARD / attempted as f64
}
