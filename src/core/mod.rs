//! Core domain types for Hangman
//!
//! The episode state machine, its action space and the reward model. Nothing in
//! here knows about learning agents, word lists or terminals; a decision engine
//! reaches the game only through the traits in [`contracts`].

mod choice;
pub mod contracts;
mod game;
mod pattern;
mod reward;
mod word;

pub use choice::{ALPHABET, Choice, available_choices};
pub use game::{GameState, STARTING_LIVES, Status};
pub use pattern::{HIDDEN, Pattern};
pub use reward::{HIT_REWARD, MISS_PENALTY, reward};
pub use word::{Word, WordError};
