//! Hangman RL
//!
//! A Hangman reinforcement-learning environment and a tabular Q-learning agent
//! that learns to play it.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_rl::core::{GameState, Status, Word};
//! use hangman_rl::core::contracts::{Rewarder, State};
//!
//! let mut game = GameState::new(Word::new("cat").unwrap(), 6);
//!
//! // Legal actions are every untried letter
//! let choices = game.next();
//! assert_eq!(choices.len(), 26);
//!
//! // Rewards are scored without touching the game
//! let c = choices[2];
//! assert_eq!(game.reward(&c), 24.0);
//!
//! game.choose(b'c');
//! assert_eq!(game.key(), "c__");
//! assert_eq!(game.status(), Status::Active);
//! ```

// Core domain types
pub mod core;

// Decision engine
pub mod learning;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

#[cfg(test)]
mod test_support;
