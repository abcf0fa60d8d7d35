//! Tabular Q-learning decision engine
//!
//! A reference engine for environments implementing [`crate::core::contracts`].
//! It owns the value table; the environment only supplies state keys, legal
//! actions and rewards.
//!
//! ## Usage Example
//!
//! ```
//! use hangman_rl::core::{GameState, Word};
//! use hangman_rl::core::contracts::State;
//! use hangman_rl::learning::{AgentConfig, QAgent};
//!
//! let mut agent = QAgent::new(&AgentConfig::default());
//! let mut game = GameState::new(Word::new("cat").unwrap(), 6);
//!
//! while !game.is_complete() {
//!     let choice = agent.next(&game).unwrap();
//!     agent.learn(&mut game, &choice);
//! }
//! ```

pub mod agent;
pub mod q_table;

pub use agent::{AgentConfig, FrozenPolicy, QAgent, build_rng};
pub use q_table::QTable;
