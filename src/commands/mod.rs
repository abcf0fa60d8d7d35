//! Command implementations

pub mod evaluate;
pub mod solve;
pub mod train;

pub use evaluate::{EpisodeOutcome, EvaluationReport, play_frozen, run_evaluation};
pub use solve::{SolveResult, SolveStep, solve_word};
pub use train::{Checkpoint, TrainConfig, TrainingReport, play_episode, run_training};
