//! Word solving command
//!
//! Plays one target word with the agent's greedy policy and records every
//! letter it picks.

use crate::core::contracts::{Action, Rewarder, State};
use crate::core::{GameState, Status, Word, WordError};
use crate::learning::FrozenPolicy;

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: String,
    pub steps: Vec<SolveStep>,
    pub status: Status,
    pub starting_lives: u32,
    /// Hits needed to win: one per distinct letter of the target
    pub fewest_moves: usize,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == Status::Won
    }
}

/// A single letter choice in the solution
#[derive(Debug, Clone, PartialEq)]
pub struct SolveStep {
    pub letter: char,
    pub hit: bool,
    /// Reward the letter earned at the moment it was chosen
    pub reward: f64,
    /// Learned value of the letter in the state it was chosen from
    pub value: f64,
    /// Revealed pattern after the letter was applied, e.g. "C _ T"
    pub pattern: String,
    /// Lives left after the letter was applied
    pub lives: u32,
}

/// Solve `word` greedily using `policy`
///
/// # Errors
///
/// Returns an error if the target contains anything but ASCII letters.
pub fn solve_word(
    policy: FrozenPolicy<'_>,
    word: &str,
    lives: u32,
) -> Result<SolveResult, WordError> {
    let target = Word::new(word)?;
    let mut game = GameState::new(target, lives);
    let mut steps = Vec::new();

    while !game.is_complete() {
        let Some(choice) = policy.best(&game) else {
            break;
        };

        let value = policy.value(&game, &choice);
        let reward = game.reward(&choice);
        let hit = game.word().has_letter(choice.letter());
        choice.apply(&mut game);

        steps.push(SolveStep {
            letter: choice.as_char(),
            hit,
            reward,
            value,
            pattern: game.pattern().to_string(),
            lives: game.lives(),
        });
    }

    Ok(SolveResult {
        target: game.word().text().to_string(),
        steps,
        status: game.status(),
        starting_lives: lives,
        fewest_moves: game.word().distinct_letters(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning::QTable;

    #[test]
    fn solve_records_history() {
        let table = QTable::new(0.7, 1.0, 0.0);
        let result = solve_word(FrozenPolicy::new(&table), "bad", 6).unwrap();

        assert!(result.success());
        assert_eq!(result.fewest_moves, 3);
        let letters: Vec<char> = result.steps.iter().map(|s| s.letter).collect();
        assert_eq!(letters, vec!['a', 'b', 'c', 'd']);

        let miss = &result.steps[2];
        assert!(!miss.hit);
        assert_eq!(miss.reward, -1000.0);
        assert_eq!(miss.lives, 5);

        // Fourth attempt including the letter itself: 24 / 4
        let last = &result.steps[3];
        assert!(last.hit);
        assert_eq!(last.reward, 6.0);
        assert_eq!(last.pattern, "B A D");
    }

    #[test]
    fn solve_uses_learned_values() {
        let mut table = QTable::new(0.7, 1.0, 0.0);
        table.set("__".into(), "o".into(), 5.0);
        table.set("_o".into(), "n".into(), 3.0);

        let result = solve_word(FrozenPolicy::new(&table), "no", 6).unwrap();
        assert!(result.success());
        assert_eq!(result.steps.len(), 2);
        assert_eq!(result.steps[0].letter, 'o');
        assert_eq!(result.steps[0].value, 5.0);
        assert_eq!(result.steps[1].letter, 'n');
        assert_eq!(result.steps[1].value, 3.0);
    }

    #[test]
    fn solve_reports_loss() {
        let table = QTable::new(0.7, 1.0, 0.0);
        let result = solve_word(FrozenPolicy::new(&table), "zzz", 2).unwrap();
        assert_eq!(result.status, Status::Lost);
        assert_eq!(result.steps.len(), 2);
        assert_eq!(result.steps.last().map(|s| s.lives), Some(0));
    }

    #[test]
    fn solve_empty_word_has_no_steps() {
        let table = QTable::new(0.7, 1.0, 0.0);
        let result = solve_word(FrozenPolicy::new(&table), "", 6).unwrap();
        assert!(result.success());
        assert!(result.steps.is_empty());
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let table = QTable::new(0.7, 1.0, 0.0);
        assert!(solve_word(FrozenPolicy::new(&table), "c4t", 6).is_err());
    }
}
