//! Evaluation command
//!
//! Plays every word once with a frozen greedy policy. Episodes are independent
//! and only read the value table, so they run in parallel.

use crate::core::contracts::{Action, State};
use crate::core::{GameState, Status, Word};
use crate::learning::{FrozenPolicy, QTable};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of evaluating a frozen policy
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub total: usize,
    pub won: usize,
    pub lost: usize,
    /// Lives remaining at the end of each won game, keyed by lives left
    pub lives_left_distribution: BTreeMap<u32, usize>,
    /// Mean lives lost per game, won or lost
    pub average_misses: f64,
    pub duration: Duration,
}

impl EvaluationReport {
    /// Win percentage
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.won as f64 / self.total as f64 * 100.0
        }
    }
}

/// Final state of one frozen episode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeOutcome {
    pub status: Status,
    pub lives: u32,
    pub misses: u32,
    pub moves: usize,
}

/// Play `word` greedily without learning
#[must_use]
pub fn play_frozen(policy: FrozenPolicy<'_>, word: Word, lives: u32) -> EpisodeOutcome {
    let mut game = GameState::new(word, lives);
    while !game.is_complete() {
        let Some(choice) = policy.best(&game) else {
            break;
        };
        choice.apply(&mut game);
    }

    EpisodeOutcome {
        status: game.status(),
        lives: game.lives(),
        misses: game.misses(),
        moves: game.moves(),
    }
}

/// Evaluate `table` on every word in `words`
#[must_use]
pub fn run_evaluation(table: &QTable, words: &[Word], lives: u32) -> EvaluationReport {
    let start = Instant::now();
    let policy = FrozenPolicy::new(table);

    let outcomes: Vec<EpisodeOutcome> = words
        .par_iter()
        .map(|word| play_frozen(policy, word.clone(), lives))
        .collect();

    let mut lives_left_distribution = BTreeMap::new();
    let mut won = 0;
    let mut total_misses: u64 = 0;
    for outcome in &outcomes {
        total_misses += u64::from(outcome.misses);
        if outcome.status == Status::Won {
            won += 1;
            *lives_left_distribution.entry(outcome.lives).or_insert(0) += 1;
        }
    }

    let total = outcomes.len();
    let average_misses = if total == 0 {
        0.0
    } else {
        total_misses as f64 / total as f64
    };

    let report = EvaluationReport {
        total,
        won,
        lost: total - won,
        lives_left_distribution,
        average_misses,
        duration: start.elapsed(),
    };
    tracing::info!(
        total,
        won,
        lost = report.lost,
        "evaluation finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Choice;
    use crate::learning::{AgentConfig, QAgent};

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn untrained_policy_guesses_alphabetically() {
        let table = QTable::new(0.7, 1.0, 0.0);
        let outcome = play_frozen(FrozenPolicy::new(&table), Word::new("bad").unwrap(), 6);

        // a, b, c (miss), d
        assert_eq!(outcome.status, Status::Won);
        assert_eq!(outcome.moves, 4);
        assert_eq!(outcome.misses, 1);
        assert_eq!(outcome.lives, 5);
    }

    #[test]
    fn untrained_policy_loses_late_words() {
        let table = QTable::new(0.7, 1.0, 0.0);
        let outcome = play_frozen(FrozenPolicy::new(&table), Word::new("zzz").unwrap(), 6);
        assert_eq!(outcome.status, Status::Lost);
        assert_eq!(outcome.moves, 6);
        assert_eq!(outcome.lives, 0);
    }

    #[test]
    fn report_counts_every_word() {
        let table = QTable::new(0.7, 1.0, 0.0);
        let report = run_evaluation(&table, &words(&["bad", "cab", "zzz", ""]), 6);

        assert_eq!(report.total, 4);
        assert_eq!(report.won, 3);
        assert_eq!(report.lost, 1);
        assert_eq!(report.lives_left_distribution.values().sum::<usize>(), 3);
        // bad: 1 miss, cab: 0, zzz: 6, empty: 0
        assert!((report.average_misses - 7.0 / 4.0).abs() < 1e-9);
        assert!((report.accuracy() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn empty_word_list_is_empty_report() {
        let table = QTable::new(0.7, 1.0, 0.0);
        let report = run_evaluation(&table, &[], 6);
        assert_eq!(report.total, 0);
        assert_eq!(report.accuracy(), 0.0);
        assert_eq!(report.average_misses, 0.0);
    }

    #[test]
    fn learned_values_steer_frozen_play() {
        let mut agent = QAgent::new(&AgentConfig {
            seed: Some(1),
            ..AgentConfig::default()
        });
        let mut game = GameState::new(Word::new("zzz").unwrap(), 6);
        agent.learn(&mut game, &Choice::new('z').unwrap());

        let outcome = play_frozen(agent.policy(), Word::new("zzz").unwrap(), 6);
        assert_eq!(outcome.status, Status::Won);
        assert_eq!(outcome.moves, 1);
    }
}
