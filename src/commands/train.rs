//! Training command
//!
//! Plays episodes on random corpus words, letting the agent learn from every
//! letter it picks, and keeps a running win/loss tally.

use crate::core::contracts::State;
use crate::core::{GameState, STARTING_LIVES, Status};
use crate::learning::{QAgent, build_rng};
use crate::wordlists::Corpus;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Configuration for a training run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainConfig {
    /// Episodes to play
    pub games: usize,
    /// Record a checkpoint every this many episodes (0 disables them)
    pub progress_every: usize,
    pub starting_lives: u32,
    /// Emit per-move game logs and hide the progress bar
    pub debug: bool,
    /// Seed for word sampling
    pub seed: Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            games: 5_000_000,
            progress_every: 1000,
            starting_lives: STARTING_LIVES,
            debug: false,
            seed: None,
        }
    }
}

/// Running totals at a progress boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkpoint {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Win percentage over the games since the previous checkpoint
    pub window_accuracy: f64,
}

/// Outcome of a full training run
#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub checkpoints: Vec<Checkpoint>,
    pub duration: Duration,
    /// Stored state-action values at the end of training
    pub table_size: usize,
}

impl TrainingReport {
    /// Overall win percentage
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        percentage(self.wins, self.games)
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Play a single learning episode, returning its final status
pub fn play_episode(agent: &mut QAgent, mut game: GameState) -> Status {
    game.log("Game created");

    while !game.is_complete() {
        let Some(choice) = agent.next(&game) else {
            break;
        };
        let hit = game.word().has_letter(choice.letter());
        agent.learn(&mut game, &choice);
        let verdict = if hit { "correct" } else { "incorrect" };
        game.log(format_args!("{choice} was {verdict}"));
    }

    let status = game.status();
    match status {
        Status::Won => game.log("Victory!"),
        Status::Lost => game.log("Defeat!"),
        Status::Active => {}
    }
    status
}

/// Train `agent` on random words from `corpus`
///
/// `on_checkpoint` is called every `config.progress_every` games with the
/// running totals; the progress bar is suspended while it runs so it can print.
pub fn run_training<F>(
    agent: &mut QAgent,
    corpus: &Corpus,
    config: &TrainConfig,
    mut on_checkpoint: F,
) -> TrainingReport
where
    F: FnMut(&Checkpoint),
{
    let mut rng = build_rng(config.seed);

    let pb = if config.debug {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(config.games as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    tracing::info!(
        games = config.games,
        words = corpus.len(),
        lives = config.starting_lives,
        "training started"
    );

    let start = Instant::now();
    let mut wins = 0;
    let mut losses = 0;
    let mut window_wins = 0;
    let mut checkpoints = Vec::new();

    for played in 1..=config.games {
        let word = corpus.random(&mut rng).clone();
        let game = GameState::new(word, config.starting_lives).with_debug(config.debug);

        if play_episode(agent, game) == Status::Won {
            wins += 1;
            window_wins += 1;
        } else {
            losses += 1;
        }

        if config.progress_every > 0 && played % config.progress_every == 0 {
            let checkpoint = Checkpoint {
                games: played,
                wins,
                losses,
                window_accuracy: percentage(window_wins, config.progress_every),
            };
            window_wins = 0;

            pb.suspend(|| on_checkpoint(&checkpoint));
            pb.set_message(format!("Accuracy: {:.0}%", checkpoint.window_accuracy));
            checkpoints.push(checkpoint);
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    tracing::info!(
        wins,
        losses,
        states = agent.table().states(),
        elapsed_ms = duration.as_millis() as u64,
        "training finished"
    );

    TrainingReport {
        games: config.games,
        wins,
        losses,
        checkpoints,
        duration,
        table_size: agent.table().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Choice, Word};
    use crate::learning::AgentConfig;

    fn agent() -> QAgent {
        QAgent::new(&AgentConfig {
            seed: Some(11),
            ..AgentConfig::default()
        })
    }

    fn corpus(texts: &[&str]) -> Corpus {
        let words = texts.iter().map(|t| Word::new(*t).unwrap()).collect();
        Corpus::new(words, texts.len()).unwrap()
    }

    fn config(games: usize, progress_every: usize) -> TrainConfig {
        TrainConfig {
            games,
            progress_every,
            debug: true,
            seed: Some(5),
            ..TrainConfig::default()
        }
    }

    #[test]
    fn default_config_matches_reference_run() {
        let config = TrainConfig::default();
        assert_eq!(config.games, 5_000_000);
        assert_eq!(config.progress_every, 1000);
        assert_eq!(config.starting_lives, 6);
        assert!(!config.debug);
    }

    #[test]
    fn every_game_is_won_or_lost() {
        let mut agent = agent();
        let words = corpus(&["cat", "dog", "zebra"]);
        let report = run_training(&mut agent, &words, &config(200, 0), |_| {});

        assert_eq!(report.games, 200);
        assert_eq!(report.wins + report.losses, 200);
        assert!(report.checkpoints.is_empty());
        assert!(report.table_size > 0);
        assert_eq!(report.table_size, agent.table().len());
    }

    #[test]
    fn checkpoints_arrive_on_schedule() {
        let mut agent = agent();
        let mut seen = Vec::new();
        let report = run_training(&mut agent, &corpus(&["cat", "dog"]), &config(50, 10), |c| {
            seen.push(c.games);
        });

        assert_eq!(seen, vec![10, 20, 30, 40, 50]);
        assert_eq!(report.checkpoints.len(), 5);
        for checkpoint in &report.checkpoints {
            assert_eq!(checkpoint.wins + checkpoint.losses, checkpoint.games);
            assert!((0.0..=100.0).contains(&checkpoint.window_accuracy));
        }
    }

    #[test]
    fn single_word_is_eventually_learned() {
        let mut agent = agent();
        let report = run_training(&mut agent, &corpus(&["a"]), &config(300, 100), |_| {});

        // Misses are punished hard, so the lone hit letter ends up preferred
        let last = report.checkpoints.last().unwrap();
        assert!(last.window_accuracy > 99.0);

        let game = GameState::new(Word::new("a").unwrap(), 6);
        assert_eq!(agent.best(&game).map(Choice::as_char), Some('a'));
    }

    #[test]
    fn play_episode_ends_complete() {
        let mut agent = agent();
        let game = GameState::new(Word::new("hangman").unwrap(), 6);
        let status = play_episode(&mut agent, game);
        assert!(status.is_complete());
    }

    #[test]
    fn episode_logs_only_when_debugging() {
        let word = Word::new("a").unwrap();

        let quiet = crate::test_support::captured_logs(|| {
            play_episode(&mut agent(), GameState::new(word.clone(), 6));
        });
        assert!(quiet.is_empty());

        let mut table_agent = agent();
        let mut first = GameState::new(word.clone(), 6);
        table_agent.learn(&mut first, &Choice::new('a').unwrap());

        // 'a' is now the only positive value, so the episode is one hit
        let logs = crate::test_support::captured_logs(|| {
            play_episode(&mut table_agent, GameState::new(word, 6).with_debug(true));
        });
        assert_eq!(
            logs,
            vec![
                "[GAME a] (0 moves, 6 lives) Game created",
                "[GAME a] (1 moves, 6 lives) a was correct",
                "[GAME a] (1 moves, 6 lives) Victory!",
            ]
        );
    }

    #[test]
    fn empty_word_episode_is_won_without_moves() {
        let mut agent = agent();
        let game = GameState::new(Word::new("").unwrap(), 6);
        assert_eq!(play_episode(&mut agent, game), Status::Won);
        assert!(agent.table().is_empty());
    }

    #[test]
    fn accuracy_handles_zero_games() {
        let report = TrainingReport {
            games: 0,
            wins: 0,
            losses: 0,
            checkpoints: Vec::new(),
            duration: Duration::ZERO,
            table_size: 0,
        };
        assert_eq!(report.accuracy(), 0.0);
    }
}
