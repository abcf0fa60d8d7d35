//! Tabular Q-learning agent
//!
//! Drives any environment implementing the core contracts. Selection is greedy
//! with uniform tie-breaking (optionally ε-greedy); learning scores the chosen
//! action with the environment's pure reward before applying it, then
//! bootstraps from the best value of the successor state.

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::q_table::QTable;
use crate::core::contracts::{Action, Rewarder, State};

/// Hyperparameters of a [`QAgent`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentConfig {
    /// α, weight of each new sample
    pub learning_rate: f64,
    /// γ, weight of the successor state's value
    pub discount: f64,
    /// Probability of picking a uniformly random action instead of the greedy one
    pub epsilon: f64,
    /// Value of state-action pairs that were never updated
    pub q_init: f64,
    /// Seed for reproducible tie-breaking and exploration
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.7,
            discount: 1.0,
            epsilon: 0.0,
            q_init: 0.0,
            seed: None,
        }
    }
}

/// Seeded RNG when `seed` is set, otherwise one drawn from the thread RNG
#[must_use]
pub fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

fn action_ids<S: State>(actions: &[S::Action]) -> Vec<String> {
    actions.iter().map(|action| action.id()).collect()
}

/// Q-learning agent (off-policy TD control)
#[derive(Debug, Clone)]
pub struct QAgent {
    q_table: QTable,
    epsilon: f64,
    rng: StdRng,
}

impl QAgent {
    #[must_use]
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            q_table: QTable::new(config.learning_rate, config.discount, config.q_init),
            epsilon: config.epsilon,
            rng: build_rng(config.seed),
        }
    }

    /// Learned value of taking `action` from `state`
    pub fn value<S: State>(&self, state: &S, action: &S::Action) -> f64 {
        self.q_table.get(&state.key(), &action.id())
    }

    /// Pick the next action for `state`
    ///
    /// Returns `None` when the action space is empty.
    pub fn next<S: State>(&mut self, state: &S) -> Option<S::Action> {
        let actions = state.next();
        if actions.is_empty() {
            return None;
        }

        let index = if self.rng.random::<f64>() < self.epsilon {
            self.rng.random_range(0..actions.len())
        } else {
            let best = self
                .q_table
                .best_actions(&state.key(), &action_ids::<S>(&actions));
            best[self.rng.random_range(0..best.len())]
        };

        actions.into_iter().nth(index)
    }

    /// Deterministic greedy action, without exploration or random tie-breaks
    pub fn best<S: State>(&self, state: &S) -> Option<S::Action> {
        self.policy().best(state)
    }

    /// Take `action` in `state` and learn from the outcome
    ///
    /// The reward is read before the action mutates the state. Returns that
    /// reward so callers can report on the step.
    pub fn learn<S: Rewarder>(&mut self, state: &mut S, action: &S::Action) -> f64 {
        let key = state.key();
        let reward = state.reward(action);

        action.apply(state);

        let future = if state.is_complete() {
            0.0
        } else {
            let next_ids = action_ids::<S>(&state.next());
            self.q_table.max_value(&state.key(), &next_ids)
        };

        self.q_table.update(key, action.id(), reward, future);
        reward
    }

    #[must_use]
    pub const fn table(&self) -> &QTable {
        &self.q_table
    }

    /// Give up the agent and keep only what it learned
    #[must_use]
    pub fn into_table(self) -> QTable {
        self.q_table
    }

    /// Read-only view of the learned values, shareable across threads
    #[must_use]
    pub const fn policy(&self) -> FrozenPolicy<'_> {
        FrozenPolicy::new(&self.q_table)
    }
}

/// Greedy policy over a borrowed, no-longer-learning Q-table
#[derive(Debug, Clone, Copy)]
pub struct FrozenPolicy<'a> {
    q_table: &'a QTable,
}

impl<'a> FrozenPolicy<'a> {
    #[must_use]
    pub const fn new(q_table: &'a QTable) -> Self {
        Self { q_table }
    }

    pub fn value<S: State>(&self, state: &S, action: &S::Action) -> f64 {
        self.q_table.get(&state.key(), &action.id())
    }

    /// First action with the highest value, in the state's action order
    pub fn best<S: State>(&self, state: &S) -> Option<S::Action> {
        let actions = state.next();
        let index = self
            .q_table
            .greedy(&state.key(), &action_ids::<S>(&actions))?;
        actions.into_iter().nth(index)
    }

    /// Every legal action with its value, best first
    pub fn ranked<S: State>(&self, state: &S) -> Vec<(S::Action, f64)> {
        let key = state.key();
        let mut ranked: Vec<(S::Action, f64)> = state
            .next()
            .into_iter()
            .map(|action| {
                let value = self.q_table.get(&key, &action.id());
                (action, value)
            })
            .collect();
        ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        ranked
    }
}
