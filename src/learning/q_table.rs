//! Q-table for temporal difference learning
//!
//! Keys are the environment's canonical state key and action id, so the table
//! is agnostic to which game produced them.

use rustc_hash::FxHashMap;

/// Q-table mapping (state key, action id) pairs to Q-values
#[derive(Debug, Clone)]
pub struct QTable {
    q_values: FxHashMap<(String, String), f64>,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
    /// Value reported for unseen state-action pairs
    q_init: f64,
}

impl QTable {
    #[must_use]
    pub fn new(learning_rate: f64, discount_factor: f64, q_init: f64) -> Self {
        Self {
            q_values: FxHashMap::default(),
            learning_rate,
            discount_factor,
            q_init,
        }
    }

    /// Get Q-value for a state-action pair
    #[must_use]
    pub fn get(&self, state: &str, action: &str) -> f64 {
        *self
            .q_values
            .get(&(state.to_string(), action.to_string()))
            .unwrap_or(&self.q_init)
    }

    /// Set Q-value for a state-action pair
    pub fn set(&mut self, state: String, action: String, value: f64) {
        self.q_values.insert((state, action), value);
    }

    /// Maximum Q-value over the given actions, 0.0 when there are none
    #[must_use]
    pub fn max_value(&self, state: &str, actions: &[String]) -> f64 {
        actions
            .iter()
            .map(|action| self.get(state, action))
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    /// Index of the first action with the highest Q-value
    ///
    /// Deterministic: ties go to the earliest action in `actions`.
    #[must_use]
    pub fn greedy(&self, state: &str, actions: &[String]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, action) in actions.iter().enumerate() {
            let value = self.get(state, action);
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((i, value));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Indices of every action tied for the highest Q-value
    #[must_use]
    pub fn best_actions(&self, state: &str, actions: &[String]) -> Vec<usize> {
        let values: Vec<f64> = actions.iter().map(|a| self.get(state, a)).collect();
        let Some(best) = values.iter().copied().reduce(f64::max) else {
            return Vec::new();
        };

        values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == best)
            .map(|(i, _)| i)
            .collect()
    }

    /// Q-learning update toward an already-computed future value
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ·future - Q(s,a)]
    pub fn update(&mut self, state: String, action: String, reward: f64, future: f64) {
        let current_q = self.get(&state, &action);
        let td_target = reward + self.discount_factor * future;
        let td_error = td_target - current_q;
        let new_q = current_q + self.learning_rate * td_error;
        self.set(state, action, new_q);
    }

    /// Number of stored Q-values
    #[must_use]
    pub fn len(&self) -> usize {
        self.q_values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.q_values.is_empty()
    }

    /// Number of distinct state keys with at least one stored value
    #[must_use]
    pub fn states(&self) -> usize {
        let mut seen: rustc_hash::FxHashSet<&str> = rustc_hash::FxHashSet::default();
        for (state, _) in self.q_values.keys() {
            seen.insert(state.as_str());
        }
        seen.len()
    }
}
