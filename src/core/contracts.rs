//! Capability contracts between an environment and a decision engine
//!
//! A decision engine only ever sees these three traits. It never looks at the
//! hangman types directly, so any environment with a canonical state key, an
//! enumerable action space and a pure reward can be learned by the same agent.

/// A queryable environment state
pub trait State {
    /// The action type legal in this state
    type Action: Action<Self>;

    /// Canonical key indexing the engine's value table
    ///
    /// Two states with the same key are treated as the same decision context.
    fn key(&self) -> String;

    /// Whether the episode has reached a terminal state
    fn is_complete(&self) -> bool;

    /// Every action that is legal from this state, in a stable order
    fn next(&self) -> Vec<Self::Action>;
}

/// An action that can be applied to a state
pub trait Action<S: ?Sized> {
    /// Canonical identifier used alongside the state key
    fn id(&self) -> String;

    /// Apply the action, moving `state` to its successor
    fn apply(&self, state: &mut S);
}

/// A state that can score a candidate action without committing to it
pub trait Rewarder: State {
    /// Reward the engine would receive for taking `action` from this state
    ///
    /// Must not mutate the state, so it can be called before [`Action::apply`].
    fn reward(&self, action: &Self::Action) -> f64;
}
