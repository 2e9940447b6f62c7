use serde::{Deserialize, Serialize};

/// Position of a chat in the search dialogue
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum State {
    /// No search in progress
    #[default]
    Idle,
    /// Waiting for the user to type a movie title
    AwaitingQuery,
    /// Search results were shown, waiting for a tap on one of them
    AwaitingSelection,
}
