//! Events — immutable records of scoreboard transitions.
//!
//! Published by the application layer after a transition has been stored.

use serde::Serialize;

use crate::live_match::Match;

/// Something that happened on the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScoreboardEvent {
    /// A new match was put on the board at 0–0.
    MatchStarted { game: Match },
    /// A match's score was replaced.
    ScoreUpdated { previous: Match, current: Match },
    /// A match was taken off the board.
    MatchFinished { game: Match },
}

impl ScoreboardEvent {
    /// The match state this event leaves behind (or the one removed, for finishes).
    #[must_use]
    pub fn game(&self) -> &Match {
        match self {
            Self::MatchStarted { game } | Self::MatchFinished { game } => game,
            Self::ScoreUpdated { current, .. } => current,
        }
    }

    /// Short event name, used as a log field.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::MatchStarted { .. } => "match_started",
            Self::ScoreUpdated { .. } => "score_updated",
            Self::MatchFinished { .. } => "match_finished",
        }
    }
}
