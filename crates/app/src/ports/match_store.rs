//! Storage port — the keyed collection holding matches on the board.

use std::future::Future;

use scoreboard_domain::error::ScoreboardError;
use scoreboard_domain::live_match::Match;

/// Passive container for [`Match`] values, keyed by the (home, away) pair.
///
/// Implementations must keep insertion order: [`MatchStore::find_all`] lists
/// the oldest entry first, and both [`MatchStore::save`] and
/// [`MatchStore::replace`] place their value last.
pub trait MatchStore {
    /// Append a match.
    fn save(&self, game: Match) -> impl Future<Output = Result<Match, ScoreboardError>> + Send;

    /// Look up the match for this exact (case-sensitive) team pair.
    fn find_by_teams(
        &self,
        home_team: &str,
        away_team: &str,
    ) -> impl Future<Output = Result<Option<Match>, ScoreboardError>> + Send;

    /// Remove the stored entry equal to `game`. Absent values are a no-op.
    fn delete(&self, game: &Match) -> impl Future<Output = Result<(), ScoreboardError>> + Send;

    /// Atomically drop the entry for `game`'s team pair and append `game`.
    fn replace(&self, game: Match)
    -> impl Future<Output = Result<Match, ScoreboardError>> + Send;

    /// Point-in-time copy of every match, in insertion order.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Match>, ScoreboardError>> + Send;
}

impl<T: MatchStore + Send + Sync> MatchStore for std::sync::Arc<T> {
    fn save(&self, game: Match) -> impl Future<Output = Result<Match, ScoreboardError>> + Send {
        (**self).save(game)
    }

    fn find_by_teams(
        &self,
        home_team: &str,
        away_team: &str,
    ) -> impl Future<Output = Result<Option<Match>, ScoreboardError>> + Send {
        (**self).find_by_teams(home_team, away_team)
    }

    fn delete(&self, game: &Match) -> impl Future<Output = Result<(), ScoreboardError>> + Send {
        (**self).delete(game)
    }

    fn replace(
        &self,
        game: Match,
    ) -> impl Future<Output = Result<Match, ScoreboardError>> + Send {
        (**self).replace(game)
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Match>, ScoreboardError>> + Send {
        (**self).find_all()
    }
}
