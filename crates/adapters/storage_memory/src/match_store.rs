//! In-memory implementation of [`MatchStore`].

use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use scoreboard_app::ports::MatchStore;
use scoreboard_domain::error::ScoreboardError;
use scoreboard_domain::live_match::Match;

use crate::error::StorageError;

/// Match store keeping every match in a `Vec`, oldest first.
///
/// Each port call takes the lock once and releases it before returning its
/// future, so no call observes another half-applied.
#[derive(Debug, Default)]
pub struct InMemoryMatchStore {
    games: Mutex<Vec<Match>>,
}

impl InMemoryMatchStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Match>>, StorageError> {
        self.games.lock().map_err(|_| StorageError::Poisoned)
    }
}

impl MatchStore for InMemoryMatchStore {
    fn save(&self, game: Match) -> impl Future<Output = Result<Match, ScoreboardError>> + Send {
        let result = self.lock().map(|mut games| {
            games.push(game.clone());
            game
        });
        async move { result.map_err(ScoreboardError::from) }
    }

    fn find_by_teams(
        &self,
        home_team: &str,
        away_team: &str,
    ) -> impl Future<Output = Result<Option<Match>, ScoreboardError>> + Send {
        let result = self.lock().map(|games| {
            games
                .iter()
                .find(|game| game.is_between(home_team, away_team))
                .cloned()
        });
        async move { result.map_err(ScoreboardError::from) }
    }

    fn delete(&self, game: &Match) -> impl Future<Output = Result<(), ScoreboardError>> + Send {
        let result = self.lock().map(|mut games| {
            if let Some(index) = games.iter().position(|stored| stored == game) {
                games.remove(index);
            } else {
                tracing::debug!(
                    home_team = game.home_team(),
                    away_team = game.away_team(),
                    "delete of absent match ignored"
                );
            }
        });
        async move { result.map_err(ScoreboardError::from) }
    }

    fn replace(
        &self,
        game: Match,
    ) -> impl Future<Output = Result<Match, ScoreboardError>> + Send {
        let result = self.lock().map(|mut games| {
            games.retain(|stored| !stored.is_between(game.home_team(), game.away_team()));
            games.push(game.clone());
            game
        });
        async move { result.map_err(ScoreboardError::from) }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Match>, ScoreboardError>> + Send {
        let result = self.lock().map(|games| games.clone());
        async move { result.map_err(ScoreboardError::from) }
    }
}
