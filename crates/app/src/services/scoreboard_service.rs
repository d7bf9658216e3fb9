//! Scoreboard service — the lifecycle of matches on the board and the ranked summary.

use std::cmp::Reverse;

use tokio::sync::Mutex;

use scoreboard_domain::error::{MatchAlreadyInProgress, MatchNotFound, ScoreboardError};
use scoreboard_domain::event::ScoreboardEvent;
use scoreboard_domain::live_match::Match;
use scoreboard_domain::team::TeamNamePolicy;
use scoreboard_domain::validation::{validate_scores, validate_team_names};

use crate::ports::{EventPublisher, MatchStore};

/// Application service driving start → update* → finish for each match.
///
/// Every transition validates its input before touching the store, then runs
/// its lookup and write under a single transition lock so concurrent callers
/// cannot double-start a pair or lose an update. The summary reads a snapshot
/// and does not take the lock.
pub struct ScoreboardService<S, P> {
    store: S,
    publisher: P,
    name_policy: TeamNamePolicy,
    transitions: Mutex<()>,
}

impl<S, P> ScoreboardService<S, P>
where
    S: MatchStore + Sync,
    P: EventPublisher + Sync,
{
    /// Create a new service backed by the given store and event publisher,
    /// using the default (strict) team-name policy.
    pub fn new(store: S, publisher: P) -> Self {
        Self {
            store,
            publisher,
            name_policy: TeamNamePolicy::default(),
            transitions: Mutex::new(()),
        }
    }

    /// Use `policy` when constructing new matches.
    #[must_use]
    pub fn with_name_policy(mut self, policy: TeamNamePolicy) -> Self {
        self.name_policy = policy;
        self
    }

    #[must_use]
    pub fn name_policy(&self) -> TeamNamePolicy {
        self.name_policy
    }

    /// Put a new 0–0 match on the board.
    ///
    /// # Errors
    ///
    /// - [`ScoreboardError::Validation`] if a name is blank or both names are equal
    /// - [`ScoreboardError::AlreadyInProgress`] if the pair is already tracked
    /// - [`ScoreboardError::InvalidState`] if the team-name policy rejects a name
    /// - a storage error from the store
    pub async fn start_game(
        &self,
        home_team: &str,
        away_team: &str,
    ) -> Result<Match, ScoreboardError> {
        validate_team_names(Some(home_team), Some(away_team))?;

        let _guard = self.transitions.lock().await;
        if self.store.find_by_teams(home_team, away_team).await?.is_some() {
            return Err(MatchAlreadyInProgress {
                home_team: home_team.to_string(),
                away_team: away_team.to_string(),
            }
            .into());
        }

        let game = Match::create_new(home_team, away_team, self.name_policy)?;
        let game = self.store.save(game).await?;
        tracing::info!(home_team, away_team, "match started");

        self.notify(ScoreboardEvent::MatchStarted { game: game.clone() }).await;
        Ok(game)
    }

    /// Take a match off the board.
    ///
    /// # Errors
    ///
    /// - [`ScoreboardError::Validation`] if a name is blank or both names are equal
    /// - [`ScoreboardError::NotFound`] if the pair is not tracked
    /// - a storage error from the store
    pub async fn finish_game(
        &self,
        home_team: &str,
        away_team: &str,
    ) -> Result<(), ScoreboardError> {
        validate_team_names(Some(home_team), Some(away_team))?;

        let _guard = self.transitions.lock().await;
        let game = self.find_game(home_team, away_team).await?;
        self.store.delete(&game).await?;
        tracing::info!(
            home_team,
            away_team,
            home_score = game.home_score(),
            away_score = game.away_score(),
            "match finished"
        );

        self.notify(ScoreboardEvent::MatchFinished { game }).await;
        Ok(())
    }

    /// Replace the score of a tracked match.
    ///
    /// The updated match becomes the most recent entry on the board, which is
    /// what ranks it ahead of older matches with the same total.
    ///
    /// # Errors
    ///
    /// - [`ScoreboardError::Validation`] for bad names, then for negative scores
    /// - [`ScoreboardError::NotFound`] if the pair is not tracked
    /// - a storage error from the store
    pub async fn update_score(
        &self,
        home_team: &str,
        away_team: &str,
        home_score: i32,
        away_score: i32,
    ) -> Result<Match, ScoreboardError> {
        validate_team_names(Some(home_team), Some(away_team))?;
        validate_scores(home_score, away_score)?;

        let _guard = self.transitions.lock().await;
        let previous = self.find_game(home_team, away_team).await?;
        let updated = previous.update_scores(home_score, away_score)?;
        let updated = self.store.replace(updated).await?;
        tracing::info!(home_team, away_team, home_score, away_score, "score updated");

        self.notify(ScoreboardEvent::ScoreUpdated {
            previous,
            current: updated.clone(),
        })
        .await;
        Ok(updated)
    }

    /// Every match on the board, highest total score first.
    ///
    /// Matches with the same total are listed most recently started or
    /// updated first: the store's insertion-ordered snapshot is reversed, then
    /// stably sorted by total score descending.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn get_summary(&self) -> Result<Vec<Match>, ScoreboardError> {
        let mut games = self.store.find_all().await?;
        games.reverse();
        games.sort_by_key(|game| Reverse(game.total_score()));
        tracing::debug!(count = games.len(), "summary computed");
        Ok(games)
    }

    async fn find_game(
        &self,
        home_team: &str,
        away_team: &str,
    ) -> Result<Match, ScoreboardError> {
        self.store
            .find_by_teams(home_team, away_team)
            .await?
            .ok_or_else(|| {
                MatchNotFound {
                    home_team: home_team.to_string(),
                    away_team: away_team.to_string(),
                }
                .into()
            })
    }

    // Publishing happens after the write; a failed publish does not undo it.
    async fn notify(&self, event: ScoreboardEvent) {
        let name = event.name();
        if let Err(err) = self.publisher.publish(event).await {
            tracing::warn!(error = %err, event = name, "failed to publish scoreboard event");
        }
    }
}
