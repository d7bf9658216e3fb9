//! Shared application state for axum handlers.

use std::sync::Arc;

use scoreboard_app::ports::{EventPublisher, MatchStore};
use scoreboard_app::services::scoreboard_service::ScoreboardService;

/// Application state shared across all axum handlers.
///
/// Generic over the store and event publisher to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<S, P> {
    /// Scoreboard lifecycle and summary service.
    pub scoreboard_service: Arc<ScoreboardService<S, P>>,
}

impl<S, P> Clone for AppState<S, P> {
    fn clone(&self) -> Self {
        Self {
            scoreboard_service: Arc::clone(&self.scoreboard_service),
        }
    }
}

impl<S, P> AppState<S, P>
where
    S: MatchStore + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(scoreboard_service: ScoreboardService<S, P>) -> Self {
        Self {
            scoreboard_service: Arc::new(scoreboard_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is shared with background tasks
    /// before constructing the HTTP state.
    pub fn from_arc(scoreboard_service: Arc<ScoreboardService<S, P>>) -> Self {
        Self { scoreboard_service }
    }
}
