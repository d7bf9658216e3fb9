//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod matches;

use axum::Router;
use axum::routing::{get, post, put};

use scoreboard_app::ports::{EventPublisher, MatchStore};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S, P>() -> Router<AppState<S, P>>
where
    S: MatchStore + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/matches",
            post(matches::start::<S, P>).delete(matches::finish::<S, P>),
        )
        .route("/matches/score", put(matches::update_score::<S, P>))
        .route("/summary", get(matches::summary::<S, P>))
}
