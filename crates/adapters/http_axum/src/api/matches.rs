//! JSON REST handlers for matches and the ranked summary.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use scoreboard_app::ports::{EventPublisher, MatchStore};
use scoreboard_domain::live_match::Match;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body naming a team pair.
///
/// Names are optional so that a missing name is reported by the domain
/// validator (`homeTeam` / `awayTeam`) rather than as a malformed body.
#[derive(Debug, Deserialize)]
pub struct TeamsRequest {
    pub home_team: Option<String>,
    pub away_team: Option<String>,
}

/// Request body for replacing a match's score.
#[derive(Debug, Deserialize)]
pub struct UpdateScoreRequest {
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub home_score: i32,
    pub away_score: i32,
}

/// Response representation of a [`Match`].
#[derive(Debug, Serialize)]
pub struct MatchView {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub total_score: u64,
}

impl From<Match> for MatchView {
    fn from(game: Match) -> Self {
        Self {
            total_score: game.total_score(),
            home_score: game.home_score(),
            away_score: game.away_score(),
            home_team: game.home_team().to_string(),
            away_team: game.away_team().to_string(),
        }
    }
}

/// Possible responses from the start endpoint.
pub enum StartResponse {
    Created(Json<MatchView>),
}

impl IntoResponse for StartResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the score update endpoint.
pub enum UpdateResponse {
    Ok(Json<MatchView>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the finish endpoint.
pub enum FinishResponse {
    NoContent,
}

impl IntoResponse for FinishResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Possible responses from the summary endpoint.
pub enum SummaryResponse {
    Ok(Json<Vec<MatchView>>),
}

impl IntoResponse for SummaryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/matches`
pub async fn start<S, P>(
    State(state): State<AppState<S, P>>,
    Json(req): Json<TeamsRequest>,
) -> Result<StartResponse, ApiError>
where
    S: MatchStore + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let game = state
        .scoreboard_service
        .start_game(
            req.home_team.as_deref().unwrap_or_default(),
            req.away_team.as_deref().unwrap_or_default(),
        )
        .await?;
    Ok(StartResponse::Created(Json(game.into())))
}

/// `PUT /api/matches/score`
pub async fn update_score<S, P>(
    State(state): State<AppState<S, P>>,
    Json(req): Json<UpdateScoreRequest>,
) -> Result<UpdateResponse, ApiError>
where
    S: MatchStore + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let game = state
        .scoreboard_service
        .update_score(
            req.home_team.as_deref().unwrap_or_default(),
            req.away_team.as_deref().unwrap_or_default(),
            req.home_score,
            req.away_score,
        )
        .await?;
    Ok(UpdateResponse::Ok(Json(game.into())))
}

/// `DELETE /api/matches`
pub async fn finish<S, P>(
    State(state): State<AppState<S, P>>,
    Json(req): Json<TeamsRequest>,
) -> Result<FinishResponse, ApiError>
where
    S: MatchStore + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    state
        .scoreboard_service
        .finish_game(
            req.home_team.as_deref().unwrap_or_default(),
            req.away_team.as_deref().unwrap_or_default(),
        )
        .await?;
    Ok(FinishResponse::NoContent)
}

/// `GET /api/summary`
pub async fn summary<S, P>(
    State(state): State<AppState<S, P>>,
) -> Result<SummaryResponse, ApiError>
where
    S: MatchStore + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let games = state.scoreboard_service.get_summary().await?;
    Ok(SummaryResponse::Ok(Json(
        games.into_iter().map(MatchView::from).collect(),
    )))
}
