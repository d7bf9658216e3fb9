//! Error taxonomy shared across the workspace.
//!
//! Each failure kind is its own typed error; [`ScoreboardError`] gathers them
//! through `#[from]` conversions so every layer can use `?`.

use std::fmt;

use serde::Serialize;

/// Top-level error returned by ports and application services.
#[derive(Debug, thiserror::Error)]
pub enum ScoreboardError {
    /// A caller-supplied field failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A [`Match`](crate::live_match::Match) invariant was violated at construction.
    #[error("invalid match state: {0}")]
    InvalidState(#[from] InvalidMatchState),

    /// A start was requested for a pair that is already on the board.
    #[error(transparent)]
    AlreadyInProgress(#[from] MatchAlreadyInProgress),

    /// A finish or update was requested for a pair that is not on the board.
    #[error(transparent)]
    NotFound(#[from] MatchNotFound),

    /// The backing store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Coarse validation failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationKind {
    /// A team name is missing or blank.
    InvalidTeamName,
    /// Home and away name the same team.
    DuplicateTeamNames,
    /// A score is below zero.
    NegativeScore,
}

impl ValidationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidTeamName => "INVALID_TEAM_NAME",
            Self::DuplicateTeamNames => "DUPLICATE_TEAM_NAMES",
            Self::NegativeScore => "NEGATIVE_SCORE",
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fine-grained validation codes, one per offending side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidHomeTeam,
    InvalidAwayTeam,
    DuplicateTeamNames,
    InvalidHomeScore,
    InvalidAwayScore,
}

impl ErrorCode {
    /// The category this code belongs to.
    #[must_use]
    pub fn kind(self) -> ValidationKind {
        match self {
            Self::InvalidHomeTeam | Self::InvalidAwayTeam => ValidationKind::InvalidTeamName,
            Self::DuplicateTeamNames => ValidationKind::DuplicateTeamNames,
            Self::InvalidHomeScore | Self::InvalidAwayScore => ValidationKind::NegativeScore,
        }
    }
}

/// A field-scoped validation failure.
///
/// Carries enough structure (code, field, message) for a driving adapter to
/// build a precise response without parsing the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    code: ErrorCode,
    field: &'static str,
    message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(code: ErrorCode, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            field,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ValidationKind {
        self.code.kind()
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Name of the offending field (`homeTeam`, `awayTeam`, `teams`, `homeScore`, `awayScore`).
    #[must_use]
    pub fn field(&self) -> &'static str {
        self.field
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Invariant violations detected by the [`Match`](crate::live_match::Match) constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMatchState {
    #[error("home team cannot be blank")]
    BlankHomeTeam,
    #[error("away team cannot be blank")]
    BlankAwayTeam,
    #[error("home and away teams must be different")]
    SameTeams,
    #[error("invalid home team name: {0}")]
    HomeTeamName(String),
    #[error("invalid away team name: {0}")]
    AwayTeamName(String),
    #[error("scores cannot be negative")]
    NegativeScore,
}

/// Raised when starting a match whose team pair is already tracked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("match between {home_team} and {away_team} is already in progress")]
pub struct MatchAlreadyInProgress {
    pub home_team: String,
    pub away_team: String,
}

/// Raised when finishing or updating a match whose team pair is not tracked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("match between {home_team} and {away_team} not found")]
pub struct MatchNotFound {
    pub home_team: String,
    pub away_team: String,
}
