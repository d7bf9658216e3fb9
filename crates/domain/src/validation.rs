//! Request validation, run before any state transition is attempted.
//!
//! Checks run in a fixed order and stop at the first failure, so a caller
//! always observes the same error for the same input.

use crate::error::{ErrorCode, ValidationError};
use crate::team::{is_blank, same_team};

pub const HOME_TEAM_FIELD: &str = "homeTeam";
pub const AWAY_TEAM_FIELD: &str = "awayTeam";
pub const TEAMS_FIELD: &str = "teams";
pub const HOME_SCORE_FIELD: &str = "homeScore";
pub const AWAY_SCORE_FIELD: &str = "awayScore";

/// Check both team names: home, then away, then that they differ.
///
/// # Errors
///
/// - [`ErrorCode::InvalidHomeTeam`] (`homeTeam`) if home is missing or blank
/// - [`ErrorCode::InvalidAwayTeam`] (`awayTeam`) if away is missing or blank
/// - [`ErrorCode::DuplicateTeamNames`] (`teams`) if both are equal ignoring case
pub fn validate_team_names(
    home_team: Option<&str>,
    away_team: Option<&str>,
) -> Result<(), ValidationError> {
    let home_team = require_name(home_team, HOME_TEAM_FIELD, ErrorCode::InvalidHomeTeam)?;
    let away_team = require_name(away_team, AWAY_TEAM_FIELD, ErrorCode::InvalidAwayTeam)?;

    if same_team(home_team, away_team) {
        return Err(ValidationError::new(
            ErrorCode::DuplicateTeamNames,
            TEAMS_FIELD,
            "home and away teams must be different",
        ));
    }
    Ok(())
}

fn require_name<'a>(
    name: Option<&'a str>,
    field: &'static str,
    code: ErrorCode,
) -> Result<&'a str, ValidationError> {
    match name {
        Some(name) if !is_blank(name) => Ok(name),
        _ => Err(ValidationError::new(
            code,
            field,
            "team name cannot be null or blank",
        )),
    }
}

/// Check both scores are non-negative, home first.
///
/// # Errors
///
/// [`ErrorCode::InvalidHomeScore`] (`homeScore`) or
/// [`ErrorCode::InvalidAwayScore`] (`awayScore`). When both are negative the
/// home failure is the one returned.
pub fn validate_scores(home_score: i32, away_score: i32) -> Result<(), ValidationError> {
    if home_score < 0 {
        return Err(ValidationError::new(
            ErrorCode::InvalidHomeScore,
            HOME_SCORE_FIELD,
            format!("home score cannot be negative: {home_score}"),
        ));
    }
    if away_score < 0 {
        return Err(ValidationError::new(
            ErrorCode::InvalidAwayScore,
            AWAY_SCORE_FIELD,
            format!("away score cannot be negative: {away_score}"),
        ));
    }
    Ok(())
}
