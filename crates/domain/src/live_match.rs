//! Match — one contest currently on the board.

use serde::Serialize;

use crate::error::InvalidMatchState;
use crate::team::{TeamNamePolicy, is_blank, same_team};

/// An in-progress contest between two teams.
///
/// Fields are private and there are no mutators: a score change produces a
/// new value through [`Match::update_scores`]. Every constructor re-checks the
/// invariants, so a `Match` in hand always has two non-blank, distinct team
/// names and two non-negative scores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Match {
    home_team: String,
    away_team: String,
    home_score: u32,
    away_score: u32,
}

impl Match {
    /// A freshly started match at 0–0.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMatchState`] if either name is blank, the names are
    /// equal ignoring case, or a name is rejected by `policy`.
    pub fn create_new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        policy: TeamNamePolicy,
    ) -> Result<Self, InvalidMatchState> {
        Self::with_scores(home_team, away_team, 0, 0, policy)
    }

    /// A match with arbitrary starting scores.
    ///
    /// # Errors
    ///
    /// Same as [`Match::create_new`], plus [`InvalidMatchState::NegativeScore`]
    /// when either score is below zero.
    pub fn with_scores(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        home_score: i32,
        away_score: i32,
        policy: TeamNamePolicy,
    ) -> Result<Self, InvalidMatchState> {
        let home_team = home_team.into();
        let away_team = away_team.into();
        check_teams(&home_team, &away_team, policy)?;
        let (home_score, away_score) = non_negative(home_score, away_score)?;

        Ok(Self {
            home_team,
            away_team,
            home_score,
            away_score,
        })
    }

    /// Return a new match with the same teams and the given scores.
    ///
    /// `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMatchState::NegativeScore`] when either score is below zero.
    pub fn update_scores(
        &self,
        home_score: i32,
        away_score: i32,
    ) -> Result<Self, InvalidMatchState> {
        let (home_score, away_score) = non_negative(home_score, away_score)?;
        Ok(Self {
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            home_score,
            away_score,
        })
    }

    /// Sum of both scores.
    #[must_use]
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    /// Whether this match is exactly the `home` vs `away` pairing.
    #[must_use]
    pub fn is_between(&self, home_team: &str, away_team: &str) -> bool {
        self.home_team == home_team && self.away_team == away_team
    }

    #[must_use]
    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    #[must_use]
    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    #[must_use]
    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    #[must_use]
    pub fn away_score(&self) -> u32 {
        self.away_score
    }
}

fn check_teams(home: &str, away: &str, policy: TeamNamePolicy) -> Result<(), InvalidMatchState> {
    if is_blank(home) {
        return Err(InvalidMatchState::BlankHomeTeam);
    }
    if is_blank(away) {
        return Err(InvalidMatchState::BlankAwayTeam);
    }
    if same_team(home, away) {
        return Err(InvalidMatchState::SameTeams);
    }
    if !policy.permits(home) {
        return Err(InvalidMatchState::HomeTeamName(home.to_string()));
    }
    if !policy.permits(away) {
        return Err(InvalidMatchState::AwayTeamName(away.to_string()));
    }
    Ok(())
}

fn non_negative(home: i32, away: i32) -> Result<(u32, u32), InvalidMatchState> {
    match (u32::try_from(home), u32::try_from(away)) {
        (Ok(home), Ok(away)) => Ok((home, away)),
        _ => Err(InvalidMatchState::NegativeScore),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRICT: TeamNamePolicy = TeamNamePolicy::Strict;

    #[test]
    fn should_start_at_nil_nil() {
        let game = Match::create_new("Mexico", "Canada", STRICT).unwrap();
        assert_eq!(game.home_team(), "Mexico");
        assert_eq!(game.away_team(), "Canada");
        assert_eq!(game.home_score(), 0);
        assert_eq!(game.away_score(), 0);
        assert_eq!(game.total_score(), 0);
    }

    #[test]
    fn should_reject_blank_home_team() {
        let result = Match::create_new("  ", "Canada", STRICT);
        assert_eq!(result, Err(InvalidMatchState::BlankHomeTeam));
    }

    #[test]
    fn should_reject_blank_away_team() {
        let result = Match::create_new("Mexico", "", STRICT);
        assert_eq!(result, Err(InvalidMatchState::BlankAwayTeam));
    }

    #[test]
    fn should_reject_same_team_ignoring_case() {
        let result = Match::create_new("Mexico", "MEXICO", STRICT);
        assert_eq!(result, Err(InvalidMatchState::SameTeams));
    }

    #[test]
    fn should_reject_non_alphabetic_names_when_strict() {
        let result = Match::create_new("Mexico 2", "Canada", STRICT);
        assert_eq!(
            result,
            Err(InvalidMatchState::HomeTeamName("Mexico 2".to_string()))
        );

        let result = Match::create_new("Mexico", "Canada_", STRICT);
        assert_eq!(
            result,
            Err(InvalidMatchState::AwayTeamName("Canada_".to_string()))
        );
    }

    #[test]
    fn should_accept_non_alphabetic_names_when_relaxed() {
        let game = Match::create_new("Mexico U-21", "Canada", TeamNamePolicy::Relaxed).unwrap();
        assert_eq!(game.home_team(), "Mexico U-21");
    }

    #[test]
    fn should_reject_negative_starting_scores() {
        let result = Match::with_scores("Mexico", "Canada", -1, 0, STRICT);
        assert_eq!(result, Err(InvalidMatchState::NegativeScore));
    }

    #[test]
    fn should_return_new_value_when_scores_updated() {
        let original = Match::create_new("Spain", "Brazil", STRICT).unwrap();
        let updated = original.update_scores(10, 2).unwrap();

        assert_eq!(original.home_score(), 0);
        assert_eq!(original.away_score(), 0);
        assert_eq!(updated.home_score(), 10);
        assert_eq!(updated.away_score(), 2);
        assert!(updated.is_between("Spain", "Brazil"));
    }

    #[test]
    fn should_reject_negative_score_update() {
        let game = Match::create_new("Spain", "Brazil", STRICT).unwrap();
        assert_eq!(
            game.update_scores(1, -3),
            Err(InvalidMatchState::NegativeScore)
        );
    }

    #[test]
    fn should_keep_total_equal_to_sum_across_updates() {
        let mut game = Match::create_new("Uruguay", "Italy", STRICT).unwrap();
        for (home, away) in [(1, 0), (1, 1), (6, 6), (0, 0), (i32::MAX, i32::MAX)] {
            game = game.update_scores(home, away).unwrap();
            assert_eq!(
                game.total_score(),
                u64::from(game.home_score()) + u64::from(game.away_score())
            );
        }
    }

    #[test]
    fn should_match_team_pair_exactly() {
        let game = Match::create_new("Spain", "Brazil", STRICT).unwrap();
        assert!(game.is_between("Spain", "Brazil"));
        assert!(!game.is_between("Brazil", "Spain"));
        assert!(!game.is_between("spain", "Brazil"));
    }

    #[test]
    fn should_serialize_fields() {
        let game = Match::with_scores("Spain", "Brazil", 10, 2, STRICT).unwrap();
        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["home_team"], "Spain");
        assert_eq!(json["away_score"], 2);
    }
}
