//! Response bodies of the statistics endpoints.
//!
//! Field names are snake_case to stay wire compatible with existing
//! consumers of the API.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::stats::{AssistRow, FormSummary, MatchLine, ScorerRow, StandingRow};

/// One row of a scorer table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ScorerResponse {
    #[schema(example = 1)]
    pub rank: usize,
    #[schema(example = 12)]
    pub player_id: i32,
    #[schema(example = "Dylan Bronn")]
    pub full_name: String,
    #[schema(example = "FC Sochaux-Montbéliard")]
    pub team: String,
    #[schema(example = "FCSM")]
    pub team_short: String,
    /// Goals excluding own goals.
    pub goals: u32,
    pub assists: u32,
    /// Subset of `goals` scored from the spot.
    pub penalties: u32,
}

impl From<ScorerRow> for ScorerResponse {
    fn from(row: ScorerRow) -> Self {
        Self {
            rank: row.rank,
            player_id: row.player_id.get(),
            full_name: row.full_name,
            team: row.team,
            team_short: row.team_short,
            goals: row.goals,
            assists: row.assists,
            penalties: row.penalties,
        }
    }
}

/// One row of an assist table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AssistResponse {
    pub rank: usize,
    pub player_id: i32,
    pub full_name: String,
    pub team: String,
    pub team_short: String,
    pub assists: u32,
}

impl From<AssistRow> for AssistResponse {
    fn from(row: AssistRow) -> Self {
        Self {
            rank: row.rank,
            player_id: row.player_id.get(),
            full_name: row.full_name,
            team: row.team,
            team_short: row.team_short,
            assists: row.assists,
        }
    }
}

/// One row of the league table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StandingResponse {
    pub rank: usize,
    pub team: String,
    #[schema(example = "FCSM")]
    pub team_short: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_diff: i64,
    pub points: u32,
}

impl From<StandingRow> for StandingResponse {
    fn from(row: StandingRow) -> Self {
        Self {
            rank: row.rank,
            team: row.team,
            team_short: row.team_short,
            played: row.played,
            won: row.won,
            drawn: row.drawn,
            lost: row.lost,
            goals_for: row.goals_for,
            goals_against: row.goals_against,
            goal_diff: row.goal_diff,
            points: row.points,
        }
    }
}

/// A played match seen from one club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MatchResponse {
    pub id: i32,
    pub matchday: u32,
    #[schema(example = "2024-08-10")]
    pub match_date: Option<NaiveDate>,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    /// `W`, `D` or `L` for the club; null when the score is missing.
    #[schema(example = "W")]
    pub result: Option<String>,
}

impl From<MatchLine> for MatchResponse {
    fn from(line: MatchLine) -> Self {
        Self {
            id: line.id.get(),
            matchday: line.matchday,
            match_date: line.match_date,
            home_team: line.home_team,
            away_team: line.away_team,
            home_score: line.home_score,
            away_score: line.away_score,
            result: line.result.map(|outcome| outcome.letter().to_string()),
        }
    }
}

/// Recent form of one club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FormResponse {
    #[schema(example = "FC Sochaux-Montbéliard")]
    pub club: String,
    pub last_n: usize,
    pub matches: Vec<MatchResponse>,
    /// Result letters, most recent first.
    #[schema(example = "WWDWW")]
    pub form_string: String,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
}

impl From<FormSummary> for FormResponse {
    fn from(summary: FormSummary) -> Self {
        Self {
            club: summary.club,
            last_n: summary.last_n,
            matches: summary.matches.into_iter().map(MatchResponse::from).collect(),
            form_string: summary.form_string,
            wins: summary.wins,
            draws: summary.draws,
            losses: summary.losses,
            goals_scored: summary.goals_scored,
            goals_conceded: summary.goals_conceded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stats::MatchOutcome;
    use crate::domain::{MatchId, PlayerId};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn scorer_rows_serialise_with_wire_names() {
        let row = ScorerRow {
            rank: 1,
            player_id: PlayerId::new(12),
            full_name: "Dylan Bronn".to_owned(),
            team: "FC Sochaux-Montbéliard".to_owned(),
            team_short: "FCSM".to_owned(),
            goals: 12,
            assists: 4,
            penalties: 0,
        };
        let value = serde_json::to_value(ScorerResponse::from(row)).expect("serialise");
        assert_eq!(
            value,
            json!({
                "rank": 1,
                "player_id": 12,
                "full_name": "Dylan Bronn",
                "team": "FC Sochaux-Montbéliard",
                "team_short": "FCSM",
                "goals": 12,
                "assists": 4,
                "penalties": 0
            })
        );
    }

    #[rstest]
    #[case(Some(MatchOutcome::Win), json!("W"))]
    #[case(None, json!(null))]
    fn match_lines_carry_result_letters(
        #[case] result: Option<MatchOutcome>,
        #[case] expected: serde_json::Value,
    ) {
        let line = MatchLine {
            id: MatchId::new(1),
            matchday: 1,
            match_date: NaiveDate::from_ymd_opt(2024, 8, 10),
            home_team: "FC Sochaux-Montbéliard".to_owned(),
            away_team: "US Orléans".to_owned(),
            home_score: Some(2),
            away_score: Some(0),
            result,
        };
        let value = serde_json::to_value(MatchResponse::from(line)).expect("serialise");
        assert_eq!(value["result"], expected);
        assert_eq!(value["match_date"], json!("2024-08-10"));
    }
}
