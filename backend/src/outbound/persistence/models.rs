//! Internal Diesel row structs and their conversion into domain records.
//!
//! Rows never leave the persistence adapter. Integer columns are `INTEGER`
//! in PostgreSQL; negative values are rejected on conversion.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::{
    Assist, Card, CardKind, Goal, Match, MatchId, Player, PlayerId, Season, Team, TeamCode,
    TeamId,
};

use super::schema::{assists, cards, goals, matches, players, teams};

/// Row conversion failure, reported as a query error by the repositories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {column} value in row {id}: {reason}")]
pub(crate) struct RowConversionError {
    pub column: &'static str,
    pub id: i32,
    pub reason: String,
}

impl RowConversionError {
    fn new(column: &'static str, id: i32, reason: impl std::fmt::Display) -> Self {
        Self {
            column,
            id,
            reason: reason.to_string(),
        }
    }
}

fn unsigned(column: &'static str, id: i32, value: i32) -> Result<u32, RowConversionError> {
    u32::try_from(value).map_err(|err| RowConversionError::new(column, id, err))
}

fn unsigned_opt(
    column: &'static str,
    id: i32,
    value: Option<i32>,
) -> Result<Option<u32>, RowConversionError> {
    value.map(|v| unsigned(column, id, v)).transpose()
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = teams)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TeamRow {
    pub id: i32,
    pub name: String,
    pub short_name: String,
    pub city: String,
    pub league: String,
}

impl TryFrom<TeamRow> for Team {
    type Error = RowConversionError;

    fn try_from(row: TeamRow) -> Result<Self, Self::Error> {
        let code = TeamCode::new(&row.short_name)
            .map_err(|err| RowConversionError::new("short_name", row.id, err))?;
        Ok(Self {
            id: TeamId::new(row.id),
            name: row.name,
            code,
            city: row.city,
            league: row.league,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = players)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PlayerRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub nationality: String,
    pub birth_date: Option<NaiveDate>,
    pub number: Option<i32>,
    pub team_id: i32,
}

impl TryFrom<PlayerRow> for Player {
    type Error = RowConversionError;

    fn try_from(row: PlayerRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PlayerId::new(row.id),
            shirt_number: unsigned_opt("number", row.id, row.number)?,
            first_name: row.first_name,
            last_name: row.last_name,
            position: row.position,
            nationality: row.nationality,
            birth_date: row.birth_date,
            team_id: TeamId::new(row.team_id),
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = matches)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MatchRow {
    pub id: i32,
    pub season: String,
    pub matchday: i32,
    pub match_date: Option<NaiveDate>,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub played: bool,
}

impl TryFrom<MatchRow> for Match {
    type Error = RowConversionError;

    fn try_from(row: MatchRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: MatchId::new(row.id),
            season: Season::new(&row.season)
                .map_err(|err| RowConversionError::new("season", row.id, err))?,
            matchday: unsigned("matchday", row.id, row.matchday)?,
            date: row.match_date,
            home_team_id: TeamId::new(row.home_team_id),
            away_team_id: TeamId::new(row.away_team_id),
            home_score: unsigned_opt("home_score", row.id, row.home_score)?,
            away_score: unsigned_opt("away_score", row.id, row.away_score)?,
            played: row.played,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = goals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct GoalRow {
    pub id: i32,
    pub match_id: i32,
    pub scorer_id: i32,
    pub minute: Option<i32>,
    pub own_goal: bool,
    pub penalty: bool,
}

impl TryFrom<GoalRow> for Goal {
    type Error = RowConversionError;

    fn try_from(row: GoalRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            match_id: MatchId::new(row.match_id),
            scorer_id: PlayerId::new(row.scorer_id),
            minute: unsigned_opt("minute", row.id, row.minute)?,
            own_goal: row.own_goal,
            penalty: row.penalty,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = assists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AssistRow {
    pub id: i32,
    pub match_id: i32,
    pub player_id: i32,
    pub minute: Option<i32>,
}

impl TryFrom<AssistRow> for Assist {
    type Error = RowConversionError;

    fn try_from(row: AssistRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            match_id: MatchId::new(row.match_id),
            player_id: PlayerId::new(row.player_id),
            minute: unsigned_opt("minute", row.id, row.minute)?,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CardRow {
    pub id: i32,
    pub match_id: i32,
    pub player_id: i32,
    pub card_type: String,
    pub minute: Option<i32>,
}

impl TryFrom<CardRow> for Card {
    type Error = RowConversionError;

    fn try_from(row: CardRow) -> Result<Self, Self::Error> {
        let kind = CardKind::parse(&row.card_type).ok_or_else(|| {
            RowConversionError::new("card_type", row.id, format!("unknown kind '{}'", row.card_type))
        })?;
        Ok(Self {
            id: row.id,
            match_id: MatchId::new(row.match_id),
            player_id: PlayerId::new(row.player_id),
            kind,
            minute: unsigned_opt("minute", row.id, row.minute)?,
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = teams)]
pub(crate) struct NewTeamRow<'a> {
    pub name: &'a str,
    pub short_name: &'a str,
    pub city: &'a str,
    pub league: &'a str,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = players)]
pub(crate) struct NewPlayerRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub position: &'a str,
    pub nationality: &'a str,
    pub birth_date: Option<NaiveDate>,
    pub number: Option<i32>,
    pub team_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = matches)]
pub(crate) struct NewMatchRow<'a> {
    pub season: &'a str,
    pub matchday: i32,
    pub match_date: Option<NaiveDate>,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub played: bool,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = goals)]
pub(crate) struct NewGoalRow {
    pub match_id: i32,
    pub scorer_id: i32,
    pub minute: Option<i32>,
    pub own_goal: bool,
    pub penalty: bool,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = assists)]
pub(crate) struct NewAssistRow {
    pub match_id: i32,
    pub player_id: i32,
    pub minute: Option<i32>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = cards)]
pub(crate) struct NewCardRow<'a> {
    pub match_id: i32,
    pub player_id: i32,
    pub card_type: &'a str,
    pub minute: Option<i32>,
}
