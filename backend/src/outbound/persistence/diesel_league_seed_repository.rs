//! PostgreSQL-backed seeding of league records.
//!
//! The whole dataset is written in one transaction. Teams, players and
//! matches are inserted first so their generated ids can be resolved from
//! the dataset's team codes, player keys and fixture keys.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use league_seed::{CardColour, SeedDataset};
use tracing::{debug, info};

use crate::domain::ports::{LeagueSeedRepository, LeagueSeedRepositoryError, SeedingResult};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{
    NewAssistRow, NewCardRow, NewGoalRow, NewMatchRow, NewPlayerRow, NewTeamRow,
};
use super::pool::DbPool;
use super::schema::{assists, cards, goals, matches, players, teams};

/// Diesel implementation of [`LeagueSeedRepository`].
#[derive(Clone)]
pub struct DieselLeagueSeedRepository {
    pool: DbPool,
}

impl DieselLeagueSeedRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Failures inside the seeding transaction.
///
/// Dangling references abort the transaction like any database error.
#[derive(Debug)]
enum SeedTxError {
    Diesel(diesel::result::Error),
    Invalid(String),
}

impl From<diesel::result::Error> for SeedTxError {
    fn from(error: diesel::result::Error) -> Self {
        Self::Diesel(error)
    }
}

impl From<SeedTxError> for LeagueSeedRepositoryError {
    fn from(error: SeedTxError) -> Self {
        match error {
            SeedTxError::Diesel(err) => map_diesel_error(
                err,
                LeagueSeedRepositoryError::query,
                LeagueSeedRepositoryError::connection,
            ),
            SeedTxError::Invalid(message) => LeagueSeedRepositoryError::query(message),
        }
    }
}

fn to_i32(value: u32, what: &str) -> Result<i32, SeedTxError> {
    i32::try_from(value).map_err(|_| SeedTxError::Invalid(format!("{what} {value} out of range")))
}

fn to_i32_opt(value: Option<u32>, what: &str) -> Result<Option<i32>, SeedTxError> {
    value.map(|v| to_i32(v, what)).transpose()
}

fn resolve<K, Q>(index: &HashMap<K, i32>, key: &Q, what: &str) -> Result<i32, SeedTxError>
where
    K: std::borrow::Borrow<Q> + Eq + std::hash::Hash,
    Q: Eq + std::hash::Hash + std::fmt::Debug + ?Sized,
{
    index
        .get(key)
        .copied()
        .ok_or_else(|| SeedTxError::Invalid(format!("unknown {what} {key:?}")))
}

async fn insert_dataset(
    conn: &mut AsyncPgConnection,
    dataset: &SeedDataset,
) -> Result<SeedingResult, SeedTxError> {
    let existing: i64 = teams::table.count().get_result(conn).await?;
    if existing > 0 {
        return Ok(SeedingResult::AlreadySeeded);
    }

    let team_rows: Vec<NewTeamRow<'_>> = dataset
        .teams()
        .iter()
        .map(|team| NewTeamRow {
            name: &team.name,
            short_name: &team.code,
            city: &team.city,
            league: dataset.league(),
        })
        .collect();
    let team_ids: HashMap<String, i32> = diesel::insert_into(teams::table)
        .values(&team_rows)
        .returning((teams::short_name, teams::id))
        .get_results::<(String, i32)>(conn)
        .await?
        .into_iter()
        .collect();

    // One insert per player: players have no natural key to match
    // RETURNING rows against.
    let mut player_ids: HashMap<&str, i32> = HashMap::with_capacity(dataset.players().len());
    for player in dataset.players() {
        let row = NewPlayerRow {
            first_name: &player.first_name,
            last_name: &player.last_name,
            position: &player.position,
            nationality: &player.nationality,
            birth_date: player.birth_date,
            number: to_i32_opt(player.number, "shirt number")?,
            team_id: resolve(&team_ids, player.team.as_str(), "team")?,
        };
        let id: i32 = diesel::insert_into(players::table)
            .values(&row)
            .returning(players::id)
            .get_result(conn)
            .await?;
        player_ids.insert(player.key.as_str(), id);
    }

    let mut match_rows = Vec::with_capacity(dataset.matches().len());
    for fixture in dataset.matches() {
        match_rows.push(NewMatchRow {
            season: dataset.season(),
            matchday: to_i32(fixture.matchday, "matchday")?,
            match_date: fixture.date,
            home_team_id: resolve(&team_ids, fixture.home.as_str(), "team")?,
            away_team_id: resolve(&team_ids, fixture.away.as_str(), "team")?,
            home_score: to_i32_opt(fixture.home_score, "score")?,
            away_score: to_i32_opt(fixture.away_score, "score")?,
            played: fixture.played,
        });
    }
    let match_ids: HashMap<(i32, i32, i32), i32> = diesel::insert_into(matches::table)
        .values(&match_rows)
        .returning((
            matches::matchday,
            matches::home_team_id,
            matches::away_team_id,
            matches::id,
        ))
        .get_results::<(i32, i32, i32, i32)>(conn)
        .await?
        .into_iter()
        .map(|(day, home, away, id)| ((day, home, away), id))
        .collect();
    let fixture_id = |matchday: u32, home: &str, away: &str| -> Result<i32, SeedTxError> {
        let key = (
            to_i32(matchday, "matchday")?,
            resolve(&team_ids, home, "team")?,
            resolve(&team_ids, away, "team")?,
        );
        resolve(&match_ids, &key, "match")
    };

    let mut goal_rows = Vec::with_capacity(dataset.goals().len());
    let mut assist_rows = Vec::new();
    for goal in dataset.goals() {
        let match_id = fixture_id(goal.matchday, &goal.home, &goal.away)?;
        let minute = to_i32_opt(goal.minute, "minute")?;
        goal_rows.push(NewGoalRow {
            match_id,
            scorer_id: resolve(&player_ids, goal.scorer.as_str(), "player")?,
            minute,
            own_goal: goal.own_goal,
            penalty: goal.penalty,
        });
        if let Some(key) = goal.credited_assist() {
            assist_rows.push(NewAssistRow {
                match_id,
                player_id: resolve(&player_ids, key, "player")?,
                minute,
            });
        }
    }

    let mut card_rows = Vec::with_capacity(dataset.cards().len());
    for card in dataset.cards() {
        card_rows.push(NewCardRow {
            match_id: fixture_id(card.matchday, &card.home, &card.away)?,
            player_id: resolve(&player_ids, card.player.as_str(), "player")?,
            card_type: match card.colour {
                CardColour::Yellow => "yellow",
                CardColour::Red => "red",
            },
            minute: to_i32_opt(card.minute, "minute")?,
        });
    }

    if !goal_rows.is_empty() {
        diesel::insert_into(goals::table)
            .values(&goal_rows)
            .execute(conn)
            .await?;
    }
    if !assist_rows.is_empty() {
        diesel::insert_into(assists::table)
            .values(&assist_rows)
            .execute(conn)
            .await?;
    }
    if !card_rows.is_empty() {
        diesel::insert_into(cards::table)
            .values(&card_rows)
            .execute(conn)
            .await?;
    }

    debug!(
        goals = goal_rows.len(),
        assists = assist_rows.len(),
        cards = card_rows.len(),
        "match events inserted"
    );
    Ok(SeedingResult::Applied)
}

#[async_trait]
impl LeagueSeedRepository for DieselLeagueSeedRepository {
    async fn seed_if_empty(
        &self,
        dataset: &SeedDataset,
    ) -> Result<SeedingResult, LeagueSeedRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, LeagueSeedRepositoryError::connection))?;

        let result = conn
            .transaction(|conn| insert_dataset(conn, dataset).scope_boxed())
            .await?;

        if result == SeedingResult::Applied {
            info!(
                season = dataset.season(),
                teams = dataset.teams().len(),
                players = dataset.players().len(),
                matches = dataset.matches().len(),
                "league dataset written"
            );
        }
        Ok(result)
    }
}
