//! PostgreSQL-backed league record reads.
//!
//! A season snapshot is loaded inside one read-only repeatable-read
//! transaction so every table is observed at the same point in time.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt;
use tracing::debug;

use crate::domain::ports::{LeagueRepository, LeagueRepositoryError};
use crate::domain::{Season, SeasonRecords, Team, TeamCode};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AssistRow, CardRow, GoalRow, MatchRow, PlayerRow, RowConversionError, TeamRow};
use super::pool::{DbPool, PoolError};
use super::schema::{assists, cards, goals, matches, players, teams};

/// Diesel implementation of [`LeagueRepository`].
#[derive(Clone)]
pub struct DieselLeagueRepository {
    pool: DbPool,
}

impl DieselLeagueRepository {
    /// Create a repository reading through `pool`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use fcsmtop::outbound::persistence::{DbPool, DieselLeagueRepository, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/fcsmtop")).await?;
    /// let repository = DieselLeagueRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> LeagueRepositoryError {
    map_pool_error(error, LeagueRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> LeagueRepositoryError {
    map_diesel_error(
        error,
        LeagueRepositoryError::query,
        LeagueRepositoryError::connection,
    )
}

fn conversion_error(error: RowConversionError) -> LeagueRepositoryError {
    LeagueRepositoryError::query(error.to_string())
}

fn convert<R, T>(rows: Vec<R>) -> Result<Vec<T>, LeagueRepositoryError>
where
    T: TryFrom<R, Error = RowConversionError>,
{
    rows.into_iter()
        .map(T::try_from)
        .collect::<Result<_, _>>()
        .map_err(conversion_error)
}

/// Raw rows of one snapshot, converted once the transaction has closed.
struct SnapshotRows {
    teams: Vec<TeamRow>,
    players: Vec<PlayerRow>,
    matches: Vec<MatchRow>,
    goals: Vec<GoalRow>,
    assists: Vec<AssistRow>,
    cards: Vec<CardRow>,
}

#[async_trait]
impl LeagueRepository for DieselLeagueRepository {
    async fn find_team_by_code(
        &self,
        code: &TeamCode,
    ) -> Result<Option<Team>, LeagueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = teams::table
            .filter(teams::short_name.eq(code.as_str()))
            .select(TeamRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        row.map(Team::try_from).transpose().map_err(conversion_error)
    }

    async fn season_records(
        &self,
        season: &Season,
    ) -> Result<SeasonRecords, LeagueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let label = season.as_str().to_owned();

        let rows = conn
            .build_transaction()
            .read_only()
            .repeatable_read()
            .run(|conn| {
                async move {
                    let teams = teams::table
                        .order(teams::id.asc())
                        .select(TeamRow::as_select())
                        .load(conn)
                        .await?;
                    let players = players::table
                        .order(players::id.asc())
                        .select(PlayerRow::as_select())
                        .load(conn)
                        .await?;
                    let matches = matches::table
                        .filter(matches::season.eq(&label))
                        .order(matches::id.asc())
                        .select(MatchRow::as_select())
                        .load(conn)
                        .await?;
                    let goals = goals::table
                        .inner_join(matches::table)
                        .filter(matches::season.eq(&label))
                        .order(goals::id.asc())
                        .select(GoalRow::as_select())
                        .load(conn)
                        .await?;
                    let assists = assists::table
                        .inner_join(matches::table)
                        .filter(matches::season.eq(&label))
                        .order(assists::id.asc())
                        .select(AssistRow::as_select())
                        .load(conn)
                        .await?;
                    let cards = cards::table
                        .inner_join(matches::table)
                        .filter(matches::season.eq(&label))
                        .order(cards::id.asc())
                        .select(CardRow::as_select())
                        .load(conn)
                        .await?;
                    Ok::<_, diesel::result::Error>(SnapshotRows {
                        teams,
                        players,
                        matches,
                        goals,
                        assists,
                        cards,
                    })
                }
                .scope_boxed()
            })
            .await
            .map_err(diesel_error)?;

        debug!(
            season = %season,
            matches = rows.matches.len(),
            goals = rows.goals.len(),
            "season snapshot loaded"
        );

        Ok(SeasonRecords {
            teams: convert(rows.teams)?,
            players: convert(rows.players)?,
            matches: convert(rows.matches)?,
            goals: convert(rows.goals)?,
            assists: convert(rows.assists)?,
            cards: convert(rows.cards)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn conversion_failures_are_query_errors() {
        let rows = vec![TeamRow {
            id: 3,
            name: "Broken".to_owned(),
            short_name: "BAD CODE".to_owned(),
            city: "Nowhere".to_owned(),
            league: "National".to_owned(),
        }];
        let err = convert::<_, Team>(rows).expect_err("invalid code");
        assert!(matches!(err, LeagueRepositoryError::Query { .. }));
        assert!(err.to_string().contains("short_name"));
    }

    #[rstest]
    fn pool_failures_are_connection_errors() {
        let err = pool_error(PoolError::checkout("timed out"));
        assert!(matches!(err, LeagueRepositoryError::Connection { .. }));
    }
}
