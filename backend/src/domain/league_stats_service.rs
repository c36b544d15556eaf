//! League statistics service.
//!
//! Loads a season snapshot through [`LeagueRepository`] and hands it to the
//! aggregation engine in [`crate::domain::stats`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{LeagueRepository, LeagueRepositoryError, LeagueStatsQuery};
use crate::domain::stats::{
    self, AssistRow, FormSummary, MatchLine, ScorerRow, StandingRow,
};
use crate::domain::{Error, Season, SeasonRecords, Team, TeamCode};

fn map_repository_error(error: LeagueRepositoryError) -> Error {
    match error {
        LeagueRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("league store unavailable: {message}"))
        }
        LeagueRepositoryError::Query { message } => {
            Error::internal(format!("league store error: {message}"))
        }
    }
}

/// Stats service implementing [`LeagueStatsQuery`] over a record store.
#[derive(Clone)]
pub struct LeagueStatsService<R> {
    league_repo: Arc<R>,
    league: String,
}

impl<R> LeagueStatsService<R> {
    /// Create a service computing standings for `league` (e.g. `National`).
    pub fn new(league_repo: Arc<R>, league: impl Into<String>) -> Self {
        Self {
            league_repo,
            league: league.into(),
        }
    }
}

impl<R> LeagueStatsService<R>
where
    R: LeagueRepository,
{
    async fn records(&self, season: &Season) -> Result<SeasonRecords, Error> {
        self.league_repo
            .season_records(season)
            .await
            .map_err(map_repository_error)
    }

    /// Resolve the club first so an unknown code never produces a partial
    /// result.
    async fn club(&self, code: &TeamCode, season: &Season) -> Result<(Team, SeasonRecords), Error> {
        let team = self
            .league_repo
            .find_team_by_code(code)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("Club '{code}' introuvable")))?;
        let records = self.records(season).await?;
        debug!(club = %team.code, season = %season, matches = records.matches.len(), "club snapshot loaded");
        Ok((team, records))
    }
}

#[async_trait]
impl<R> LeagueStatsQuery for LeagueStatsService<R>
where
    R: LeagueRepository,
{
    async fn national_scorers(
        &self,
        season: &Season,
        limit: usize,
    ) -> Result<Vec<ScorerRow>, Error> {
        let records = self.records(season).await?;
        Ok(stats::rank_scorers(&records, None, Some(limit)))
    }

    async fn national_assists(
        &self,
        season: &Season,
        limit: usize,
    ) -> Result<Vec<AssistRow>, Error> {
        let records = self.records(season).await?;
        Ok(stats::rank_assisters(&records, None, Some(limit)))
    }

    async fn standings(&self, season: &Season) -> Result<Vec<StandingRow>, Error> {
        let records = self.records(season).await?;
        Ok(stats::compute_standings(&records, &self.league))
    }

    async fn club_scorers(
        &self,
        club: &TeamCode,
        season: &Season,
        limit: Option<usize>,
    ) -> Result<Vec<ScorerRow>, Error> {
        let (team, records) = self.club(club, season).await?;
        Ok(stats::rank_scorers(&records, Some(team.id), limit))
    }

    async fn club_assists(
        &self,
        club: &TeamCode,
        season: &Season,
        limit: Option<usize>,
    ) -> Result<Vec<AssistRow>, Error> {
        let (team, records) = self.club(club, season).await?;
        Ok(stats::rank_assisters(&records, Some(team.id), limit))
    }

    async fn club_matches(
        &self,
        club: &TeamCode,
        season: &Season,
        last: usize,
    ) -> Result<Vec<MatchLine>, Error> {
        let (team, records) = self.club(club, season).await?;
        Ok(stats::club_history(&records, &team, last))
    }

    async fn club_form(
        &self,
        club: &TeamCode,
        season: &Season,
        last: usize,
    ) -> Result<FormSummary, Error> {
        let (team, records) = self.club(club, season).await?;
        Ok(stats::club_form(&records, &team, last))
    }
}

#[cfg(test)]
#[path = "league_stats_service_tests.rs"]
mod tests;
