//! In-process record store built from a season dataset.
//!
//! Used when no `database_url` is configured and by the command-line viewer's
//! `--local` mode. Identifiers are assigned in dataset order starting at 1,
//! mirroring what a freshly seeded PostgreSQL store would hand out.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use league_seed::{CardColour, SeedDataset};
use tracing::debug;

use crate::domain::ports::{LeagueRepository, LeagueRepositoryError};
use crate::domain::{
    Assist, Card, CardKind, Goal, Match, MatchId, Player, PlayerId, Season, SeasonError,
    SeasonRecords, Team, TeamCode, TeamCodeError, TeamId,
};

/// Errors raised while building the store from a dataset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InMemoryStoreError {
    #[error("invalid team code: {0}")]
    TeamCode(#[from] TeamCodeError),
    #[error("invalid season: {0}")]
    Season(#[from] SeasonError),
    #[error("dataset references unknown {kind} '{key}'")]
    Dangling { kind: &'static str, key: String },
    #[error("dataset holds more records than the store can number")]
    TooManyRecords,
}

/// Immutable league store shared across requests.
#[derive(Debug, Clone)]
pub struct InMemoryLeagueRepository {
    records: Arc<SeasonRecords>,
}

impl InMemoryLeagueRepository {
    /// Build the store from a validated dataset.
    ///
    /// # Errors
    /// Returns [`InMemoryStoreError`] when a record cannot be mapped onto the
    /// domain types.
    pub fn from_dataset(dataset: &SeedDataset) -> Result<Self, InMemoryStoreError> {
        let records = records_from_dataset(dataset)?;
        debug!(
            teams = records.teams.len(),
            players = records.players.len(),
            matches = records.matches.len(),
            "in-memory league store ready"
        );
        Ok(Self {
            records: Arc::new(records),
        })
    }

    /// Store holding the bundled National season.
    ///
    /// # Errors
    /// Fails only if the bundled dataset is corrupt.
    pub fn bundled() -> Result<Self, BundledStoreError> {
        let dataset = SeedDataset::national_2025()?;
        Ok(Self::from_dataset(&dataset)?)
    }
}

/// Errors raised while loading the bundled dataset into memory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BundledStoreError {
    #[error(transparent)]
    Dataset(#[from] league_seed::DatasetError),
    #[error(transparent)]
    Store(#[from] InMemoryStoreError),
}

#[async_trait]
impl LeagueRepository for InMemoryLeagueRepository {
    async fn find_team_by_code(
        &self,
        code: &TeamCode,
    ) -> Result<Option<Team>, LeagueRepositoryError> {
        Ok(self.records.team_by_code(code).cloned())
    }

    async fn season_records(
        &self,
        season: &Season,
    ) -> Result<SeasonRecords, LeagueRepositoryError> {
        let matches: Vec<Match> = self
            .records
            .matches
            .iter()
            .filter(|m| &m.season == season)
            .cloned()
            .collect();
        let match_ids: HashSet<MatchId> = matches.iter().map(|m| m.id).collect();
        let in_season = |id: &MatchId| match_ids.contains(id);
        let goals = self
            .records
            .goals
            .iter()
            .filter(|g| in_season(&g.match_id))
            .cloned()
            .collect();
        let assists = self
            .records
            .assists
            .iter()
            .filter(|a| in_season(&a.match_id))
            .cloned()
            .collect();
        let cards = self
            .records
            .cards
            .iter()
            .filter(|c| in_season(&c.match_id))
            .cloned()
            .collect();

        Ok(SeasonRecords {
            teams: self.records.teams.clone(),
            players: self.records.players.clone(),
            matches,
            goals,
            assists,
            cards,
        })
    }
}

fn next_id(len: usize) -> Result<i32, InMemoryStoreError> {
    i32::try_from(len + 1).map_err(|_| InMemoryStoreError::TooManyRecords)
}

fn lookup<T: Copy>(
    index: &HashMap<&str, T>,
    kind: &'static str,
    key: &str,
) -> Result<T, InMemoryStoreError> {
    index
        .get(key)
        .copied()
        .ok_or_else(|| InMemoryStoreError::Dangling {
            kind,
            key: key.to_owned(),
        })
}

fn records_from_dataset(dataset: &SeedDataset) -> Result<SeasonRecords, InMemoryStoreError> {
    let season = Season::new(dataset.season())?;
    let mut records = SeasonRecords::default();

    let mut team_ids = HashMap::new();
    for seed in dataset.teams() {
        let id = TeamId::new(next_id(records.teams.len())?);
        team_ids.insert(seed.code.as_str(), id);
        records.teams.push(Team {
            id,
            name: seed.name.clone(),
            code: TeamCode::new(&seed.code)?,
            city: seed.city.clone(),
            league: dataset.league().to_owned(),
        });
    }

    let mut player_ids = HashMap::new();
    for seed in dataset.players() {
        let id = PlayerId::new(next_id(records.players.len())?);
        player_ids.insert(seed.key.as_str(), id);
        records.players.push(Player {
            id,
            first_name: seed.first_name.clone(),
            last_name: seed.last_name.clone(),
            position: seed.position.clone(),
            nationality: seed.nationality.clone(),
            birth_date: seed.birth_date,
            shirt_number: seed.number,
            team_id: lookup(&team_ids, "team", &seed.team)?,
        });
    }

    let mut match_ids = HashMap::new();
    for seed in dataset.matches() {
        let id = MatchId::new(next_id(records.matches.len())?);
        match_ids.insert((seed.matchday, seed.home.as_str(), seed.away.as_str()), id);
        records.matches.push(Match {
            id,
            season: season.clone(),
            matchday: seed.matchday,
            date: seed.date,
            home_team_id: lookup(&team_ids, "team", &seed.home)?,
            away_team_id: lookup(&team_ids, "team", &seed.away)?,
            home_score: seed.home_score,
            away_score: seed.away_score,
            played: seed.played,
        });
    }

    let fixture = |matchday: u32, home: &str, away: &str| {
        match_ids
            .get(&(matchday, home, away))
            .copied()
            .ok_or_else(|| InMemoryStoreError::Dangling {
                kind: "match",
                key: format!("{matchday}:{home}-{away}"),
            })
    };

    for seed in dataset.goals() {
        let match_id = fixture(seed.matchday, &seed.home, &seed.away)?;
        records.goals.push(Goal {
            id: next_id(records.goals.len())?,
            match_id,
            scorer_id: lookup(&player_ids, "player", &seed.scorer)?,
            minute: seed.minute,
            own_goal: seed.own_goal,
            penalty: seed.penalty,
        });
        if let Some(key) = seed.credited_assist() {
            records.assists.push(Assist {
                id: next_id(records.assists.len())?,
                match_id,
                player_id: lookup(&player_ids, "player", key)?,
                minute: seed.minute,
            });
        }
    }

    for seed in dataset.cards() {
        records.cards.push(Card {
            id: next_id(records.cards.len())?,
            match_id: fixture(seed.matchday, &seed.home, &seed.away)?,
            player_id: lookup(&player_ids, "player", &seed.player)?,
            kind: match seed.colour {
                CardColour::Yellow => CardKind::Yellow,
                CardColour::Red => CardKind::Red,
            },
            minute: seed.minute,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryLeagueRepository {
        InMemoryLeagueRepository::bundled().expect("bundled store")
    }

    #[fixture]
    fn season() -> Season {
        Season::new("2025").expect("valid season")
    }

    #[rstest]
    #[tokio::test]
    async fn bundled_store_assigns_ids_in_dataset_order(store: InMemoryLeagueRepository, season: Season) {
        let records = store.season_records(&season).await.expect("records");

        assert_eq!(records.teams.len(), 16);
        assert_eq!(records.teams[0].id, TeamId::new(1));
        assert_eq!(records.teams[0].code.as_str(), "FCSM");
        assert_eq!(records.players.len(), 28);
        assert_eq!(records.matches.len(), 25);
        assert_eq!(records.goals.len(), 36);
        assert_eq!(records.assists.len(), 29);
    }

    #[rstest]
    #[tokio::test]
    async fn lookup_is_case_insensitive(store: InMemoryLeagueRepository) {
        let code = TeamCode::new("rst").expect("valid code");
        let team = store
            .find_team_by_code(&code)
            .await
            .expect("lookup")
            .expect("RST exists");
        assert_eq!(team.id, TeamId::new(4));
    }

    #[rstest]
    #[tokio::test]
    async fn other_seasons_are_empty(store: InMemoryLeagueRepository) {
        let season = Season::new("2019").expect("valid season");
        let records = store.season_records(&season).await.expect("records");

        assert!(records.matches.is_empty());
        assert!(records.goals.is_empty());
        assert_eq!(records.teams.len(), 16);
    }

    #[rstest]
    #[tokio::test]
    async fn season_events_belong_to_season_matches(store: InMemoryLeagueRepository, season: Season) {
        let records = store.season_records(&season).await.expect("records");
        let ids: HashSet<MatchId> = records.matches.iter().map(|m| m.id).collect();

        assert!(records.goals.iter().all(|g| ids.contains(&g.match_id)));
        assert!(records.assists.iter().all(|a| ids.contains(&a.match_id)));
        assert!(records.cards.iter().all(|c| ids.contains(&c.match_id)));
    }
}
