//! Season dataset types and JSON parsing.
//!
//! A dataset describes one season of one league: the participating teams,
//! their players, the fixtures with final scores, and the goals (with the
//! credited assist) and cards recorded in those fixtures. Records refer to
//! each other by team code, player key, and `(matchday, home, away)`; parsing
//! resolves and checks every reference so consumers can insert the records
//! without further validation.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::DatasetError;
use crate::validation::{is_valid_season, is_valid_team_code, normalize_team_code};

/// Current supported dataset version.
const SUPPORTED_VERSION: u32 = 1;

/// JSON source of the bundled National 2025 season.
pub const NATIONAL_2025_JSON: &str = include_str!("../data/national-2025.json");

/// A validated season dataset.
///
/// # Example
///
/// ```
/// use league_seed::SeedDataset;
///
/// let json = r#"{
///     "version": 1,
///     "season": "2025",
///     "league": "National",
///     "teams": [
///         {"code": "FCSM", "name": "FC Sochaux-Montbéliard", "city": "Montbéliard"},
///         {"code": "ORL", "name": "US Orléans", "city": "Orléans"}
///     ],
///     "players": [],
///     "matches": [
///         {"matchday": 1, "date": "2024-08-10", "home": "fcsm", "away": "ORL",
///          "homeScore": 2, "awayScore": 0, "played": true}
///     ]
/// }"#;
///
/// let dataset = SeedDataset::from_json(json).expect("valid dataset");
/// assert_eq!(dataset.teams().len(), 2);
/// assert_eq!(dataset.matches()[0].home, "FCSM");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDataset {
    version: u32,
    season: String,
    league: String,
    teams: Vec<TeamSeed>,
    players: Vec<PlayerSeed>,
    matches: Vec<MatchSeed>,
    goals: Vec<GoalSeed>,
    cards: Vec<CardSeed>,
}

/// A team declared by the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSeed {
    /// Upper-cased short code, unique within the dataset.
    pub code: String,
    /// Full club name.
    pub name: String,
    /// Home city.
    pub city: String,
}

/// A player declared by the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSeed {
    /// Lookup key referenced by goals and cards.
    pub key: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Playing position label.
    pub position: String,
    /// Nationality label.
    pub nationality: String,
    /// Optional date of birth.
    pub birth_date: Option<NaiveDate>,
    /// Optional shirt number.
    pub number: Option<u32>,
    /// Code of the owning team.
    pub team: String,
}

/// A fixture declared by the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSeed {
    /// Round number within the season.
    pub matchday: u32,
    /// Kick-off date when known.
    pub date: Option<NaiveDate>,
    /// Home team code.
    pub home: String,
    /// Away team code.
    pub away: String,
    /// Final home score, present iff `played`.
    pub home_score: Option<u32>,
    /// Final away score, present iff `played`.
    pub away_score: Option<u32>,
    /// Whether the fixture has been played.
    pub played: bool,
}

/// A goal declared by the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalSeed {
    /// Matchday of the fixture.
    pub matchday: u32,
    /// Home team code of the fixture.
    pub home: String,
    /// Away team code of the fixture.
    pub away: String,
    /// Key of the scoring player.
    pub scorer: String,
    /// Minute of the goal when known.
    pub minute: Option<u32>,
    /// Whether the goal was converted from the penalty spot.
    pub penalty: bool,
    /// Whether the goal was put into the scorer's own net.
    pub own_goal: bool,
    /// Key of the player credited with the assist, if any.
    pub assist: Option<String>,
}

impl GoalSeed {
    /// Assist key to record for this goal.
    ///
    /// Penalties never carry an assist, even when the source lists one.
    #[must_use]
    pub fn credited_assist(&self) -> Option<&str> {
        if self.penalty {
            return None;
        }
        self.assist.as_deref()
    }
}

/// Card colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColour {
    /// Caution.
    Yellow,
    /// Dismissal.
    Red,
}

/// A disciplinary card declared by the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSeed {
    /// Matchday of the fixture.
    pub matchday: u32,
    /// Home team code of the fixture.
    pub home: String,
    /// Away team code of the fixture.
    pub away: String,
    /// Key of the booked player.
    pub player: String,
    /// Card colour.
    pub colour: CardColour,
    /// Minute of the card when known.
    pub minute: Option<u32>,
}

impl SeedDataset {
    /// Parses a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the JSON is malformed, the version is
    /// unsupported, or any record fails validation or references an
    /// undeclared team, player, or fixture.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset = serde_json::from_str(json).map_err(|e| DatasetError::ParseError {
            message: e.to_string(),
        })?;

        Self::from_raw(raw)
    }

    /// Loads a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let contents = fs::read_to_string(path).map_err(|e| DatasetError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    /// Parses the bundled National 2025 season.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the bundled file fails validation, which
    /// the crate's own tests rule out.
    pub fn national_2025() -> Result<Self, DatasetError> {
        Self::from_json(NATIONAL_2025_JSON)
    }

    fn from_raw(raw: RawDataset) -> Result<Self, DatasetError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(DatasetError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }
        if !is_valid_season(&raw.season) {
            return Err(DatasetError::InvalidSeason { value: raw.season });
        }
        if raw.teams.is_empty() {
            return Err(DatasetError::EmptyTeams);
        }

        let teams = parse_teams(raw.teams)?;
        let team_codes: HashSet<&str> = teams.iter().map(|t| t.code.as_str()).collect();
        let players = parse_players(raw.players, &team_codes)?;
        let player_keys: HashSet<&str> = players.iter().map(|p| p.key.as_str()).collect();
        let matches = parse_matches(raw.matches, &team_codes)?;
        let fixtures: HashSet<(u32, &str, &str)> = matches
            .iter()
            .map(|m| (m.matchday, m.home.as_str(), m.away.as_str()))
            .collect();
        let goals = parse_goals(raw.goals, &fixtures, &player_keys)?;
        let cards = parse_cards(raw.cards, &fixtures, &player_keys)?;

        Ok(Self {
            version: raw.version,
            season: raw.season.trim().to_owned(),
            league: raw.league,
            teams,
            players,
            matches,
            goals,
            cards,
        })
    }

    /// Returns the dataset version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the season label every fixture belongs to.
    #[must_use]
    pub fn season(&self) -> &str {
        &self.season
    }

    /// Returns the league tag applied to every team.
    #[must_use]
    pub fn league(&self) -> &str {
        &self.league
    }

    /// Returns the declared teams in declaration order.
    #[must_use]
    pub fn teams(&self) -> &[TeamSeed] {
        &self.teams
    }

    /// Returns the declared players in declaration order.
    #[must_use]
    pub fn players(&self) -> &[PlayerSeed] {
        &self.players
    }

    /// Returns the declared fixtures in declaration order.
    #[must_use]
    pub fn matches(&self) -> &[MatchSeed] {
        &self.matches
    }

    /// Returns the declared goals in declaration order.
    #[must_use]
    pub fn goals(&self) -> &[GoalSeed] {
        &self.goals
    }

    /// Returns the declared cards in declaration order.
    #[must_use]
    pub fn cards(&self) -> &[CardSeed] {
        &self.cards
    }
}

fn parse_teams(raw: Vec<RawTeam>) -> Result<Vec<TeamSeed>, DatasetError> {
    let mut seen = HashSet::new();
    let mut teams = Vec::with_capacity(raw.len());
    for team in raw {
        let code = normalize_team_code(&team.code);
        if !is_valid_team_code(&code) {
            return Err(DatasetError::InvalidTeamCode { code: team.code });
        }
        if !seen.insert(code.clone()) {
            return Err(DatasetError::DuplicateTeamCode { code });
        }
        teams.push(TeamSeed {
            code,
            name: team.name,
            city: team.city,
        });
    }
    Ok(teams)
}

fn resolve_team(code: &str, known: &HashSet<&str>, context: String) -> Result<String, DatasetError> {
    let normalized = normalize_team_code(code);
    if known.contains(normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(DatasetError::UnknownTeam {
            context,
            code: code.to_owned(),
        })
    }
}

fn parse_players(
    raw: Vec<RawPlayer>,
    team_codes: &HashSet<&str>,
) -> Result<Vec<PlayerSeed>, DatasetError> {
    let mut seen = HashSet::new();
    let mut players = Vec::with_capacity(raw.len());
    for player in raw {
        if !seen.insert(player.key.clone()) {
            return Err(DatasetError::DuplicatePlayerKey { key: player.key });
        }
        let team = resolve_team(&player.team, team_codes, format!("player '{}'", player.key))?;
        players.push(PlayerSeed {
            key: player.key,
            first_name: player.first_name,
            last_name: player.last_name,
            position: player.position,
            nationality: player.nationality,
            birth_date: player.birth_date,
            number: player.number,
            team,
        });
    }
    Ok(players)
}

fn parse_matches(
    raw: Vec<RawMatch>,
    team_codes: &HashSet<&str>,
) -> Result<Vec<MatchSeed>, DatasetError> {
    let mut seen = HashSet::new();
    let mut matches = Vec::with_capacity(raw.len());
    for fixture in raw {
        let context = format!("matchday {} fixture", fixture.matchday);
        let home = resolve_team(&fixture.home, team_codes, context.clone())?;
        let away = resolve_team(&fixture.away, team_codes, context)?;
        if home == away {
            return Err(DatasetError::SameTeams {
                matchday: fixture.matchday,
                code: home,
            });
        }
        let has_scores = fixture.home_score.is_some() && fixture.away_score.is_some();
        let has_any_score = fixture.home_score.is_some() || fixture.away_score.is_some();
        if fixture.played != has_scores || (!fixture.played && has_any_score) {
            return Err(DatasetError::ScoreMismatch {
                matchday: fixture.matchday,
                home,
                away,
            });
        }
        if !seen.insert((fixture.matchday, home.clone(), away.clone())) {
            return Err(DatasetError::DuplicateMatch {
                matchday: fixture.matchday,
                home,
                away,
            });
        }
        matches.push(MatchSeed {
            matchday: fixture.matchday,
            date: fixture.date,
            home,
            away,
            home_score: fixture.home_score,
            away_score: fixture.away_score,
            played: fixture.played,
        });
    }
    Ok(matches)
}

fn resolve_fixture(
    matchday: u32,
    home: &str,
    away: &str,
    fixtures: &HashSet<(u32, &str, &str)>,
) -> Result<(String, String), DatasetError> {
    let home_code = normalize_team_code(home);
    let away_code = normalize_team_code(away);
    if fixtures.contains(&(matchday, home_code.as_str(), away_code.as_str())) {
        Ok((home_code, away_code))
    } else {
        Err(DatasetError::UnknownMatch {
            matchday,
            home: home_code,
            away: away_code,
        })
    }
}

fn resolve_player(key: &str, known: &HashSet<&str>, context: String) -> Result<(), DatasetError> {
    if known.contains(key) {
        Ok(())
    } else {
        Err(DatasetError::UnknownPlayer {
            context,
            key: key.to_owned(),
        })
    }
}

fn parse_goals(
    raw: Vec<RawGoal>,
    fixtures: &HashSet<(u32, &str, &str)>,
    player_keys: &HashSet<&str>,
) -> Result<Vec<GoalSeed>, DatasetError> {
    raw.into_iter()
        .map(|goal| {
            let (home, away) = resolve_fixture(goal.matchday, &goal.home, &goal.away, fixtures)?;
            let context = format!("goal on matchday {} {home}-{away}", goal.matchday);
            resolve_player(&goal.scorer, player_keys, context.clone())?;
            if let Some(assist) = goal.assist.as_deref() {
                resolve_player(assist, player_keys, context)?;
            }
            Ok(GoalSeed {
                matchday: goal.matchday,
                home,
                away,
                scorer: goal.scorer,
                minute: goal.minute,
                penalty: goal.penalty,
                own_goal: goal.own_goal,
                assist: goal.assist,
            })
        })
        .collect()
}

fn parse_cards(
    raw: Vec<RawCard>,
    fixtures: &HashSet<(u32, &str, &str)>,
    player_keys: &HashSet<&str>,
) -> Result<Vec<CardSeed>, DatasetError> {
    raw.into_iter()
        .map(|card| {
            let (home, away) = resolve_fixture(card.matchday, &card.home, &card.away, fixtures)?;
            let context = format!("card on matchday {} {home}-{away}", card.matchday);
            resolve_player(&card.player, player_keys, context)?;
            Ok(CardSeed {
                matchday: card.matchday,
                home,
                away,
                player: card.player,
                colour: card.colour,
                minute: card.minute,
            })
        })
        .collect()
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    version: u32,
    season: String,
    #[serde(default = "default_league")]
    league: String,
    teams: Vec<RawTeam>,
    #[serde(default)]
    players: Vec<RawPlayer>,
    #[serde(default)]
    matches: Vec<RawMatch>,
    #[serde(default)]
    goals: Vec<RawGoal>,
    #[serde(default)]
    cards: Vec<RawCard>,
}

fn default_league() -> String {
    "National".to_owned()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTeam {
    code: String,
    name: String,
    city: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlayer {
    key: String,
    first_name: String,
    last_name: String,
    position: String,
    nationality: String,
    #[serde(default)]
    birth_date: Option<NaiveDate>,
    #[serde(default)]
    number: Option<u32>,
    team: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMatch {
    matchday: u32,
    #[serde(default)]
    date: Option<NaiveDate>,
    home: String,
    away: String,
    #[serde(default)]
    home_score: Option<u32>,
    #[serde(default)]
    away_score: Option<u32>,
    #[serde(default)]
    played: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGoal {
    matchday: u32,
    home: String,
    away: String,
    scorer: String,
    #[serde(default)]
    minute: Option<u32>,
    #[serde(default)]
    penalty: bool,
    #[serde(default)]
    own_goal: bool,
    #[serde(default)]
    assist: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCard {
    matchday: u32,
    home: String,
    away: String,
    player: String,
    colour: CardColour,
    #[serde(default)]
    minute: Option<u32>,
}
