//! League records read by the aggregation engine.
//!
//! Records are created by the seed step and never mutated afterwards. The
//! engine consumes them through a [`SeasonRecords`] snapshot, one season at a
//! time.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use league_seed::{SEASON_MAX, TEAM_CODE_MAX, is_valid_season, is_valid_team_code, normalize_team_code};
use serde::{Deserialize, Serialize};

macro_rules! define_record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a store-assigned identifier.
            #[must_use]
            pub const fn new(raw: i32) -> Self {
                Self(raw)
            }

            /// Raw surrogate key.
            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_record_id!(
    /// Surrogate key of a [`Team`].
    TeamId
);
define_record_id!(
    /// Surrogate key of a [`Player`].
    PlayerId
);
define_record_id!(
    /// Surrogate key of a [`Match`].
    MatchId
);

/// Validation errors for [`TeamCode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TeamCodeError {
    #[error("team code must not be empty")]
    Empty,
    #[error("team code must be at most {max} ASCII letters or digits, got '{value}'")]
    Invalid { value: String, max: usize },
}

/// Club short code such as `FCSM`.
///
/// Codes are trimmed and upper-cased on construction, so comparing two
/// `TeamCode` values is a case-insensitive comparison of the raw input.
///
/// # Examples
/// ```
/// use fcsmtop::domain::TeamCode;
///
/// let code = TeamCode::new(" fcsm ").expect("valid code");
/// assert_eq!(code.as_str(), "FCSM");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TeamCode(String);

impl TeamCode {
    /// Normalise and validate a raw code.
    ///
    /// # Errors
    /// Returns [`TeamCodeError`] when the code is blank or malformed.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, TeamCodeError> {
        let normalised = normalize_team_code(raw.as_ref());
        if normalised.is_empty() {
            return Err(TeamCodeError::Empty);
        }
        if !is_valid_team_code(&normalised) {
            return Err(TeamCodeError::Invalid {
                value: normalised,
                max: TEAM_CODE_MAX,
            });
        }
        Ok(Self(normalised))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TeamCode {
    type Err = TeamCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for TeamCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Validation errors for [`Season`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("season must be 1 to {max} characters, got '{value}'")]
pub struct SeasonError {
    pub value: String,
    pub max: usize,
}

/// Season tag such as `2025`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Season(String);

impl Season {
    /// Trim and validate a season label.
    ///
    /// # Errors
    /// Returns [`SeasonError`] when the label is blank or too long.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, SeasonError> {
        let raw = raw.as_ref();
        if !is_valid_season(raw) {
            return Err(SeasonError {
                value: raw.to_owned(),
                max: SEASON_MAX,
            });
        }
        Ok(Self(raw.trim().to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Season {
    type Err = SeasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A club taking part in a league.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub code: TeamCode,
    pub city: String,
    /// League tag, e.g. `National`.
    pub league: String,
}

/// A registered player. Each player belongs to exactly one team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub nationality: String,
    pub birth_date: Option<NaiveDate>,
    pub shirt_number: Option<u32>,
    pub team_id: TeamId,
}

impl Player {
    /// `"{first} {last}"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A fixture between two distinct teams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub id: MatchId,
    pub season: Season,
    pub matchday: u32,
    pub date: Option<NaiveDate>,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub played: bool,
}

impl Match {
    /// `(home, away)` score of a played match with both scores recorded.
    #[must_use]
    pub fn final_score(&self) -> Option<(u32, u32)> {
        if !self.played {
            return None;
        }
        Some((self.home_score?, self.away_score?))
    }

    /// Whether `team` plays in this match.
    #[must_use]
    pub fn involves(&self, team: TeamId) -> bool {
        self.home_team_id == team || self.away_team_id == team
    }

    /// Goals `(for, against)` from `team`'s perspective.
    ///
    /// Returns `None` when the team did not play or the score is incomplete.
    #[must_use]
    pub fn goals_for_against(&self, team: TeamId) -> Option<(u32, u32)> {
        let (home, away) = self.final_score()?;
        if self.home_team_id == team {
            Some((home, away))
        } else if self.away_team_id == team {
            Some((away, home))
        } else {
            None
        }
    }
}

/// A goal. Own goals are attributed to the player who put the ball in the
/// net but do not count toward that player's tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub id: i32,
    pub match_id: MatchId,
    pub scorer_id: PlayerId,
    pub minute: Option<u32>,
    pub own_goal: bool,
    pub penalty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assist {
    pub id: i32,
    pub match_id: MatchId,
    pub player_id: PlayerId,
    pub minute: Option<u32>,
}

/// Card colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Yellow,
    Red,
}

impl CardKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }

    /// Parse the persisted label.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "yellow" => Some(Self::Yellow),
            "red" => Some(Self::Red),
            _ => None,
        }
    }
}

/// Disciplinary record. Stored and seeded, never aggregated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: i32,
    pub match_id: MatchId,
    pub player_id: PlayerId,
    pub kind: CardKind,
    pub minute: Option<u32>,
}

/// Everything the engine needs for one season.
///
/// `matches`, `goals`, `assists` and `cards` only contain records of the
/// snapshot's season. `teams` and `players` are the full registry, ordered by
/// identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonRecords {
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
    pub goals: Vec<Goal>,
    pub assists: Vec<Assist>,
    pub cards: Vec<Card>,
}

impl SeasonRecords {
    #[must_use]
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == id)
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    #[must_use]
    pub fn team_by_code(&self, code: &TeamCode) -> Option<&Team> {
        self.teams.iter().find(|team| &team.code == code)
    }
}
