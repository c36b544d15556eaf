//! Error types for the league-seed crate.
//!
//! Every variant names the offending record so a broken dataset can be fixed
//! without re-reading the whole file.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a season dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file at '{path}': {message}")]
    IoError {
        /// Path to the dataset file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The dataset JSON is malformed or missing required fields.
    #[error("invalid dataset JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The dataset version is not supported.
    #[error("unsupported dataset version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the dataset.
        actual: u32,
    },

    /// The season label is empty or longer than ten characters.
    #[error("invalid season label '{value}'")]
    InvalidSeason {
        /// The rejected season label.
        value: String,
    },

    /// The dataset declares no teams.
    #[error("dataset contains no teams")]
    EmptyTeams,

    /// A team code is empty, too long, or not ASCII alphanumeric.
    #[error("invalid team code '{code}'")]
    InvalidTeamCode {
        /// The rejected code.
        code: String,
    },

    /// Two teams share a short code once upper-cased.
    #[error("duplicate team code '{code}'")]
    DuplicateTeamCode {
        /// The duplicated code.
        code: String,
    },

    /// Two players share a lookup key.
    #[error("duplicate player key '{key}'")]
    DuplicatePlayerKey {
        /// The duplicated key.
        key: String,
    },

    /// A record references a team code that is not declared.
    #[error("{context} references unknown team '{code}'")]
    UnknownTeam {
        /// Which record holds the reference.
        context: String,
        /// The unresolved code.
        code: String,
    },

    /// A record references a player key that is not declared.
    #[error("{context} references unknown player '{key}'")]
    UnknownPlayer {
        /// Which record holds the reference.
        context: String,
        /// The unresolved key.
        key: String,
    },

    /// A match lists the same team on both sides.
    #[error("matchday {matchday}: team '{code}' cannot play itself")]
    SameTeams {
        /// Matchday of the offending fixture.
        matchday: u32,
        /// The repeated code.
        code: String,
    },

    /// Scores must be present exactly when the match is played.
    #[error("matchday {matchday} {home}-{away}: scores must be present iff the match is played")]
    ScoreMismatch {
        /// Matchday of the offending fixture.
        matchday: u32,
        /// Home team code.
        home: String,
        /// Away team code.
        away: String,
    },

    /// Two matches share the same matchday and pairing.
    #[error("duplicate match on matchday {matchday}: {home}-{away}")]
    DuplicateMatch {
        /// Matchday of the duplicated fixture.
        matchday: u32,
        /// Home team code.
        home: String,
        /// Away team code.
        away: String,
    },

    /// A goal or card references a fixture that is not declared.
    #[error("no match on matchday {matchday}: {home}-{away}")]
    UnknownMatch {
        /// Matchday referenced by the record.
        matchday: u32,
        /// Home team code.
        home: String,
        /// Away team code.
        away: String,
    },
}
