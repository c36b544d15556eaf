//! Bundled season dataset for the National league.
//!
//! This crate ships the reference season used to seed empty record stores
//! and to power the command-line viewer's offline mode. It is designed to be
//! independent of backend domain types: records refer to each other by team
//! code and player key, and the backend maps them onto its own identifiers.
//!
//! # Example
//!
//! ```
//! use league_seed::SeedDataset;
//!
//! let dataset = SeedDataset::national_2025().expect("bundled dataset is valid");
//! assert_eq!(dataset.season(), "2025");
//! assert!(dataset.teams().iter().any(|team| team.code == "FCSM"));
//! ```

mod dataset;
mod error;
mod validation;

pub use dataset::{
    CardColour, CardSeed, GoalSeed, MatchSeed, NATIONAL_2025_JSON, PlayerSeed, SeedDataset,
    TeamSeed,
};
pub use error::DatasetError;
pub use validation::{
    SEASON_MAX, TEAM_CODE_MAX, is_valid_season, is_valid_team_code, normalize_team_code,
};
