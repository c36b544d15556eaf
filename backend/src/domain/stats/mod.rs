//! Aggregation engine.
//!
//! Pure, synchronous functions that turn a [`SeasonRecords`] snapshot into
//! ranked views: scorer and assist tables, the league table, a club's recent
//! matches and its form. Nothing here performs I/O or keeps state between
//! calls, so identical snapshots always produce identical output.
//!
//! Callers validate filters (season, limits, club codes) before reaching the
//! engine; unknown clubs are reported by
//! [`LeagueStatsService`](crate::domain::LeagueStatsService).
//!
//! [`SeasonRecords`]: crate::domain::SeasonRecords

mod club;
mod outcome;
mod ranking;
mod standings;

pub use club::{
    FORM_DEFAULT, FORM_MAX, FormSummary, HISTORY_DEFAULT, HISTORY_MAX, MatchLine, club_form,
    club_history,
};
pub use outcome::MatchOutcome;
pub use ranking::{AssistRow, ScorerRow, rank_assisters, rank_scorers};
pub use standings::{StandingRow, compute_standings};

#[cfg(test)]
pub(crate) mod test_support;
