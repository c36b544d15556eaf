//! Club match history and recent form.

use std::cmp::Reverse;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::MatchOutcome;
use crate::domain::league::{Match, MatchId, SeasonRecords, Team, TeamId};

/// Default number of matches listed in a club's history.
pub const HISTORY_DEFAULT: usize = 10;
/// Upper bound for a club's history length.
pub const HISTORY_MAX: usize = 38;
/// Default number of matches in a form summary.
pub const FORM_DEFAULT: usize = 5;
/// Upper bound for a form summary.
pub const FORM_MAX: usize = 10;

/// A played match seen from one club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchLine {
    pub id: MatchId,
    pub matchday: u32,
    pub match_date: Option<NaiveDate>,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    /// Absent when a score is missing.
    pub result: Option<MatchOutcome>,
}

/// Recent form of a club over its last `last_n` played matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSummary {
    pub club: String,
    pub last_n: usize,
    pub matches: Vec<MatchLine>,
    /// Result letters, most recent first.
    pub form_string: String,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
}

/// The last `last` played matches of `team`, most recent first.
///
/// Matches without a date sort as the oldest; equal dates fall back to
/// matchday then match id, both descending.
#[must_use]
pub fn club_history(records: &SeasonRecords, team: &Team, last: usize) -> Vec<MatchLine> {
    recent_matches(records, team, last)
        .into_iter()
        .map(|fixture| match_line(records, team, fixture))
        .collect()
}

/// Summarise the last `last` played matches of `team`.
///
/// Matches with a missing score are listed but add no letter, tally or goals.
#[must_use]
pub fn club_form(records: &SeasonRecords, team: &Team, last: usize) -> FormSummary {
    let mut summary = FormSummary {
        club: team.name.clone(),
        last_n: last,
        matches: Vec::new(),
        form_string: String::new(),
        wins: 0,
        draws: 0,
        losses: 0,
        goals_scored: 0,
        goals_conceded: 0,
    };

    for fixture in recent_matches(records, team, last) {
        if let Some((scored, conceded)) = fixture.goals_for_against(team.id) {
            summary.goals_scored += scored;
            summary.goals_conceded += conceded;
            let outcome = MatchOutcome::from_goals(scored, conceded);
            summary.form_string.push(outcome.letter());
            match outcome {
                MatchOutcome::Win => summary.wins += 1,
                MatchOutcome::Draw => summary.draws += 1,
                MatchOutcome::Loss => summary.losses += 1,
            }
        }
        summary.matches.push(match_line(records, team, fixture));
    }
    summary
}

fn recent_matches<'a>(records: &'a SeasonRecords, team: &Team, last: usize) -> Vec<&'a Match> {
    let mut selected: Vec<&Match> = records
        .matches
        .iter()
        .filter(|m| m.played && m.involves(team.id))
        .collect();
    // `None < Some(_)`, so undated matches land at the end once reversed.
    selected.sort_by_key(|m| Reverse((m.date, m.matchday, m.id)));
    selected.truncate(last);
    selected
}

fn match_line(records: &SeasonRecords, team: &Team, fixture: &Match) -> MatchLine {
    MatchLine {
        id: fixture.id,
        matchday: fixture.matchday,
        match_date: fixture.date,
        home_team: team_name(records, fixture.home_team_id),
        away_team: team_name(records, fixture.away_team_id),
        home_score: fixture.home_score,
        away_score: fixture.away_score,
        result: fixture
            .goals_for_against(team.id)
            .map(|(gf, ga)| MatchOutcome::from_goals(gf, ga)),
    }
}

fn team_name(records: &SeasonRecords, id: TeamId) -> String {
    records
        .team(id)
        .map(|team| team.name.clone())
        .unwrap_or_default()
}
