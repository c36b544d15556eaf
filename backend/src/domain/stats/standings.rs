//! League table.

use serde::{Deserialize, Serialize};

use super::MatchOutcome;
use crate::domain::league::{SeasonRecords, Team, TeamId};

/// One line of the league table.
///
/// `points == 3 * won + drawn` and `goal_diff == goals_for - goals_against`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub rank: usize,
    pub team: String,
    pub team_short: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_diff: i64,
    pub points: u32,
}

#[derive(Default)]
struct Tally {
    played: u32,
    won: u32,
    drawn: u32,
    lost: u32,
    goals_for: u32,
    goals_against: u32,
}

impl Tally {
    fn record(&mut self, goals_for: u32, goals_against: u32) {
        self.played += 1;
        self.goals_for += goals_for;
        self.goals_against += goals_against;
        match MatchOutcome::from_goals(goals_for, goals_against) {
            MatchOutcome::Win => self.won += 1,
            MatchOutcome::Draw => self.drawn += 1,
            MatchOutcome::Loss => self.lost += 1,
        }
    }

    fn points(&self) -> u32 {
        self.won * MatchOutcome::Win.points() + self.drawn * MatchOutcome::Draw.points()
    }

    fn goal_diff(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

/// Build the table for every team tagged with `league`.
///
/// Only played matches with both scores recorded count. Rows are ordered by
/// points, goal difference and goals scored; teams still level keep team id
/// order. Teams without a counted match appear with zeros.
#[must_use]
pub fn compute_standings(records: &SeasonRecords, league: &str) -> Vec<StandingRow> {
    let mut teams: Vec<&Team> = records.teams.iter().filter(|t| t.league == league).collect();
    teams.sort_by_key(|team| team.id);

    let mut tallies: Vec<(&Team, Tally)> = teams
        .into_iter()
        .map(|team| (team, Tally::default()))
        .collect();

    for fixture in &records.matches {
        let Some((home_goals, away_goals)) = fixture.final_score() else {
            continue;
        };
        if let Some(tally) = tally_for(&mut tallies, fixture.home_team_id) {
            tally.record(home_goals, away_goals);
        }
        if let Some(tally) = tally_for(&mut tallies, fixture.away_team_id) {
            tally.record(away_goals, home_goals);
        }
    }

    // Stable sort keeps id order for full ties.
    tallies.sort_by(|(_, a), (_, b)| {
        b.points()
            .cmp(&a.points())
            .then_with(|| b.goal_diff().cmp(&a.goal_diff()))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
    });

    tallies
        .into_iter()
        .enumerate()
        .map(|(index, (team, tally))| StandingRow {
            rank: index + 1,
            team: team.name.clone(),
            team_short: team.code.as_str().to_owned(),
            played: tally.played,
            won: tally.won,
            drawn: tally.drawn,
            lost: tally.lost,
            goals_for: tally.goals_for,
            goals_against: tally.goals_against,
            goal_diff: tally.goal_diff(),
            points: tally.points(),
        })
        .collect()
}

fn tally_for<'a>(tallies: &'a mut [(&Team, Tally)], id: TeamId) -> Option<&'a mut Tally> {
    tallies
        .iter_mut()
        .find(|(team, _)| team.id == id)
        .map(|(_, tally)| tally)
}
