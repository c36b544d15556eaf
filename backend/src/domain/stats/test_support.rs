//! Compact builders for season snapshots used by engine tests.

use chrono::{Days, NaiveDate};

use crate::domain::league::{
    Assist, Goal, Match, MatchId, Player, PlayerId, Season, SeasonRecords, Team, TeamCode, TeamId,
};

pub(crate) const NATIONAL: &str = "National";

pub(crate) struct GoalSpec {
    match_id: MatchId,
    scorer: PlayerId,
    penalty: bool,
    own_goal: bool,
    assist: Option<PlayerId>,
}

pub(crate) fn goal(match_id: MatchId, scorer: PlayerId) -> GoalSpec {
    GoalSpec {
        match_id,
        scorer,
        penalty: false,
        own_goal: false,
        assist: None,
    }
}

impl GoalSpec {
    pub(crate) fn penalty(mut self) -> Self {
        self.penalty = true;
        self
    }

    pub(crate) fn own_goal(mut self) -> Self {
        self.own_goal = true;
        self
    }

    pub(crate) fn assisted_by(mut self, player: PlayerId) -> Self {
        self.assist = Some(player);
        self
    }
}

#[derive(Default)]
pub(crate) struct RecordsBuilder {
    records: SeasonRecords,
}

impl RecordsBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn team(&mut self, code: &str) -> TeamId {
        self.team_in_league(code, NATIONAL)
    }

    pub(crate) fn team_in_league(&mut self, code: &str, league: &str) -> TeamId {
        let id = TeamId::new(next_id(self.records.teams.len()));
        self.records.teams.push(Team {
            id,
            name: format!("{code} FC"),
            code: TeamCode::new(code).expect("test team code"),
            city: "Ville".to_owned(),
            league: league.to_owned(),
        });
        id
    }

    pub(crate) fn player(&mut self, team: TeamId, first: &str, last: &str) -> PlayerId {
        let id = PlayerId::new(next_id(self.records.players.len()));
        self.records.players.push(Player {
            id,
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            position: "Attaquant".to_owned(),
            nationality: "Français".to_owned(),
            birth_date: None,
            shirt_number: None,
            team_id: team,
        });
        id
    }

    pub(crate) fn played(
        &mut self,
        matchday: u32,
        home: TeamId,
        away: TeamId,
        home_score: u32,
        away_score: u32,
    ) -> MatchId {
        self.fixture(matchday, home, away, Some(home_score), Some(away_score), true)
    }

    pub(crate) fn undated(
        &mut self,
        matchday: u32,
        home: TeamId,
        away: TeamId,
        home_score: u32,
        away_score: u32,
    ) -> MatchId {
        let id = self.played(matchday, home, away, home_score, away_score);
        if let Some(fixture) = self.records.matches.last_mut() {
            fixture.date = None;
        }
        id
    }

    pub(crate) fn fixture(
        &mut self,
        matchday: u32,
        home: TeamId,
        away: TeamId,
        home_score: Option<u32>,
        away_score: Option<u32>,
        played: bool,
    ) -> MatchId {
        let id = MatchId::new(next_id(self.records.matches.len()));
        self.records.matches.push(Match {
            id,
            season: Season::new("2025").expect("test season"),
            matchday,
            date: matchday_date(matchday),
            home_team_id: home,
            away_team_id: away,
            home_score,
            away_score,
            played,
        });
        id
    }

    pub(crate) fn goals(&mut self, specs: impl IntoIterator<Item = GoalSpec>) {
        for spec in specs {
            let goal_id = next_id(self.records.goals.len());
            self.records.goals.push(Goal {
                id: goal_id,
                match_id: spec.match_id,
                scorer_id: spec.scorer,
                minute: None,
                own_goal: spec.own_goal,
                penalty: spec.penalty,
            });
            if let Some(player_id) = spec.assist {
                let assist_id = next_id(self.records.assists.len());
                self.records.assists.push(Assist {
                    id: assist_id,
                    match_id: spec.match_id,
                    player_id,
                    minute: None,
                });
            }
        }
    }

    pub(crate) fn build(self) -> SeasonRecords {
        self.records
    }
}

fn next_id(len: usize) -> i32 {
    i32::try_from(len + 1).expect("test id fits in i32")
}

fn matchday_date(matchday: u32) -> Option<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(2025, 8, 1)?;
    start.checked_add_days(Days::new(u64::from(matchday) * 7))
}
