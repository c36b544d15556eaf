//! Scorer and assist rankings.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::league::{MatchId, Player, PlayerId, SeasonRecords, TeamId};

/// One line of a scorer table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerRow {
    pub rank: usize,
    pub player_id: PlayerId,
    pub full_name: String,
    pub team: String,
    pub team_short: String,
    /// Goals excluding own goals.
    pub goals: u32,
    pub assists: u32,
    /// Penalties converted; always `<= goals`.
    pub penalties: u32,
}

/// One line of an assist table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistRow {
    pub rank: usize,
    pub player_id: PlayerId,
    pub full_name: String,
    pub team: String,
    pub team_short: String,
    pub assists: u32,
}

#[derive(Default)]
struct ScorerTally {
    goals: u32,
    penalties: u32,
}

/// Rank players by goals scored in the snapshot's season.
///
/// Own goals are ignored. With `scope`, only players registered with that
/// team are kept. Ties on goals are broken by player id so repeated runs
/// produce the same order.
#[must_use]
pub fn rank_scorers(
    records: &SeasonRecords,
    scope: Option<TeamId>,
    limit: Option<usize>,
) -> Vec<ScorerRow> {
    let season_matches = season_match_ids(records);
    let mut tallies: BTreeMap<PlayerId, ScorerTally> = BTreeMap::new();
    for goal in &records.goals {
        if goal.own_goal || !season_matches.contains(&goal.match_id) {
            continue;
        }
        let tally = tallies.entry(goal.scorer_id).or_default();
        tally.goals += 1;
        if goal.penalty {
            tally.penalties += 1;
        }
    }
    let assists = assist_counts(records, &season_matches);

    let mut rows: Vec<(&Player, ScorerTally)> = tallies
        .into_iter()
        .filter_map(|(id, tally)| records.player(id).map(|player| (player, tally)))
        .filter(|(player, _)| in_scope(player, scope))
        .collect();
    rows.sort_by(|(_, a), (_, b)| b.goals.cmp(&a.goals));
    if let Some(limit) = limit {
        rows.truncate(limit);
    }

    rows.into_iter()
        .enumerate()
        .map(|(index, (player, tally))| {
            let (team, team_short) = team_labels(records, player);
            ScorerRow {
                rank: index + 1,
                player_id: player.id,
                full_name: player.full_name(),
                team,
                team_short,
                goals: tally.goals,
                assists: assists.get(&player.id).copied().unwrap_or(0),
                penalties: tally.penalties,
            }
        })
        .collect()
}

/// Rank players by assists in the snapshot's season.
///
/// Same scope, limit and tie rules as [`rank_scorers`].
#[must_use]
pub fn rank_assisters(
    records: &SeasonRecords,
    scope: Option<TeamId>,
    limit: Option<usize>,
) -> Vec<AssistRow> {
    let season_matches = season_match_ids(records);
    let mut rows: Vec<(&Player, u32)> = assist_counts(records, &season_matches)
        .into_iter()
        .filter_map(|(id, count)| records.player(id).map(|player| (player, count)))
        .filter(|(player, _)| in_scope(player, scope))
        .collect();
    rows.sort_by(|(_, a), (_, b)| b.cmp(a));
    if let Some(limit) = limit {
        rows.truncate(limit);
    }

    rows.into_iter()
        .enumerate()
        .map(|(index, (player, assists))| {
            let (team, team_short) = team_labels(records, player);
            AssistRow {
                rank: index + 1,
                player_id: player.id,
                full_name: player.full_name(),
                team,
                team_short,
                assists,
            }
        })
        .collect()
}

fn season_match_ids(records: &SeasonRecords) -> HashSet<MatchId> {
    records.matches.iter().map(|m| m.id).collect()
}

fn assist_counts(records: &SeasonRecords, season: &HashSet<MatchId>) -> BTreeMap<PlayerId, u32> {
    let mut counts = BTreeMap::new();
    for assist in records.assists.iter().filter(|a| season.contains(&a.match_id)) {
        *counts.entry(assist.player_id).or_insert(0) += 1;
    }
    counts
}

fn in_scope(player: &Player, scope: Option<TeamId>) -> bool {
    scope.is_none_or(|team| player.team_id == team)
}

fn team_labels(records: &SeasonRecords, player: &Player) -> (String, String) {
    records
        .team(player.team_id)
        .map(|team| (team.name.clone(), team.code.as_str().to_owned()))
        .unwrap_or_default()
}
