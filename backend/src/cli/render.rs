//! Plain-text rendering of statistics tables.

use std::fmt::Write as _;

use crate::domain::stats::{
    AssistRow, FormSummary, MatchLine, MatchOutcome, ScorerRow, StandingRow,
};
use crate::domain::{Season, TeamCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

struct Column {
    header: &'static str,
    align: Align,
}

const fn left(header: &'static str) -> Column {
    Column {
        header,
        align: Align::Left,
    }
}

const fn right(header: &'static str) -> Column {
    Column {
        header,
        align: Align::Right,
    }
}

/// Column-aligned table with a title line.
struct Table {
    title: String,
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(title: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            title: title.into(),
            columns,
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .fold(column.header.chars().count(), usize::max)
            })
            .collect()
    }

    fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);

        let headers: Vec<&str> = self.columns.iter().map(|c| c.header).collect();
        self.write_line(&mut out, &headers, &widths);
        let rule: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        let _ = writeln!(out, "{}", "-".repeat(rule));

        if self.rows.is_empty() {
            let _ = writeln!(out, "(aucune donnée)");
        }
        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            self.write_line(&mut out, &cells, &widths);
        }
        out
    }

    fn write_line(&self, out: &mut String, cells: &[&str], widths: &[usize]) {
        let line = self
            .columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (column, width))| {
                let cell = cells.get(i).copied().unwrap_or_default();
                match column.align {
                    Align::Left => format!("{cell:<width$}"),
                    Align::Right => format!("{cell:>width$}"),
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{}", line.trim_end());
    }
}

/// Title of a scorer or assist table: a club code, or the whole league.
pub fn scope_title(kind: &str, club: Option<&TeamCode>, season: &Season) -> String {
    match club {
        Some(code) => format!("{kind} {code} - Saison {season}"),
        None => format!("{kind} Championnat National - Saison {season}"),
    }
}

/// Scorer table. Penalties show as `-` when none were converted.
pub fn scorers(title: &str, rows: &[ScorerRow]) -> String {
    let mut table = Table::new(
        title,
        vec![
            right("#"),
            left("Joueur"),
            left("Club"),
            right("Buts"),
            right("Dont pen."),
            right("Passes D."),
        ],
    );
    for row in rows {
        let penalties = if row.penalties == 0 {
            "-".to_owned()
        } else {
            row.penalties.to_string()
        };
        table.push(vec![
            row.rank.to_string(),
            row.full_name.clone(),
            row.team_short.clone(),
            row.goals.to_string(),
            penalties,
            row.assists.to_string(),
        ]);
    }
    table.render()
}

pub fn assists(title: &str, rows: &[AssistRow]) -> String {
    let mut table = Table::new(
        title,
        vec![right("#"), left("Joueur"), left("Club"), right("Passes D.")],
    );
    for row in rows {
        table.push(vec![
            row.rank.to_string(),
            row.full_name.clone(),
            row.team.clone(),
            row.assists.to_string(),
        ]);
    }
    table.render()
}

/// League table; the `focus` club's row is marked with `*`.
pub fn standings(season: &Season, rows: &[StandingRow], focus: &TeamCode) -> String {
    let mut table = Table::new(
        format!("Classement National - Saison {season}"),
        vec![
            right("#"),
            left(""),
            left("Équipe"),
            right("J"),
            right("G"),
            right("N"),
            right("P"),
            right("BP"),
            right("BC"),
            right("+/-"),
            right("Pts"),
        ],
    );
    for row in rows {
        let marker = if row.team_short.eq_ignore_ascii_case(focus.as_str()) {
            "*"
        } else {
            ""
        };
        table.push(vec![
            row.rank.to_string(),
            marker.to_owned(),
            row.team.clone(),
            row.played.to_string(),
            row.won.to_string(),
            row.drawn.to_string(),
            row.lost.to_string(),
            row.goals_for.to_string(),
            row.goals_against.to_string(),
            format!("{:+}", row.goal_diff),
            row.points.to_string(),
        ]);
    }
    table.render()
}

fn score(line: &MatchLine) -> String {
    let side = |goals: Option<u32>| goals.map_or_else(|| "?".to_owned(), |g| g.to_string());
    format!("{} - {}", side(line.home_score), side(line.away_score))
}

fn result_label(line: &MatchLine) -> &'static str {
    match line.result {
        Some(MatchOutcome::Win) => "V",
        Some(MatchOutcome::Draw) => "N",
        Some(MatchOutcome::Loss) => "D",
        None => "-",
    }
}

/// Match history, most recent first. Results read V/N/D from the club's side.
pub fn matches(club: &TeamCode, season: &Season, lines: &[MatchLine]) -> String {
    let mut table = Table::new(
        format!("Derniers matchs {club} - Saison {season}"),
        vec![
            right("J."),
            left("Date"),
            left("Domicile"),
            left("Score"),
            left("Extérieur"),
            left("Résultat"),
        ],
    );
    for line in lines {
        table.push(vec![
            line.matchday.to_string(),
            line.match_date.map(|d| d.to_string()).unwrap_or_default(),
            line.home_team.clone(),
            score(line),
            line.away_team.clone(),
            result_label(line).to_owned(),
        ]);
    }
    table.render()
}

pub fn form(summary: &FormSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Forme {} ({} derniers matchs)",
        summary.club, summary.last_n
    );
    let letters = if summary.form_string.is_empty() {
        "-"
    } else {
        summary.form_string.as_str()
    };
    let _ = writeln!(out, "Forme : {letters}");
    let _ = writeln!(
        out,
        "Bilan : {}V {}N {}D",
        summary.wins, summary.draws, summary.losses
    );
    let _ = writeln!(
        out,
        "Buts  : {} marqués / {} encaissés",
        summary.goals_scored, summary.goals_conceded
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchId, PlayerId};
    use chrono::NaiveDate;
    use rstest::rstest;

    fn standing(rank: usize, team: &str, short: &str, points: u32, goal_diff: i64) -> StandingRow {
        StandingRow {
            rank,
            team: team.to_owned(),
            team_short: short.to_owned(),
            played: 20,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_diff,
            points,
        }
    }

    #[rstest]
    fn focus_club_is_marked() {
        let season = Season::new("2025").expect("season");
        let focus = TeamCode::new("fcsm").expect("code");
        let text = standings(
            &season,
            &[
                standing(1, "FC Sochaux-Montbéliard", "FCSM", 52, 28),
                standing(2, "Rouen FC", "ROU", 40, -3),
            ],
            &focus,
        );
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.first().copied(), Some("Classement National - Saison 2025"));
        let sochaux = lines.iter().find(|l| l.contains("Sochaux")).expect("row");
        let rouen = lines.iter().find(|l| l.contains("Rouen")).expect("row");
        assert!(sochaux.contains(" * "));
        assert!(sochaux.contains("+28"));
        assert!(!rouen.contains('*'));
        assert!(rouen.contains("-3"));
    }

    #[rstest]
    fn columns_line_up_with_accented_names() {
        let rows = vec![
            ScorerRow {
                rank: 1,
                player_id: PlayerId::new(12),
                full_name: "Dylan Bronn".to_owned(),
                team: "FC Sochaux-Montbéliard".to_owned(),
                team_short: "FCSM".to_owned(),
                goals: 12,
                assists: 4,
                penalties: 0,
            },
            ScorerRow {
                rank: 2,
                player_id: PlayerId::new(15),
                full_name: "Ibrahim Koné".to_owned(),
                team: "FC Sochaux-Montbéliard".to_owned(),
                team_short: "FCSM".to_owned(),
                goals: 7,
                assists: 0,
                penalties: 2,
            },
        ];
        let text = scorers("Buteurs FCSM - Saison 2025", &rows);
        let body: Vec<&str> = text.lines().skip(3).collect();
        assert_eq!(body.len(), 2);
        let widths: Vec<usize> = body.iter().map(|l| l.chars().count()).collect();
        assert_eq!(widths.first(), widths.last());
        assert!(body.first().is_some_and(|l| l.contains("  -  ")));
    }

    #[rstest]
    fn empty_tables_say_so() {
        let text = assists("Passeurs Championnat National - Saison 2019", &[]);
        assert!(text.contains("(aucune donnée)"));
    }

    #[rstest]
    fn match_lines_show_scores_and_results() {
        let club = TeamCode::new("FCSM").expect("code");
        let season = Season::new("2025").expect("season");
        let line = MatchLine {
            id: MatchId::new(25),
            matchday: 20,
            match_date: NaiveDate::from_ymd_opt(2025, 3, 14),
            home_team: "Villefranche Beaujolais".to_owned(),
            away_team: "FC Sochaux-Montbéliard".to_owned(),
            home_score: Some(2),
            away_score: Some(3),
            result: Some(MatchOutcome::Win),
        };
        let unscored = MatchLine {
            home_score: None,
            away_score: None,
            result: None,
            ..line.clone()
        };
        let text = matches(&club, &season, &[line, unscored]);
        assert!(text.contains("2025-03-14"));
        assert!(text.contains("2 - 3"));
        assert!(text.contains("? - ?"));
        assert!(text.lines().any(|l| l.ends_with('V')));
    }

    #[rstest]
    fn form_summary_lists_the_record() {
        let summary = FormSummary {
            club: "FC Sochaux-Montbéliard".to_owned(),
            last_n: 5,
            matches: Vec::new(),
            form_string: "WWDWW".to_owned(),
            wins: 4,
            draws: 1,
            losses: 0,
            goals_scored: 8,
            goals_conceded: 3,
        };
        let text = form(&summary);
        assert!(text.contains("Forme : WWDWW"));
        assert!(text.contains("Bilan : 4V 1N 0D"));
        assert!(text.contains("8 marqués / 3 encaissés"));
    }
}
