//! Match result from one team's point of view.

use serde::{Deserialize, Serialize};

/// Win, draw or loss, serialised as the single letter used in form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

impl MatchOutcome {
    /// Classify a result by comparing goals for and against.
    #[must_use]
    pub fn from_goals(goals_for: u32, goals_against: u32) -> Self {
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => Self::Win,
            std::cmp::Ordering::Equal => Self::Draw,
            std::cmp::Ordering::Less => Self::Loss,
        }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Win => 'W',
            Self::Draw => 'D',
            Self::Loss => 'L',
        }
    }

    /// League points earned for this result.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Win => 3,
            Self::Draw => 1,
            Self::Loss => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2, 0, MatchOutcome::Win, 'W', 3)]
    #[case(1, 1, MatchOutcome::Draw, 'D', 1)]
    #[case(0, 3, MatchOutcome::Loss, 'L', 0)]
    fn classifies_by_goal_comparison(
        #[case] gf: u32,
        #[case] ga: u32,
        #[case] expected: MatchOutcome,
        #[case] letter: char,
        #[case] points: u32,
    ) {
        let outcome = MatchOutcome::from_goals(gf, ga);
        assert_eq!(outcome, expected);
        assert_eq!(outcome.letter(), letter);
        assert_eq!(outcome.points(), points);
    }

    #[test]
    fn serialises_as_letter() {
        let json = serde_json::to_string(&MatchOutcome::Draw).expect("serialise outcome");
        assert_eq!(json, "\"D\"");
    }
}
