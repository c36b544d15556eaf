//! Team code and season label rules shared with the backend.
//!
//! # Validation Rules
//!
//! - Team codes: 1 to [`TEAM_CODE_MAX`] ASCII alphanumeric characters,
//!   compared upper-cased
//! - Season labels: non-empty once trimmed, at most [`SEASON_MAX`] characters

/// Maximum length of a team short code.
pub const TEAM_CODE_MAX: usize = 10;

/// Maximum length of a season label (the relational column width).
pub const SEASON_MAX: usize = 10;

/// Normalise a team code by trimming and upper-casing it.
///
/// # Examples
///
/// ```
/// use league_seed::normalize_team_code;
///
/// assert_eq!(normalize_team_code(" fcsm "), "FCSM");
/// ```
#[must_use]
pub fn normalize_team_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Returns `true` when the (already normalised) code is acceptable.
///
/// # Examples
///
/// ```
/// use league_seed::is_valid_team_code;
///
/// assert!(is_valid_team_code("FCSM"));
/// assert!(!is_valid_team_code(""));
/// assert!(!is_valid_team_code("FC-SM"));
/// ```
#[must_use]
pub fn is_valid_team_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= TEAM_CODE_MAX
        && code.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Returns `true` when the season label is non-empty and short enough.
///
/// # Examples
///
/// ```
/// use league_seed::is_valid_season;
///
/// assert!(is_valid_season("2025"));
/// assert!(!is_valid_season("   "));
/// ```
#[must_use]
pub fn is_valid_season(label: &str) -> bool {
    let trimmed = label.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= SEASON_MAX
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("FCSM", true)]
    #[case("A", true)]
    #[case("ABCDEFGHIJ", true)]
    #[case("ABCDEFGHIJK", false)]
    #[case("", false)]
    #[case("FC SM", false)]
    #[case("ÉVR", false)]
    fn team_code_rules(#[case] code: &str, #[case] expected: bool) {
        assert_eq!(is_valid_team_code(code), expected);
    }

    #[rstest]
    #[case("2025", true)]
    #[case("2024-2025", true)]
    #[case(" 2025 ", true)]
    #[case("", false)]
    #[case("2024-2025-X", false)]
    fn season_rules(#[case] label: &str, #[case] expected: bool) {
        assert_eq!(is_valid_season(label), expected);
    }

    #[test]
    fn normalisation_upper_cases_and_trims() {
        assert_eq!(normalize_team_code("  rSt"), "RST");
    }
}
